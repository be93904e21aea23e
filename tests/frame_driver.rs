use approx::assert_relative_eq;
use nalgebra::Vector2 as Vec2;
use springcurve::systems::target_policy::baseline_targets;
use springcurve::{ControlSlot, FrameDriver, MarkerRole, SpringParams, Viewport};

fn driver_800x600() -> FrameDriver {
    FrameDriver::new(Viewport::new(800.0, 600.0).unwrap())
}

#[test]
fn resting_springs_do_not_move() {
    let mut driver = driver_800x600();
    let before = driver.spring(ControlSlot::First).unwrap().position;
    assert_relative_eq!(before, Vec2::new(264.0, 300.0), epsilon = 1e-9);

    driver.step().unwrap();

    for slot in ControlSlot::ALL {
        let spring = driver.spring(slot).unwrap();
        assert_eq!(spring.velocity, Vec2::new(0.0, 0.0));
        assert_eq!(spring.position, spring.target);
    }
    assert_eq!(driver.spring(ControlSlot::First).unwrap().position, before);
    assert_relative_eq!(
        driver.spring(ControlSlot::Second).unwrap().position,
        Vec2::new(528.0, 300.0),
        epsilon = 1e-9
    );
}

#[test]
fn single_pointer_frame_retargets_first_control() {
    let mut driver = driver_800x600();
    driver.set_pointer(400.0, 300.0);
    driver.step().unwrap();

    let first = driver.spring(ControlSlot::First).unwrap();
    assert_relative_eq!(first.target, Vec2::new(345.6, 300.0), epsilon = 1e-9);
    // the spring only begins to follow after one step
    assert!(first.position.x > 264.0 && first.position.x < 345.6);

    driver.release_pointer();
    driver.step().unwrap();

    let baselines = baseline_targets(&driver.viewport());
    assert_eq!(driver.spring(ControlSlot::First).unwrap().target, baselines[0]);
}

#[test]
fn springs_settle_under_a_still_pointer() {
    let mut driver = driver_800x600();
    driver.set_pointer(150.0, 520.0);

    for _ in 0..500 {
        driver.step().unwrap();
    }

    for slot in ControlSlot::ALL {
        let spring = driver.spring(slot).unwrap();
        assert!((spring.position - spring.target).norm() < 1e-3);
        assert!(spring.velocity.norm() < 1e-3);
    }
}

#[test]
fn payload_has_expected_shape() {
    let mut driver = driver_800x600();
    driver.set_pointer(400.0, 100.0);
    let payload = driver.step().unwrap();

    assert_eq!(payload.polyline.len(), 100);
    assert_relative_eq!(*payload.polyline.last().unwrap(), payload.curve.end, epsilon = 1e-9);

    let params: Vec<f64> = payload.tangents.iter().map(|t| t.t).collect();
    assert_eq!(params, vec![0.2, 0.5, 0.8]);
    for tangent in &payload.tangents {
        assert_relative_eq!(tangent.origin, payload.curve.point_at(tangent.t));
        assert_relative_eq!((tangent.end - tangent.origin).norm(), 40.0, epsilon = 1e-9);
    }

    let roles: Vec<MarkerRole> = payload.markers.iter().map(|m| m.role).collect();
    assert_eq!(
        roles,
        vec![
            MarkerRole::Tangent,
            MarkerRole::Tangent,
            MarkerRole::Tangent,
            MarkerRole::Fixed,
            MarkerRole::Fixed,
            MarkerRole::Dynamic,
            MarkerRole::Dynamic,
        ]
    );

    assert_eq!(payload.curve.start, Vec2::new(80.0, 300.0));
    assert_eq!(payload.curve.end, Vec2::new(720.0, 300.0));
    assert_eq!(payload.curve.control1, driver.spring(ControlSlot::First).unwrap().position);
    assert_eq!(payload.control_lines[0].from, payload.curve.start);
    assert_eq!(payload.control_lines[1].from, payload.curve.end);
    assert_eq!(payload.control_lines[2].to, payload.curve.control2);
}

#[test]
fn resize_moves_endpoints_but_keeps_springs() {
    let mut driver = driver_800x600();
    let before = driver.spring(ControlSlot::Second).unwrap().clone();

    driver.resize(Viewport::new(1000.0, 400.0).unwrap());

    let endpoints = driver.endpoints();
    assert_eq!(endpoints.start, Vec2::new(100.0, 200.0));
    assert_eq!(endpoints.end, Vec2::new(900.0, 200.0));
    assert_eq!(driver.spring(ControlSlot::Second).unwrap(), &before);

    for _ in 0..500 {
        driver.step().unwrap();
    }
    assert_relative_eq!(
        driver.spring(ControlSlot::Second).unwrap().position,
        Vec2::new(660.0, 200.0),
        epsilon = 1e-3
    );
}

#[test]
fn reset_returns_controls_to_rest() {
    let mut driver = driver_800x600();
    driver.set_pointer(10.0, 10.0);
    for _ in 0..5 {
        driver.step().unwrap();
    }

    driver.reset();

    let baselines = baseline_targets(&driver.viewport());
    for slot in ControlSlot::ALL {
        let spring = driver.spring(slot).unwrap();
        assert_eq!(spring.position, baselines[slot.index()]);
        assert_eq!(spring.velocity, Vec2::new(0.0, 0.0));
    }
}

#[test]
fn identical_drivers_stay_in_lockstep() {
    let mut a = driver_800x600();
    let mut b = driver_800x600();

    for i in 0..120 {
        let (x, y) = (i as f64 * 6.0, 600.0 - i as f64 * 4.0);
        if i % 30 < 20 {
            a.set_pointer(x, y);
            b.set_pointer(x, y);
        } else {
            a.release_pointer();
            b.release_pointer();
        }
        assert_eq!(a.step().unwrap(), b.step().unwrap());
    }
}

#[test]
fn custom_spring_params_reach_the_world() {
    let params = SpringParams::new(0.3, 0.5, 2.0).unwrap();
    let driver = FrameDriver::with_params(Viewport::new(800.0, 600.0).unwrap(), params);

    let spring = driver.spring(ControlSlot::First).unwrap();
    assert_eq!(spring.stiffness, 0.3);
    assert_eq!(spring.damping, 0.5);
    assert_eq!(spring.mass, 2.0);
}
