use bevy_ecs::system::Query;

use crate::components::spring::SpringPoint;

// every spring owns its own state, so visiting order does not matter
pub fn sys_integrate_springs(mut query: Query<&mut SpringPoint>) {
    for mut spring in query.iter_mut() {
        spring.update();
    }
}
