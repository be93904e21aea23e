#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
use anyhow::Result;
use std::num::NonZeroUsize;
use std::sync::Arc;
use springcurve::{FrameDriver, Viewport};
use vello::peniko::Color;
use vello::util::{RenderContext, RenderSurface};
use vello::{AaConfig, Renderer, RendererOptions, Scene};
use vello::wgpu;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::*;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::Window;
use render::{ActiveRenderState, RenderState};

mod render;

struct SpringCurveApp<'s> {
    context: RenderContext,
    renderers: Vec<Option<Renderer>>,
    state: RenderState<'s>,
    scene: Scene,
    // created on the first resume, once the window has a real size
    driver: Option<FrameDriver>,
}

impl<'s> SpringCurveApp<'s> {
    fn apply_size(&mut self, size: PhysicalSize<u32>) {
        let viewport = match Viewport::new(size.width as f64, size.height as f64) {
            Ok(viewport) => viewport,
            Err(e) => {
                log::debug!("skipping layout: {e}");
                return;
            }
        };

        match &mut self.driver {
            Some(driver) => driver.resize(viewport),
            None => self.driver = Some(FrameDriver::new(viewport)),
        }
    }
}

impl<'s> ApplicationHandler for SpringCurveApp<'s> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let RenderState::Suspended(cached_window) = &mut self.state else {
            return;
        };

        let window = match cached_window.take() {
            Some(window) => window,
            None => match create_winit_window(event_loop) {
                Ok(window) => window,
                Err(e) => {
                    log::error!("could not create window: {e:#}");
                    event_loop.exit();
                    return;
                }
            },
        };

        let size = window.inner_size();
        let surface_future = self.context.create_surface(
            window.clone(),
            size.width,
            size.height,
            wgpu::PresentMode::AutoVsync,
        );
        let surface = match pollster::block_on(surface_future) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("could not create surface: {e}");
                event_loop.exit();
                return;
            }
        };

        self.renderers
            .resize_with(self.context.devices.len(), || None);
        if self.renderers[surface.dev_id].is_none() {
            match create_vello_renderer(&self.context, &surface) {
                Ok(renderer) => self.renderers[surface.dev_id] = Some(renderer),
                Err(e) => {
                    log::error!("could not create renderer: {e:#}");
                    event_loop.exit();
                    return;
                }
            }
        }

        self.apply_size(size);
        window.request_redraw();
        self.state = RenderState::Active(ActiveRenderState { window, surface });
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        if let RenderState::Active(state) = &self.state {
            self.state = RenderState::Suspended(Some(state.window.clone()));
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let render_state = match &mut self.state {
            RenderState::Active(state) if state.window.id() == window_id => state,
            _ => return,
        };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.context
                        .resize_surface(&mut render_state.surface, size.width, size.height);
                }
                self.apply_size(size);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    if let winit::keyboard::Key::Character(ch) = event.logical_key {
                        if ch == "r" || ch == "R" {
                            if let Some(driver) = &mut self.driver {
                                driver.reset();
                            }
                        }
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if let Some(driver) = &mut self.driver {
                    driver.set_pointer(position.x, position.y);
                }
            }
            WindowEvent::CursorLeft { .. } => {
                if let Some(driver) = &mut self.driver {
                    driver.release_pointer();
                }
            }
            WindowEvent::RedrawRequested => {
                let Some(driver) = &mut self.driver else {
                    return;
                };

                let payload = match driver.step() {
                    Ok(payload) => payload,
                    Err(e) => {
                        log::error!("simulation step failed: {e}");
                        event_loop.exit();
                        return;
                    }
                };

                self.scene.reset();
                render::paint_frame(&mut self.scene, &payload);

                let surface = &render_state.surface;
                let width = surface.config.width;
                let height = surface.config.height;
                let device_handle = &self.context.devices[surface.dev_id];
                let surface_texture = match surface.surface.get_current_texture() {
                    Ok(texture) => texture,
                    Err(e) => {
                        log::warn!("dropping frame, surface unavailable: {e}");
                        render_state.window.request_redraw();
                        return;
                    }
                };

                let Some(renderer) = self.renderers[surface.dev_id].as_mut() else {
                    log::error!("no renderer for device {}", surface.dev_id);
                    event_loop.exit();
                    return;
                };

                if let Err(e) = renderer.render_to_surface(
                    &device_handle.device,
                    &device_handle.queue,
                    &self.scene,
                    &surface_texture,
                    &vello::RenderParams {
                        base_color: Color::BLACK,
                        width,
                        height,
                        antialiasing_method: AaConfig::Msaa16,
                    },
                ) {
                    log::error!("failed to render to surface: {e}");
                    event_loop.exit();
                    return;
                }

                surface_texture.present();
                device_handle.device.poll(wgpu::Maintain::Poll);

                // vsync paces this to the display refresh
                render_state.window.request_redraw();
            }
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    log::info!("springcurve v{} starting", env!("CARGO_PKG_VERSION"));

    let mut app = SpringCurveApp {
        context: RenderContext::new(),
        renderers: Vec::new(),
        state: RenderState::Suspended(None),
        scene: Scene::new(),
        driver: None,
    };

    let event_loop = EventLoop::new()?;
    event_loop.run_app(&mut app)?;
    Ok(())
}

/// Helper function that creates a Winit window and returns it (wrapped in an Arc for sharing between threads)
fn create_winit_window(event_loop: &ActiveEventLoop) -> Result<Arc<Window>> {
    let attr = Window::default_attributes()
        .with_inner_size(LogicalSize::new(1044, 800))
        .with_resizable(true)
        .with_title("Spring Curve");
    Ok(Arc::new(event_loop.create_window(attr)?))
}

/// Helper function that creates a vello `Renderer` for a given `RenderContext` and `RenderSurface`
fn create_vello_renderer(render_cx: &RenderContext, surface: &RenderSurface) -> Result<Renderer> {
    let renderer = Renderer::new(
        &render_cx.devices[surface.dev_id].device,
        RendererOptions {
            surface_format: Some(surface.format),
            use_cpu: false,
            antialiasing_support: vello::AaSupport::all(),
            num_init_threads: NonZeroUsize::new(1),
        },
    )
    .map_err(|e| anyhow::anyhow!("{e}"))?;
    Ok(renderer)
}
