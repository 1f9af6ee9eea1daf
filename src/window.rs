//! Windowed demo: event loop, frame timing and keyboard controls.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::config::RainConfig;
use crate::error::AppError;
use crate::field::RainField;
use crate::gpu::RainRenderer;
use crate::time::Time;

const TITLE: &str = "Rainfield";

/// Open a window and run the rain field until it is closed.
pub fn run(config: RainConfig) -> Result<(), AppError> {
    let field = RainField::new(config)?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(field);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

pub struct App {
    window: Option<Arc<Window>>,
    renderer: Option<RainRenderer>,
    field: RainField,
    time: Time,
    error: Option<AppError>,
}

impl App {
    pub fn new(field: RainField) -> Self {
        Self {
            window: None,
            renderer: None,
            field,
            time: Time::new(),
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: AppError) {
        self.error = Some(err);
        event_loop.exit();
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        let window_attrs = Window::default_attributes()
            .with_title(TITLE)
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let renderer = pollster::block_on(RainRenderer::new(window.clone(), &self.field))?;

        self.window = Some(window);
        self.renderer = Some(renderer);
        // Don't count window creation as simulated time
        self.time = Time::new();
        Ok(())
    }

    /// Apply a keyboard-driven change. Anything but a pause rebuilds the field.
    fn handle_key(&mut self, event_loop: &ActiveEventLoop, key: KeyCode) {
        let current = self.field.config().clone();
        let next = match key {
            KeyCode::Escape => {
                event_loop.exit();
                return;
            }
            KeyCode::Space => {
                self.time.toggle_pause();
                log::info!("{}", if self.time.is_paused() { "Paused" } else { "Resumed" });
                return;
            }
            KeyCode::Equal | KeyCode::NumpadAdd => {
                let count = current.count.saturating_mul(2);
                current.with_count(count)
            }
            KeyCode::Minus | KeyCode::NumpadSubtract => {
                let count = (current.count / 2).max(1);
                current.with_count(count)
            }
            KeyCode::KeyB => {
                let blending = current.blending.toggled();
                current.with_blending(blending)
            }
            KeyCode::KeyR => current.with_seed(rand::random()),
            _ => return,
        };

        match self.field.reconfigure(next) {
            Ok(true) => log::info!(
                "{} droplets, {:?} blending",
                self.field.len(),
                self.field.config().blending
            ),
            Ok(false) => {}
            Err(e) => log::warn!("Ignoring change: {}", e),
        }
    }

    fn update_title(&self) {
        if let Some(window) = &self.window {
            if self.time.frame() % 30 == 0 {
                window.set_title(&format!(
                    "{} - {} droplets - {:.0} fps",
                    TITLE,
                    self.field.len(),
                    self.time.fps()
                ));
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.create_window(event_loop) {
                self.fail(event_loop, e);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(physical_size);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                self.handle_key(event_loop, key);
            }
            WindowEvent::RedrawRequested => {
                let delta = self.time.update();
                self.field.advance(delta);

                if let Some(renderer) = &mut self.renderer {
                    match renderer.render(&self.field) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            renderer.resize(winit::dpi::PhysicalSize {
                                width: renderer.config.width,
                                height: renderer.config.height,
                            })
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("Out of GPU memory");
                            event_loop.exit();
                        }
                        Err(e) => log::warn!("Render error: {:?}", e),
                    }
                }

                self.update_title();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
