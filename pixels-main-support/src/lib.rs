#![deny(clippy::all)]
#![forbid(unsafe_code)]

use error_iter::ErrorIter as _;
use life_grid::{Grid, Loc, Mode, Simulation};
use log::{debug, error, info};
use pixels::wgpu::Color;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::error::EventLoopError;
use winit::event::{ElementState, KeyEvent, MouseButton, StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Cursor, CursorIcon, Window, WindowId};

const WINDOW_TITLE: &str = "Game of Life";
const BACKGROUND_COLOR: Color = Color::BLACK;
const LIVE_CELL_COLOR: [u8; 4] = [0xff, 0xff, 0xff, 0xff];
const DEAD_CELL_COLOR: [u8; 4] = [0x00, 0x00, 0x00, 0xff];

/// Opens a window on `simulation` and runs it until the window closes.
///
/// Left click toggles a cell, `R` clears, `Space` starts and stops, and
/// `Escape` or `Q` quits. While running, one generation is computed every
/// [`Simulation::time_step`].
pub fn animate(simulation: Simulation) -> Result<(), EventLoopError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);
    event_loop.run_app(&mut AppEventHandler::new(simulation))
}

/// Paints `grid` into an RGBA frame whose cells are `cell_pixel_width`
/// pixels square.
pub fn draw_grid(grid: &Grid, cell_pixel_width: u32, frame: &mut [u8]) {
    let frame_width = (grid.width() * cell_pixel_width) as usize;
    debug_assert_eq!(frame.len(), frame_len(grid, cell_pixel_width));

    for (index, pixel) in frame.chunks_exact_mut(4).enumerate() {
        let x = (index % frame_width) as u32 / cell_pixel_width;
        let y = (index / frame_width) as u32 / cell_pixel_width;
        let color = if grid[Loc::new(x, y)] {
            LIVE_CELL_COLOR
        } else {
            DEAD_CELL_COLOR
        };
        pixel.copy_from_slice(&color);
    }
}

/// Bytes in an RGBA frame holding `grid` at `cell_pixel_width`.
pub fn frame_len(grid: &Grid, cell_pixel_width: u32) -> usize {
    4 * grid.num_cells() * (cell_pixel_width as usize).pow(2)
}

struct App {
    simulation: Simulation,
    window: Arc<Window>,
    pixels: Pixels<'static>,
    time_step: Duration,
    next_update: Instant,
    cursor: Option<PhysicalPosition<f64>>,
}

impl App {
    fn new(
        event_loop: &ActiveEventLoop,
        simulation: Simulation,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let (width, height) = simulation.pixel_size();
        let time_step = simulation.time_step();
        let window = Arc::new(Self::build_window(event_loop, width, height)?);
        let pixels = Self::build_pixels(&window, width, height)?;
        Ok(Self {
            simulation,
            window,
            pixels,
            time_step,
            next_update: Instant::now(),
            cursor: None,
        })
    }

    fn build_window(
        event_loop: &ActiveEventLoop,
        width: u32,
        height: u32,
    ) -> Result<Window, winit::error::OsError> {
        let window_attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(width, height))
            .with_resizable(false)
            .with_cursor(Cursor::Icon(CursorIcon::Crosshair))
            .with_visible(false);
        event_loop.create_window(window_attributes)
    }

    fn build_pixels(
        window: &Arc<Window>,
        width: u32,
        height: u32,
    ) -> Result<Pixels<'static>, pixels::Error> {
        let window_size = window.inner_size();
        let surface_texture =
            SurfaceTexture::new(window_size.width, window_size.height, window.clone());
        PixelsBuilder::new(width, height, surface_texture)
            .clear_color(BACKGROUND_COLOR)
            .build()
    }

    fn on_create(&mut self) {
        self.window.request_redraw();
        self.window.set_visible(true);
    }

    fn on_time_step(&mut self) {
        if self.simulation.tick() {
            self.window.request_redraw();
        }

        while self.next_update < Instant::now() {
            self.next_update += self.time_step;
        }
    }

    fn on_toggle_running(&mut self) {
        if self.simulation.toggle_running() == Mode::Running {
            self.next_update = Instant::now() + self.time_step;
        }
    }

    fn on_clear(&mut self) {
        if self.simulation.clear() {
            self.window.request_redraw();
        }
    }

    fn on_click(&mut self) {
        let Some(position) = self.cursor else {
            return;
        };
        // Positions off the frame come back as out-of-range pixel coordinates,
        // which the simulation ignores.
        let (x, y) = match self
            .pixels
            .window_pos_to_pixel((position.x as f32, position.y as f32))
        {
            Ok((x, y)) => (x as i64, y as i64),
            Err((x, y)) => (x as i64, y as i64),
        };
        if self.simulation.toggle_cell(x, y) {
            self.window.request_redraw();
        }
    }

    fn on_resize(&mut self, size: PhysicalSize<u32>) -> bool {
        if let Err(err) = self.pixels.resize_surface(size.width, size.height) {
            log_error("pixels.resize_surface", err);
            return false;
        }
        self.window.request_redraw();
        true
    }

    fn on_redraw(&mut self) -> bool {
        draw_grid(
            self.simulation.grid(),
            self.simulation.cell_pixel_width(),
            self.pixels.frame_mut(),
        );
        if let Err(err) = self.pixels.render() {
            log_error("pixels.render", err);
            return false;
        }
        true
    }
}

struct AppEventHandler {
    simulation: Option<Simulation>,
    app: Option<App>,
}

impl AppEventHandler {
    fn new(simulation: Simulation) -> Self {
        Self {
            simulation: Some(simulation),
            app: None,
        }
    }
}

impl ApplicationHandler for AppEventHandler {
    fn new_events(&mut self, _event_loop: &ActiveEventLoop, cause: StartCause) {
        if let StartCause::ResumeTimeReached { .. } = cause
            && let Some(app) = self.app.as_mut()
        {
            app.on_time_step();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let Some(simulation) = self.simulation.take() else {
            return;
        };
        match App::new(event_loop, simulation) {
            Ok(mut app) => {
                app.on_create();
                self.app = Some(app);
            }
            Err(err) => {
                error!("App::new() failed: {err}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(app) = self.app.as_mut() else {
            return;
        };
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => match code {
                KeyCode::Escape | KeyCode::KeyQ => {
                    event_loop.exit();
                }
                KeyCode::Space => app.on_toggle_running(),
                KeyCode::KeyR => app.on_clear(),
                _ => (),
            },
            WindowEvent::CursorMoved { position, .. } => {
                app.cursor = Some(position);
            }
            WindowEvent::CursorLeft { .. } => {
                app.cursor = None;
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => app.on_click(),
            WindowEvent::Resized(size) => {
                debug!("resized to {}x{}", size.width, size.height);
                if !app.on_resize(size) {
                    event_loop.exit();
                }
            }
            WindowEvent::RedrawRequested => {
                if !app.on_redraw() {
                    event_loop.exit();
                }
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(app) = self.app.as_ref() else {
            return;
        };
        if app.simulation.is_running() {
            event_loop.set_control_flow(ControlFlow::WaitUntil(app.next_update));
        } else {
            event_loop.set_control_flow(ControlFlow::Wait);
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(app) = self.app.as_ref() {
            info!(
                "exiting at generation {} with {} live cells",
                app.simulation.generation(),
                app.simulation.grid().live_count()
            );
        }
    }
}

fn log_error<E: std::error::Error + 'static>(method_name: &str, err: E) {
    error!("{method_name}() failed: {err}");
    for source in err.sources().skip(1) {
        error!("  Caused by: {source}");
    }
}
