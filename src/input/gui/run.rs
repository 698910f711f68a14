//! Window creation and the winit event loop.
//!
//! Everything here is plumbing: winit events are translated into the
//! explorer's typed `InputEvent` stream and frames are pushed through the
//! pixels-backed surface. The loop blocks on the next input event and
//! reacts synchronously.

use crate::controllers::explorer::{EventResponse, ExplorerApp, ExplorerError, InputEvent};
use crate::core::actions::compute_grid::{ComputeBackend, ComputeBackendError};
use crate::core::config::{HEIGHT, MAX_ITERATIONS, WIDTH, default_viewport};
use crate::core::data::iteration_grid::{IterationGrid, IterationGridError};
use crate::core::data::point::Point;
use crate::presenters::pixels_surface::PixelsSurface;
use log::{error, info};
use std::error::Error;
use std::fmt;
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    window::{Window, WindowBuilder},
};

#[derive(Debug)]
pub enum GuiError {
    EventLoop(winit::error::EventLoopError),
    Window(winit::error::OsError),
    Surface(pixels::Error),
    Backend(ComputeBackendError),
    Grid(IterationGridError),
    Explorer(ExplorerError),
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoop(err) => write!(f, "event loop failed: {}", err),
            Self::Window(err) => write!(f, "failed to create window: {}", err),
            Self::Surface(err) => write!(f, "failed to create render surface: {}", err),
            Self::Backend(err) => write!(f, "failed to create compute backend: {}", err),
            Self::Grid(err) => write!(f, "failed to allocate result grid: {}", err),
            Self::Explorer(err) => write!(f, "explorer failed to start: {}", err),
        }
    }
}

impl Error for GuiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EventLoop(err) => Some(err),
            Self::Window(err) => Some(err),
            Self::Surface(err) => Some(err),
            Self::Backend(err) => Some(err),
            Self::Grid(err) => Some(err),
            Self::Explorer(err) => Some(err),
        }
    }
}

/// Opens the explorer window and runs until the user quits.
pub fn run_gui() -> Result<(), GuiError> {
    let event_loop = EventLoop::new().map_err(GuiError::EventLoop)?;

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Mandelbrot Explorer")
            .with_inner_size(LogicalSize::new(WIDTH as f64, HEIGHT as f64))
            .with_resizable(false)
            .build(&event_loop)
            .map_err(GuiError::Window)?,
    ));

    let mut surface = PixelsSurface::new(window, WIDTH, HEIGHT).map_err(GuiError::Surface)?;
    let backend = ComputeBackend::new(MAX_ITERATIONS).map_err(GuiError::Backend)?;
    let grid = IterationGrid::new(WIDTH, HEIGHT).map_err(GuiError::Grid)?;
    let mut app =
        ExplorerApp::new(backend, grid, default_viewport()).map_err(GuiError::Explorer)?;

    info!(
        "explorer ready: {}x{} window, {} max iterations",
        WIDTH, HEIGHT, MAX_ITERATIONS
    );

    let mut cursor = Point { x: 0, y: 0 };
    let mut redraw_pending = true;

    event_loop
        .run(move |event, elwt| {
            elwt.set_control_flow(ControlFlow::Wait);

            match event {
                Event::WindowEvent { event, window_id } if window_id == window.id() => {
                    match event {
                        WindowEvent::CloseRequested => {
                            dispatch(&mut app, InputEvent::Quit, elwt, &mut redraw_pending);
                        }
                        WindowEvent::Resized(size) => {
                            surface.resize_surface(size.width, size.height);
                            redraw_pending = true;
                        }
                        WindowEvent::CursorMoved { position, .. } => {
                            cursor = Point {
                                x: position.x as i32,
                                y: position.y as i32,
                            };
                            dispatch(
                                &mut app,
                                InputEvent::PointerMoved(cursor),
                                elwt,
                                &mut redraw_pending,
                            );
                        }
                        WindowEvent::MouseInput {
                            state,
                            button: MouseButton::Left,
                            ..
                        } => {
                            let input = match state {
                                ElementState::Pressed => InputEvent::PointerDown(cursor),
                                ElementState::Released => InputEvent::PointerUp(cursor),
                            };
                            dispatch(&mut app, input, elwt, &mut redraw_pending);
                        }
                        WindowEvent::RedrawRequested => {
                            redraw_pending = false;

                            if let Err(err) = app.render(&mut surface) {
                                error!("render error: {}", err);
                                elwt.exit();
                            }
                        }
                        _ => {}
                    }
                }
                Event::AboutToWait => {
                    if redraw_pending {
                        window.request_redraw();
                    }
                }
                _ => {}
            }
        })
        .map_err(GuiError::EventLoop)
}

fn dispatch(
    app: &mut ExplorerApp,
    input: InputEvent,
    elwt: &EventLoopWindowTarget<()>,
    redraw_pending: &mut bool,
) {
    match app.handle_event(input) {
        Ok(EventResponse::Redraw) => *redraw_pending = true,
        Ok(EventResponse::Exit) => elwt.exit(),
        Ok(EventResponse::Ignored) => {}
        Err(err) => {
            error!("failed to handle {:?}: {}", input, err);
            elwt.exit();
        }
    }
}
