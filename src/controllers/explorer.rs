//! Interactive explorer state machine.
//!
//! Owns the viewport, the result grid and the transient drag state, and
//! reacts to the typed input-event stream delivered by the windowing
//! collaborator. Pointer-up is the only transition that touches the
//! viewport: it commits the zoom and synchronously recomputes the grid
//! before the next frame can be rendered.

use crate::core::actions::compute_grid::{ComputeBackend, ComputeError};
use crate::core::actions::render_frame::ports::surface::DrawSurface;
use crate::core::actions::render_frame::{RenderFrameError, render_frame};
use crate::core::actions::zoom_viewport::{ZoomViewportError, zoom_viewport};
use crate::core::colour_maps::hsv_map::HsvColourMap;
use crate::core::data::iteration_grid::IterationGrid;
use crate::core::data::point::Point;
use crate::core::data::selection::Selection;
use crate::core::data::viewport::Viewport;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt;
use std::time::Instant;

/// The typed event stream the windowing collaborator must deliver, in
/// arrival order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    PointerDown(Point),
    PointerMoved(Point),
    PointerUp(Point),
}

/// What the event loop should do after an event was handled.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EventResponse {
    Ignored,
    Redraw,
    Exit,
}

#[derive(Debug)]
pub enum ExplorerError {
    Compute(ComputeError),
    ComputeInFlight,
    Render(RenderFrameError),
}

impl fmt::Display for ExplorerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compute(err) => write!(f, "compute pass failed: {}", err),
            Self::ComputeInFlight => {
                write!(f, "result grid is unavailable while a compute pass is in flight")
            }
            Self::Render(err) => write!(f, "render pass failed: {}", err),
        }
    }
}

impl Error for ExplorerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Compute(err) => Some(err),
            Self::ComputeInFlight => None,
            Self::Render(err) => Some(err),
        }
    }
}

pub struct ExplorerApp {
    backend: ComputeBackend,
    colour_map: HsvColourMap,
    viewport: Viewport,
    /// `None` only while a compute pass is in flight.
    grid: Option<IterationGrid>,
    selection: Option<Selection>,
}

impl ExplorerApp {
    /// Builds the explorer and runs the initial compute pass over
    /// `viewport`, so the first frame is ready to render.
    pub fn new(
        backend: ComputeBackend,
        grid: IterationGrid,
        viewport: Viewport,
    ) -> Result<Self, ExplorerError> {
        let mut app = Self {
            backend,
            colour_map: HsvColourMap::new(),
            viewport,
            grid: Some(grid),
            selection: None,
        };

        app.recompute()?;
        Ok(app)
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn handle_event(&mut self, event: InputEvent) -> Result<EventResponse, ExplorerError> {
        match event {
            InputEvent::Quit => Ok(EventResponse::Exit),
            InputEvent::PointerDown(position) => {
                self.selection = Some(Selection::begin(position));
                Ok(EventResponse::Redraw)
            }
            InputEvent::PointerMoved(position) => match self.selection.as_mut() {
                Some(selection) => {
                    selection.drag_to(position);
                    Ok(EventResponse::Redraw)
                }
                None => Ok(EventResponse::Ignored),
            },
            InputEvent::PointerUp(position) => match self.selection.take() {
                Some(mut selection) => {
                    selection.drag_to(position);
                    self.commit_zoom(selection)?;
                    Ok(EventResponse::Redraw)
                }
                None => Ok(EventResponse::Ignored),
            },
        }
    }

    /// Renders the current grid and any live selection into `surface`.
    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) -> Result<(), ExplorerError> {
        let grid = self.grid.as_ref().ok_or(ExplorerError::ComputeInFlight)?;

        render_frame(grid, &self.colour_map, self.selection, surface)
            .map_err(ExplorerError::Render)
    }

    fn commit_zoom(&mut self, selection: Selection) -> Result<(), ExplorerError> {
        let (grid_width, grid_height) = match &self.grid {
            Some(grid) => (grid.width(), grid.height()),
            None => return Err(ExplorerError::ComputeInFlight),
        };

        match zoom_viewport(self.viewport, selection, grid_width, grid_height) {
            Ok(viewport) => {
                self.viewport = viewport;
                self.recompute()?;
                info!(
                    "zoomed to x:[{}, {}] y:[{}, {}]",
                    viewport.x_min(),
                    viewport.x_max(),
                    viewport.y_min(),
                    viewport.y_max()
                );
            }
            Err(ZoomViewportError::SelectionTooNarrow { width }) => {
                debug!("ignoring {} px wide selection", width);
            }
            Err(ZoomViewportError::Viewport(err)) => {
                warn!("ignoring selection, zoomed viewport invalid: {}", err);
            }
        }

        Ok(())
    }

    /// Submits a pass for the current viewport and blocks until both
    /// result buffers are fully rewritten.
    fn recompute(&mut self) -> Result<(), ExplorerError> {
        let grid = self.grid.take().ok_or(ExplorerError::ComputeInFlight)?;

        let start = Instant::now();
        let pass = self.backend.submit(self.viewport, grid);
        let grid = pass.wait().map_err(ExplorerError::Compute)?;

        debug!(
            "computed {}x{} grid in {:?}",
            grid.width(),
            grid.height(),
            start.elapsed()
        );

        self.grid = Some(grid);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::render_frame::ports::colour_map::ColourMap;
    use crate::core::config::MAX_ITERATIONS;
    use crate::core::data::colour::Colour;

    const GRID_WIDTH: u32 = 60;
    const GRID_HEIGHT: u32 = 40;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Command {
        SetColour(Colour, u8),
        Clear,
        DrawPoint(Point),
        DrawRect(Point, u32, u32),
        Present,
    }

    #[derive(Default)]
    struct RecordingSurface {
        commands: Vec<Command>,
    }

    impl DrawSurface for RecordingSurface {
        fn set_draw_colour(&mut self, colour: Colour, alpha: u8) {
            self.commands.push(Command::SetColour(colour, alpha));
        }

        fn clear(&mut self) {
            self.commands.push(Command::Clear);
        }

        fn draw_point(&mut self, point: Point) {
            self.commands.push(Command::DrawPoint(point));
        }

        fn draw_rect(&mut self, top_left: Point, width: u32, height: u32) {
            self.commands.push(Command::DrawRect(top_left, width, height));
        }

        fn present(&mut self) -> Result<(), Box<dyn Error>> {
            self.commands.push(Command::Present);
            Ok(())
        }
    }

    fn create_app() -> ExplorerApp {
        let backend = ComputeBackend::new(MAX_ITERATIONS).expect("test backend builds");
        let grid = IterationGrid::new(GRID_WIDTH, GRID_HEIGHT).expect("test grid is valid");
        let viewport = Viewport::new(-2.0, 1.0, -1.0, 1.0).expect("test region is valid");

        ExplorerApp::new(backend, grid, viewport).expect("initial compute succeeds")
    }

    #[test]
    fn test_new_runs_the_initial_compute_pass() {
        let app = create_app();
        let mut surface = RecordingSurface::default();

        app.render(&mut surface).unwrap();

        let point_count = surface
            .commands
            .iter()
            .filter(|c| matches!(c, Command::DrawPoint(_)))
            .count();

        assert_eq!(point_count, (GRID_WIDTH * GRID_HEIGHT) as usize);
        assert_eq!(surface.commands.last(), Some(&Command::Present));
    }

    #[test]
    fn test_quit_exits() {
        let mut app = create_app();

        assert_eq!(
            app.handle_event(InputEvent::Quit).unwrap(),
            EventResponse::Exit
        );
    }

    #[test]
    fn test_pointer_down_starts_a_selection() {
        let mut app = create_app();

        let response = app
            .handle_event(InputEvent::PointerDown(Point { x: 10, y: 10 }))
            .unwrap();

        assert_eq!(response, EventResponse::Redraw);
        assert_eq!(app.selection(), Some(Selection::begin(Point { x: 10, y: 10 })));
    }

    #[test]
    fn test_pointer_move_without_a_drag_is_ignored() {
        let mut app = create_app();

        let response = app
            .handle_event(InputEvent::PointerMoved(Point { x: 10, y: 10 }))
            .unwrap();

        assert_eq!(response, EventResponse::Ignored);
        assert_eq!(app.selection(), None);
    }

    #[test]
    fn test_drag_lifecycle_commits_a_narrowed_viewport() {
        let mut app = create_app();
        let before = app.viewport();

        app.handle_event(InputEvent::PointerDown(Point { x: 15, y: 10 }))
            .unwrap();
        app.handle_event(InputEvent::PointerMoved(Point { x: 30, y: 20 }))
            .unwrap();
        let response = app
            .handle_event(InputEvent::PointerUp(Point { x: 45, y: 30 }))
            .unwrap();

        assert_eq!(response, EventResponse::Redraw);
        assert_eq!(app.selection(), None);
        assert!(before.contains(&app.viewport()));
        assert!(app.viewport().width() < before.width());
    }

    #[test]
    fn test_zero_width_drag_leaves_the_viewport_unchanged() {
        let mut app = create_app();
        let before = app.viewport();

        app.handle_event(InputEvent::PointerDown(Point { x: 30, y: 20 }))
            .unwrap();
        app.handle_event(InputEvent::PointerUp(Point { x: 30, y: 20 }))
            .unwrap();

        assert_eq!(app.viewport(), before);
        assert_eq!(app.selection(), None);
    }

    #[test]
    fn test_commit_recomputes_the_grid_for_the_new_viewport() {
        let mut app = create_app();

        let mut surface_before = RecordingSurface::default();
        app.render(&mut surface_before).unwrap();

        // zoom into the top-left quarter, which is all fast-escaping
        // plane, so the rendered colours must change
        app.handle_event(InputEvent::PointerDown(Point { x: 0, y: 0 }))
            .unwrap();
        app.handle_event(InputEvent::PointerUp(Point { x: 15, y: 10 }))
            .unwrap();

        let mut surface_after = RecordingSurface::default();
        app.render(&mut surface_after).unwrap();

        assert_ne!(surface_before.commands, surface_after.commands);
    }

    #[test]
    fn test_live_selection_is_rendered_and_cleared_after_commit() {
        let mut app = create_app();

        app.handle_event(InputEvent::PointerDown(Point { x: 6, y: 4 }))
            .unwrap();
        app.handle_event(InputEvent::PointerMoved(Point { x: 30, y: 8 }))
            .unwrap();

        let mut mid_drag = RecordingSurface::default();
        app.render(&mut mid_drag).unwrap();

        let rects: Vec<Command> = mid_drag
            .commands
            .iter()
            .filter(|c| matches!(c, Command::DrawRect(..)))
            .cloned()
            .collect();

        // 24 px wide on a 60x40 grid: aspect-forced height 16
        assert_eq!(
            rects,
            vec![
                Command::DrawRect(Point { x: 6, y: 4 }, 24, 16),
                Command::DrawRect(Point { x: 7, y: 5 }, 22, 14),
            ]
        );

        app.handle_event(InputEvent::PointerUp(Point { x: 30, y: 8 }))
            .unwrap();

        let mut after_commit = RecordingSurface::default();
        app.render(&mut after_commit).unwrap();

        assert!(
            after_commit
                .commands
                .iter()
                .all(|c| !matches!(c, Command::DrawRect(..)))
        );
    }

    #[test]
    fn test_pointer_up_without_a_drag_is_ignored() {
        let mut app = create_app();
        let before = app.viewport();

        let response = app
            .handle_event(InputEvent::PointerUp(Point { x: 30, y: 20 }))
            .unwrap();

        assert_eq!(response, EventResponse::Ignored);
        assert_eq!(app.viewport(), before);
    }
}
