mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;
mod storage;

pub use crate::controllers::explorer::{EventResponse, ExplorerApp, InputEvent};
pub use crate::controllers::snapshot::render_snapshot;
pub use crate::core::actions::compute_grid::{ComputeBackend, ComputePass};
pub use crate::core::config::{HEIGHT, MAX_ITERATIONS, WIDTH, default_viewport};
pub use crate::core::data::iteration_grid::IterationGrid;
pub use crate::core::data::viewport::Viewport;
pub use crate::presenters::buffer_surface::BufferSurface;

#[cfg(feature = "gui")]
pub use crate::input::gui::run::run_gui;
