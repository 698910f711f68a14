use crate::core::data::selection::Selection;
use crate::core::data::viewport::{Viewport, ViewportError};
use std::error::Error;
use std::fmt;

/// Selections narrower than this are treated as accidental clicks and
/// rejected; committing them would collapse the viewport.
pub const MIN_SELECTION_WIDTH: u32 = 2;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ZoomViewportError {
    SelectionTooNarrow { width: u32 },
    Viewport(ViewportError),
}

impl fmt::Display for ZoomViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelectionTooNarrow { width } => {
                write!(
                    f,
                    "selection is {} px wide, below the {} px minimum",
                    width, MIN_SELECTION_WIDTH
                )
            }
            Self::Viewport(err) => {
                write!(f, "zoomed viewport is invalid: {}", err)
            }
        }
    }
}

impl Error for ZoomViewportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::SelectionTooNarrow { .. } => None,
            Self::Viewport(err) => Some(err),
        }
    }
}

/// Derives the next viewport from a completed drag.
///
/// The selection's top-left corner and width pick the region; the height
/// is forced proportional to the width by the display aspect ratio, so
/// the committed rectangle keeps the display's shape no matter how the
/// user dragged. The current viewport is untouched: the caller replaces
/// it wholesale with the returned one.
pub fn zoom_viewport(
    current: Viewport,
    selection: Selection,
    grid_width: u32,
    grid_height: u32,
) -> Result<Viewport, ZoomViewportError> {
    let width = selection.width();

    if width < MIN_SELECTION_WIDTH {
        return Err(ZoomViewportError::SelectionTooNarrow { width });
    }

    let start = selection.top_left();

    let scale_w = current.width() / grid_width as f64;
    let scale_h = current.height() / grid_height as f64;

    let new_width = width as f64 * scale_w;
    let new_height = (grid_height as f64 * (width as f64 / grid_width as f64)) * scale_h;

    let x_min = current.x_min() + start.x as f64 * scale_w;
    let x_max = x_min + new_width;
    let y_max = current.y_max() - start.y as f64 * scale_h;
    let y_min = y_max - new_height;

    Viewport::new(x_min, x_max, y_min, y_max).map_err(ZoomViewportError::Viewport)
}
