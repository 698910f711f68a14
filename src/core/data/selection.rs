use crate::core::data::point::Point;

/// Transient drag state, in screen coordinates.
///
/// Created on pointer-down, updated on pointer-move/up, and discarded once
/// the resulting zoom commits or is rejected. The selection's height is
/// never read from the drag itself: it is derived from the width and the
/// display aspect ratio, so the committed region always matches what the
/// live preview shows.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Selection {
    start: Point,
    current: Point,
}

impl Selection {
    #[must_use]
    pub fn begin(start: Point) -> Self {
        Self {
            start,
            current: start,
        }
    }

    pub fn drag_to(&mut self, position: Point) {
        self.current = position;
    }

    #[must_use]
    pub fn start(&self) -> Point {
        self.start
    }

    #[must_use]
    pub fn current(&self) -> Point {
        self.current
    }

    /// Top-left corner of the dragged rectangle, whichever direction the
    /// drag went.
    #[must_use]
    pub fn top_left(&self) -> Point {
        Point {
            x: self.start.x.min(self.current.x),
            y: self.start.y.min(self.current.y),
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.start.x.abs_diff(self.current.x)
    }

    /// Height forced proportional to the width by the display aspect ratio.
    #[must_use]
    pub fn aspect_height(&self, grid_width: u32, grid_height: u32) -> u32 {
        (grid_height as f64 * (self.width() as f64 / grid_width as f64)) as u32
    }
}
