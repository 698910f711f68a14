use crate::core::data::viewport::Viewport;

/// Output grid and window dimensions, in pixels.
pub const WIDTH: u32 = 1200;
pub const HEIGHT: u32 = 800;

/// Escape-iteration bound; caps the worst-case work per pixel.
pub const MAX_ITERATIONS: u32 = 500;

pub fn default_viewport() -> Viewport {
    Viewport::new(-2.0, 1.0, -1.0, 1.0).expect("default view region is valid")
}
