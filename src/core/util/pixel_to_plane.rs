use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;

/// Maps a grid pixel to its complex-plane coordinate.
///
/// Screen rows grow downward while the imaginary axis grows upward, so row
/// 0 maps to `y_max` and the bottom row to `y_min`. Grid dimensions are at
/// least 2 on each axis (enforced by `IterationGrid::new`), so the
/// `dimension - 1` divisors are never zero.
#[must_use]
pub fn pixel_to_plane(
    px: u32,
    py: u32,
    grid_width: u32,
    grid_height: u32,
    viewport: Viewport,
) -> Complex {
    let real = viewport.x_min() + px as f64 * viewport.width() / (grid_width - 1) as f64;
    let imag = viewport.y_max() - py as f64 * viewport.height() / (grid_height - 1) as f64;

    Complex { real, imag }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_view() -> Viewport {
        Viewport::new(-2.0, 1.0, -1.0, 1.0).unwrap()
    }

    #[test]
    fn test_top_left_pixel_maps_to_x_min_y_max() {
        let c = pixel_to_plane(0, 0, 1200, 800, default_view());

        assert_eq!(c.real, -2.0);
        assert_eq!(c.imag, 1.0);
    }

    #[test]
    fn test_bottom_right_pixel_maps_to_x_max_y_min() {
        let c = pixel_to_plane(1199, 799, 1200, 800, default_view());

        assert_eq!(c.real, 1.0);
        assert_eq!(c.imag, -1.0);
    }

    #[test]
    fn test_rows_grow_downward_in_screen_space() {
        let top = pixel_to_plane(0, 0, 100, 100, default_view());
        let below = pixel_to_plane(0, 1, 100, 100, default_view());

        assert!(below.imag < top.imag);
    }

    #[test]
    fn test_centre_of_a_symmetric_view() {
        let viewport = Viewport::new(-1.0, 1.0, -1.0, 1.0).unwrap();
        let c = pixel_to_plane(50, 50, 101, 101, viewport);

        assert_eq!(c.real, 0.0);
        assert_eq!(c.imag, 0.0);
    }
}
