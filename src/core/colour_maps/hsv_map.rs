use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::util::hsv_to_rgb::hsv_to_rgb;

/// The fixed display policy: full saturation, hue taken from the escape
/// iteration count, value at 1 for in-set points and at the normalised
/// iteration fraction otherwise.
///
/// The hue byte is fed to the HSV conversion directly as degrees, so the
/// rendered palette sweeps the first 255° of the hue circle.
#[derive(Debug, Default)]
pub struct HsvColourMap;

impl HsvColourMap {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ColourMap for HsvColourMap {
    fn map(&self, hue: u8, in_set: bool) -> Colour {
        let value = if in_set {
            1.0
        } else {
            hue as f64 / 255.0
        };

        let (r, g, b) = hsv_to_rgb(hue as f64, 1.0, value);

        Colour {
            r: (r * 255.0).round() as u8,
            g: (g * 255.0).round() as u8,
            b: (b * 255.0).round() as u8,
        }
    }
}
