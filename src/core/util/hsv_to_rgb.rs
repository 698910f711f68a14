/// Converts an HSV colour to RGB via the six-sector decomposition.
///
/// `h` is in degrees and may be any finite value: it wraps, so the
/// function is 360-periodic and `h = 360` lands in the same sector as
/// `h = 0` (sectors are closed-open). `s` and `v` are in `[0, 1]`, as are
/// the returned channels.
#[must_use]
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let scaled = (h / 60.0).rem_euclid(6.0);
    let c = v * s;
    let x = c * (1.0 - ((scaled % 2.0) - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match scaled as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    (r + m, g + m, b + m)
}
