use std::io::Write;
use std::path::Path;

pub fn write_ppm(
    width: u32,
    height: u32,
    rgb: &[u8],
    filepath: impl AsRef<Path>,
) -> std::io::Result<()> {
    let mut file = std::fs::File::create(filepath)?;

    // PPM header: P6 means binary RGB, then width height max_colour
    writeln!(file, "P6")?;
    writeln!(file, "{} {}", width, height)?;
    writeln!(file, "255")?;
    file.write_all(rgb)?;

    Ok(())
}
