fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    mandelbrot_explorer::render_snapshot("output/mandelbrot.ppm")?;

    Ok(())
}
