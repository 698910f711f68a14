use std::path::Path;
use std::time::Instant;

use crate::core::actions::compute_grid::ComputeBackend;
use crate::core::actions::render_frame::render_frame;
use crate::core::colour_maps::hsv_map::HsvColourMap;
use crate::core::config::{HEIGHT, MAX_ITERATIONS, WIDTH, default_viewport};
use crate::core::data::iteration_grid::IterationGrid;
use crate::presenters::buffer_surface::BufferSurface;
use crate::storage::write_ppm::write_ppm;

/// Renders the default view to a PPM file through the same compute and
/// render passes the interactive explorer uses.
pub fn render_snapshot(filepath: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
    let filepath = filepath.as_ref();

    println!("Rendering Mandelbrot set...");
    println!("Image size: {}x{}", WIDTH, HEIGHT);
    println!("Max iterations: {}", MAX_ITERATIONS);

    let backend = ComputeBackend::new(MAX_ITERATIONS)?;
    let grid = IterationGrid::new(WIDTH, HEIGHT)?;

    let start = Instant::now();
    let grid = backend.submit(default_viewport(), grid).wait()?;
    println!("Duration:   {:?}", start.elapsed());

    let mut surface = BufferSurface::new(WIDTH, HEIGHT);
    render_frame(&grid, &HsvColourMap::new(), None, &mut surface)?;

    if let Some(parent) = filepath.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    write_ppm(surface.width(), surface.height(), surface.rgb(), filepath)?;
    println!("Saved to {}", filepath.display());

    Ok(())
}
