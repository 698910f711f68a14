pub mod ports;

use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::surface::DrawSurface;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_grid::IterationGrid;
use crate::core::data::point::Point;
use crate::core::data::selection::Selection;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum RenderFrameError {
    Present(Box<dyn Error>),
}

impl fmt::Display for RenderFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(err) => write!(f, "failed to present frame: {}", err),
        }
    }
}

impl Error for RenderFrameError {}

/// One full frame: every grid cell through the colour map, the live
/// selection outline if a drag is active, then a single present call.
///
/// The selection preview uses the same aspect-forced height as the zoom
/// transform, so what the user sees is what a release would commit.
pub fn render_frame<M, S>(
    grid: &IterationGrid,
    colour_map: &M,
    selection: Option<Selection>,
    surface: &mut S,
) -> Result<(), RenderFrameError>
where
    M: ColourMap,
    S: DrawSurface + ?Sized,
{
    surface.set_draw_colour(Colour::WHITE, 255);
    surface.clear();

    let width = grid.width();
    for (i, (&hue, &in_set)) in grid.hue().iter().zip(grid.in_set()).enumerate() {
        surface.set_draw_colour(colour_map.map(hue, in_set), 255);
        surface.draw_point(Point {
            x: (i as u32 % width) as i32,
            y: (i as u32 / width) as i32,
        });
    }

    if let Some(selection) = selection {
        draw_selection(selection, grid.width(), grid.height(), surface);
    }

    surface.present().map_err(RenderFrameError::Present)
}

fn draw_selection<S: DrawSurface + ?Sized>(
    selection: Selection,
    grid_width: u32,
    grid_height: u32,
    surface: &mut S,
) {
    let top_left = selection.top_left();
    let width = selection.width();
    let height = selection.aspect_height(grid_width, grid_height);

    surface.set_draw_colour(Colour::BLACK, 255);
    surface.draw_rect(top_left, width, height);

    // inner outline inset by one pixel, skipped when there is no room
    if width > 2 && height > 2 {
        surface.set_draw_colour(Colour::WHITE, 255);
        surface.draw_rect(
            Point {
                x: top_left.x + 1,
                y: top_left.y + 1,
            },
            width - 2,
            height - 2,
        );
    }
}
