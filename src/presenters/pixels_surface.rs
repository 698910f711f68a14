use crate::core::actions::render_frame::ports::surface::DrawSurface;
use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use pixels::{Pixels, SurfaceTexture};
use std::error::Error;
use winit::window::Window;

/// A `DrawSurface` over the `pixels` framebuffer of the explorer window.
///
/// The framebuffer keeps the fixed grid dimensions for the lifetime of
/// the window; window resizes only rescale the surface it is blitted to.
pub struct PixelsSurface {
    pixels: Pixels<'static>,
    width: u32,
    height: u32,
    draw_colour: Colour,
    draw_alpha: u8,
}

impl PixelsSurface {
    pub fn new(window: &'static Window, width: u32, height: u32) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(width, height, surface_texture)?;

        Ok(Self {
            pixels,
            width,
            height,
            draw_colour: Colour::BLACK,
            draw_alpha: 255,
        })
    }

    pub fn resize_surface(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.pixels
            .resize_surface(width, height)
            .expect("Failed to resize surface");
    }

    fn put(&mut self, x: i32, y: i32) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }

        let index = ((y as u32 * self.width + x as u32) * 4) as usize;
        let frame = self.pixels.frame_mut();
        frame[index] = self.draw_colour.r;
        frame[index + 1] = self.draw_colour.g;
        frame[index + 2] = self.draw_colour.b;
        frame[index + 3] = self.draw_alpha;
    }
}

impl DrawSurface for PixelsSurface {
    fn set_draw_colour(&mut self, colour: Colour, alpha: u8) {
        self.draw_colour = colour;
        self.draw_alpha = alpha;
    }

    fn clear(&mut self) {
        let colour = self.draw_colour;
        let alpha = self.draw_alpha;

        for pixel in self.pixels.frame_mut().chunks_exact_mut(4) {
            pixel[0] = colour.r;
            pixel[1] = colour.g;
            pixel[2] = colour.b;
            pixel[3] = alpha;
        }
    }

    fn draw_point(&mut self, point: Point) {
        self.put(point.x, point.y);
    }

    fn draw_rect(&mut self, top_left: Point, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        let right = top_left.x + width as i32 - 1;
        let bottom = top_left.y + height as i32 - 1;

        for x in top_left.x..=right {
            self.put(x, top_left.y);
            self.put(x, bottom);
        }
        for y in top_left.y..=bottom {
            self.put(top_left.x, y);
            self.put(right, y);
        }
    }

    fn present(&mut self) -> Result<(), Box<dyn Error>> {
        self.pixels.render().map_err(|err| Box::new(err) as Box<dyn Error>)
    }
}
