pub mod compute_grid;
pub mod render_frame;
pub mod zoom_viewport;
