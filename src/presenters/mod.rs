pub mod buffer_surface;
#[cfg(feature = "gui")]
pub mod pixels_surface;
