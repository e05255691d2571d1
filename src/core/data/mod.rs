pub mod complex;
pub mod pixel_buffer;
pub mod pixel_colour;
pub mod point;
pub mod pointer_sample;
pub mod render_request;
pub mod view_limits;
pub mod view_state;
pub mod viewport_geometry;
