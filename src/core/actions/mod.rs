pub mod evaluate_pixels;
pub mod generate_fractal;
pub mod generate_pixel_buffer;
