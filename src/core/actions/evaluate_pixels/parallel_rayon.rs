use crate::core::actions::evaluate_pixels::ports::pixel_evaluator::{
    EvaluatePixelsError, PixelEvaluator,
};
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_request::RenderRequest;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;

/// Rayon-backed evaluator for interactive use. Escape tests run rows in parallel.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelEvaluator;

impl PixelEvaluator for ParallelEvaluator {
    fn evaluate(&self, request: &RenderRequest) -> Result<PixelBuffer, EvaluatePixelsError> {
        let algorithm = MandelbrotAlgorithm::new(&request.geometry, &request.view)?;
        let (width, height) = (request.geometry.width_px, request.geometry.height_px);

        let escapes = generate_fractal_parallel_rayon(width, height, &algorithm);

        Ok(generate_pixel_buffer(escapes, &request.palette(), width, height)?)
    }

    fn display_name(&self) -> &str {
        "Parallel (rayon)"
    }
}
