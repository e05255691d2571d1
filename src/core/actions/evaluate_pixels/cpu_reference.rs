use crate::core::actions::evaluate_pixels::ports::pixel_evaluator::{
    EvaluatePixelsError, PixelEvaluator,
};
use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_request::RenderRequest;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;

/// Single-threaded evaluator; the reference every other evaluator is checked against.
#[derive(Debug, Clone, Copy, Default)]
pub struct CpuReferenceEvaluator;

impl PixelEvaluator for CpuReferenceEvaluator {
    fn evaluate(&self, request: &RenderRequest) -> Result<PixelBuffer, EvaluatePixelsError> {
        let algorithm = MandelbrotAlgorithm::new(&request.geometry, &request.view)?;
        let (width, height) = (request.geometry.width_px, request.geometry.height_px);

        let escapes = generate_fractal_serial(width, height, &algorithm);

        Ok(generate_pixel_buffer(escapes, &request.palette(), width, height)?)
    }

    fn display_name(&self) -> &str {
        "CPU reference"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::Point;
    use crate::core::data::view_state::ViewState;
    use crate::core::data::viewport_geometry::ViewportGeometry;

    fn request(width: u32, height: u32) -> RenderRequest {
        RenderRequest {
            view: ViewState::default(),
            geometry: ViewportGeometry::from_logical(width, height, 1.0),
            angle_offset: 0.0,
        }
    }

    #[test]
    fn frame_matches_surface_size() {
        let frame = CpuReferenceEvaluator.evaluate(&request(30, 15)).unwrap();

        assert_eq!(frame.width(), 30);
        assert_eq!(frame.height(), 15);
        assert_eq!(frame.buffer().len(), 30 * 15 * 3);
    }

    #[test]
    fn centre_of_default_view_is_inside_the_set() {
        let frame = CpuReferenceEvaluator.evaluate(&request(31, 15)).unwrap();

        assert_eq!(frame.pixel(Point { x: 15, y: 7 }), Some([0, 0, 0]));
    }

    #[test]
    fn corners_of_default_view_escape() {
        let frame = CpuReferenceEvaluator.evaluate(&request(30, 15)).unwrap();

        assert_ne!(frame.pixel(Point { x: 0, y: 0 }), Some([0, 0, 0]));
        assert_ne!(frame.pixel(Point { x: 29, y: 14 }), Some([0, 0, 0]));
    }

    #[test]
    fn degenerate_geometry_is_reported() {
        let result = CpuReferenceEvaluator.evaluate(&request(30, 0));

        assert!(matches!(result, Err(EvaluatePixelsError::InvalidGeometry(_))));
    }
}
