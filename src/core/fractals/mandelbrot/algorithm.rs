use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::view_state::ViewState;
use crate::core::data::viewport_geometry::ViewportGeometry;
use crate::core::fractals::mandelbrot::escape_time::{Escape, evaluate};
use crate::core::util::view_transform::{ViewTransform, ViewTransformError};

/// Escape-time evaluation of every surface pixel for one view snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    transform: ViewTransform,
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    pub fn new(geometry: &ViewportGeometry, view: &ViewState) -> Result<Self, ViewTransformError> {
        Ok(Self {
            transform: ViewTransform::new(geometry, view)?,
            max_iterations: view.iterations(),
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = Escape;

    fn compute(&self, pixel: Point) -> Escape {
        let (px, py) = pixel.centre();
        let c = self.transform.to_plane(px, py);

        evaluate(c.real, c.imag, self.max_iterations)
    }
}
