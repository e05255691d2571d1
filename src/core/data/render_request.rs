use crate::core::data::view_state::ViewState;
use crate::core::data::viewport_geometry::ViewportGeometry;
use crate::core::fractals::mandelbrot::palette::SinusoidalPalette;

/// Everything one frame is computed from, copied at the start of the frame.
///
/// `PartialEq` lets hosts detect that nothing visible changed between frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub view: ViewState,
    pub geometry: ViewportGeometry,
    pub angle_offset: f64,
}

impl RenderRequest {
    #[must_use]
    pub fn palette(&self) -> SinusoidalPalette {
        SinusoidalPalette::new(self.view.iterations(), self.angle_offset)
    }
}
