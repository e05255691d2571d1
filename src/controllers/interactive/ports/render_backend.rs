use crate::controllers::interactive::errors::backend::BackendError;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport_geometry::ViewportGeometry;

/// The drawing surface a finished frame is handed to.
pub trait RenderBackend {
    /// One-time setup. Called once per `start`; a failure is terminal for rendering.
    fn initialize(&mut self, geometry: &ViewportGeometry) -> Result<(), BackendError>;

    /// Shows a complete frame. Never called with a partially computed buffer.
    fn present(&mut self, frame: &PixelBuffer) -> Result<(), BackendError>;
}
