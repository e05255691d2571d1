use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::render_request::RenderRequest;
use crate::core::util::view_transform::ViewTransformError;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum EvaluatePixelsError {
    InvalidGeometry(ViewTransformError),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for EvaluatePixelsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGeometry(err) => write!(f, "cannot map viewport: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for EvaluatePixelsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidGeometry(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<ViewTransformError> for EvaluatePixelsError {
    fn from(err: ViewTransformError) -> Self {
        Self::InvalidGeometry(err)
    }
}

impl From<PixelBufferError> for EvaluatePixelsError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Turns a frame snapshot into a complete frame.
///
/// Implementations must be pure functions of the request and agree with each
/// other byte for byte, so the renderer can swap them freely.
pub trait PixelEvaluator {
    fn evaluate(&self, request: &RenderRequest) -> Result<PixelBuffer, EvaluatePixelsError>;

    fn display_name(&self) -> &str;
}
