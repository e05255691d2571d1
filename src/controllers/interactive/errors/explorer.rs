use std::{error::Error, fmt};

use crate::controllers::interactive::errors::backend::BackendError;
use crate::core::actions::evaluate_pixels::ports::pixel_evaluator::EvaluatePixelsError;
use crate::core::data::pixel_buffer::PixelBufferError;
use crate::core::util::view_transform::ViewTransformError;

#[derive(Debug, Clone, PartialEq)]
pub enum ExplorerError {
    InvalidGeometry(ViewTransformError),
    PixelBuffer(PixelBufferError),
    Backend(BackendError),
}

impl fmt::Display for ExplorerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGeometry(err) => write!(f, "invalid geometry: {}", err),
            Self::PixelBuffer(err) => write!(f, "frame could not be assembled: {}", err),
            Self::Backend(err) => write!(f, "{}", err),
        }
    }
}

impl Error for ExplorerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidGeometry(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
            Self::Backend(err) => Some(err),
        }
    }
}

impl From<BackendError> for ExplorerError {
    fn from(err: BackendError) -> Self {
        Self::Backend(err)
    }
}

impl From<ViewTransformError> for ExplorerError {
    fn from(err: ViewTransformError) -> Self {
        Self::InvalidGeometry(err)
    }
}

impl From<EvaluatePixelsError> for ExplorerError {
    fn from(err: EvaluatePixelsError) -> Self {
        match err {
            EvaluatePixelsError::InvalidGeometry(err) => Self::InvalidGeometry(err),
            EvaluatePixelsError::PixelBuffer(err) => Self::PixelBuffer(err),
        }
    }
}
