//! Pixel format conversion helpers for presentation adapters.

use std::error::Error;
use std::fmt;

use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormatError {
    FrameSizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for PixelFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FrameSizeMismatch { expected, actual } => {
                write!(
                    f,
                    "RGBA frame has {} bytes, expected {}",
                    actual, expected
                )
            }
        }
    }
}

impl Error for PixelFormatError {}

/// Copies an RGB frame into an RGBA surface of the same dimensions, alpha 255.
pub fn fill_rgba_frame(frame: &PixelBuffer, dst: &mut [u8]) -> Result<(), PixelFormatError> {
    let src = frame.buffer();
    let expected = (src.len() / 3) * 4;

    if dst.len() != expected {
        return Err(PixelFormatError::FrameSizeMismatch {
            expected,
            actual: dst.len(),
        });
    }

    for (src_pixel, dst_pixel) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        dst_pixel[..3].copy_from_slice(src_pixel);
        dst_pixel[3] = 255;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_known_values_with_opaque_alpha() {
        let frame = PixelBuffer::from_data(
            2,
            2,
            vec![
                255, 0, 0, // red
                0, 255, 0, // green
                0, 0, 255, // blue
                255, 255, 255, // white
            ],
        )
        .unwrap();
        let mut dst = vec![0; 16];

        fill_rgba_frame(&frame, &mut dst).unwrap();

        assert_eq!(
            dst,
            vec![
                255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 255, 255, 255, 255
            ]
        );
    }

    #[test]
    fn empty_frame_is_fine() {
        let frame = PixelBuffer::new(0, 0);
        let mut dst: Vec<u8> = vec![];

        assert!(fill_rgba_frame(&frame, &mut dst).is_ok());
    }

    #[test]
    fn mismatched_surface_is_rejected() {
        let frame = PixelBuffer::new(3, 2);
        let mut dst = vec![0; 3 * 2 * 4 - 4];

        assert_eq!(
            fill_rgba_frame(&frame, &mut dst),
            Err(PixelFormatError::FrameSizeMismatch {
                expected: 24,
                actual: 20
            })
        );
    }
}
