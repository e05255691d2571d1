use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

const BYTES_PER_PIXEL: usize = 3;

fn buffer_size(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        pixel: Point,
        width: u32,
        height: u32,
    },
    SizeMismatch {
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(
                    f,
                    "pixel data has {} bytes, expected {}",
                    actual, expected
                )
            }
            Self::PixelOutsideBounds {
                pixel,
                width,
                height,
            } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} buffer",
                    pixel.x, pixel.y, width, height
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// A fully computed frame: tightly packed row-major RGB8.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            buffer: vec![0; buffer_size(width, height)],
        }
    }

    pub fn from_data(
        width: u32,
        height: u32,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let expected = buffer_size(width, height);

        if expected != buffer.len() {
            return Err(PixelBufferError::SizeMismatch {
                expected,
                actual: buffer.len(),
            });
        }

        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<[u8; 3]> {
        let index = self.index_of(pixel)?;

        Some([
            self.buffer[index],
            self.buffer[index + 1],
            self.buffer[index + 2],
        ])
    }

    pub fn set_pixel(&mut self, pixel: Point, rgb: [u8; 3]) -> Result<(), PixelBufferError> {
        let Some(index) = self.index_of(pixel) else {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                width: self.width,
                height: self.height,
            });
        };

        self.buffer[index..index + BYTES_PER_PIXEL].copy_from_slice(&rgb);
        Ok(())
    }

    fn index_of(&self, pixel: Point) -> Option<usize> {
        let x = u32::try_from(pixel.x).ok()?;
        let y = u32::try_from(pixel.y).ok()?;

        if x >= self.width || y >= self.height {
            return None;
        }

        Some((y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL)
    }
}
