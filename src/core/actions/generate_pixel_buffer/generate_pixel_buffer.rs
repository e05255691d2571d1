use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};

/// Colours row-major per-pixel values into an RGB8 frame.
///
/// Streams bytes into a buffer preallocated to `width * height * 3`; a value
/// count that does not match the grid is rejected rather than padded.
pub fn generate_pixel_buffer<T, CMap>(
    input: Vec<T>,
    mapper: &CMap,
    width: u32,
    height: u32,
) -> Result<PixelBuffer, PixelBufferError>
where
    CMap: ColourMap<T>,
{
    let expected_pixels = width as usize * height as usize;

    if input.len() != expected_pixels {
        return Err(PixelBufferError::SizeMismatch {
            expected: expected_pixels * 3,
            actual: input.len() * 3,
        });
    }

    let mut data = Vec::with_capacity(expected_pixels * 3);

    for value in input {
        data.extend_from_slice(&mapper.map(value).to_rgb8());
    }

    PixelBuffer::from_data(width, height, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_colour::PixelColour;
    use crate::core::data::point::Point;

    struct GreyscaleMap;

    impl ColourMap<u8> for GreyscaleMap {
        fn map(&self, value: u8) -> PixelColour {
            let level = f64::from(value) / 255.0;

            PixelColour {
                r: level,
                g: level,
                b: level,
            }
        }

        fn display_name(&self) -> &str {
            "Greyscale"
        }
    }

    #[test]
    fn maps_each_value_in_order() {
        let buffer = generate_pixel_buffer(vec![0, 51, 255, 102], &GreyscaleMap, 2, 2).unwrap();

        assert_eq!(buffer.pixel(Point { x: 0, y: 0 }), Some([0, 0, 0]));
        assert_eq!(buffer.pixel(Point { x: 1, y: 0 }), Some([51, 51, 51]));
        assert_eq!(buffer.pixel(Point { x: 0, y: 1 }), Some([255, 255, 255]));
        assert_eq!(buffer.pixel(Point { x: 1, y: 1 }), Some([102, 102, 102]));
    }

    #[test]
    fn rejects_value_count_mismatch() {
        let result = generate_pixel_buffer(vec![0, 1, 2], &GreyscaleMap, 2, 2);

        assert_eq!(
            result,
            Err(PixelBufferError::SizeMismatch {
                expected: 12,
                actual: 9
            })
        );
    }
}
