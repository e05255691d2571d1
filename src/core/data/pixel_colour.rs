use std::ops::{Add, Mul};

/// Linear RGB colour with channels in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelColour {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl PixelColour {
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    #[must_use]
    pub fn to_rgb8(self) -> [u8; 3] {
        [channel_to_u8(self.r), channel_to_u8(self.g), channel_to_u8(self.b)]
    }
}

impl Add for PixelColour {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            r: self.r + other.r,
            g: self.g + other.g,
            b: self.b + other.b,
        }
    }
}

impl Mul<PixelColour> for f64 {
    type Output = PixelColour;

    fn mul(self, colour: PixelColour) -> PixelColour {
        PixelColour {
            r: self * colour.r,
            g: self * colour.g,
            b: self * colour.b,
        }
    }
}

fn channel_to_u8(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }

    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
