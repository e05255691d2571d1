use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_colour::PixelColour;
use crate::core::fractals::mandelbrot::escape_time::Escape;

/// Phase between the red, green and blue waves: 2π/3 at the precision the ramp was tuned with.
pub const CHANNEL_PHASE: f64 = 2.094_378_666_67;

pub const DEFAULT_FREQUENCY: f64 = 50.0;

/// Sinusoidal colour ramp over the smooth iteration count.
///
/// Two samples of the same three-phase sine wave are blended by the fractional
/// part of the count. `angle_offset` rotates the whole ramp; `secondary_scale`
/// stretches the second sample (1.0 makes both samples coincide).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SinusoidalPalette {
    iterations: u32,
    pub frequency: f64,
    pub angle_offset: f64,
    pub secondary_scale: f64,
}

impl SinusoidalPalette {
    #[must_use]
    pub fn new(iterations: u32, angle_offset: f64) -> Self {
        Self {
            iterations: iterations.max(1),
            frequency: DEFAULT_FREQUENCY,
            angle_offset,
            secondary_scale: 1.0,
        }
    }

    #[must_use]
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    #[must_use]
    pub fn colour_for_count(&self, count: f64) -> PixelColour {
        let primary = wave(self.ratio(count));
        let secondary = wave(self.ratio(count * self.secondary_scale));
        let t = fract(count);

        t * primary + (1.0 - t) * secondary
    }

    fn ratio(&self, count: f64) -> f64 {
        count / f64::from(self.iterations) * self.frequency + self.angle_offset
    }
}

impl ColourMap<Escape> for SinusoidalPalette {
    fn map(&self, escape: Escape) -> PixelColour {
        if !escape.escaped {
            return PixelColour::BLACK;
        }

        self.colour_for_count(escape.smooth_count)
    }

    fn display_name(&self) -> &str {
        "Sinusoidal"
    }
}

fn wave(ratio: f64) -> PixelColour {
    PixelColour {
        r: ratio.sin() * 0.5 + 0.5,
        g: (ratio + CHANNEL_PHASE).sin() * 0.5 + 0.5,
        b: (ratio - CHANNEL_PHASE).sin() * 0.5 + 0.5,
    }
}

fn fract(value: f64) -> f64 {
    value - value.floor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::mandelbrot::escape_time::evaluate;

    const TOLERANCE: f64 = 1e-12;

    fn assert_close(actual: PixelColour, expected: PixelColour) {
        assert!((actual.r - expected.r).abs() < TOLERANCE, "{:?} != {:?}", actual, expected);
        assert!((actual.g - expected.g).abs() < TOLERANCE, "{:?} != {:?}", actual, expected);
        assert!((actual.b - expected.b).abs() < TOLERANCE, "{:?} != {:?}", actual, expected);
    }

    #[test]
    fn interior_points_are_black() {
        let palette = SinusoidalPalette::new(500, 0.0);

        assert_eq!(palette.map(evaluate(0.0, 0.0, 500)), PixelColour::BLACK);
    }

    #[test]
    fn zero_count_samples_wave_at_angle_offset() {
        let palette = SinusoidalPalette::new(500, 0.0);

        assert_close(
            palette.colour_for_count(0.0),
            PixelColour {
                r: 0.5,
                g: CHANNEL_PHASE.sin() * 0.5 + 0.5,
                b: (-CHANNEL_PHASE).sin() * 0.5 + 0.5,
            },
        );
    }

    #[test]
    fn angle_offset_rotates_ramp() {
        let base = SinusoidalPalette::new(400, 0.0);
        let rotated = SinusoidalPalette::new(400, 1.25);
        let shift = 1.25 / DEFAULT_FREQUENCY * 400.0;

        assert_close(rotated.colour_for_count(3.0), base.colour_for_count(3.0 + shift));
    }

    #[test]
    fn channels_stay_in_unit_range() {
        let palette = SinusoidalPalette::new(500, 0.7);

        for step in -100..1000 {
            let colour = palette.colour_for_count(f64::from(step) * 0.37);

            for channel in [colour.r, colour.g, colour.b] {
                assert!((-1e-12..=1.0 + 1e-12).contains(&channel));
            }
        }
    }

    #[test]
    fn blend_hands_over_between_samples_at_integer_counts() {
        let mut palette = SinusoidalPalette::new(100, 0.0);
        palette.secondary_scale = 1.5;

        let below = palette.colour_for_count(7.0 - 1e-9);
        let above = palette.colour_for_count(7.0 + 1e-9);

        // Just below an integer the blend is almost all primary, just above almost all secondary.
        assert!((below.r - wave(palette.ratio(7.0)).r).abs() < 1e-6);
        assert!((above.r - wave(palette.ratio(7.0 * 1.5)).r).abs() < 1e-6);
    }

    #[test]
    fn negative_counts_use_floor_based_fraction() {
        assert!((fract(-0.25) - 0.75).abs() < TOLERANCE);
        assert!((fract(2.75) - 0.75).abs() < TOLERANCE);
    }

    #[test]
    fn zero_iterations_is_treated_as_one() {
        assert_eq!(SinusoidalPalette::new(0, 0.0).iterations(), 1);
    }
}
