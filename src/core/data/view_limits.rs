use crate::core::data::view_state::ConfigurationWarning;
use crate::core::fractals::mandelbrot::escape_time::ITERATION_SAFETY_CAP;

const DEFAULT_MIN_ZOOM: f64 = 0.1;
const DEFAULT_MAX_ZOOM: f64 = 1e12;

/// Numeric bounds applied to every [`ViewState`](super::view_state::ViewState) mutation.
///
/// `max_zoom` keeps a pixel at a few ulps of `f64` resolution near the set on a
/// ~1000 px surface; past it neighbouring pixels collapse onto the same plane
/// coordinate. `min_zoom` keeps the whole set (and a margin) on screen without
/// letting the view drift into an empty plane.
///
/// The fields are plain configuration and may hold anything; [`ViewLimits::sanitized`]
/// turns them into bounds the clamps can use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewLimits {
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub max_iterations: u32,
}

impl ViewLimits {
    /// Returns usable bounds and, if any field had to change, a warning naming both sets.
    ///
    /// Non-finite or non-positive zoom bounds fall back to the defaults, inverted
    /// zoom bounds are swapped, and `max_iterations` is held in
    /// `1..=ITERATION_SAFETY_CAP` so the escape loop never runs short of the budget.
    #[must_use]
    pub fn sanitized(&self) -> (ViewLimits, Option<ConfigurationWarning>) {
        let mut min_zoom = valid_zoom_bound(self.min_zoom).unwrap_or(DEFAULT_MIN_ZOOM);
        let mut max_zoom = valid_zoom_bound(self.max_zoom).unwrap_or(DEFAULT_MAX_ZOOM);

        if min_zoom > max_zoom {
            std::mem::swap(&mut min_zoom, &mut max_zoom);
        }

        let applied = ViewLimits {
            min_zoom,
            max_zoom,
            max_iterations: self.max_iterations.clamp(1, ITERATION_SAFETY_CAP),
        };

        // NaN fields never compare equal, so they always report.
        let warning = (applied != *self).then_some(ConfigurationWarning::LimitsAdjusted {
            requested: *self,
            applied,
        });

        (applied, warning)
    }

    #[must_use]
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        let (limits, _) = self.sanitized();

        if zoom.is_nan() {
            return limits.min_zoom;
        }

        zoom.clamp(limits.min_zoom, limits.max_zoom)
    }

    #[must_use]
    pub fn clamp_iterations(&self, iterations: u32) -> u32 {
        let (limits, _) = self.sanitized();

        iterations.clamp(1, limits.max_iterations)
    }
}

impl Default for ViewLimits {
    fn default() -> Self {
        Self {
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            max_iterations: ITERATION_SAFETY_CAP,
        }
    }
}

fn valid_zoom_bound(bound: f64) -> Option<f64> {
    (bound.is_finite() && bound > 0.0).then_some(bound)
}
