use crate::core::data::view_limits::ViewLimits;
use crate::core::data::view_state::{ConfigurationWarning, DEFAULT_ITERATIONS, ViewState};

/// Every option the host can set on an explorer.
///
/// `width`/`height` are logical pixels; the surface is scaled by the device
/// pixel ratio the host reports separately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerConfig {
    pub width: u32,
    pub height: u32,
    /// Show the zoom-in / zoom-out affordances.
    pub controls: bool,
    /// Disable gesture and control driven changes to the view.
    pub frozen: bool,
    pub focal_x: f64,
    pub focal_y: f64,
    pub zoom: f64,
    pub iterations: u32,
    /// Global phase offset of the colour palette, in radians.
    pub angle_offset: f64,
    pub limits: ViewLimits,
}

impl ExplorerConfig {
    /// Builds the initial view, repairing the limits and clamping out-of-range values.
    pub fn initial_view(&self) -> (ViewState, Vec<ConfigurationWarning>) {
        let (mut view, limits_warning) = ViewState::with_limits(self.limits);

        let warnings = [
            limits_warning,
            view.set_focal_point(self.focal_x, self.focal_y),
            view.set_zoom(self.zoom),
            view.set_iterations(self.iterations),
        ]
        .into_iter()
        .flatten()
        .collect();

        (view, warnings)
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            width: 300,
            height: 150,
            controls: false,
            frozen: false,
            focal_x: 0.0,
            focal_y: 0.0,
            zoom: 1.0,
            iterations: DEFAULT_ITERATIONS,
            angle_offset: 0.0,
            limits: ViewLimits::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::mandelbrot::escape_time::ITERATION_SAFETY_CAP;

    #[test]
    fn defaults_match_documented_options() {
        let config = ExplorerConfig::default();

        assert_eq!((config.width, config.height), (300, 150));
        assert!(!config.controls);
        assert!(!config.frozen);
        assert_eq!((config.focal_x, config.focal_y), (0.0, 0.0));
        assert_eq!(config.zoom, 1.0);
        assert_eq!(config.iterations, 500);
    }

    #[test]
    fn initial_view_copies_valid_options() {
        let config = ExplorerConfig {
            focal_x: -0.5,
            focal_y: 0.25,
            zoom: 4.0,
            iterations: 250,
            ..ExplorerConfig::default()
        };

        let (view, warnings) = config.initial_view();

        assert!(warnings.is_empty());
        assert_eq!((view.focal_x(), view.focal_y()), (-0.5, 0.25));
        assert_eq!(view.zoom(), 4.0);
        assert_eq!(view.iterations(), 250);
    }

    #[test]
    fn initial_view_reports_each_clamped_option() {
        let config = ExplorerConfig {
            zoom: -3.0,
            iterations: 0,
            ..ExplorerConfig::default()
        };

        let (view, warnings) = config.initial_view();

        assert_eq!(warnings.len(), 2);
        assert_eq!(view.zoom(), config.limits.min_zoom);
        assert_eq!(view.iterations(), 1);
    }

    #[test]
    fn iterations_above_escape_cap_are_clamped_with_a_warning() {
        let config = ExplorerConfig {
            iterations: 10_000,
            limits: ViewLimits {
                max_iterations: 10_000,
                ..ViewLimits::default()
            },
            ..ExplorerConfig::default()
        };

        let (view, warnings) = config.initial_view();

        assert_eq!(view.iterations(), ITERATION_SAFETY_CAP);
        assert!(matches!(
            warnings.as_slice(),
            [
                ConfigurationWarning::LimitsAdjusted { .. },
                ConfigurationWarning::IterationsClamped {
                    requested: 10_000,
                    applied: ITERATION_SAFETY_CAP
                }
            ]
        ));
    }

    #[test]
    fn inverted_and_zero_limits_still_build_a_view() {
        let config = ExplorerConfig {
            zoom: 4.0,
            limits: ViewLimits {
                min_zoom: 10.0,
                max_zoom: 1.0,
                max_iterations: 0,
            },
            ..ExplorerConfig::default()
        };

        let (view, warnings) = config.initial_view();

        assert_eq!(view.zoom(), 4.0);
        assert_eq!(view.iterations(), 1);
        assert!(matches!(warnings.first(), Some(ConfigurationWarning::LimitsAdjusted { .. })));
    }
}
