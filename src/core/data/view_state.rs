use std::fmt;

use log::warn;

use crate::core::data::view_limits::ViewLimits;

pub const DEFAULT_ITERATIONS: u32 = 500;

/// Reported when an externally supplied value was out of range and got clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigurationWarning {
    ZoomClamped { requested: f64, applied: f64 },
    IterationsClamped { requested: u32, applied: u32 },
    FocalReset { requested_x: f64, requested_y: f64 },
    ValueRejected { option: &'static str, requested: f64 },
    LimitsAdjusted { requested: ViewLimits, applied: ViewLimits },
}

impl fmt::Display for ConfigurationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZoomClamped { requested, applied } => {
                write!(f, "zoom {} is out of range, using {}", requested, applied)
            }
            Self::IterationsClamped { requested, applied } => {
                write!(f, "iterations {} is out of range, using {}", requested, applied)
            }
            Self::FocalReset {
                requested_x,
                requested_y,
            } => {
                write!(
                    f,
                    "focal point ({}, {}) is not finite, keeping the current focal point",
                    requested_x, requested_y
                )
            }
            Self::ValueRejected { option, requested } => {
                write!(f, "{} {} is not valid, keeping the current value", option, requested)
            }
            Self::LimitsAdjusted { requested, applied } => {
                write!(
                    f,
                    "limits zoom {}..{} with {} iterations are not usable, using zoom {}..{} with {} iterations",
                    requested.min_zoom,
                    requested.max_zoom,
                    requested.max_iterations,
                    applied.min_zoom,
                    applied.max_zoom,
                    applied.max_iterations
                )
            }
        }
    }
}

/// The part of the complex plane on display and the iteration budget used to draw it.
///
/// Only the gesture state machine and explicit configuration mutate this; the
/// renderer reads a copy taken at the start of each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    focal_x: f64,
    focal_y: f64,
    zoom: f64,
    iterations: u32,
    limits: ViewLimits,
}

impl ViewState {
    /// Starts at the origin with zoom 1. Unusable limits are repaired and logged.
    #[must_use]
    pub fn new(limits: ViewLimits) -> Self {
        Self::with_limits(limits).0
    }

    /// Like [`ViewState::new`], also returning the warning if `limits` needed repair.
    #[must_use]
    pub fn with_limits(limits: ViewLimits) -> (Self, Option<ConfigurationWarning>) {
        let (limits, warning) = limits.sanitized();
        let view = Self {
            focal_x: 0.0,
            focal_y: 0.0,
            zoom: limits.clamp_zoom(1.0),
            iterations: limits.clamp_iterations(DEFAULT_ITERATIONS),
            limits,
        };

        (view, warning.and_then(report))
    }

    #[must_use]
    pub fn focal_x(&self) -> f64 {
        self.focal_x
    }

    #[must_use]
    pub fn focal_y(&self) -> f64 {
        self.focal_y
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    #[must_use]
    pub fn limits(&self) -> ViewLimits {
        self.limits
    }

    pub fn set_focal_point(&mut self, focal_x: f64, focal_y: f64) -> Option<ConfigurationWarning> {
        if !focal_x.is_finite() || !focal_y.is_finite() {
            return report(ConfigurationWarning::FocalReset {
                requested_x: focal_x,
                requested_y: focal_y,
            });
        }

        self.focal_x = focal_x;
        self.focal_y = focal_y;
        None
    }

    pub fn set_zoom(&mut self, zoom: f64) -> Option<ConfigurationWarning> {
        let applied = self.limits.clamp_zoom(zoom);
        self.zoom = applied;

        if applied != zoom {
            return report(ConfigurationWarning::ZoomClamped {
                requested: zoom,
                applied,
            });
        }

        None
    }

    pub fn set_iterations(&mut self, iterations: u32) -> Option<ConfigurationWarning> {
        let applied = self.limits.clamp_iterations(iterations);
        self.iterations = applied;

        if applied != iterations {
            return report(ConfigurationWarning::IterationsClamped {
                requested: iterations,
                applied,
            });
        }

        None
    }

    /// Moves the focal point by a plane-space offset. Returns whether it moved.
    pub(crate) fn pan_by(&mut self, delta_x: f64, delta_y: f64) -> bool {
        let focal_x = self.focal_x + delta_x;
        let focal_y = self.focal_y + delta_y;

        if !focal_x.is_finite() || !focal_y.is_finite() {
            return false;
        }

        let moved = focal_x != self.focal_x || focal_y != self.focal_y;
        self.focal_x = focal_x;
        self.focal_y = focal_y;
        moved
    }

    /// Multiplies zoom by `factor`, held inside the limits. Returns whether it changed.
    pub(crate) fn scale_zoom(&mut self, factor: f64) -> bool {
        let zoom = self.limits.clamp_zoom(self.zoom * factor);
        let changed = zoom != self.zoom;
        self.zoom = zoom;
        changed
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(ViewLimits::default())
    }
}

pub(crate) fn report(warning: ConfigurationWarning) -> Option<ConfigurationWarning> {
    warn!("{}", warning);
    Some(warning)
}
