/// Size of the drawing surface, supplied by the host each frame.
///
/// `width_px`/`height_px` are surface (device) pixels, i.e. the configured
/// logical size already scaled by `device_pixel_ratio`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportGeometry {
    pub width_px: u32,
    pub height_px: u32,
    pub device_pixel_ratio: f64,
}

impl ViewportGeometry {
    /// Geometry for a surface of `width`×`height` logical pixels.
    #[must_use]
    pub fn from_logical(width: u32, height: u32, device_pixel_ratio: f64) -> Self {
        Self {
            width_px: scale(width, device_pixel_ratio),
            height_px: scale(height, device_pixel_ratio),
            device_pixel_ratio,
        }
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width_px == 0
            || self.height_px == 0
            || !self.device_pixel_ratio.is_finite()
            || self.device_pixel_ratio <= 0.0
    }

    #[must_use]
    pub fn aspect(&self) -> f64 {
        f64::from(self.width_px) / f64::from(self.height_px)
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width_px as usize * self.height_px as usize
    }
}

fn scale(logical: u32, device_pixel_ratio: f64) -> u32 {
    if !device_pixel_ratio.is_finite() || device_pixel_ratio <= 0.0 {
        return logical;
    }

    (f64::from(logical) * device_pixel_ratio).round() as u32
}

#[cfg(test)]
mod tests {
    use super::ViewportGeometry;

    #[test]
    fn from_logical_scales_by_device_pixel_ratio() {
        let geometry = ViewportGeometry::from_logical(300, 150, 2.0);

        assert_eq!(geometry.width_px, 600);
        assert_eq!(geometry.height_px, 300);
        assert_eq!(geometry.device_pixel_ratio, 2.0);
    }

    #[test]
    fn fractional_ratio_rounds_to_whole_pixels() {
        let geometry = ViewportGeometry::from_logical(301, 150, 1.5);

        assert_eq!(geometry.width_px, 452);
        assert_eq!(geometry.height_px, 225);
    }

    #[test]
    fn zero_height_is_degenerate() {
        assert!(ViewportGeometry::from_logical(300, 0, 1.0).is_degenerate());
        assert!(ViewportGeometry::from_logical(0, 150, 1.0).is_degenerate());
        assert!(!ViewportGeometry::from_logical(300, 150, 1.0).is_degenerate());
    }

    #[test]
    fn invalid_ratio_is_degenerate() {
        let geometry = ViewportGeometry {
            width_px: 300,
            height_px: 150,
            device_pixel_ratio: 0.0,
        };

        assert!(geometry.is_degenerate());
    }

    #[test]
    fn aspect_is_width_over_height() {
        assert_eq!(ViewportGeometry::from_logical(300, 150, 1.0).aspect(), 2.0);
    }
}
