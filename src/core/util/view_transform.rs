use crate::core::data::complex::Complex;
use crate::core::data::view_state::ViewState;
use crate::core::data::viewport_geometry::ViewportGeometry;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewTransformError {
    InvalidGeometry {
        width_px: u32,
        height_px: u32,
        device_pixel_ratio: f64,
    },
}

impl fmt::Display for ViewTransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGeometry {
                width_px,
                height_px,
                device_pixel_ratio,
            } => {
                write!(
                    f,
                    "viewport must have positive dimensions and pixel ratio, got {}x{} at ratio {}",
                    width_px, height_px, device_pixel_ratio
                )
            }
        }
    }
}

impl Error for ViewTransformError {}

/// Affine map from surface pixels to the complex plane.
///
/// Pixels are first normalized to device coordinates in `[-1, 1]` on both axes
/// (centred, Y up), then multiplied by the 3×3 matrix whose columns are
/// `(aspect/zoom, 0, 0)`, `(0, 1/zoom, 0)` and `(focal_x, focal_y, 1)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewTransform {
    columns: [[f64; 3]; 3],
    width: f64,
    height: f64,
}

impl ViewTransform {
    pub fn new(geometry: &ViewportGeometry, view: &ViewState) -> Result<Self, ViewTransformError> {
        if geometry.is_degenerate() {
            return Err(ViewTransformError::InvalidGeometry {
                width_px: geometry.width_px,
                height_px: geometry.height_px,
                device_pixel_ratio: geometry.device_pixel_ratio,
            });
        }

        let zoom = view.zoom();

        Ok(Self {
            columns: [
                [geometry.aspect() / zoom, 0.0, 0.0],
                [0.0, 1.0 / zoom, 0.0],
                [view.focal_x(), view.focal_y(), 1.0],
            ],
            width: f64::from(geometry.width_px),
            height: f64::from(geometry.height_px),
        })
    }

    #[must_use]
    pub fn matrix(&self) -> [[f64; 3]; 3] {
        self.columns
    }

    /// Plane coordinate of a (sub)pixel position, origin top-left.
    #[must_use]
    pub fn to_plane(&self, px: f64, py: f64) -> Complex {
        let u = px / self.width * 2.0 - 1.0;
        let v = 1.0 - py / self.height * 2.0;
        let [c0, c1, c2] = self.columns;

        Complex {
            real: c0[0] * u + c1[0] * v + c2[0],
            imag: c0[1] * u + c1[1] * v + c2[1],
        }
    }

    /// Inverse of [`ViewTransform::to_plane`].
    #[must_use]
    pub fn to_pixel(&self, point: Complex) -> (f64, f64) {
        let [c0, c1, c2] = self.columns;
        let u = (point.real - c2[0]) / c0[0];
        let v = (point.imag - c2[1]) / c1[1];

        ((u + 1.0) / 2.0 * self.width, (1.0 - v) / 2.0 * self.height)
    }
}

/// One-shot form of [`ViewTransform::to_plane`].
pub fn to_plane(
    px: f64,
    py: f64,
    geometry: &ViewportGeometry,
    view: &ViewState,
) -> Result<Complex, ViewTransformError> {
    Ok(ViewTransform::new(geometry, view)?.to_plane(px, py))
}
