use crate::core::data::point::Point;

/// Per-pixel computation, pure in its inputs so grids can be split freely across threads.
pub trait FractalAlgorithm {
    type Success;

    fn compute(&self, pixel: Point) -> Self::Success;
}
