/// Integer pixel position on the drawing surface, origin top-left.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// The pixel's sample position, its centre.
    #[must_use]
    pub fn centre(&self) -> (f64, f64) {
        (f64::from(self.x) + 0.5, f64::from(self.y) + 0.5)
    }
}
