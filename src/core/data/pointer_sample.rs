/// Host-assigned identifier, stable for the lifetime of one contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

/// One contact at a surface-relative position, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub id: PointerId,
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    #[must_use]
    pub fn new(id: u64, x: f64, y: f64) -> Self {
        Self {
            id: PointerId(id),
            x,
            y,
        }
    }
}
