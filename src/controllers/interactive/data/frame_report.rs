use std::time::Duration;

/// Metadata for one presented frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    /// 1-based count of frames presented since the scheduler was created.
    pub frame: u64,
    pub width_px: u32,
    pub height_px: u32,
    pub render_duration: Duration,
}
