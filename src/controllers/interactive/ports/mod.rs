//! Interfaces between the explorer and its host.
//!
//! The host supplies a surface to present frames on and a per-frame timing
//! signal; the explorer never reaches for either directly.

pub mod frame_clock;
pub mod render_backend;

pub use frame_clock::{FrameClock, FrameHandle};
pub use render_backend::RenderBackend;
