/// Token for one requested display frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// The host's "next frame is ready" signal.
///
/// `request_frame` asks for one callback; the host later delivers the returned
/// handle back to the scheduler. A cancelled handle must never be delivered.
pub trait FrameClock {
    fn request_frame(&mut self) -> FrameHandle;

    fn cancel_frame(&mut self, handle: FrameHandle);
}
