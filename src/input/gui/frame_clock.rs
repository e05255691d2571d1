use crate::controllers::interactive::ports::frame_clock::{FrameClock, FrameHandle};
use winit::window::Window;

/// Paces frames on winit's `RedrawRequested`.
///
/// Requesting a frame asks the window for a redraw; the event loop collects the
/// pending handle when the redraw arrives.
pub struct WindowFrameClock {
    window: &'static Window,
    next: u64,
    pending: Option<FrameHandle>,
}

impl WindowFrameClock {
    #[must_use]
    pub fn new(window: &'static Window) -> Self {
        Self {
            window,
            next: 0,
            pending: None,
        }
    }

    pub fn take_pending(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }
}

impl FrameClock for WindowFrameClock {
    fn request_frame(&mut self) -> FrameHandle {
        self.next += 1;
        let handle = FrameHandle(self.next);

        self.pending = Some(handle);
        self.window.request_redraw();

        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }
}
