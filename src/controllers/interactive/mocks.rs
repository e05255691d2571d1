use crate::controllers::interactive::errors::backend::BackendError;
use crate::controllers::interactive::ports::frame_clock::{FrameClock, FrameHandle};
use crate::controllers::interactive::ports::render_backend::RenderBackend;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport_geometry::ViewportGeometry;

#[derive(Debug, Default)]
pub struct MockBackend {
    pub initialize_calls: u32,
    pub presented: Vec<PixelBuffer>,
    pub fail_initialize: Option<BackendError>,
    pub fail_present: Option<BackendError>,
}

impl MockBackend {
    pub fn failing_initialize() -> Self {
        Self {
            fail_initialize: Some(BackendError::BackendUnavailable {
                reason: "mock adapter missing".to_string(),
            }),
            ..Self::default()
        }
    }
}

impl RenderBackend for MockBackend {
    fn initialize(&mut self, _geometry: &ViewportGeometry) -> Result<(), BackendError> {
        self.initialize_calls += 1;

        match &self.fail_initialize {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn present(&mut self, frame: &PixelBuffer) -> Result<(), BackendError> {
        if let Some(err) = &self.fail_present {
            return Err(err.clone());
        }

        self.presented.push(frame.clone());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MockClock {
    next: u64,
    pub requested: Vec<FrameHandle>,
    pub cancelled: Vec<FrameHandle>,
}

impl FrameClock for MockClock {
    fn request_frame(&mut self) -> FrameHandle {
        self.next += 1;
        let handle = FrameHandle(self.next);
        self.requested.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.cancelled.push(handle);
    }
}
