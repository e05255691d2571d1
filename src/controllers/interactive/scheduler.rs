use std::time::Instant;

use log::{debug, error, trace, warn};

use crate::controllers::interactive::data::frame_report::FrameReport;
use crate::controllers::interactive::errors::backend::BackendError;
use crate::controllers::interactive::ports::frame_clock::{FrameClock, FrameHandle};
use crate::controllers::interactive::ports::render_backend::RenderBackend;
use crate::core::actions::evaluate_pixels::ports::pixel_evaluator::PixelEvaluator;
use crate::core::data::render_request::RenderRequest;
use crate::core::data::viewport_geometry::ViewportGeometry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Stopped,
    Running,
    /// The backend could not be initialized or stopped presenting. Terminal.
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedrawAction {
    Requested { handle: FrameHandle },
    Coalesced,
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    Presented(FrameReport),
    /// The handle was cancelled or superseded; nothing was drawn.
    Stale,
    /// The frame could not be computed from the current snapshot.
    Skipped,
    Failed(BackendError),
}

/// Keeps at most one frame outstanding with the host's frame clock.
///
/// Any number of redraw requests between two frames collapse into the single
/// outstanding frame, which renders whatever snapshot the caller passes in when
/// it fires. Every presented frame requests the next one, so a running
/// scheduler redraws on every display refresh.
pub struct RenderScheduler<B: RenderBackend, C: FrameClock> {
    backend: B,
    clock: C,
    state: SchedulerState,
    initialized: bool,
    outstanding: Option<FrameHandle>,
    failure: Option<BackendError>,
    frames_presented: u64,
}

impl<B: RenderBackend, C: FrameClock> RenderScheduler<B, C> {
    #[must_use]
    pub fn new(backend: B, clock: C) -> Self {
        Self {
            backend,
            clock,
            state: SchedulerState::Stopped,
            initialized: false,
            outstanding: None,
            failure: None,
            frames_presented: 0,
        }
    }

    /// Initializes the backend on first start and requests the first frame.
    ///
    /// A failed scheduler stays failed: the first error is returned again
    /// without retrying or logging a second time.
    pub fn start(&mut self, geometry: &ViewportGeometry) -> Result<(), BackendError> {
        match self.state {
            SchedulerState::Running => return Ok(()),
            SchedulerState::Failed => {
                return match &self.failure {
                    Some(err) => Err(err.clone()),
                    None => Ok(()),
                };
            }
            SchedulerState::Stopped => {}
        }

        if !self.initialized {
            if let Err(err) = self.backend.initialize(geometry) {
                self.fail(err.clone());
                return Err(err);
            }

            self.initialized = true;
        }

        debug!(
            "render scheduler started at {}x{}",
            geometry.width_px, geometry.height_px
        );

        self.state = SchedulerState::Running;
        let _ = self.request_redraw();

        Ok(())
    }

    /// Cancels the outstanding frame. Later requests are ignored until `start`.
    pub fn stop(&mut self) {
        if let Some(handle) = self.outstanding.take() {
            self.clock.cancel_frame(handle);
        }

        if self.state == SchedulerState::Running {
            debug!("render scheduler stopped");
            self.state = SchedulerState::Stopped;
        }
    }

    pub fn request_redraw(&mut self) -> RedrawAction {
        if self.state != SchedulerState::Running {
            return RedrawAction::Ignored;
        }

        if self.outstanding.is_some() {
            return RedrawAction::Coalesced;
        }

        let handle = self.clock.request_frame();
        self.outstanding = Some(handle);

        RedrawAction::Requested { handle }
    }

    /// Renders and presents `request` if `handle` is the outstanding frame.
    pub fn on_frame<E: PixelEvaluator>(
        &mut self,
        handle: FrameHandle,
        request: &RenderRequest,
        evaluator: &E,
    ) -> FrameOutcome {
        if self.state != SchedulerState::Running || self.outstanding != Some(handle) {
            trace!("ignoring stale frame {:?}", handle);
            return FrameOutcome::Stale;
        }

        self.outstanding = None;

        let start = Instant::now();
        let frame = match evaluator.evaluate(request) {
            Ok(frame) => frame,
            Err(err) => {
                // Waits for the next explicit redraw, e.g. after a resize.
                warn!("skipping frame: {}", err);
                return FrameOutcome::Skipped;
            }
        };
        let render_duration = start.elapsed();

        if let Err(err) = self.backend.present(&frame) {
            self.fail(err.clone());
            return FrameOutcome::Failed(err);
        }

        self.frames_presented += 1;
        let report = FrameReport {
            frame: self.frames_presented,
            width_px: frame.width(),
            height_px: frame.height(),
            render_duration,
        };

        trace!(
            "frame {} rendered by {} in {:?}",
            report.frame,
            evaluator.display_name(),
            render_duration
        );

        let _ = self.request_redraw();

        FrameOutcome::Presented(report)
    }

    #[must_use]
    pub fn state(&self) -> SchedulerState {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == SchedulerState::Running
    }

    #[must_use]
    pub fn rendering_available(&self) -> bool {
        self.state != SchedulerState::Failed
    }

    #[must_use]
    pub fn outstanding_frame(&self) -> Option<FrameHandle> {
        self.outstanding
    }

    #[must_use]
    pub fn failure(&self) -> Option<&BackendError> {
        self.failure.as_ref()
    }

    #[must_use]
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    fn fail(&mut self, err: BackendError) {
        error!("rendering disabled: {}", err);

        if let Some(handle) = self.outstanding.take() {
            self.clock.cancel_frame(handle);
        }

        self.state = SchedulerState::Failed;
        self.failure = Some(err);
    }
}
