use log::debug;

use crate::controllers::interactive::data::explorer_config::ExplorerConfig;
use crate::controllers::interactive::errors::explorer::ExplorerError;
use crate::controllers::interactive::ports::frame_clock::{FrameClock, FrameHandle};
use crate::controllers::interactive::ports::render_backend::RenderBackend;
use crate::controllers::interactive::scheduler::{FrameOutcome, RenderScheduler};
use crate::core::actions::evaluate_pixels::ports::pixel_evaluator::PixelEvaluator;
use crate::core::data::pointer_sample::PointerSample;
use crate::core::data::render_request::RenderRequest;
use crate::core::data::view_state::{ConfigurationWarning, ViewState, report};
use crate::core::data::viewport_geometry::ViewportGeometry;
use crate::core::gesture::state_machine::{GestureEffect, GestureStateMachine};
use crate::core::util::view_transform::ViewTransformError;

/// An interactive Mandelbrot view: configuration, gestures and redraw pacing.
///
/// All entry points run on the host's single event thread. Pointer events and
/// setters mutate the view immediately and request a redraw; the next frame
/// callback renders whatever the view is at that moment.
pub struct MandelbrotExplorer<E: PixelEvaluator, B: RenderBackend, C: FrameClock> {
    config: ExplorerConfig,
    view: ViewState,
    device_pixel_ratio: f64,
    gestures: GestureStateMachine,
    scheduler: RenderScheduler<B, C>,
    evaluator: E,
}

impl<E: PixelEvaluator, B: RenderBackend, C: FrameClock> MandelbrotExplorer<E, B, C> {
    /// Out-of-range configuration is clamped and logged, never rejected.
    pub fn new(config: ExplorerConfig, evaluator: E, backend: B, clock: C) -> Self {
        let (view, _warnings) = config.initial_view();

        Self {
            config,
            view,
            device_pixel_ratio: 1.0,
            gestures: GestureStateMachine::new(config.frozen),
            scheduler: RenderScheduler::new(backend, clock),
            evaluator,
        }
    }

    pub fn start(&mut self) -> Result<(), ExplorerError> {
        let geometry = self.geometry();

        if geometry.is_degenerate() {
            return Err(ExplorerError::InvalidGeometry(ViewTransformError::InvalidGeometry {
                width_px: geometry.width_px,
                height_px: geometry.height_px,
                device_pixel_ratio: geometry.device_pixel_ratio,
            }));
        }

        self.scheduler.start(&geometry)?;
        Ok(())
    }

    /// Teardown: cancels the pending frame and drops any in-progress gesture.
    pub fn stop(&mut self) {
        self.scheduler.stop();
        self.gestures.release_all();
    }

    /// Frame callback from the host clock.
    pub fn on_animation_frame(&mut self, handle: FrameHandle) -> FrameOutcome {
        let request = self.render_request();

        self.scheduler.on_frame(handle, &request, &self.evaluator)
    }

    #[must_use]
    pub fn render_request(&self) -> RenderRequest {
        RenderRequest {
            view: self.view,
            geometry: self.geometry(),
            angle_offset: self.config.angle_offset,
        }
    }

    #[must_use]
    pub fn geometry(&self) -> ViewportGeometry {
        ViewportGeometry::from_logical(self.config.width, self.config.height, self.device_pixel_ratio)
    }

    pub fn on_pointer_start(&mut self, sample: PointerSample) -> GestureEffect {
        let effect = self.gestures.on_pointer_start(sample);
        self.redraw_if_changed(effect)
    }

    pub fn on_pointer_move(&mut self, sample: PointerSample) -> GestureEffect {
        let geometry = self.geometry();
        let effect = self.gestures.on_pointer_move(sample, &mut self.view, &geometry);
        self.redraw_if_changed(effect)
    }

    pub fn on_pointer_end(&mut self, sample: PointerSample) -> GestureEffect {
        let effect = self.gestures.on_pointer_end(sample);
        self.redraw_if_changed(effect)
    }

    pub fn on_pointer_cancel(&mut self, sample: PointerSample) -> GestureEffect {
        let effect = self.gestures.on_pointer_cancel(sample);
        self.redraw_if_changed(effect)
    }

    pub fn on_pointer_leave(&mut self, sample: PointerSample) -> GestureEffect {
        let effect = self.gestures.on_pointer_leave(sample);
        self.redraw_if_changed(effect)
    }

    pub fn zoom_in(&mut self) -> GestureEffect {
        let effect = self.gestures.increase_zoom(&mut self.view);
        self.redraw_if_changed(effect)
    }

    pub fn zoom_out(&mut self) -> GestureEffect {
        let effect = self.gestures.decrease_zoom(&mut self.view);
        self.redraw_if_changed(effect)
    }

    /// Returns to the configured focal point and zoom. Ignored while frozen.
    pub fn reset_view(&mut self) -> bool {
        if self.config.frozen {
            return false;
        }

        let _ = self.view.set_focal_point(self.config.focal_x, self.config.focal_y);
        let _ = self.view.set_zoom(self.config.zoom);
        let _ = self.scheduler.request_redraw();
        true
    }

    pub fn set_size(&mut self, width: u32, height: u32) {
        if (width, height) == (self.config.width, self.config.height) {
            return;
        }

        debug!("explorer resized to {}x{}", width, height);
        self.config.width = width;
        self.config.height = height;
        let _ = self.scheduler.request_redraw();
    }

    pub fn set_device_pixel_ratio(&mut self, ratio: f64) -> Option<ConfigurationWarning> {
        if !ratio.is_finite() || ratio <= 0.0 {
            return report(ConfigurationWarning::ValueRejected {
                option: "device pixel ratio",
                requested: ratio,
            });
        }

        self.device_pixel_ratio = ratio;
        let _ = self.scheduler.request_redraw();
        None
    }

    pub fn set_frozen(&mut self, frozen: bool) {
        self.config.frozen = frozen;
        self.gestures.set_frozen(frozen);
        let _ = self.scheduler.request_redraw();
    }

    pub fn set_controls(&mut self, controls: bool) {
        self.config.controls = controls;
        let _ = self.scheduler.request_redraw();
    }

    /// Explicit configuration; applies even while frozen.
    pub fn set_focal_point(&mut self, focal_x: f64, focal_y: f64) -> Option<ConfigurationWarning> {
        let warning = self.view.set_focal_point(focal_x, focal_y);
        self.config.focal_x = self.view.focal_x();
        self.config.focal_y = self.view.focal_y();
        let _ = self.scheduler.request_redraw();
        warning
    }

    pub fn set_zoom(&mut self, zoom: f64) -> Option<ConfigurationWarning> {
        let warning = self.view.set_zoom(zoom);
        self.config.zoom = self.view.zoom();
        let _ = self.scheduler.request_redraw();
        warning
    }

    pub fn set_iterations(&mut self, iterations: u32) -> Option<ConfigurationWarning> {
        let warning = self.view.set_iterations(iterations);
        self.config.iterations = self.view.iterations();
        let _ = self.scheduler.request_redraw();
        warning
    }

    pub fn set_angle_offset(&mut self, angle_offset: f64) -> Option<ConfigurationWarning> {
        if !angle_offset.is_finite() {
            return report(ConfigurationWarning::ValueRejected {
                option: "angle offset",
                requested: angle_offset,
            });
        }

        self.config.angle_offset = angle_offset;
        let _ = self.scheduler.request_redraw();
        None
    }

    #[must_use]
    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    #[must_use]
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.scheduler.outstanding_frame()
    }

    /// Drives the grab / grabbing cursor.
    #[must_use]
    pub fn is_interacting(&self) -> bool {
        self.gestures.is_interacting()
    }

    #[must_use]
    pub fn zoom_controls_visible(&self) -> bool {
        self.config.controls
    }

    #[must_use]
    pub fn zoom_controls_enabled(&self) -> bool {
        self.config.controls && !self.config.frozen
    }

    /// False once the backend has failed; the host shows fallback content instead.
    #[must_use]
    pub fn rendering_available(&self) -> bool {
        self.scheduler.rendering_available()
    }

    #[must_use]
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        self.scheduler.backend()
    }

    pub fn backend_mut(&mut self) -> &mut B {
        self.scheduler.backend_mut()
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        self.scheduler.clock()
    }

    pub fn clock_mut(&mut self) -> &mut C {
        self.scheduler.clock_mut()
    }

    fn redraw_if_changed(&mut self, effect: GestureEffect) -> GestureEffect {
        if effect == GestureEffect::ViewChanged {
            let _ = self.scheduler.request_redraw();
        }

        effect
    }
}
