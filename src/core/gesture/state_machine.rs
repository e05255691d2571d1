use log::trace;

use crate::core::data::pointer_sample::PointerSample;
use crate::core::data::view_state::ViewState;
use crate::core::data::viewport_geometry::ViewportGeometry;
use crate::core::gesture::pointer_set::PointerSet;

/// Factor applied by one zoom-in / zoom-out step.
pub const ZOOM_STEP: f64 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    Interacting,
}

/// What a transition did, so the caller knows whether a redraw is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEffect {
    Ignored,
    PointersChanged,
    ViewChanged,
}

/// Plane-space focal offset produced by dragging a contact by `(dx, dy)` logical pixels.
///
/// Screen Y grows downwards while plane Y grows upwards, hence the opposite signs.
#[must_use]
pub fn pan_delta(dx: f64, dy: f64, view: &ViewState, geometry: &ViewportGeometry) -> (f64, f64) {
    let zoom = view.zoom();
    let width = f64::from(geometry.width_px);
    let height = f64::from(geometry.height_px);

    (
        -(2.0 * dx / zoom / width * geometry.device_pixel_ratio),
        2.0 * dy / zoom / height,
    )
}

/// Tracks active contacts and turns their motion into view changes.
///
/// Idle while no contact is tracked, interacting otherwise. Every contact pans
/// independently; there is no pinch state. While frozen, starts, moves and zoom
/// steps are ignored but contacts can still be released.
#[derive(Debug, Clone, Default)]
pub struct GestureStateMachine {
    pointers: PointerSet,
    frozen: bool,
}

impl GestureStateMachine {
    #[must_use]
    pub fn new(frozen: bool) -> Self {
        Self {
            pointers: PointerSet::new(),
            frozen,
        }
    }

    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        if self.pointers.is_empty() {
            GesturePhase::Idle
        } else {
            GesturePhase::Interacting
        }
    }

    #[must_use]
    pub fn is_interacting(&self) -> bool {
        self.phase() == GesturePhase::Interacting
    }

    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn set_frozen(&mut self, frozen: bool) {
        self.frozen = frozen;
    }

    #[must_use]
    pub fn pointers(&self) -> &PointerSet {
        &self.pointers
    }

    pub fn on_pointer_start(&mut self, sample: PointerSample) -> GestureEffect {
        if self.frozen {
            return GestureEffect::Ignored;
        }

        self.pointers.track(sample);
        GestureEffect::PointersChanged
    }

    pub fn on_pointer_move(
        &mut self,
        sample: PointerSample,
        view: &mut ViewState,
        geometry: &ViewportGeometry,
    ) -> GestureEffect {
        if self.frozen {
            return GestureEffect::Ignored;
        }

        let Some(prior) = self.pointers.replace(sample) else {
            return GestureEffect::Ignored;
        };

        let (delta_x, delta_y) = pan_delta(sample.x - prior.x, sample.y - prior.y, view, geometry);

        if view.pan_by(delta_x, delta_y) {
            trace!(
                "pointer {:?} panned focal point to ({}, {})",
                sample.id,
                view.focal_x(),
                view.focal_y()
            );
            return GestureEffect::ViewChanged;
        }

        GestureEffect::PointersChanged
    }

    pub fn on_pointer_end(&mut self, sample: PointerSample) -> GestureEffect {
        match self.pointers.release(sample.id) {
            Some(_) => GestureEffect::PointersChanged,
            None => GestureEffect::Ignored,
        }
    }

    pub fn on_pointer_cancel(&mut self, sample: PointerSample) -> GestureEffect {
        self.on_pointer_end(sample)
    }

    pub fn on_pointer_leave(&mut self, sample: PointerSample) -> GestureEffect {
        self.on_pointer_end(sample)
    }

    pub fn increase_zoom(&self, view: &mut ViewState) -> GestureEffect {
        self.step_zoom(view, ZOOM_STEP)
    }

    pub fn decrease_zoom(&self, view: &mut ViewState) -> GestureEffect {
        self.step_zoom(view, 1.0 / ZOOM_STEP)
    }

    /// Forgets every contact, e.g. when the surface is torn down mid-gesture.
    pub fn release_all(&mut self) {
        self.pointers.clear();
    }

    fn step_zoom(&self, view: &mut ViewState, factor: f64) -> GestureEffect {
        if self.frozen {
            return GestureEffect::Ignored;
        }

        if view.scale_zoom(factor) {
            GestureEffect::ViewChanged
        } else {
            GestureEffect::Ignored
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn geometry() -> ViewportGeometry {
        ViewportGeometry::from_logical(300, 150, 1.0)
    }

    #[test]
    fn starts_idle() {
        let machine = GestureStateMachine::default();

        assert_eq!(machine.phase(), GesturePhase::Idle);
        assert!(!machine.is_interacting());
    }

    #[test]
    fn pointer_start_enters_interacting() {
        let mut machine = GestureStateMachine::default();

        let effect = machine.on_pointer_start(PointerSample::new(1, 100.0, 75.0));

        assert_eq!(effect, GestureEffect::PointersChanged);
        assert_eq!(machine.phase(), GesturePhase::Interacting);
    }

    #[test]
    fn start_then_end_leaves_view_unchanged_and_idle() {
        let mut machine = GestureStateMachine::default();
        let view = ViewState::default();
        let before = view;

        let _ = machine.on_pointer_start(PointerSample::new(1, 100.0, 75.0));
        let _ = machine.on_pointer_end(PointerSample::new(1, 100.0, 75.0));

        assert_eq!(view, before);
        assert_eq!(machine.phase(), GesturePhase::Idle);
    }

    #[test]
    fn drag_pans_focal_point() {
        let mut machine = GestureStateMachine::default();
        let mut view = ViewState::default();

        let _ = machine.on_pointer_start(PointerSample::new(1, 100.0, 75.0));
        let effect = machine.on_pointer_move(PointerSample::new(1, 110.0, 75.0), &mut view, &geometry());

        assert_eq!(effect, GestureEffect::ViewChanged);
        assert!((view.focal_x() - -(2.0 * 10.0 / 1.0 / 300.0 * 1.0)).abs() < TOLERANCE);
        assert_eq!(view.focal_y(), 0.0);
    }

    #[test]
    fn downward_drag_moves_focal_point_up() {
        let mut machine = GestureStateMachine::default();
        let mut view = ViewState::default();
        let _ = view.set_zoom(2.0);

        let _ = machine.on_pointer_start(PointerSample::new(4, 10.0, 10.0));
        let _ = machine.on_pointer_move(PointerSample::new(4, 10.0, 25.0), &mut view, &geometry());

        assert!((view.focal_y() - 2.0 * 15.0 / 2.0 / 150.0).abs() < TOLERANCE);
        assert_eq!(view.focal_x(), 0.0);
    }

    #[test]
    fn horizontal_pan_scales_with_device_pixel_ratio() {
        let mut machine = GestureStateMachine::default();
        let mut view = ViewState::default();
        let geometry = ViewportGeometry::from_logical(300, 150, 2.0);

        let _ = machine.on_pointer_start(PointerSample::new(1, 0.0, 0.0));
        let _ = machine.on_pointer_move(PointerSample::new(1, 30.0, 0.0), &mut view, &geometry);

        assert!((view.focal_x() - -(2.0 * 30.0 / 600.0 * 2.0)).abs() < TOLERANCE);
    }

    #[test]
    fn consecutive_moves_use_latest_sample() {
        let mut machine = GestureStateMachine::default();
        let mut view = ViewState::default();

        let _ = machine.on_pointer_start(PointerSample::new(1, 0.0, 0.0));
        let _ = machine.on_pointer_move(PointerSample::new(1, 15.0, 0.0), &mut view, &geometry());
        let _ = machine.on_pointer_move(PointerSample::new(1, 30.0, 0.0), &mut view, &geometry());

        assert!((view.focal_x() - -(2.0 * 30.0 / 300.0)).abs() < TOLERANCE);
    }

    #[test]
    fn zero_delta_move_keeps_focal_point() {
        let mut machine = GestureStateMachine::default();
        let mut view = ViewState::default();
        let _ = view.set_focal_point(-0.5, 0.25);

        let _ = machine.on_pointer_start(PointerSample::new(1, 42.0, 17.0));
        let effect = machine.on_pointer_move(PointerSample::new(1, 42.0, 17.0), &mut view, &geometry());

        assert_eq!(effect, GestureEffect::PointersChanged);
        assert_eq!((view.focal_x(), view.focal_y()), (-0.5, 0.25));
    }

    #[test]
    fn move_for_untracked_pointer_is_ignored() {
        let mut machine = GestureStateMachine::default();
        let mut view = ViewState::default();

        let effect = machine.on_pointer_move(PointerSample::new(9, 50.0, 50.0), &mut view, &geometry());

        assert_eq!(effect, GestureEffect::Ignored);
        assert_eq!(view, ViewState::default());
        assert!(machine.pointers().is_empty());
    }

    #[test]
    fn pointers_pan_independently() {
        let mut machine = GestureStateMachine::default();
        let mut view = ViewState::default();

        let _ = machine.on_pointer_start(PointerSample::new(1, 0.0, 0.0));
        let _ = machine.on_pointer_start(PointerSample::new(2, 200.0, 0.0));
        let _ = machine.on_pointer_move(PointerSample::new(1, 15.0, 0.0), &mut view, &geometry());
        let _ = machine.on_pointer_move(PointerSample::new(2, 215.0, 0.0), &mut view, &geometry());

        assert!((view.focal_x() - -(2.0 * 30.0 / 300.0)).abs() < TOLERANCE);
    }

    #[test]
    fn interacting_until_last_pointer_released() {
        let mut machine = GestureStateMachine::default();

        let _ = machine.on_pointer_start(PointerSample::new(1, 0.0, 0.0));
        let _ = machine.on_pointer_start(PointerSample::new(2, 0.0, 0.0));
        let _ = machine.on_pointer_end(PointerSample::new(1, 0.0, 0.0));
        assert_eq!(machine.phase(), GesturePhase::Interacting);

        let _ = machine.on_pointer_cancel(PointerSample::new(2, 0.0, 0.0));
        assert_eq!(machine.phase(), GesturePhase::Idle);
    }

    #[test]
    fn stray_pointer_end_is_ignored() {
        let mut machine = GestureStateMachine::default();

        assert_eq!(
            machine.on_pointer_leave(PointerSample::new(5, 0.0, 0.0)),
            GestureEffect::Ignored
        );
        assert_eq!(machine.phase(), GesturePhase::Idle);
    }

    #[test]
    fn zoom_steps_by_fixed_factor() {
        let machine = GestureStateMachine::default();
        let mut view = ViewState::default();

        assert_eq!(machine.increase_zoom(&mut view), GestureEffect::ViewChanged);
        assert!((view.zoom() - 1.2).abs() < TOLERANCE);

        let _ = machine.increase_zoom(&mut view);
        assert!((view.zoom() - 1.44).abs() < TOLERANCE);
    }

    #[test]
    fn zoom_in_then_out_restores_zoom() {
        let machine = GestureStateMachine::default();
        let mut view = ViewState::default();
        let _ = view.set_zoom(3.7);

        let _ = machine.increase_zoom(&mut view);
        let _ = machine.decrease_zoom(&mut view);

        assert!((view.zoom() - 3.7).abs() < TOLERANCE);
    }

    #[test]
    fn frozen_ignores_gestures_and_zoom() {
        let mut machine = GestureStateMachine::new(true);
        let mut view = ViewState::default();

        assert_eq!(
            machine.on_pointer_start(PointerSample::new(1, 0.0, 0.0)),
            GestureEffect::Ignored
        );
        assert_eq!(
            machine.on_pointer_move(PointerSample::new(1, 50.0, 50.0), &mut view, &geometry()),
            GestureEffect::Ignored
        );
        assert_eq!(machine.increase_zoom(&mut view), GestureEffect::Ignored);
        assert_eq!(machine.decrease_zoom(&mut view), GestureEffect::Ignored);
        assert_eq!(view, ViewState::default());
        assert_eq!(machine.phase(), GesturePhase::Idle);
    }

    #[test]
    fn freezing_mid_gesture_still_allows_release() {
        let mut machine = GestureStateMachine::default();
        let mut view = ViewState::default();

        let _ = machine.on_pointer_start(PointerSample::new(1, 0.0, 0.0));
        machine.set_frozen(true);
        let _ = machine.on_pointer_move(PointerSample::new(1, 80.0, 0.0), &mut view, &geometry());

        assert_eq!(view, ViewState::default());
        assert_eq!(
            machine.on_pointer_end(PointerSample::new(1, 80.0, 0.0)),
            GestureEffect::PointersChanged
        );
        assert_eq!(machine.phase(), GesturePhase::Idle);
    }

    #[test]
    fn pan_delta_signs_follow_screen_axes() {
        let (dx, dy) = pan_delta(10.0, 10.0, &ViewState::default(), &geometry());

        assert!(dx < 0.0);
        assert!(dy > 0.0);
    }
}
