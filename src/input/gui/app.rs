//! Main GUI application loop.

use std::error::Error;

use egui::Context;
use egui_winit::State as EguiWinitState;
use log::{debug, error, info};
use winit::{
    dpi::{LogicalSize, PhysicalPosition, PhysicalSize},
    event::{ElementState, Event, MouseButton, Touch, TouchPhase, WindowEvent},
    event_loop::EventLoop,
    window::{CursorIcon, Window, WindowBuilder},
};

use crate::controllers::interactive::{ExplorerConfig, FrameOutcome, FrameReport, MandelbrotExplorer};
use crate::core::actions::evaluate_pixels::parallel_rayon::ParallelEvaluator;
use crate::core::data::pointer_sample::PointerSample;
use crate::input::gui::frame_clock::WindowFrameClock;
use crate::presenters::pixels::backend::{Overlay, PixelsBackend};

/// Touch ids come from the platform; the mouse gets one they never use.
const MOUSE_POINTER_ID: u64 = u64::MAX;

const WINDOW_TITLE: &str = "Mandelbrot Explorer";

type WindowExplorer = MandelbrotExplorer<ParallelEvaluator, PixelsBackend, WindowFrameClock>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UiAction {
    ZoomIn,
    ZoomOut,
    Reset,
}

struct GuiApp {
    window: &'static Window,
    explorer: WindowExplorer,
    scale_factor: f64,
    /// Last cursor position in logical pixels.
    cursor: (f64, f64),
    last_report: Option<FrameReport>,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl GuiApp {
    fn new(window: &'static Window, event_loop: &EventLoop<()>, config: ExplorerConfig) -> Self {
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        let mut explorer = MandelbrotExplorer::new(
            config,
            ParallelEvaluator,
            PixelsBackend::new(window),
            WindowFrameClock::new(window),
        );
        let _ = explorer.set_device_pixel_ratio(scale_factor);

        Self {
            window,
            explorer,
            scale_factor,
            cursor: (0.0, 0.0),
            last_report: None,
            egui_ctx,
            egui_state,
        }
    }

    fn logical(&self, position: PhysicalPosition<f64>) -> (f64, f64) {
        let logical = position.to_logical::<f64>(self.scale_factor);
        (logical.x, logical.y)
    }

    fn mouse_sample(&self) -> PointerSample {
        PointerSample::new(MOUSE_POINTER_ID, self.cursor.0, self.cursor.1)
    }

    fn handle_mouse_button(&mut self, state: ElementState, button: MouseButton) {
        if button != MouseButton::Left {
            return;
        }

        let sample = self.mouse_sample();
        let _ = match state {
            ElementState::Pressed => self.explorer.on_pointer_start(sample),
            ElementState::Released => self.explorer.on_pointer_end(sample),
        };
    }

    fn handle_touch(&mut self, touch: &Touch) {
        let (x, y) = self.logical(touch.location);
        let sample = PointerSample::new(touch.id, x, y);

        let _ = match touch.phase {
            TouchPhase::Started => self.explorer.on_pointer_start(sample),
            TouchPhase::Moved => self.explorer.on_pointer_move(sample),
            TouchPhase::Ended => self.explorer.on_pointer_end(sample),
            TouchPhase::Cancelled => self.explorer.on_pointer_cancel(sample),
        };
    }

    fn resize(&mut self, width: u32, height: u32) {
        if let Err(err) = self.explorer.backend_mut().resize_surface(width, height) {
            error!("failed to resize surface: {}", err);
        }

        if width == 0 || height == 0 {
            return;
        }

        let logical = PhysicalSize::new(width, height).to_logical::<f64>(self.scale_factor);
        self.explorer
            .set_size(logical.width.round() as u32, logical.height.round() as u32);
    }

    fn update_cursor(&self) {
        let icon = if self.explorer.is_interacting() {
            CursorIcon::Grabbing
        } else {
            CursorIcon::Grab
        };

        self.window.set_cursor_icon(icon);
    }

    /// The failed surface can no longer show egui, so the title carries the notice.
    fn show_unavailable(&self) {
        self.window
            .set_title(&format!("{} (rendering unavailable)", WINDOW_TITLE));
    }

    fn update_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let visible = self.explorer.zoom_controls_visible();
        let enabled = self.explorer.zoom_controls_enabled();
        let last_report = self.last_report;
        let mut action = None;

        let output = self.egui_ctx.run(raw_input, |ctx| {
            if !visible {
                return;
            }

            egui::Area::new(egui::Id::new("zoom_controls"))
                .anchor(egui::Align2::RIGHT_BOTTOM, [-12.0, -12.0])
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        if ui.add_enabled(enabled, egui::Button::new("+")).clicked() {
                            action = Some(UiAction::ZoomIn);
                        }
                        if ui.add_enabled(enabled, egui::Button::new("-")).clicked() {
                            action = Some(UiAction::ZoomOut);
                        }
                        if ui.add_enabled(enabled, egui::Button::new("Reset")).clicked() {
                            action = Some(UiAction::Reset);
                        }
                    });

                    if let Some(report) = last_report {
                        ui.label(format!(
                            "{}x{} in {} ms",
                            report.width_px,
                            report.height_px,
                            report.render_duration.as_millis()
                        ));
                    }
                });
        });

        match action {
            Some(UiAction::ZoomIn) => {
                let _ = self.explorer.zoom_in();
            }
            Some(UiAction::ZoomOut) => {
                let _ = self.explorer.zoom_out();
            }
            Some(UiAction::Reset) => {
                let _ = self.explorer.reset_view();
            }
            None => {}
        }

        output
    }

    fn redraw(&mut self) {
        let egui_output = self.update_ui();

        self.egui_state
            .handle_platform_output(self.window, egui_output.platform_output);

        let pixels_per_point = self.egui_ctx.pixels_per_point();
        let primitives = self.egui_ctx.tessellate(egui_output.shapes, pixels_per_point);

        self.explorer.backend_mut().set_overlay(Overlay {
            primitives,
            textures_delta: egui_output.textures_delta,
            pixels_per_point,
        });

        let Some(handle) = self.explorer.clock_mut().take_pending() else {
            return;
        };

        match self.explorer.on_animation_frame(handle) {
            FrameOutcome::Presented(report) => self.last_report = Some(report),
            FrameOutcome::Failed(_) => self.show_unavailable(),
            FrameOutcome::Stale | FrameOutcome::Skipped => {}
        }
    }

    /// Returns true if the event should exit the loop.
    fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        let egui_consumed = self.egui_state.on_window_event(self.window, event).consumed;

        match event {
            WindowEvent::CloseRequested => {
                self.explorer.stop();
                return true;
            }
            WindowEvent::RedrawRequested => self.redraw(),
            WindowEvent::Resized(size) => self.resize(size.width, size.height),
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.scale_factor = *scale_factor;
                self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                let _ = self.explorer.set_device_pixel_ratio(*scale_factor);

                let size = self.window.inner_size();
                self.resize(size.width, size.height);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = self.logical(*position);
                let _ = self.explorer.on_pointer_move(self.mouse_sample());
            }
            WindowEvent::CursorLeft { .. } => {
                let _ = self.explorer.on_pointer_leave(self.mouse_sample());
            }
            WindowEvent::MouseInput { state, button, .. } if !egui_consumed => {
                self.handle_mouse_button(*state, *button);
            }
            WindowEvent::MouseInput {
                state: ElementState::Released,
                ..
            } => {
                // Finish a drag even when it ends over the controls.
                let _ = self.explorer.on_pointer_end(self.mouse_sample());
            }
            WindowEvent::Touch(touch) if !egui_consumed || touch.phase != TouchPhase::Started => {
                self.handle_touch(touch);
            }
            _ => {}
        }

        self.update_cursor();
        false
    }
}

/// Runs the explorer in a window until it is closed.
pub fn run_gui(config: ExplorerConfig) -> Result<(), Box<dyn Error>> {
    let event_loop = EventLoop::new()?;

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(config.width, config.height))
            .with_min_inner_size(LogicalSize::new(100.0, 50.0))
            .build(&event_loop)?,
    ));

    let mut app = GuiApp::new(window, &event_loop, config);

    let size = window.inner_size();
    app.resize(size.width, size.height);

    if let Err(err) = app.explorer.start() {
        debug!("explorer did not start: {}", err);

        if !app.explorer.rendering_available() {
            app.show_unavailable();
        }
    }

    info!("explorer window open");

    event_loop.run(move |event, elwt| {
        if let Event::WindowEvent { event, window_id } = &event {
            if *window_id == window.id() && app.handle_window_event(event) {
                elwt.exit();
            }
        }
    })?;

    Ok(())
}
