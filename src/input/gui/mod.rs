//! Window host for the explorer.
//!
//! winit supplies the window, mouse and touch input and the redraw signal,
//! `pixels` the surface frames are presented on, and egui the zoom controls.

mod app;
mod frame_clock;

pub use app::run_gui;
