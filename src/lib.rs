mod adapters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use crate::adapters::pixel_format::{PixelFormatError, fill_rgba_frame};
pub use crate::controllers::cli::render_still::StillRenderController;
pub use crate::controllers::interactive::{
    BackendError, ExplorerConfig, ExplorerError, FrameClock, FrameHandle, FrameOutcome,
    FrameReport, MandelbrotExplorer, RedrawAction, RenderBackend, RenderScheduler, SchedulerState,
};
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::evaluate_pixels::cpu_reference::CpuReferenceEvaluator;
pub use crate::core::actions::evaluate_pixels::parallel_rayon::ParallelEvaluator;
pub use crate::core::actions::evaluate_pixels::ports::pixel_evaluator::{EvaluatePixelsError, PixelEvaluator};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_colour::PixelColour;
pub use crate::core::data::point::Point;
pub use crate::core::data::pointer_sample::{PointerId, PointerSample};
pub use crate::core::data::render_request::RenderRequest;
pub use crate::core::data::view_limits::ViewLimits;
pub use crate::core::data::view_state::{ConfigurationWarning, ViewState};
pub use crate::core::data::viewport_geometry::ViewportGeometry;
pub use crate::core::fractals::mandelbrot::escape_time::{Escape, ITERATION_SAFETY_CAP, evaluate};
pub use crate::core::fractals::mandelbrot::palette::SinusoidalPalette;
pub use crate::core::gesture::state_machine::{GestureEffect, GesturePhase, GestureStateMachine, ZOOM_STEP};
pub use crate::core::util::view_transform::{ViewTransform, ViewTransformError, to_plane};
#[cfg(feature = "gui")]
pub use crate::input::gui::run_gui;
pub use crate::presenters::file::ppm::PpmFilePresenter;
