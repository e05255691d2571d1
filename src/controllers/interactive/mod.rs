//! The interactive explorer: the component a host embeds.
//!
//! # Architecture
//!
//! Ports and adapters, driven from a single event thread:
//! - **Input**: pointer samples, zoom controls and setters on `MandelbrotExplorer`
//! - **Output**: the `RenderBackend` a finished frame is presented on
//! - **Pacing**: the host's `FrameClock`, through `RenderScheduler`
//! - **Core**: gesture handling and pixel evaluation from `core/`

pub mod data;
pub mod errors;
mod explorer;
#[cfg(test)]
pub(crate) mod mocks;
pub mod ports;
mod scheduler;

pub use data::explorer_config::ExplorerConfig;
pub use data::frame_report::FrameReport;
pub use errors::backend::BackendError;
pub use errors::explorer::ExplorerError;
pub use explorer::MandelbrotExplorer;
pub use ports::{FrameClock, FrameHandle, RenderBackend};
pub use scheduler::{FrameOutcome, RedrawAction, RenderScheduler, SchedulerState};
