use std::path::Path;
use std::time::Instant;

use log::info;

use crate::controllers::interactive::data::explorer_config::ExplorerConfig;
use crate::controllers::interactive::data::frame_report::FrameReport;
use crate::controllers::interactive::errors::explorer::ExplorerError;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::evaluate_pixels::ports::pixel_evaluator::PixelEvaluator;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_request::RenderRequest;
use crate::core::data::viewport_geometry::ViewportGeometry;

/// Renders a single frame of a configuration and hands it to a file presenter.
pub struct StillRenderController<P: FilePresenterPort, E: PixelEvaluator> {
    presenter: P,
    evaluator: E,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort, E: PixelEvaluator> StillRenderController<P, E> {
    pub fn new(presenter: P, evaluator: E) -> Self {
        Self {
            presenter,
            evaluator,
            buffer: None,
        }
    }

    pub fn generate(
        &mut self,
        config: &ExplorerConfig,
        device_pixel_ratio: f64,
    ) -> Result<FrameReport, ExplorerError> {
        let (view, _warnings) = config.initial_view();
        let request = RenderRequest {
            view,
            geometry: ViewportGeometry::from_logical(config.width, config.height, device_pixel_ratio),
            angle_offset: config.angle_offset,
        };

        info!(
            "rendering {}x{} at focal ({}, {}), zoom {}, {} iterations with {}",
            request.geometry.width_px,
            request.geometry.height_px,
            view.focal_x(),
            view.focal_y(),
            view.zoom(),
            view.iterations(),
            self.evaluator.display_name()
        );

        let start = Instant::now();
        let buffer = self.evaluator.evaluate(&request)?;
        let render_duration = start.elapsed();

        info!("rendered in {:?}", render_duration);

        let report = FrameReport {
            frame: 1,
            width_px: buffer.width(),
            height_px: buffer.height(),
            render_duration,
        };
        self.buffer = Some(buffer);

        Ok(report)
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    /// Writes the last generated frame. Does nothing if none was generated.
    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, &filepath)?;
            info!("saved to {}", filepath.as_ref().display());
        }

        Ok(())
    }
}
