use mandelbrot_explorer::{ExplorerConfig, ParallelEvaluator, PpmFilePresenter, StillRenderController};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = ExplorerConfig::default();
    let mut controller = StillRenderController::new(PpmFilePresenter::new(), ParallelEvaluator);

    let report = controller.generate(&config, 1.0)?;
    controller.write("output/mandelbrot.ppm")?;

    println!(
        "Rendered {}x{} in {:?}, saved to output/mandelbrot.ppm",
        report.width_px, report.height_px, report.render_duration
    );

    Ok(())
}
