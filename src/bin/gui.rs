use mandelbrot_explorer::ExplorerConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = ExplorerConfig {
        width: 800,
        height: 600,
        controls: true,
        ..ExplorerConfig::default()
    };

    mandelbrot_explorer::run_gui(config)
}
