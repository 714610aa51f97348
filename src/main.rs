#![warn(clippy::all)]

use clap::Parser;
use gogol::{App, Config, FrameDriver, Grid, Options};
use tracing_subscriber::EnvFilter;

fn log_checkpoint(grid: &Grid, generation: u64) {
    if generation % 1000 == 0 {
        tracing::debug!(generation, population = grid.population(), "checkpoint");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    use eframe::egui::{vec2, ViewportBuilder};

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = Options::parse();
    let simulation = options.simulation()?;
    let window = options.window()?;
    tracing::info!(
        columns = simulation.columns,
        rows = simulation.rows,
        population = simulation.population,
        seed = ?simulation.seed,
        policy = ?simulation.policy,
        fps = window.fps,
        "starting"
    );

    let native_options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(Config::TITLE)
            .with_inner_size(vec2(window.width as f32, window.height as f32))
            .with_min_inner_size(vec2(
                gogol::MIN_WINDOW_WIDTH as f32,
                gogol::MIN_WINDOW_HEIGHT as f32,
            ))
            .with_decorations(window.decorated)
            .with_resizable(false)
            .with_maximized(true),
        ..Default::default()
    };
    eframe::run_native(
        Config::TITLE,
        native_options,
        Box::new(move |_cc| {
            let mut driver = FrameDriver::from_config(&simulation)?;
            driver.subscribe(log_checkpoint);
            Ok(Box::new(App::new(driver, simulation, window.fps)))
        }),
    )?;
    Ok(())
}
