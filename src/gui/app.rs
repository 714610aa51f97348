use super::{Config, FpsLimiter};
use crate::{FrameDriver, SimulationConfig};
use eframe::egui::{CentralPanel, Color32, Context, Frame, Key, Margin};
use std::time::Instant;

pub struct App {
    pub(super) driver: FrameDriver,           // Owns the grid and its observers.
    pub(super) simulation: SimulationConfig,  // Parameters used when the field is reset.
    pub(super) reseed_randomly: bool,         // Ignore the configured seed on reset.
    pub(super) is_paused: bool,               // Flag indicating whether the simulation is paused.
    pub(super) do_one_step: bool,             // Do one step and pause.
    pub(super) last_update_duration: f64,     // Duration of the last step in seconds.
    pub(super) max_fps: f64,
    pub(super) live_color: Color32,
    pub(super) fps_limiter: FpsLimiter,       // Limits the frame rate to a certain value.
}

impl App {
    pub fn new(driver: FrameDriver, simulation: SimulationConfig, fps: u32) -> Self {
        let max_fps = f64::from(fps);
        Self {
            driver,
            reseed_randomly: simulation.seed.is_none(),
            simulation,
            is_paused: false,
            do_one_step: false,
            last_update_duration: 0.,
            max_fps,
            live_color: Config::LIVE_COLOR,
            fps_limiter: FpsLimiter::new(max_fps),
        }
    }

    pub fn reset_field(&mut self) {
        let mut config = self.simulation.clone();
        if self.reseed_randomly {
            config.seed = None;
        }
        match FrameDriver::seeded_grid(&config) {
            Ok(grid) => {
                tracing::info!(
                    columns = config.columns,
                    rows = config.rows,
                    population = config.population,
                    seed = ?config.seed,
                    "field reset"
                );
                self.driver.reset(grid);
            }
            Err(err) => tracing::error!(%err, "field reset failed"),
        }
    }

    pub fn reset_appearance(&mut self) {
        self.live_color = Config::LIVE_COLOR;
    }

    fn update_engine(&mut self) {
        if self.is_paused && !self.do_one_step {
            return;
        }

        let timer = Instant::now();
        self.driver.step();
        self.last_update_duration = timer.elapsed().as_secs_f64();

        self.do_one_step = false;
    }

    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|input| {
            if input.key_pressed(Key::Space) {
                self.is_paused = true;
                self.do_one_step = true;
            }
            if input.key_pressed(Key::P) {
                self.is_paused = !self.is_paused;
            }
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Config::BACKGROUND_COLOR),
            )
            .show(ctx, |ui| {
                ctx.request_repaint();

                self.handle_input(ctx);

                self.update_engine();

                self.draw(ui);
            });

        self.fps_limiter.set_max_fps(self.max_fps);
        self.fps_limiter.delay();
    }
}
