use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Paces the frame loop and keeps a smoothed frame time.
pub struct FpsLimiter {
    target_frametime: Duration,
    frame_timer: Instant,
    frametime_smoothed: f64,
}

impl FpsLimiter {
    pub fn new(max_fps: f64) -> Self {
        let mut limiter = Self {
            target_frametime: Duration::ZERO,
            frame_timer: Instant::now(),
            frametime_smoothed: 0.,
        };
        limiter.set_max_fps(max_fps);
        limiter
    }

    pub fn fps(&self) -> f64 {
        if self.frametime_smoothed > 0. {
            1. / self.frametime_smoothed
        } else {
            0.
        }
    }

    /// A non-positive limit disables the delay.
    pub fn set_max_fps(&mut self, max_fps: f64) {
        self.target_frametime = Duration::try_from_secs_f64(1. / max_fps).unwrap_or(Duration::ZERO);
    }

    /// Sleeps for what is left of the current frame, then starts the next one.
    pub fn delay(&mut self) {
        let before_wait = self.frame_timer.elapsed();

        if self.target_frametime > before_wait {
            sleep(self.target_frametime - before_wait);
        }

        let frametime = self.frame_timer.elapsed().as_secs_f64();
        self.frametime_smoothed += (frametime - self.frametime_smoothed) * 0.1;

        self.frame_timer = Instant::now();
    }
}
