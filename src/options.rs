use crate::{Error, Result, UpdatePolicy};
use clap::{Parser, ValueEnum};

pub const MIN_WINDOW_WIDTH: u32 = 200;
pub const MIN_WINDOW_HEIGHT: u32 = 200;

/// Command line of the simulator.
#[derive(Parser, Debug, Clone)]
#[command(version, about = "Conway's Game of Life on a bounded grid")]
pub struct Options {
    /// Number of grid columns
    #[arg(long, default_value_t = 192)]
    pub columns: usize,

    /// Number of grid rows
    #[arg(long, default_value_t = 108)]
    pub rows: usize,

    /// Random picks staged alive before the first generation
    #[arg(long, default_value_t = 5000)]
    pub population: usize,

    /// Seed for the initial population (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Update ordering within a generation
    #[arg(long, value_enum, default_value_t = PolicyArg::Synchronous)]
    pub policy: PolicyArg,

    /// Frames (and generations) per second
    #[arg(long, default_value_t = 30)]
    pub fps: u32,

    #[arg(long, default_value_t = 1920)]
    pub width: u32,

    #[arg(long, default_value_t = 1080)]
    pub height: u32,

    /// Show window decorations
    #[arg(long)]
    pub decorated: bool,
}

/// Command line spelling of [`UpdatePolicy`].
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicyArg {
    Synchronous,
    Sequential,
}

impl From<PolicyArg> for UpdatePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Synchronous => Self::Synchronous,
            PolicyArg::Sequential => Self::Sequential,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    pub columns: usize,
    pub rows: usize,
    pub population: usize,
    pub seed: Option<u64>,
    pub policy: UpdatePolicy,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub decorated: bool,
}

impl SimulationConfig {
    pub fn new(columns: usize, rows: usize, population: usize) -> Result<Self> {
        if columns == 0 || rows == 0 {
            return Err(Error::InvalidDimensions { columns, rows });
        }
        Ok(Self {
            columns,
            rows,
            population,
            seed: None,
            policy: UpdatePolicy::default(),
        })
    }
}

impl WindowConfig {
    pub fn new(width: u32, height: u32, fps: u32) -> Result<Self> {
        if fps < 1 {
            return Err(Error::InvalidFrameRate(fps));
        }
        if width < MIN_WINDOW_WIDTH {
            return Err(Error::WindowTooNarrow {
                width,
                min: MIN_WINDOW_WIDTH,
            });
        }
        if height < MIN_WINDOW_HEIGHT {
            return Err(Error::WindowTooShort {
                height,
                min: MIN_WINDOW_HEIGHT,
            });
        }
        Ok(Self {
            width,
            height,
            fps,
            decorated: false,
        })
    }
}

impl Options {
    pub fn simulation(&self) -> Result<SimulationConfig> {
        let mut config = SimulationConfig::new(self.columns, self.rows, self.population)?;
        config.seed = self.seed;
        config.policy = self.policy.into();
        Ok(config)
    }

    pub fn window(&self) -> Result<WindowConfig> {
        let mut config = WindowConfig::new(self.width, self.height, self.fps)?;
        config.decorated = self.decorated;
        Ok(config)
    }
}
