mod driver;
mod engine;
mod error;
mod gui;
pub mod mesh;
mod options;
mod utils;

pub use driver::{FrameDriver, Observer};
pub use engine::{advance, next_state, restage, rng, seed, Cell, Grid, UpdatePolicy};
pub use error::{Error, Result};
pub use gui::{App, Config};
pub use options::{Options, PolicyArg, SimulationConfig, WindowConfig, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
pub use utils::NiceInt;
