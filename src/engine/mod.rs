mod cell;
mod grid;
mod rule;
mod seeder;
mod step;

#[cfg(test)]
mod tests;

pub use cell::Cell;
pub use grid::Grid;
pub use rule::next_state;
pub use seeder::{rng, seed};
pub use step::{advance, restage, UpdatePolicy};
