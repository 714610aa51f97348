use crate::{advance, restage, rng, seed, Grid, Result, SimulationConfig, UpdatePolicy};

/// Callback run after every generation with the grid and the generation number.
pub type Observer = Box<dyn FnMut(&Grid, u64)>;

/// Owns the grid and advances it once per frame.
pub struct FrameDriver {
    grid: Grid,
    policy: UpdatePolicy,
    generation: u64, // Number of completed steps.
    observers: Vec<Observer>,
}

impl FrameDriver {
    pub fn new(grid: Grid, policy: UpdatePolicy) -> Self {
        Self {
            grid,
            policy,
            generation: 0,
            observers: vec![],
        }
    }

    /// Builds a grid of the configured size and stages its random population.
    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        Ok(Self::new(Self::seeded_grid(config)?, config.policy))
    }

    pub fn seeded_grid(config: &SimulationConfig) -> Result<Grid> {
        let mut grid = Grid::new(config.columns, config.rows)?;
        seed(&mut grid, config.population, &mut rng(config.seed));
        Ok(grid)
    }

    /// Observers are called in subscription order.
    pub fn subscribe(&mut self, observer: impl FnMut(&Grid, u64) + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn step(&mut self) {
        advance(&mut self.grid, self.policy);
        self.generation += 1;
        tracing::trace!(
            generation = self.generation,
            population = self.grid.population(),
            "step"
        );
        for observer in &mut self.observers {
            observer(&self.grid, self.generation);
        }
    }

    /// Flips one cell and restages the grid, so the next step follows from the edit.
    pub fn toggle(&mut self, column: isize, row: isize) -> Result<()> {
        let cell = self.grid.cell_at_mut(column, row)?;
        cell.alive = !cell.alive;
        let alive = cell.alive;
        restage(&mut self.grid);
        tracing::debug!(column, row, alive, "toggle");
        Ok(())
    }

    /// Replaces the grid and restarts the generation count; observers stay.
    pub fn reset(&mut self, grid: Grid) {
        self.grid = grid;
        self.generation = 0;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn policy(&self) -> UpdatePolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: UpdatePolicy) {
        self.policy = policy;
    }
}
