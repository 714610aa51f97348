/// A single grid position with its committed and staged state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub alive: bool,      // State of the current generation.
    pub next_alive: bool, // State staged for the following generation.
    column: usize,
    row: usize,
}

impl Cell {
    pub(crate) const fn dead(column: usize, row: usize) -> Self {
        Self {
            alive: false,
            next_alive: false,
            column,
            row,
        }
    }

    pub const fn column(&self) -> usize {
        self.column
    }

    pub const fn row(&self) -> usize {
        self.row
    }

    pub const fn position(&self) -> (usize, usize) {
        (self.column, self.row)
    }

    /// Promotes the staged state to the current one.
    pub fn commit(&mut self) {
        self.alive = self.next_alive;
    }

    /// Overwrites both fields, leaving nothing pending.
    pub fn set_state(&mut self, alive: bool) {
        self.alive = alive;
        self.next_alive = alive;
    }

    pub const fn has_pending_change(&self) -> bool {
        self.alive != self.next_alive
    }
}
