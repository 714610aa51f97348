use super::{next_state, Cell, Grid};

/// How commit and evaluation are ordered within a generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UpdatePolicy {
    /// Every cell is committed before any neighbor is counted.
    #[default]
    Synchronous,
    /// Each cell is committed and evaluated in turn, in traversal order.
    ///
    /// Neighbors already visited in this pass are seen in their new state,
    /// the rest in their old one.
    Sequential,
}

/// Performs one generation transition in place.
pub fn advance(grid: &mut Grid, policy: UpdatePolicy) {
    match policy {
        UpdatePolicy::Synchronous => {
            grid.for_each_cell_mut(Cell::commit);
            restage(grid);
        }
        UpdatePolicy::Sequential => {
            for idx in 0..grid.len() {
                grid.cell_by_index_mut(idx).commit();
                evaluate(grid, idx);
            }
        }
    }
}

/// Recomputes every staged state from the current live states.
///
/// Needed after `alive` is edited by hand, so the next `advance` commits the
/// successor of what is on the grid now.
pub fn restage(grid: &mut Grid) {
    for idx in 0..grid.len() {
        evaluate(grid, idx);
    }
}

fn evaluate(grid: &mut Grid, idx: usize) {
    let (column, row) = grid.cell_by_index(idx).position();
    let neibs = grid.live_neighbors(column, row);
    let cell = grid.cell_by_index_mut(idx);
    cell.next_alive = next_state(cell.alive, neibs);
}
