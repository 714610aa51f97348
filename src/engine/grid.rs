use super::Cell;
use crate::{Error, Result};
use std::fmt;

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Bounded field of `columns x rows` cells.
///
/// Cells are stored column by column: `columns` runs of `rows` cells each.
/// Traversal follows the same order, column outer and row inner.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Vec<Cell>,
    columns: usize,
    rows: usize,
}

impl Grid {
    /// Creates a field filled with dead cells.
    pub fn new(columns: usize, rows: usize) -> Result<Self> {
        if columns == 0 || rows == 0 {
            return Err(Error::InvalidDimensions { columns, rows });
        }
        let cells = (0..columns)
            .flat_map(|column| (0..rows).map(move |row| Cell::dead(column, row)))
            .collect();
        Ok(Self {
            cells,
            columns,
            rows,
        })
    }

    /// [`(columns, rows)`] of the field
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.columns, self.rows)
    }

    pub fn cell_at(&self, column: isize, row: isize) -> Result<&Cell> {
        let idx = self.checked_index(column, row)?;
        Ok(&self.cells[idx])
    }

    pub fn cell_at_mut(&mut self, column: isize, row: isize) -> Result<&mut Cell> {
        let idx = self.checked_index(column, row)?;
        Ok(&mut self.cells[idx])
    }

    pub fn for_each_cell(&self, visitor: impl FnMut(&Cell)) {
        self.cells.iter().for_each(visitor);
    }

    pub fn for_each_cell_mut(&mut self, visitor: impl FnMut(&mut Cell)) {
        self.cells.iter_mut().for_each(visitor);
    }

    /// All cells in traversal order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    pub fn live_cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter().filter(|cell| cell.alive)
    }

    /// Moore neighborhood of `(column, row)`, clipped at the edges.
    pub fn neighbors(&self, column: usize, row: usize) -> impl Iterator<Item = &Cell> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dx, dy)| {
            let x = column.checked_add_signed(dx)?;
            let y = row.checked_add_signed(dy)?;
            (x < self.columns && y < self.rows).then(|| &self.cells[self.index(x, y)])
        })
    }

    pub fn live_neighbors(&self, column: usize, row: usize) -> usize {
        self.neighbors(column, row).filter(|cell| cell.alive).count()
    }

    /// Number of cells alive in the current generation.
    pub fn population(&self) -> usize {
        self.live_cells().count()
    }

    /// Kills every cell, including staged births.
    pub fn clear(&mut self) {
        self.for_each_cell_mut(|cell| cell.set_state(false));
    }

    pub(crate) fn index(&self, column: usize, row: usize) -> usize {
        column * self.rows + row
    }

    pub(crate) fn cell_by_index(&self, idx: usize) -> &Cell {
        &self.cells[idx]
    }

    pub(crate) fn cell_by_index_mut(&mut self, idx: usize) -> &mut Cell {
        &mut self.cells[idx]
    }

    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    fn checked_index(&self, column: isize, row: isize) -> Result<usize> {
        let out_of_bounds = || Error::OutOfBounds {
            column,
            row,
            columns: self.columns,
            rows: self.rows,
        };
        let x = usize::try_from(column)
            .ok()
            .filter(|&x| x < self.columns)
            .ok_or_else(out_of_bounds)?;
        let y = usize::try_from(row)
            .ok()
            .filter(|&y| y < self.rows)
            .ok_or_else(out_of_bounds)?;
        Ok(self.index(x, y))
    }
}

/// One text line per row, `#` for live cells.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.rows {
            let line = (0..self.columns)
                .map(|x| if self.cells[self.index(x, y)].alive { '#' } else { '.' })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
