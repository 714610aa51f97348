//! Triangle geometry for live cells in normalized device coordinates.
//!
//! `x` runs from -1 at column 0 to +1 at `columns`, `y` from -1 at row 0 to
//! +1 at `rows`.

use crate::Grid;

pub const VERTICES_PER_CELL: usize = 6;

/// Two counter-clockwise triangles covering cell `(column, row)`.
pub fn cell_triangles(
    columns: usize,
    rows: usize,
    column: usize,
    row: usize,
) -> [[f32; 2]; VERTICES_PER_CELL] {
    let (w, h) = (2. / columns as f32, 2. / rows as f32);
    let (l, b) = (-1. + w * column as f32, -1. + h * row as f32);
    let (r, t) = (l + w, b + h);
    [[l, b], [r, b], [l, t], [l, t], [r, b], [r, t]]
}

/// Vertex list for every live cell of the grid, ready for a triangle draw call.
pub fn live_vertices(grid: &Grid) -> Vec<[f32; 2]> {
    let (columns, rows) = grid.dimensions();
    grid.live_cells()
        .flat_map(|cell| cell_triangles(columns, rows, cell.column(), cell.row()))
        .collect()
}
