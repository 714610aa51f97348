use super::*;
use crate::Error;

const SEED: u64 = 42;

const VERTICAL_BAR: [(isize, isize); 3] = [(2, 1), (2, 2), (2, 3)];
const HORIZONTAL_BAR: [(isize, isize); 3] = [(1, 2), (2, 2), (3, 2)];

fn stage(grid: &mut Grid, cells: &[(isize, isize)]) {
    for &(x, y) in cells {
        grid.cell_at_mut(x, y).unwrap().next_alive = true;
    }
}

fn live(grid: &Grid) -> Vec<(isize, isize)> {
    let mut v = grid
        .live_cells()
        .map(|cell| (cell.column() as isize, cell.row() as isize))
        .collect::<Vec<_>>();
    v.sort();
    v
}

fn staged(grid: &Grid) -> Vec<(usize, usize)> {
    grid.cells()
        .filter(|cell| cell.next_alive)
        .map(Cell::position)
        .collect()
}

fn sorted(cells: &[(isize, isize)]) -> Vec<(isize, isize)> {
    let mut v = cells.to_vec();
    v.sort();
    v
}

#[test]
fn test_rule_exhaustive() {
    for n in 0..=8 {
        assert_eq!(next_state(true, n), n == 2 || n == 3, "alive, n={}", n);
        assert_eq!(next_state(false, n), n == 3, "dead, n={}", n);
    }
}

#[test]
fn test_new_grid_is_dead() {
    let grid = Grid::new(7, 3).unwrap();
    grid.for_each_cell(|cell| assert!(!cell.alive && !cell.next_alive));
    assert_eq!(grid.population(), 0);
}

#[test]
fn test_dimensions_non_square() {
    for (w, h) in [(7, 3), (3, 7), (1, 9), (9, 1)] {
        let grid = Grid::new(w, h).unwrap();
        assert_eq!(grid.dimensions(), (w, h));
        assert_eq!(grid.cells().count(), w * h);
        let last = grid.cell_at(w as isize - 1, h as isize - 1).unwrap();
        assert_eq!(last.position(), (w - 1, h - 1));
    }
}

#[test]
fn test_invalid_dimensions() {
    assert_eq!(
        Grid::new(0, 5).unwrap_err(),
        Error::InvalidDimensions { columns: 0, rows: 5 }
    );
    assert_eq!(
        Grid::new(5, 0).unwrap_err(),
        Error::InvalidDimensions { columns: 5, rows: 0 }
    );
}

#[test]
fn test_out_of_bounds() {
    let mut grid = Grid::new(4, 6).unwrap();
    for (x, y) in [(-1, 0), (4, 0), (0, -1), (0, 6), (isize::MIN, isize::MAX)] {
        assert!(
            matches!(grid.cell_at(x, y), Err(Error::OutOfBounds { .. })),
            "({}, {})",
            x,
            y
        );
        assert!(grid.cell_at_mut(x, y).is_err());
    }
    assert!(grid.cell_at(3, 5).is_ok());
}

#[test]
fn test_traversal_is_column_major() {
    let grid = Grid::new(3, 2).unwrap();
    let mut order = vec![];
    grid.for_each_cell(|cell| order.push(cell.position()));
    assert_eq!(order, [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]);
}

#[test]
fn test_neighbors_clipped_at_edges() {
    let mut grid = Grid::new(4, 5).unwrap();
    grid.for_each_cell_mut(|cell| cell.set_state(true));

    assert_eq!(grid.live_neighbors(0, 0), 3);
    assert_eq!(grid.live_neighbors(3, 4), 3);
    assert_eq!(grid.live_neighbors(0, 2), 5);
    assert_eq!(grid.live_neighbors(2, 4), 5);
    assert_eq!(grid.live_neighbors(1, 1), 8);
    assert_eq!(grid.neighbors(0, 0).count(), 3);

    let single = Grid::new(1, 1).unwrap();
    assert_eq!(single.neighbors(0, 0).count(), 0);
}

#[test]
fn test_neighbors_exclude_self() {
    let mut grid = Grid::new(3, 3).unwrap();
    grid.cell_at_mut(1, 1).unwrap().set_state(true);
    assert_eq!(grid.live_neighbors(1, 1), 0);
    assert_eq!(grid.live_neighbors(0, 0), 1);
}

#[test]
fn test_dead_grid_stays_dead() {
    for policy in [UpdatePolicy::Synchronous, UpdatePolicy::Sequential] {
        let mut grid = Grid::new(16, 9).unwrap();
        for _ in 0..10 {
            advance(&mut grid, policy);
            assert_eq!(grid.population(), 0);
            assert!(staged(&grid).is_empty());
        }
    }
}

#[test]
fn test_blinker_period_two() {
    let mut grid = Grid::new(5, 5).unwrap();
    stage(&mut grid, &VERTICAL_BAR);

    advance(&mut grid, UpdatePolicy::Synchronous);
    assert_eq!(live(&grid), sorted(&VERTICAL_BAR), "\n{}", grid);

    advance(&mut grid, UpdatePolicy::Synchronous);
    assert_eq!(live(&grid), sorted(&HORIZONTAL_BAR), "\n{}", grid);

    advance(&mut grid, UpdatePolicy::Synchronous);
    assert_eq!(live(&grid), sorted(&VERTICAL_BAR), "\n{}", grid);
}

#[test]
fn test_sequential_sees_mixed_generations() {
    let mut grid = Grid::new(5, 5).unwrap();
    stage(&mut grid, &VERTICAL_BAR);

    advance(&mut grid, UpdatePolicy::Sequential);
    assert_eq!(live(&grid), sorted(&VERTICAL_BAR));
    // Column 2 is counted before column 3 is committed, so only (3, 2)
    // sees all three bar cells.
    assert_eq!(staged(&grid), [(3, 2)]);
}

#[test]
fn test_policies_diverge_on_blinker() {
    let mut sync = Grid::new(5, 5).unwrap();
    let mut seq = Grid::new(5, 5).unwrap();
    stage(&mut sync, &VERTICAL_BAR);
    stage(&mut seq, &VERTICAL_BAR);

    for _ in 0..2 {
        advance(&mut sync, UpdatePolicy::Synchronous);
        advance(&mut seq, UpdatePolicy::Sequential);
    }
    assert_ne!(live(&sync), live(&seq));
}

#[test]
fn test_policies_agree_on_settled_block() {
    const BLOCK: [(isize, isize); 4] = [(1, 1), (1, 2), (2, 1), (2, 2)];

    for policy in [UpdatePolicy::Synchronous, UpdatePolicy::Sequential] {
        let mut grid = Grid::new(4, 4).unwrap();
        for &(x, y) in &BLOCK {
            grid.cell_at_mut(x, y).unwrap().set_state(true);
        }
        for _ in 0..4 {
            advance(&mut grid, policy);
            assert_eq!(live(&grid), sorted(&BLOCK), "{:?}\n{}", policy, grid);
        }
    }
}

#[test]
fn test_restage_after_edit() {
    let mut grid = Grid::new(5, 5).unwrap();
    for &(x, y) in &VERTICAL_BAR {
        grid.cell_at_mut(x, y).unwrap().set_state(true);
    }
    // `set_state` staged the bar itself, not its successor.
    assert_eq!(staged(&grid), [(2, 1), (2, 2), (2, 3)]);

    restage(&mut grid);
    assert_eq!(live(&grid), sorted(&VERTICAL_BAR));
    assert_eq!(staged(&grid), [(1, 2), (2, 2), (3, 2)]);
}

#[test]
fn test_seed_stages_without_committing() {
    let mut grid = Grid::new(10, 10).unwrap();
    seed(&mut grid, 30, &mut rng(Some(SEED)));

    assert_eq!(grid.population(), 0);
    let picked = staged(&grid).len();
    assert!(picked >= 1 && picked <= 30, "picked={}", picked);

    grid.for_each_cell_mut(Cell::commit);
    assert_eq!(grid.population(), picked);
}

#[test]
fn test_seed_full_population() {
    let mut grid = Grid::new(6, 4).unwrap();
    seed(&mut grid, 6 * 4, &mut rng(Some(SEED)));
    advance(&mut grid, UpdatePolicy::Synchronous);
    assert_eq!(grid.population(), 6 * 4);
}

#[test]
fn test_seed_zero_population() {
    let mut grid = Grid::new(6, 4).unwrap();
    seed(&mut grid, 0, &mut rng(Some(SEED)));
    advance(&mut grid, UpdatePolicy::Synchronous);
    assert_eq!(grid.population(), 0);
}

#[test]
fn test_seed_is_reproducible() {
    let mut a = Grid::new(32, 18).unwrap();
    let mut b = Grid::new(32, 18).unwrap();
    seed(&mut a, 100, &mut rng(Some(SEED)));
    seed(&mut b, 100, &mut rng(Some(SEED)));
    assert_eq!(staged(&a), staged(&b));
}

#[test]
fn test_clear() {
    let mut grid = Grid::new(5, 5).unwrap();
    stage(&mut grid, &VERTICAL_BAR);
    advance(&mut grid, UpdatePolicy::Synchronous);
    grid.clear();
    assert_eq!(grid.population(), 0);
    assert!(staged(&grid).is_empty());
}

#[test]
fn test_display() {
    let mut grid = Grid::new(3, 2).unwrap();
    grid.cell_at_mut(1, 0).unwrap().set_state(true);
    assert_eq!(grid.to_string(), ".#.\n...\n");
}
