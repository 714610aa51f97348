use super::Grid;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random source for seeding
///
/// `seed` - random seed (if `None`, then random seed is generated)
pub fn rng(seed: Option<u64>) -> ChaCha8Rng {
    if let Some(x) = seed {
        ChaCha8Rng::seed_from_u64(x)
    } else {
        ChaCha8Rng::from_entropy()
    }
}

/// Stages `population` random cells as alive for the next commit.
///
/// Picks are independent, so the same cell may be chosen more than once.
/// A population covering the whole grid marks every cell.
pub fn seed<R: Rng + ?Sized>(grid: &mut Grid, population: usize, rng: &mut R) {
    let (columns, rows) = grid.dimensions();
    if population >= columns * rows {
        grid.for_each_cell_mut(|cell| cell.next_alive = true);
        return;
    }
    for _ in 0..population {
        let idx = grid.index(rng.gen_range(0..columns), rng.gen_range(0..rows));
        grid.cell_by_index_mut(idx).next_alive = true;
    }
}
