/// B3/S23: a live cell survives with 2 or 3 neighbors, a dead one is born with 3.
pub const fn next_state(alive: bool, live_neighbors: usize) -> bool {
    matches!((alive, live_neighbors), (true, 2) | (_, 3))
}
