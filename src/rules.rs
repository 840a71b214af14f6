//! The survival/birth rule, as pure functions over a coordinate and an
//! immutable live set.

use crate::coord::{CellSet, Coord};

/// Number of live Moore neighbors of `c`. Always in `0..=8`.
#[inline]
pub fn alive_neighbor_count(c: Coord, live: &CellSet) -> usize {
    c.neighbors().iter().filter(|n| live.contains(n)).count()
}

/// Neighbors of `c` that are currently dead.
///
/// Only used to discover birth candidates; several live cells can yield the
/// same dead neighbor, so callers collect into a set before evaluating.
pub fn dead_neighbors(c: Coord, live: &CellSet) -> impl Iterator<Item = Coord> + '_ {
    c.neighbors().into_iter().filter(|n| !live.contains(n))
}

/// Whether `c` is alive in the next generation, given the current one.
///
/// A live cell survives with 2 or 3 live neighbors; a dead cell is born with
/// exactly 3. Every other count means dead (under-population, overcrowding,
/// or simply staying dead).
pub fn will_be_alive(c: Coord, live: &CellSet) -> bool {
    let count = alive_neighbor_count(c, live);
    if live.contains(&c) {
        count == 2 || count == 3
    } else {
        count == 3
    }
}
