use crate::coord::{CellSet, Coord};
use crate::rules::{dead_neighbors, will_be_alive};

/// Owns the current generation's live set and advances it.
///
/// `next()` evaluates every cell that is live or adjacent to a live cell
/// against an immutable snapshot of the current set, then installs the new
/// set in one move. There is no other state transition and no terminal
/// state: oscillating and stable populations run indefinitely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    alive: CellSet,
}

impl Board {
    /// Builds a board from the initial live cells. Duplicates collapse by
    /// set semantics.
    pub fn new(cells: impl IntoIterator<Item = Coord>) -> Self {
        Self {
            alive: cells.into_iter().collect(),
        }
    }

    /// The current generation's live cells.
    #[inline]
    pub fn alive_cells(&self) -> &CellSet {
        &self.alive
    }

    /// Advances the board one generation.
    ///
    /// Every fate is decided against the same snapshot of the current set;
    /// the successor set is staged separately and swapped in only once all
    /// evaluations are done. Birth checks are restricted to dead cells
    /// adjacent to at least one live cell, so an empty board stays empty
    /// and the work stays proportional to the live population.
    pub fn next(&mut self) {
        let current = &self.alive;

        let mut successors: CellSet = current
            .iter()
            .copied()
            .filter(|&c| will_be_alive(c, current))
            .collect();

        let candidates: CellSet = current
            .iter()
            .flat_map(|&c| dead_neighbors(c, current))
            .collect();
        successors.extend(
            candidates
                .into_iter()
                .filter(|&d| will_be_alive(d, current)),
        );

        self.alive = successors;
    }
}
