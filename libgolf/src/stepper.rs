/*  Copyright 2021-2026 the Golf Developers.
 *
 *  This file is part of libgolf.
 *
 *  libgolf is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  libgolf is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with libgolf.  If not, see <http://www.gnu.org/licenses/>. */

#[cfg(test)]
use std::collections::HashMap;
use std::collections::HashSet;
use std::mem;

use crate::bitmap::BitMap;
use crate::error::{GolfError, GolfResult};
use crate::grid::Grid;

/// Counters describing one generation step.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub struct StepStats {
    pub evaluated:  usize, // rule evaluations; equals the number of distinct candidate cells
    pub born:       usize,
    pub died:       usize,
    pub population: usize, // live cells after the step
}

/// B3/S23: a live cell survives with 2 or 3 live neighbors, a dead cell is born with exactly 3.
#[inline]
pub fn next_state(alive: bool, live_neighbors: usize) -> bool {
    match (alive, live_neighbors) {
        (true, 2) | (true, 3) => true,
        (false, 3) => true,
        _ => false,
    }
}

/// Computes successive generations of a sparse live-cell set. Only live cells and cells
/// adjacent to a live cell are evaluated, each at most once per step.
///
/// The stepper keeps its membership map, visited markers, and next-generation buffer between
/// steps so their allocations are reused.
#[derive(Debug, Clone)]
pub struct Stepper {
    oracle:  BitMap,
    visited: HashSet<usize>,
    next:    HashSet<usize>,
    #[cfg(test)]
    evaluations: HashMap<usize, usize>, // position -> rule evaluations during the last step
}

impl Stepper {
    /// # Errors
    ///
    /// Returns `InvalidSideLength` if the membership map for `grid` cannot be allocated.
    pub fn new(grid: &Grid) -> GolfResult<Self> {
        let oracle = BitMap::new(grid.cell_count()).map_err(|e| {
            warn!("cannot allocate membership map for {} cells: {}", grid.cell_count(), e);
            GolfError::InvalidSideLength {
                side_length: grid.side_length(),
                reason:      "Cell count too large to allocate".to_owned(),
            }
        })?;
        Ok(Stepper {
            oracle,
            visited: HashSet::new(),
            next: HashSet::new(),
            #[cfg(test)]
            evaluations: HashMap::new(),
        })
    }

    /// Drops cached per-step state. The membership map is rebuilt at the start of every step
    /// anyway; this just releases what the previous step left behind.
    pub fn reset(&mut self) {
        self.oracle.clear();
        self.visited.clear();
        self.next.clear();
        #[cfg(test)]
        self.evaluations.clear();
    }

    /// Read-only view of the membership map as of the last step.
    pub fn oracle(&self) -> &BitMap {
        &self.oracle
    }

    /// How many times each position was evaluated during the last step.
    #[cfg(test)]
    pub(crate) fn evaluations(&self) -> &HashMap<usize, usize> {
        &self.evaluations
    }

    /// Replaces `live` with its next generation.
    ///
    /// # Panics
    ///
    /// Panics if `live` contains a position that is not on `grid`.
    pub fn step(&mut self, grid: &Grid, live: &mut HashSet<usize>) -> StepStats {
        // freeze the current generation
        self.oracle.sync(live.iter());
        self.visited.clear();
        self.next.clear();
        #[cfg(test)]
        self.evaluations.clear();
        self.visited.reserve(live.len() * 3);
        self.next.reserve(live.len());

        let oracle = &self.oracle;
        let visited = &mut self.visited;
        let next = &mut self.next;
        #[cfg(test)]
        let evaluations = &mut self.evaluations;
        let mut stats = StepStats::default();

        let mut evaluate = |position: usize, stats: &mut StepStats| {
            if !visited.insert(position) {
                return;
            }
            #[cfg(test)]
            {
                *evaluations.entry(position).or_insert(0) += 1;
            }
            let alive = oracle.get(position);
            let live_neighbors = grid.neighbors(position).valid().filter(|&q| oracle.get(q)).count();
            stats.evaluated += 1;
            if next_state(alive, live_neighbors) {
                next.insert(position);
                if !alive {
                    stats.born += 1;
                }
            } else if alive {
                stats.died += 1;
            }
        };

        for &position in live.iter() {
            evaluate(position, &mut stats);
            for neighbor in grid.neighbors(position).valid() {
                evaluate(neighbor, &mut stats);
            }
        }

        // publish generation k+1 in one swap; the old set becomes next step's scratch buffer
        mem::swap(live, &mut self.next);
        stats.population = live.len();
        debug!(
            "step: evaluated={} born={} died={} population={}",
            stats.evaluated, stats.born, stats.died, stats.population
        );
        stats
    }
}
