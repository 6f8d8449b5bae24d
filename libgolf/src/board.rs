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

use std::collections::HashSet;
use std::fmt;

use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{GolfError, GolfResult};
use crate::grid::Grid;
use crate::stepper::{StepStats, Stepper};

pub const DEFAULT_SIDE_LENGTH: usize = 200;

/// Builder paradigm to create `Board` structs with default values.
///
/// # Examples
///
/// ```
/// let board = golf::board::Genesis::new()
///                 .side_length(50)     // optionally override side length
///                 .cells(vec![1, 2, 3]) // optionally pre-seed live cells
///                 .birth()
///                 .unwrap();
/// assert_eq!(board.population(), 3);
/// ```
pub struct Genesis {
    side_length: usize,
    cells:       Vec<usize>,
}

impl Genesis {
    /// Creates and returns a new builder.
    pub fn new() -> Genesis {
        Genesis {
            side_length: DEFAULT_SIDE_LENGTH,
            cells:       vec![],
        }
    }

    /// Update the number of cells along each side of the square grid.
    pub fn side_length(mut self, side_length: usize) -> Genesis {
        self.side_length = side_length;
        self
    }

    /// Live cells for the first generation. Duplicates are collapsed.
    pub fn cells<I: IntoIterator<Item = usize>>(mut self, cells: I) -> Genesis {
        self.cells.extend(cells);
        self
    }

    /// Creates the Board.
    ///
    /// # Errors
    ///
    /// - if `side_length` is zero or its square overflows.
    /// - if any seeded cell lies outside the grid.
    pub fn birth(&self) -> GolfResult<Board> {
        let mut board = Board::new(self.side_length)?;
        for &position in &self.cells {
            board.add_cell(position)?;
        }
        Ok(board)
    }
}

impl Default for Genesis {
    fn default() -> Self {
        Genesis::new()
    }
}

/// A copy of the board state taken between steps, for renderers and recorders.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct Snapshot {
    pub side_length: usize,
    pub generation:  usize,
    pub cells:       Vec<usize>, // ascending
}

/// Conway's Game of Life on a square, non-wrapping grid.
///
/// The only state that matters is the set of live positions. Mutations happen between steps;
/// `step` replaces the set with the next generation as a whole.
#[derive(Debug, Clone)]
pub struct Board {
    grid:       Grid,
    live:       HashSet<usize>,
    stepper:    Stepper,
    generation: usize, // steps taken since creation or the last clear (0-based)
}

impl Board {
    /// Creates an empty board with `side_length` cells along each side.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSideLength` if `side_length` is zero, if its square overflows, or if
    /// the grid is too large to allocate.
    pub fn new(side_length: usize) -> GolfResult<Board> {
        let grid = Grid::new(side_length)?;
        let stepper = Stepper::new(&grid)?;
        Ok(Board {
            grid,
            live: HashSet::new(),
            stepper,
            generation: 0,
        })
    }

    #[inline]
    pub fn side_length(&self) -> usize {
        self.grid.side_length()
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn generation(&self) -> usize {
        self.generation
    }

    #[inline]
    pub fn population(&self) -> usize {
        self.live.len()
    }

    pub fn is_alive(&self, position: usize) -> bool {
        self.live.contains(&position)
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Whether stepping can still change anything; an empty board is terminal.
    pub fn has_next(&self) -> bool {
        !self.live.is_empty()
    }

    fn check_bounds(&self, position: usize) -> GolfResult<()> {
        if self.grid.contains(position) {
            Ok(())
        } else {
            Err(GolfError::OutOfBounds {
                position,
                cell_count: self.grid.cell_count(),
            })
        }
    }

    /// Makes the cell at `position` alive. Returns `Ok(true)` if it was dead before.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `position` is not on the grid; the board is unchanged.
    pub fn add_cell(&mut self, position: usize) -> GolfResult<bool> {
        self.check_bounds(position)?;
        Ok(self.live.insert(position))
    }

    /// Kills the cell at `position`. Returns `true` if it was alive. Off-grid positions are
    /// never alive, so removing one is a no-op.
    pub fn remove_cell(&mut self, position: usize) -> bool {
        self.live.remove(&position)
    }

    /// Flips the cell at `position`, returning its new state.
    pub fn toggle_cell(&mut self, position: usize) -> GolfResult<bool> {
        self.check_bounds(position)?;
        if self.live.remove(&position) {
            Ok(false)
        } else {
            self.live.insert(position);
            Ok(true)
        }
    }

    /// Kills every cell and forgets any cached step state.
    pub fn clear(&mut self) {
        self.live.clear();
        self.stepper.reset();
        self.generation = 0;
    }

    /// Replaces the live cells with a random selection. See `random_fill_with_rng`.
    pub fn random_fill(&mut self, density: Option<f64>) -> GolfResult<usize> {
        self.random_fill_with_rng(&mut rand::thread_rng(), density)
    }

    /// Replaces the live cells with `round(density * n²)` distinct positions chosen uniformly
    /// without replacement. If `density` is `None`, it is itself drawn uniformly from
    /// `[0, 1]` in steps of 1/1000. Returns the resulting population.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDensity` if `density` is NaN or outside `[0, 1]`; the board is
    /// unchanged.
    pub fn random_fill_with_rng<R: Rng>(&mut self, rng: &mut R, density: Option<f64>) -> GolfResult<usize> {
        let density = match density {
            Some(d) if (0.0..=1.0).contains(&d) => d,
            Some(d) => return Err(GolfError::InvalidDensity { density: d }),
            None => rng.gen_range(0..=1000u32) as f64 / 1000.0,
        };
        let cell_count = self.grid.cell_count();
        let amount = ((density * cell_count as f64).round() as usize).min(cell_count);

        self.live.clear();
        self.live.reserve(amount);
        self.live.extend(index::sample(rng, cell_count, amount).iter());
        info!(
            "random fill: density={:.3} population={} of {}",
            density, amount, cell_count
        );
        Ok(amount)
    }

    /// Advances the board by one generation.
    pub fn step(&mut self) -> StepStats {
        let stats = self.stepper.step(&self.grid, &mut self.live);
        self.generation += 1;
        stats
    }

    #[cfg(test)]
    pub(crate) fn stepper(&self) -> &Stepper {
        &self.stepper
    }

    /// Live positions in ascending order.
    pub fn live_cells(&self) -> Vec<usize> {
        let mut cells: Vec<usize> = self.live.iter().cloned().collect();
        cells.sort_unstable();
        cells
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            side_length: self.side_length(),
            generation:  self.generation,
            cells:       self.live_cells(),
        }
    }

    /// Live positions in ascending order, joined by `separator`.
    pub fn to_listing(&self, separator: &str) -> String {
        self.live_cells()
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<String>>()
            .join(separator)
    }
}

impl fmt::Display for Board {
    /// Renders one text row per grid row: `*` for alive, `.` for dead.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let n = self.side_length();
        let mut s = String::with_capacity(n + 1);
        for row in 0..n {
            s.clear();
            for col in 0..n {
                s.push(if self.live.contains(&(row * n + col)) { '*' } else { '.' });
            }
            writeln!(f, "{}", s)?;
        }
        Ok(())
    }
}
