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

use std::ops::Index;

use crate::error::{GolfError, GolfResult};

/// One of the eight Moore-neighborhood directions. The discriminant is the index of the
/// direction within `Neighbors`.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Direction {
    Right,
    Left,
    Down,
    DownRight,
    DownLeft,
    Up,
    UpRight,
    UpLeft,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::DownRight,
        Direction::DownLeft,
        Direction::Up,
        Direction::UpRight,
        Direction::UpLeft,
    ];
}

/// The neighbor positions of a cell, indexed by `Direction`. `None` means the neighbor would
/// fall outside the grid.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct Neighbors(pub [Option<usize>; 8]);

impl Neighbors {
    #[inline]
    pub fn get(&self, direction: Direction) -> Option<usize> {
        self.0[direction as usize]
    }

    /// Iterates over the neighbors that lie on the grid.
    pub fn valid(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().filter_map(|n| *n)
    }
}

impl Index<Direction> for Neighbors {
    type Output = Option<usize>;

    fn index(&self, direction: Direction) -> &Option<usize> {
        &self.0[direction as usize]
    }
}

/// Square, non-wrapping grid addressed by linear position: `row * side_length + col`.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct Grid {
    side_length: usize,
    cell_count:  usize, // side_length squared
}

impl Grid {
    /// Creates a grid that is `side_length` cells on each side.
    ///
    /// # Errors
    ///
    /// - if `side_length` is zero.
    /// - if `side_length * side_length` does not fit in a `usize`.
    pub fn new(side_length: usize) -> GolfResult<Grid> {
        use GolfError::*;
        if side_length == 0 {
            return Err(InvalidSideLength {
                side_length,
                reason: "Side length must be positive".to_owned(),
            });
        }
        let cell_count = side_length.checked_mul(side_length).ok_or_else(|| InvalidSideLength {
            side_length,
            reason: "Cell count overflows".to_owned(),
        })?;
        Ok(Grid {
            side_length,
            cell_count,
        })
    }

    #[inline]
    pub fn side_length(&self) -> usize {
        self.side_length
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    #[inline]
    pub fn contains(&self, position: usize) -> bool {
        position < self.cell_count
    }

    #[inline]
    pub fn row(&self, position: usize) -> usize {
        position / self.side_length
    }

    #[inline]
    pub fn col(&self, position: usize) -> usize {
        position % self.side_length
    }

    /// Linear position of (`row`, `col`), or `None` if either is off the grid.
    pub fn position(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.side_length && col < self.side_length {
            Some(row * self.side_length + col)
        } else {
            None
        }
    }

    /// Returns the Moore neighborhood of `position`. Neighbors that would cross an edge are
    /// `None`; there is no wrapping.
    ///
    /// `position` must be on the grid.
    pub fn neighbors(&self, position: usize) -> Neighbors {
        debug_assert!(self.contains(position));
        let n = self.side_length;
        let row = position / n;
        let col = position % n;

        let top = row == 0;
        let bottom = row == n - 1;
        let left = col == 0;
        let right = col == n - 1;

        // each is only meaningful when the matching edge flag is clear
        let below = position.wrapping_add(n);
        let above = position.wrapping_sub(n);

        let pick = |excluded: bool, value: usize| if excluded { None } else { Some(value) };

        Neighbors([
            pick(right, position + 1),                      // Right
            pick(left, position.wrapping_sub(1)),           // Left
            pick(bottom, below),                            // Down
            pick(bottom || right, below.wrapping_add(1)),   // DownRight
            pick(bottom || left, below.wrapping_sub(1)),    // DownLeft
            pick(top, above),                               // Up
            pick(top || right, above.wrapping_add(1)),      // UpRight
            pick(top || left, above.wrapping_sub(1)),       // UpLeft
        ])
    }
}
