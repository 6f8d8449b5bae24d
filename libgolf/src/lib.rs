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

#[macro_use]
extern crate log;
#[macro_use]
extern crate custom_error;

pub mod bitmap;
pub mod board;
pub mod error;
pub mod grid;
pub mod savefile;
pub mod stepper;

pub use board::{Board, Genesis, Snapshot};
pub use error::{GolfError, GolfResult};
pub use stepper::StepStats;

#[cfg(test)]
pub mod tests;
