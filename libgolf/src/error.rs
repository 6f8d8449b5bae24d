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

use std::io;

custom_error! {pub GolfError
    InvalidSideLength {side_length: usize, reason: String} = "GolfError->InvalidSideLength->{side_length}: {reason}",
    OutOfBounds {position: usize, cell_count: usize} = "GolfError->OutOfBounds->{position} (cell count is {cell_count})",
    InvalidDensity {density: f64} = "GolfError->InvalidDensity->{density}",
    InvalidData {reason: String} = "GolfError->InvalidData->{reason}",
    Io {source: io::Error} = "GolfError->Io->{source}"
}

pub type GolfResult<T> = ::std::result::Result<T, GolfError>;

impl PartialEq for GolfError {
    fn eq(&self, other: &GolfError) -> bool {
        use GolfError::*;
        match (self, other) {
            (
                InvalidSideLength {
                    side_length: self_len,
                    reason: self_reason,
                },
                InvalidSideLength {
                    side_length: other_len,
                    reason: other_reason,
                },
            ) => self_len == other_len && self_reason == other_reason,
            (
                OutOfBounds {
                    position: self_pos,
                    cell_count: self_count,
                },
                OutOfBounds {
                    position: other_pos,
                    cell_count: other_count,
                },
            ) => self_pos == other_pos && self_count == other_count,
            // NaN densities compare unequal, same as the f64 inside
            (InvalidDensity { density: self_density }, InvalidDensity { density: other_density }) => {
                self_density == other_density
            }
            (InvalidData { reason: self_reason }, InvalidData { reason: other_reason }) => self_reason == other_reason,
            (Io { source: self_source }, Io { source: other_source }) => self_source.kind() == other_source.kind(),
            _ => false,
        }
    }
}
