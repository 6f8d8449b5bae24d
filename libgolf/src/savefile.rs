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

//! Plain-text board formats.
//!
//! A `.golf` file holds one board: the side length on the first line, then the live
//! positions separated by newlines or commas. Older files put everything on one line as
//! `side_length:p1,p2,...`, which is also accepted.
//!
//! A `.golfr` recording holds the side length on the first line, then one line of
//! comma-separated live positions per recorded generation.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::board::{Board, Genesis, Snapshot};
use crate::error::{GolfError, GolfResult};
use crate::grid::Grid;

pub const GOLF_EXTENSION: &str = "golf";
pub const GOLFR_EXTENSION: &str = "golfr";

fn parse_side_length(line: &str) -> GolfResult<Grid> {
    let side_length = usize::from_str(line.trim()).map_err(|e| GolfError::InvalidData {
        reason: format!("Error while parsing side length {:?}: {}", line, e),
    })?;
    Grid::new(side_length)
}

fn is_separator(ch: char) -> bool {
    ch == ',' || ch.is_whitespace()
}

/// Contents of a `.golf` save file.
#[derive(Debug, PartialEq, Clone)]
pub struct GolfFile {
    pub side_length: usize,
    pub cells:       Vec<usize>, // ascending, no duplicates
}

impl GolfFile {
    pub fn from_board(board: &Board) -> Self {
        GolfFile {
            side_length: board.side_length(),
            cells:       board.live_cells(),
        }
    }

    pub fn to_board(&self) -> GolfResult<Board> {
        Genesis::new()
            .side_length(self.side_length)
            .cells(self.cells.iter().cloned())
            .birth()
    }
}

impl FromStr for GolfFile {
    type Err = GolfError;

    /// Parses the contents of a `.golf` file. Tokens that are not positions on the grid are
    /// skipped with a warning, the way the desktop loader always treated them.
    fn from_str(file_contents: &str) -> Result<Self, Self::Err> {
        let trimmed = file_contents.trim_start();
        let (header, body) = match trimmed.find(|ch: char| ch == '\n' || ch == ':') {
            Some(idx) => (&trimmed[..idx], &trimmed[idx + 1..]),
            None => (trimmed, ""),
        };
        if header.trim().is_empty() {
            return Err(GolfError::InvalidData {
                reason: "missing side length".to_owned(),
            });
        }
        let grid = parse_side_length(header)?;

        let mut cells = vec![];
        for token in body.split(is_separator).filter(|t| !t.is_empty()) {
            match usize::from_str(token) {
                Ok(position) if grid.contains(position) => cells.push(position),
                Ok(position) => warn!(
                    "skipping position {} outside a {}x{} grid",
                    position,
                    grid.side_length(),
                    grid.side_length()
                ),
                Err(e) => warn!("skipping unparsable position {:?}: {}", token, e),
            }
        }
        cells.sort_unstable();
        cells.dedup();
        Ok(GolfFile {
            side_length: grid.side_length(),
            cells,
        })
    }
}

impl fmt::Display for GolfFile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.side_length)?;
        for position in &self.cells {
            write!(f, "\n{}", position)?;
        }
        Ok(())
    }
}

/// Appends generations to a `.golfr` recording.
pub struct RecordingWriter<W: Write> {
    writer:      W,
    side_length: usize,
    frames:      usize,
}

impl<W: Write> RecordingWriter<W> {
    /// Writes the recording header.
    pub fn new(mut writer: W, side_length: usize) -> GolfResult<Self> {
        writeln!(writer, "{}", side_length)?;
        Ok(RecordingWriter {
            writer,
            side_length,
            frames: 0,
        })
    }

    /// Appends one generation.
    ///
    /// # Errors
    ///
    /// Returns `InvalidData` if the snapshot was taken from a board of a different size.
    pub fn record(&mut self, snapshot: &Snapshot) -> GolfResult<()> {
        if snapshot.side_length != self.side_length {
            return Err(GolfError::InvalidData {
                reason: format!(
                    "snapshot side length {} does not match recording side length {}",
                    snapshot.side_length, self.side_length
                ),
            });
        }
        let line = snapshot
            .cells
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<String>>()
            .join(",");
        writeln!(self.writer, "{}", line)?;
        self.frames += 1;
        Ok(())
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn flush(&mut self) -> GolfResult<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Contents of a `.golfr` recording.
#[derive(Debug, PartialEq, Clone)]
pub struct Recording {
    pub side_length: usize,
    pub frames:      Vec<Vec<usize>>,
}

impl FromStr for Recording {
    type Err = GolfError;

    /// Parses a recording. Unlike save files, recordings are only ever machine-written, so
    /// any malformed position is an error.
    fn from_str(contents: &str) -> Result<Self, Self::Err> {
        use GolfError::*;
        let mut lines = contents.lines();
        let grid = match lines.next() {
            Some(line) => parse_side_length(line)?,
            None => {
                return Err(InvalidData {
                    reason: "missing side length".to_owned(),
                })
            }
        };
        let mut frames = vec![];
        for (line_no, line) in lines.enumerate() {
            let mut frame = vec![];
            for token in line.split(',').map(|t| t.trim()).filter(|t| !t.is_empty()) {
                let position = usize::from_str(token).map_err(|e| InvalidData {
                    reason: format!("frame {}: Error while parsing {:?}: {}", line_no, token, e),
                })?;
                if !grid.contains(position) {
                    return Err(OutOfBounds {
                        position,
                        cell_count: grid.cell_count(),
                    });
                }
                frame.push(position);
            }
            frames.push(frame);
        }
        Ok(Recording {
            side_length: grid.side_length(),
            frames,
        })
    }
}
