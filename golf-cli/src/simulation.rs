/*  Copyright 2021-2026 the Golf Developers.
 *
 *  This file is part of golf-cli.
 *
 *  golf-cli is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  golf-cli is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with golf-cli.  If not, see
 *  <http://www.gnu.org/licenses/>. */

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Context};
use golf::savefile::{GolfFile, RecordingWriter, GOLF_EXTENSION};
use golf::Board;

use crate::config::Settings;
use crate::constants::{CLEAR_SCREEN, SAVE_FILE_STEM};
use crate::files;

/// Builds the starting board: from a `.golf` file if one is given, otherwise a random fill
/// of the configured size and density.
pub fn build_board(settings: &Settings, load: Option<&Path>) -> anyhow::Result<Board> {
    if let Some(path) = load {
        let contents = fs::read_to_string(path).with_context(|| format!("reading {:?}", path))?;
        let golf_file = GolfFile::from_str(&contents).with_context(|| format!("parsing {:?}", path))?;
        let board = golf_file.to_board()?;
        info!(
            "loaded {:?}: side length {}, {} live cells",
            path,
            board.side_length(),
            board.population()
        );
        return Ok(board);
    }
    let mut board = Board::new(settings.simulation.side_length)?;
    board.random_fill(settings.simulation.density)?;
    Ok(board)
}

/// Steps `board` until it empties or the configured generation limit is reached, rendering
/// each generation to `screen` and appending it to `recorder` if present. The final
/// generation is rendered and recorded too. Returns the number of steps taken.
pub fn run<W: Write, R: Write>(
    board: &mut Board,
    settings: &Settings,
    screen: &mut W,
    mut recorder: Option<&mut RecordingWriter<R>>,
) -> anyhow::Result<usize> {
    let delay = Duration::from_millis(settings.simulation.delay_ms);
    let limit = settings.simulation.max_generations;
    let mut steps = 0;

    loop {
        // only completed generations are ever observed
        let snapshot = board.snapshot();
        if settings.output.render {
            write!(screen, "{}{}", CLEAR_SCREEN, board)?;
            writeln!(
                screen,
                "Gen: {}  Population: {}",
                snapshot.generation,
                snapshot.cells.len()
            )?;
            screen.flush()?;
        }
        if let Some(recorder) = recorder.as_mut() {
            recorder.record(&snapshot)?;
        }

        if !board.has_next() {
            info!("board is empty at generation {}", board.generation());
            break;
        }
        if limit.map_or(false, |max| steps >= max) {
            info!("stopping at generation limit {}", steps);
            break;
        }

        let stats = board.step();
        steps += 1;
        debug!(
            "generation {}: population {} (+{} -{}, {} cells evaluated)",
            board.generation(),
            stats.population,
            stats.born,
            stats.died,
            stats.evaluated
        );
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
    if let Some(recorder) = recorder {
        recorder.flush()?;
    }
    Ok(steps)
}

/// Writes `board` to a fresh `.golf` file in the configured save directory. An empty board
/// is not saved and yields `None`.
pub fn save(board: &Board, settings: &Settings) -> anyhow::Result<Option<PathBuf>> {
    if board.is_empty() {
        info!("board is empty; nothing to save");
        return Ok(None);
    }
    let dir = Path::new(&settings.output.saved_dir);
    let (path, mut file) = files::create_unique(dir, SAVE_FILE_STEM, GOLF_EXTENSION)
        .map_err(|e| anyhow!("could not create save file in {:?}: {}", dir, e))?;
    write!(file, "{}", GolfFile::from_board(board))?;
    info!("saved {} live cells to {:?}", board.population(), path);
    Ok(Some(path))
}
