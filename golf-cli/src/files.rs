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

use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

/// Upper bound on the numeric suffix tried before giving up.
const MAX_SUFFIX: usize = 100_000;

/// Creates a new file `<dir>/<stem>.<extension>`, or `<dir>/<stem><i>.<extension>` with the
/// smallest `i >= 1` that doesn't exist yet. `dir` is created if needed. Existing files are
/// never opened.
pub fn create_unique(dir: &Path, stem: &str, extension: &str) -> io::Result<(PathBuf, File)> {
    fs::create_dir_all(dir)?;
    for index in 0..MAX_SUFFIX {
        let name = if index == 0 {
            format!("{}.{}", stem, extension)
        } else {
            format!("{}{}.{}", stem, index, extension)
        };
        let path = dir.join(name);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(ref e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(e),
        }
    }
    Err(io::Error::new(
        ErrorKind::AlreadyExists,
        format!("no free name for {}.{} in {:?}", stem, extension, dir),
    ))
}
