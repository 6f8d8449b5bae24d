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

// simulation
pub const DEFAULT_DELAY_MS: u64           = 100;  // between generations

// output
pub const DEFAULT_SAVED_DIR: &str         = "Saved";
pub const DEFAULT_RECORDINGS_DIR: &str    = "Recordings";
pub const SAVE_FILE_STEM: &str            = "GameOfLife";
pub const RECORDING_FILE_STEM: &str       = "Recording";
pub const CLEAR_SCREEN: &str              = "\x1b[H\x1b[2J";

// persistent configuration
pub const CONFIG_FILE_PATH: &str          = "golf.toml";
