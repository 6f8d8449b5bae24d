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

use std::error::Error;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use golf::board::DEFAULT_SIDE_LENGTH;
use golf::grid::Grid;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DELAY_MS, DEFAULT_RECORDINGS_DIR, DEFAULT_SAVED_DIR};

/// Settings contains everything configurable about a run. Values come from the `golf.toml`
/// file, with any field missing from the file left at its default, and command line flags
/// override them afterwards.
// Top-level view of config toml file
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub simulation: SimulationSettings,
    pub output:     OutputSettings,
}

/// Decoded from the [simulation] section.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationSettings {
    pub side_length:     usize,
    pub density:         Option<f64>, // None: pick a random density on every fill
    pub delay_ms:        u64,
    pub max_generations: Option<usize>,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        SimulationSettings {
            side_length:     DEFAULT_SIDE_LENGTH,
            density:         None,
            delay_ms:        DEFAULT_DELAY_MS,
            max_generations: None,
        }
    }
}

/// Where saves and recordings go, and whether to draw the board in the terminal.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct OutputSettings {
    pub saved_dir:      String,
    pub recordings_dir: String,
    pub render:         bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        OutputSettings {
            saved_dir:      DEFAULT_SAVED_DIR.to_owned(),
            recordings_dir: DEFAULT_RECORDINGS_DIR.to_owned(),
            render:         true,
        }
    }
}

impl Settings {
    /// Parses settings from TOML text. Absent sections and fields keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let settings: Settings = toml::from_str(toml_str)?;
        Ok(settings)
    }

    /// Checks the values that the board would otherwise reject later on.
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        Grid::new(self.simulation.side_length)?;
        if let Some(density) = self.simulation.density {
            if !(0.0..=1.0).contains(&density) {
                return Err(format!("density must be between 0 and 1, got {}", density).into());
            }
        }
        Ok(())
    }
}

/// Config manages how Settings are loaded and stored to the filesystem.
pub struct Config {
    settings: Settings,
    path:     PathBuf,
}

impl Config {
    /// Creates a Config with default settings, backed by the file at `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Config {
        Config {
            settings: Settings::default(),
            path:     path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    fn load(&mut self) -> Result<(), Box<dyn Error>> {
        let toml_str = fs::read_to_string(&self.path)?;
        self.settings = Settings::from_toml(&toml_str)?;
        debug!("loaded settings from {:?}: {:?}", self.path, self.settings);
        Ok(())
    }

    /// Check if file at `self.path` exists. If it exists, settings are read from that path.
    /// Otherwise, the current settings are written to that path. Note: `Config::new()` returns
    /// a `Config` with default settings.
    pub fn load_or_create_default(&mut self) -> Result<(), Box<dyn Error>> {
        if self.path.exists() {
            self.load()?;
        } else {
            info!("no settings at {:?}; writing defaults", self.path);
            self.force_flush()?;
        }
        Ok(())
    }

    /// Save to file. Refuses to overwrite an existing file.
    pub fn force_flush(&mut self) -> Result<(), Box<dyn Error>> {
        let toml_str = toml::to_string(&self.settings)?;
        let mut f = OpenOptions::new().write(true).create_new(true).open(&self.path)?;
        f.write_all(toml_str.as_bytes())?;
        Ok(())
    }

    pub fn get(&self) -> &Settings {
        &self.settings
    }

    /// Accepts a closure taking a mutable reference to `Settings`. Changes are not written
    /// back to the file.
    ///
    /// ```rust,ignore
    /// config.modify(|settings| {
    ///     settings.simulation.side_length = 400;
    /// });
    /// ```
    pub fn modify<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Settings),
    {
        f(&mut self.settings);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::env;
    use std::process;

    fn scratch_path(name: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("golf-config-{}-{}.toml", name, process::id()));
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn test_init_default_settings() {
        let settings = Settings::default();

        assert_eq!(settings.simulation.side_length, 200);
        assert_eq!(settings.simulation.density, None);
        assert_eq!(settings.simulation.delay_ms, DEFAULT_DELAY_MS);
        assert_eq!(settings.simulation.max_generations, None);
        assert_eq!(settings.output.saved_dir, "Saved");
        assert_eq!(settings.output.recordings_dir, "Recordings");
        assert_eq!(settings.output.render, true);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings = Settings::from_toml(
            r#"
            [simulation]
            side_length = 300
            density = 0.25
            "#,
        )
        .unwrap();

        assert_eq!(settings.simulation.side_length, 300);
        assert_eq!(settings.simulation.density, Some(0.25));
        assert_eq!(settings.simulation.delay_ms, DEFAULT_DELAY_MS);
        assert_eq!(settings.output, OutputSettings::default());
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn test_bad_toml_is_error() {
        assert!(Settings::from_toml("[simulation]\nside_length = \"big\"").is_err());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut settings = Settings::default();
        settings.simulation.side_length = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.simulation.density = Some(1.01);
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_create_then_load_round_trip() {
        let path = scratch_path("round-trip");

        let mut config = Config::new(&path);
        config.modify(|settings| {
            settings.simulation.side_length = 123;
            settings.simulation.max_generations = Some(10);
            settings.output.render = false;
        });
        config.load_or_create_default().unwrap();
        assert!(path.exists());

        let mut reloaded = Config::new(&path);
        reloaded.load_or_create_default().unwrap();
        assert_eq!(reloaded.get(), config.get());
        assert_eq!(reloaded.path(), path.as_path());

        // never clobbers an existing file
        assert!(reloaded.force_flush().is_err());

        fs::remove_file(&path).unwrap();
    }
}
