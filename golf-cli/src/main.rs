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

#[macro_use]
extern crate log;

mod config;
mod constants;
mod files;
mod simulation;

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::anyhow;
use chrono::Local;
use clap::{self, Parser};
use golf::savefile::{RecordingWriter, GOLFR_EXTENSION};
use log::LevelFilter;

use crate::config::Config;
use crate::constants::{CONFIG_FILE_PATH, RECORDING_FILE_STEM};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value = CONFIG_FILE_PATH, help = "Path to golf.toml file.")]
    config: PathBuf,

    #[arg(short, long, help = "Start from a .golf save file instead of a random fill.")]
    load: Option<PathBuf>,

    #[arg(short = 'n', long, help = "Cells per side of the board.")]
    side_length: Option<usize>,

    #[arg(short, long, help = "Fraction of cells alive after the random fill, 0 to 1.")]
    density: Option<f64>,

    #[arg(short, long, help = "Stop after this many generations.")]
    generations: Option<usize>,

    #[arg(long, help = "Milliseconds to wait between generations.")]
    delay_ms: Option<u64>,

    #[arg(short, long, help = "Write every generation to a .golfr recording.")]
    record: bool,

    #[arg(short, long, help = "Save the final board to a .golf file.")]
    save: bool,

    #[arg(long, help = "Don't draw the board in the terminal.")]
    no_render: bool,

    #[arg(short, long, action = clap::ArgAction::Count, help = "More logging; repeat for more.")]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{:5}] - {}",
                Local::now().format("%H:%M:%S%.6f"),
                record.level(),
                record.args(),
            )
        })
        .filter(None, level)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = Config::new(&args.config);
    config
        .load_or_create_default()
        .map_err(|e| anyhow!("could not load {:?}: {}", config.path(), e))?;
    config.modify(|settings| {
        let sim = &mut settings.simulation;
        if let Some(side_length) = args.side_length {
            sim.side_length = side_length;
        }
        if args.density.is_some() {
            sim.density = args.density;
        }
        if args.generations.is_some() {
            sim.max_generations = args.generations;
        }
        if let Some(delay_ms) = args.delay_ms {
            sim.delay_ms = delay_ms;
        }
        if args.no_render {
            settings.output.render = false;
        }
    });
    let settings = config.get().clone();
    settings.validate().map_err(|e| anyhow!("invalid settings: {}", e))?;

    let mut board = simulation::build_board(&settings, args.load.as_deref())?;
    info!(
        "starting with side length {} and {} live cells",
        board.side_length(),
        board.population()
    );

    let mut recorder = if args.record {
        let dir = Path::new(&settings.output.recordings_dir);
        let (path, file) = files::create_unique(dir, RECORDING_FILE_STEM, GOLFR_EXTENSION)
            .map_err(|e| anyhow!("could not create recording in {:?}: {}", dir, e))?;
        info!("recording to {:?}", path);
        Some(RecordingWriter::new(BufWriter::new(file), board.side_length())?)
    } else {
        None
    };

    let stdout = io::stdout();
    let mut screen = stdout.lock();
    let steps = simulation::run(&mut board, &settings, &mut screen, recorder.as_mut())?;
    info!("ran {} generations", steps);

    if args.save {
        match simulation::save(&board, &settings)? {
            Some(path) => println!("Saved to {}", path.display()),
            None => println!("Board is empty, nothing saved"),
        }
    }
    Ok(())
}
