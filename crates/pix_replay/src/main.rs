use anyhow::Context;
use clap::Parser;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};
use pix_engine::{CanvasState, Grid, PixelEditState, UndoState};
use std::{fs, path::PathBuf};

use crate::{options::Options, script::Script};

mod options;
mod script;

#[derive(Parser, Debug)]
#[command(version, about = "Replays pointer gesture scripts against a pixel grid", long_about = None)]
pub struct Args {
    /// Gesture script (TOML) to replay
    #[arg(value_name = "SCRIPT")]
    script: PathBuf,

    /// Options file, defaults to options.toml in the configuration directory
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long)]
    width: Option<i32>,

    /// Grid height in cells
    #[arg(long)]
    height: Option<i32>,

    /// Displayed cell size used to map pointer coordinates
    #[arg(long, value_name = "PIXELS")]
    cell_size: Option<f64>,

    /// Maximum number of undo steps
    #[arg(long, value_name = "STEPS")]
    max_undo_depth: Option<usize>,
}

fn start_logger() -> Option<LoggerHandle> {
    let logger = match Logger::try_with_env_or_str("info") {
        Ok(logger) => logger,
        Err(err) => {
            eprintln!("Failed to set up logging: {err}");
            return None;
        }
    };
    let result = if let Some(log_dir) = Options::get_log_dir() {
        logger
            .log_to_file(FileSpec::default().directory(&log_dir).basename("pix_replay").suffix("log").suppress_timestamp())
            .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
            .duplicate_to_stderr(flexi_logger::Duplicate::Warn)
            .start()
    } else {
        logger.log_to_stderr().start()
    };
    match result {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("Failed to start logger: {err}");
            None
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut options = match &args.options {
        Some(path) => Options::load_from(path).with_context(|| format!("Can't read options from {}", path.display()))?,
        None => Options::load_options(),
    };
    if let Some(width) = args.width {
        options.width = width;
    }
    if let Some(height) = args.height {
        options.height = height;
    }
    if let Some(cell_size) = args.cell_size {
        options.cell_size = cell_size;
    }
    if args.max_undo_depth.is_some() {
        options.max_undo_depth = args.max_undo_depth;
    }

    let txt = fs::read_to_string(&args.script).with_context(|| format!("Can't read script {}", args.script.display()))?;
    let script = Script::parse(&txt).with_context(|| format!("Invalid script {}", args.script.display()))?;

    let grid = Grid::with_color(options.width, options.height, options.background_color()?)?;
    let mut state = PixelEditState::from_grid(grid).with_max_undo_depth(options.max_undo_depth);
    let mut canvas = CanvasState::new(options.cell_size, options.brush_color()?)?;

    log::info!(
        "Replaying {} event(s) on a {}x{} grid",
        script.events.len(),
        state.width(),
        state.height()
    );
    let stats = script.replay(&mut canvas, &mut state)?;

    for row in state.image().colors().chunks(state.width() as usize) {
        let row: Vec<String> = row.iter().map(ToString::to_string).collect();
        println!("{}", row.join(" "));
    }
    println!();
    println!(
        "events: {}, changed cells: {}, undone: {}, redone: {}",
        stats.events, stats.changed_cells, stats.undone, stats.redone
    );
    println!(
        "undo: {} ({}), redo: {} ({})",
        state.undo_len(),
        state.undo_description().unwrap_or_else(|| "-".to_string()),
        state.redo_len(),
        state.redo_description().unwrap_or_else(|| "-".to_string())
    );
    Ok(())
}

fn main() {
    let args = Args::parse();
    let logger = start_logger();
    log::info!("Starting pix_replay {}", env!("CARGO_PKG_VERSION"));

    if let Err(err) = run(args) {
        if logger.is_some() {
            log::error!("{err:#}");
        } else {
            eprintln!("Error: {err:#}");
        }
        std::process::exit(1);
    }
    log::info!("Shutting down.");
}
