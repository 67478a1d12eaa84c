use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info, warn};

use marksman_app::config::{apply_overrides, load_config, parse_preset};
use marksman_app::error::AppError;
use marksman_app::game_loop::spawn_game_loop;
use marksman_app::logging;
use marksman_app::script::{load_script, InputScript};
use marksman_app::state::{LoopOptions, LoopSummary};
use marksman_core::config::SimConfig;
use marksman_core::enums::RangePreset;

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless MARKSMAN shooting range", long_about = None)]
struct Args {
    /// JSON simulation config. Missing fields use defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed (overrides the config file).
    #[arg(long)]
    seed: Option<u64>,

    /// Range preset: distance or arcade (overrides the config file).
    #[arg(long, value_parser = parse_preset)]
    preset: Option<RangePreset>,

    /// Stop after this many frames.
    #[arg(long)]
    frames: Option<u64>,

    /// JSON list of `{ "frame": n, "input": { ... } }` steps.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Run ticks back to back instead of at 60Hz.
    #[arg(long)]
    no_pacing: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logging::init_logger(logging::parse_level(&args.log_level)) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }

    match run(args) {
        Ok(summary) => {
            info!(
                "final score {} ({} hits, {} shots) after {} frames",
                summary.points, summary.hits, summary.shots_fired, summary.frames
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<LoopSummary, AppError> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => SimConfig::default(),
    };
    apply_overrides(&mut config, args.seed, args.preset);

    let script = match &args.script {
        Some(path) => load_script(path)?,
        None => InputScript::default(),
    };
    if args.frames.is_none() && !script.quits() {
        warn!("no frame limit and no scripted quit; running until interrupted");
    }

    let options = LoopOptions {
        frame_limit: args.frames,
        paced: !args.no_pacing,
    };
    let (cmd_tx, handle) = spawn_game_loop(config, script, options)?;
    let summary = handle.join().map_err(|_| AppError::LoopPanicked)?;
    drop(cmd_tx);
    Ok(summary)
}
