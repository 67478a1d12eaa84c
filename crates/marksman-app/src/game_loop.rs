//! Game loop thread: runs the simulation engine at 60Hz and reports HUD changes.
//!
//! The engine is created inside this thread and never leaves it. Live input
//! and shutdown requests arrive via an `mpsc` channel; scripted input is
//! applied by frame number before the channel is drained, so a live sample
//! received for the same frame wins.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::{debug, info};

use marksman_core::config::SimConfig;
use marksman_core::constants::{DT, FRAME_RATE};
use marksman_core::enums::GamePhase;
use marksman_core::input::InputSample;
use marksman_core::state::FrameSnapshot;
use marksman_sim::SimulationEngine;

use crate::error::AppError;
use crate::script::InputScript;
use crate::state::{GameLoopCommand, LoopOptions, LoopSummary, StopReason};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and a handle that yields the final tallies.
pub fn spawn_game_loop(
    config: SimConfig,
    script: InputScript,
    options: LoopOptions,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<LoopSummary>), AppError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("marksman-game-loop".into())
        .spawn(move || {
            let engine = SimulationEngine::new(config);
            run_game_loop(engine, &script, &cmd_rx, options)
        })
        .map_err(AppError::Spawn)?;

    Ok((cmd_tx, handle))
}

/// State of the command channel after draining it.
enum Channel {
    Open,
    Closed,
    Shutdown,
}

/// Apply every pending command. The last input received wins.
fn drain_commands(cmd_rx: &mpsc::Receiver<GameLoopCommand>, input: &mut InputSample) -> Channel {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::Input(sample)) => *input = sample,
            Ok(GameLoopCommand::Shutdown) => return Channel::Shutdown,
            Err(mpsc::TryRecvError::Empty) => return Channel::Open,
            Err(mpsc::TryRecvError::Disconnected) => return Channel::Closed,
        }
    }
}

fn report(snapshot: &FrameSnapshot) {
    for update in &snapshot.hud_updates {
        info!("{}", update.text());
    }
    for event in &snapshot.events {
        debug!("tick {}: {event:?}", snapshot.time.tick);
    }
}

/// The game loop. Runs until the player quits, the frame limit is reached,
/// or a Shutdown command arrives.
///
/// A closed channel only ends live input; scripted input keeps playing.
pub fn run_game_loop(
    mut engine: SimulationEngine,
    script: &InputScript,
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
    options: LoopOptions,
) -> LoopSummary {
    let mut input = InputSample::default();
    let mut channel_open = true;
    let mut frames: u64 = 0;
    let mut next_tick_time = Instant::now();

    let reason = loop {
        if options.frame_limit.is_some_and(|limit| frames >= limit) {
            break StopReason::FrameLimit;
        }

        // 1. Scripted input, then live commands
        if let Some(step) = script.step_at(frames) {
            input = step;
        }
        if channel_open {
            match drain_commands(cmd_rx, &mut input) {
                Channel::Open => {}
                Channel::Closed => channel_open = false,
                Channel::Shutdown => break StopReason::Shutdown,
            }
        }

        // 2. Advance one tick
        let snapshot = engine.tick(&input, DT);
        frames += 1;

        // 3. Report HUD changes
        report(&snapshot);
        if snapshot.phase == GamePhase::Terminated {
            break StopReason::Quit;
        }

        // 4. Sleep until next tick
        if options.paced {
            next_tick_time += TICK_DURATION;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > TICK_DURATION * 2 {
                // Too far behind, reset to avoid a catch-up spiral
                next_tick_time = now;
            }
        }
    };

    let score = *engine.score();
    info!(
        "game loop stopped ({reason:?}) after {frames} frames: {} points, {} hits from {} shots",
        score.points, score.hits, score.shots_fired
    );

    LoopSummary {
        frames,
        points: score.points,
        hits: score.hits,
        shots_fired: score.shots_fired,
        phase: engine.phase(),
        reason,
    }
}
