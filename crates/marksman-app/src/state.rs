//! Types shared between the binary and the game loop thread.

use marksman_core::enums::GamePhase;
use marksman_core::input::InputSample;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// Replace the held input from the next tick on.
    Input(InputSample),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// How the loop runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopOptions {
    /// Stop after this many frames.
    pub frame_limit: Option<u64>,
    /// Sleep between ticks to hold the nominal frame rate.
    pub paced: bool,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            frame_limit: None,
            paced: true,
        }
    }
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Quit,
    FrameLimit,
    Shutdown,
}

/// Final tallies handed back when the loop thread exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopSummary {
    pub frames: u64,
    pub points: u32,
    pub hits: u32,
    pub shots_fired: u32,
    pub phase: GamePhase,
    pub reason: StopReason,
}
