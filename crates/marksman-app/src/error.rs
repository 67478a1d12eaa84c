//! Error types for the host application.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures loading or interpreting user-supplied files and flags.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unknown preset '{0}' (expected 'distance' or 'arcade')")]
    UnknownPreset(String),
}

/// Top-level application errors.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to spawn game loop thread: {0}")]
    Spawn(#[source] io::Error),
    #[error("game loop thread panicked")]
    LoopPanicked,
}
