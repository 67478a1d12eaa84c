//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level loop phase. There are no menu or pause states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Running,
    /// `quit` was asserted. Terminal: later ticks do nothing.
    Terminated,
}

/// Tuning preset. Selects projectile speed/ttl, scoring and recoil depth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangePreset {
    /// Fast long-lived rounds, points scale with target distance.
    #[default]
    Distance,
    /// Slower short-lived rounds, flat points per hit.
    Arcade,
}

/// Scoring rule applied on a confirmed hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScoringMode {
    /// `floor(distance(player, target))` points.
    DistanceWeighted,
    /// A fixed number of points per hit.
    FlatRate { points: u32 },
}

/// How a projectile ended its flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileOutcome {
    Hit,
    Expired,
}
