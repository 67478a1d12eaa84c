//! Simulation configuration.
//!
//! A `SimConfig` is a preset plus optional overrides. Resolve it into
//! concrete tuning with [`SimConfig::projectile_profile`],
//! [`SimConfig::scoring_mode`], [`SimConfig::recoil_offset`] and
//! [`SimConfig::floor_scale`].

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{RangePreset, ScoringMode};

/// Ballistics of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileProfile {
    /// Units per second.
    pub speed: f32,
    /// Seconds before a round that hit nothing is destroyed.
    pub ttl_secs: f32,
}

impl ProjectileProfile {
    pub fn for_preset(preset: RangePreset) -> Self {
        match preset {
            RangePreset::Distance => Self {
                speed: PROJECTILE_SPEED,
                ttl_secs: PROJECTILE_TTL_SECS,
            },
            RangePreset::Arcade => Self {
                speed: PROJECTILE_SPEED_ARCADE,
                ttl_secs: PROJECTILE_TTL_SECS_ARCADE,
            },
        }
    }
}

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same input = same simulation.
    pub seed: u64,
    pub preset: RangePreset,
    /// Overrides the preset's scoring rule.
    pub scoring: Option<ScoringMode>,
    /// Overrides the preset's projectile ballistics.
    pub projectile: Option<ProjectileProfile>,
    pub magazine_capacity: u32,
    pub target_count: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            preset: RangePreset::default(),
            scoring: None,
            projectile: None,
            magazine_capacity: MAGAZINE_CAPACITY,
            target_count: TARGET_COUNT,
        }
    }
}

impl SimConfig {
    /// Default configuration for the given preset.
    pub fn preset(preset: RangePreset) -> Self {
        Self {
            preset,
            ..Default::default()
        }
    }

    pub fn projectile_profile(&self) -> ProjectileProfile {
        self.projectile
            .unwrap_or_else(|| ProjectileProfile::for_preset(self.preset))
    }

    pub fn scoring_mode(&self) -> ScoringMode {
        self.scoring.unwrap_or(match self.preset {
            RangePreset::Distance => ScoringMode::DistanceWeighted,
            RangePreset::Arcade => ScoringMode::FlatRate {
                points: FLAT_RATE_POINTS,
            },
        })
    }

    /// Size of the level floor.
    pub fn floor_scale(&self) -> Vec3 {
        match self.preset {
            RangePreset::Distance => FLOOR_SCALE,
            RangePreset::Arcade => FLOOR_SCALE_ARCADE,
        }
    }

    /// Weapon model offset while the trigger is held.
    pub fn recoil_offset(&self) -> Vec3 {
        match self.preset {
            RangePreset::Distance => WEAPON_RECOIL_OFFSET,
            RangePreset::Arcade => WEAPON_RECOIL_OFFSET_ARCADE,
        }
    }
}
