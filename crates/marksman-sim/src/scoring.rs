//! Score accumulation and the pluggable scoring rule.

use glam::Vec3;

use marksman_core::enums::ScoringMode;

/// Points awarded for one confirmed hit.
pub trait ScoringPolicy {
    fn score(&self, player: Vec3, target: Vec3) -> u32;
}

/// Reward scales with how far away the target was.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistanceWeighted;

impl ScoringPolicy for DistanceWeighted {
    fn score(&self, player: Vec3, target: Vec3) -> u32 {
        player.distance(target).floor() as u32
    }
}

/// Same reward for every hit.
#[derive(Debug, Clone, Copy)]
pub struct FlatRate {
    pub points: u32,
}

impl ScoringPolicy for FlatRate {
    fn score(&self, _player: Vec3, _target: Vec3) -> u32 {
        self.points
    }
}

impl<F> ScoringPolicy for F
where
    F: Fn(Vec3, Vec3) -> u32,
{
    fn score(&self, player: Vec3, target: Vec3) -> u32 {
        self(player, target)
    }
}

/// Build the policy for a configured scoring mode.
pub fn policy_for(mode: ScoringMode) -> Box<dyn ScoringPolicy> {
    match mode {
        ScoringMode::DistanceWeighted => Box::new(DistanceWeighted),
        ScoringMode::FlatRate { points } => Box::new(FlatRate { points }),
    }
}

/// Running score. `points` never decreases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreTracker {
    pub points: u32,
    pub hits: u32,
    pub shots_fired: u32,
}

impl ScoreTracker {
    /// Apply `policy` for a hit and return the points awarded.
    pub fn award(&mut self, policy: &dyn ScoringPolicy, player: Vec3, target: Vec3) -> u32 {
        let delta = policy.score(player, target);
        self.points = self.points.saturating_add(delta);
        self.hits += 1;
        delta
    }

    pub fn record_shot(&mut self) {
        self.shots_fired += 1;
    }
}
