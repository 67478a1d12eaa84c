//! Snapshot system: queries the ECS world and builds a complete FrameSnapshot.
//!
//! This system is read-only and never modifies the world.

use glam::Vec3;
use hecs::World;

use marksman_core::components::*;
use marksman_core::enums::GamePhase;
use marksman_core::events::{ammo_text, points_text};
use marksman_core::state::*;
use marksman_core::types::SimTime;
use marksman_weapon::{AmmoMagazine, RecoilPose};

use crate::scoring::ScoreTracker;

use super::FrameOutbox;

/// Build a complete FrameSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    magazine: &AmmoMagazine,
    score: &ScoreTracker,
    recoil: &RecoilPose,
    outbox: FrameOutbox,
) -> FrameSnapshot {
    FrameSnapshot {
        time: *time,
        phase,
        ammo: AmmoView {
            count: magazine.count(),
            capacity: magazine.capacity(),
        },
        score: ScoreView {
            points: score.points,
            hits: score.hits,
            shots_fired: score.shots_fired,
        },
        hud: build_hud(magazine, score),
        player: PlayerView {
            position: find_player_position(world),
        },
        weapon: WeaponView {
            recoil_active: recoil.active,
            offset: recoil.offset,
        },
        targets: build_targets(world),
        projectiles: build_projectiles(world),
        events: outbox.events,
        hud_updates: outbox.hud,
    }
}

/// Current HUD text lines.
pub fn build_hud(magazine: &AmmoMagazine, score: &ScoreTracker) -> HudView {
    HudView {
        ammo_text: ammo_text(magazine.count()),
        points_text: points_text(score.points),
    }
}

/// Player mirror position (spawn point if the mirror is missing).
pub fn find_player_position(world: &World) -> Vec3 {
    world
        .query::<(&Player, &Transform)>()
        .iter()
        .next()
        .map(|(_, (_, transform))| transform.position)
        .unwrap_or(marksman_core::constants::PLAYER_SPAWN_POINT)
}

/// Build TargetView list, ordered by target id.
fn build_targets(world: &World) -> Vec<TargetView> {
    let mut targets: Vec<TargetView> = world
        .query::<(&Target, &Transform)>()
        .iter()
        .map(|(_, (target, transform))| TargetView {
            id: target.id,
            position: transform.position,
            scale: transform.scale,
            active: target.active,
        })
        .collect();

    targets.sort_by_key(|t| t.id);
    targets
}

/// Build ProjectileView list, ordered by shot number.
fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Transform)>()
        .iter()
        .map(|(_, (projectile, transform))| ProjectileView {
            shot: projectile.shot,
            position: transform.position,
            direction: projectile.direction,
            age_secs: projectile.age_secs,
            ttl_secs: projectile.ttl_secs,
        })
        .collect();

    projectiles.sort_by_key(|p| p.shot);
    projectiles
}
