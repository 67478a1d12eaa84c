//! Tests for the simulation engine, the projectile pipeline, scoring and
//! target relocation.

use assert_approx_eq::assert_approx_eq;
use glam::Vec3;
use hecs::{Entity, World};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use marksman_core::components::{Floor, Projectile, Transform};
use marksman_core::config::{ProjectileProfile, SimConfig};
use marksman_core::constants::*;
use marksman_core::enums::*;
use marksman_core::events::{GameEvent, HudUpdate};
use marksman_core::input::InputSample;
use marksman_core::state::FrameSnapshot;

use crate::collision::Sweep;
use crate::engine::SimulationEngine;
use crate::scoring::{DistanceWeighted, FlatRate, ScoreTracker, ScoringPolicy};
use crate::targets::TargetRegistry;
use crate::world_setup;

/// Weapon position whose muzzle sits exactly at the player spawn point.
const LANE_WEAPON: Vec3 = Vec3::new(0.0, 1.5, 0.0);

/// Slow rounds and one-second ticks so positions are easy to reason about.
fn lane_config(scoring: ScoringMode) -> SimConfig {
    SimConfig {
        scoring: Some(scoring),
        projectile: Some(ProjectileProfile {
            speed: 12.5,
            ttl_secs: 5.0,
        }),
        ..Default::default()
    }
}

/// Move every target except target 0 well off the +Z firing lane.
fn clear_lane(engine: &mut SimulationEngine) {
    for id in 1..TARGET_COUNT as u32 {
        engine.place_target(id, Vec3::new(45.0, 2.0, 30.0 + id as f32 * 5.0));
    }
}

fn aim(forward: Vec3) -> InputSample {
    InputSample::idle(PLAYER_SPAWN_POINT).aimed(LANE_WEAPON, forward)
}

/// Press then release the trigger. Returns the snapshot of the press tick.
fn press(engine: &mut SimulationEngine, input: InputSample, dt: f32) -> FrameSnapshot {
    let snap = engine.tick(&input.firing(), dt);
    engine.tick(&input, dt);
    snap
}

fn shots_fired_in(snap: &FrameSnapshot) -> usize {
    snap.events
        .iter()
        .filter(|e| matches!(e, GameEvent::ShotFired { .. }))
        .count()
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let config = SimConfig {
        seed: 12345,
        ..Default::default()
    };
    let mut engine_a = SimulationEngine::new(config.clone());
    let mut engine_b = SimulationEngine::new(config);

    for i in 0..300 {
        let mut input = aim(Vec3::new(0.1, 0.0, 1.0));
        input.fire = i % 4 == 0;
        input.reload = i % 50 == 49;

        let json_a = serde_json::to_string(&engine_a.tick(&input, DT)).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick(&input, DT)).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = SimulationEngine::new(SimConfig {
        seed: 111,
        ..Default::default()
    });
    let mut engine_b = SimulationEngine::new(SimConfig {
        seed: 222,
        ..Default::default()
    });

    let idle = InputSample::default();
    let snap_a = engine_a.tick(&idle, DT);
    let snap_b = engine_b.tick(&idle, DT);
    assert_ne!(
        snap_a.targets, snap_b.targets,
        "Different seeds should place targets differently"
    );
}

// ---- Range setup ----

#[test]
fn test_initial_targets_within_bounds() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let snap = engine.tick(&InputSample::default(), DT);

    assert_eq!(snap.targets.len(), TARGET_COUNT);
    for (i, target) in snap.targets.iter().enumerate() {
        assert_eq!(target.id, i as u32);
        assert!(target.active);
        assert_eq!(target.scale, TARGET_SCALE);
        assert!(
            TARGET_BOUNDS.contains(target.position),
            "target {} spawned outside bounds at {}",
            target.id,
            target.position
        );
    }
}

#[test]
fn test_floor_spawned_once() {
    let engine = SimulationEngine::new(SimConfig::default());
    let floors = engine.world().query::<&Floor>().iter().count();
    assert_eq!(floors, 1);
}

#[test]
fn test_floor_scale_follows_preset() {
    for (preset, expected) in [
        (RangePreset::Distance, FLOOR_SCALE),
        (RangePreset::Arcade, FLOOR_SCALE_ARCADE),
    ] {
        let engine = SimulationEngine::new(SimConfig::preset(preset));
        let scales: Vec<Vec3> = engine
            .world()
            .query::<(&Floor, &Transform)>()
            .iter()
            .map(|(_, (_, transform))| transform.scale)
            .collect();
        assert_eq!(scales, vec![expected], "{preset:?}");
    }
}

#[test]
fn test_initial_hud_published_on_first_frame() {
    let mut engine = SimulationEngine::new(SimConfig::default());

    let first = engine.tick(&InputSample::default(), DT);
    assert_eq!(
        first.hud_updates,
        vec![HudUpdate::Ammo { count: 9 }, HudUpdate::Points { points: 0 }]
    );
    assert_eq!(first.hud.ammo_text, "Ammo:9");
    assert_eq!(first.hud.points_text, "Points:0");
    assert_eq!(first.ammo.capacity, MAGAZINE_CAPACITY);

    let second = engine.tick(&InputSample::default(), DT);
    assert!(second.hud_updates.is_empty());
}

#[test]
fn test_tick_timing_60_ticks_one_second() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    for _ in 0..FRAME_RATE {
        engine.tick(&InputSample::default(), DT);
    }
    let time = engine.time();
    assert_eq!(time.tick, FRAME_RATE as u64);
    assert_approx_eq!(time.elapsed_secs, 1.0, 1e-5);
}

// ---- Firing and ammo ----

#[test]
fn test_fire_spends_one_round() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let snap = engine.tick(&aim(Vec3::Z).firing(), DT);

    assert_eq!(snap.ammo.count, 8);
    assert_eq!(snap.hud.ammo_text, "Ammo:8");
    assert_eq!(engine.live_projectiles(), 1);
    assert_eq!(snap.projectiles.len(), 1);
    assert_eq!(snap.projectiles[0].shot, 1);
    assert_eq!(snap.projectiles[0].position, PLAYER_SPAWN_POINT);
    assert_eq!(shots_fired_in(&snap), 1);
    assert!(snap.hud_updates.contains(&HudUpdate::Ammo { count: 8 }));
}

#[test]
fn test_held_trigger_fires_once() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let held = aim(Vec3::Z).firing();
    for _ in 0..10 {
        engine.tick(&held, DT);
    }
    assert_eq!(engine.magazine().count(), 8);
    assert_eq!(engine.score().shots_fired, 1);

    // Release and press again: a second shot.
    engine.tick(&aim(Vec3::Z), DT);
    engine.tick(&held, DT);
    assert_eq!(engine.magazine().count(), 7);
}

#[test]
fn test_empty_magazine_spawns_nothing() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let input = aim(Vec3::Z);

    for fired in 1..=9 {
        let snap = press(&mut engine, input, DT);
        assert_eq!(snap.ammo.count, 9 - fired);
    }

    let snap = engine.tick(&input.firing(), DT);
    assert_eq!(snap.ammo.count, 0);
    assert_eq!(shots_fired_in(&snap), 0);
    assert_eq!(engine.score().shots_fired, 9);
    assert!(snap.projectiles.iter().all(|p| p.shot <= 9));
}

#[test]
fn test_reload_refills_immediately() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let input = aim(Vec3::Z);
    for _ in 0..6 {
        press(&mut engine, input, DT);
    }
    assert_eq!(engine.magazine().count(), 3);

    let snap = engine.tick(&input.reloading(), DT);
    assert_eq!(snap.ammo.count, 9);
    assert_eq!(snap.hud.ammo_text, "Ammo:9");
    assert!(snap.events.contains(&GameEvent::Reloaded { count: 9 }));
    assert!(snap.hud_updates.contains(&HudUpdate::Ammo { count: 9 }));
}

#[test]
fn test_reload_on_full_magazine_only_refreshes_hud() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.tick(&InputSample::default(), DT);

    let snap = engine.tick(&InputSample::default().reloading(), DT);
    assert_eq!(snap.ammo.count, 9);
    assert!(snap.events.is_empty());
    assert_eq!(snap.hud_updates, vec![HudUpdate::Ammo { count: 9 }]);
}

#[test]
fn test_fire_and_reload_same_tick() {
    // Reload runs before fire, so the shot comes out of a full magazine.
    let mut engine = SimulationEngine::new(SimConfig::default());
    let input = aim(Vec3::Z);
    for _ in 0..4 {
        press(&mut engine, input, DT);
    }
    let snap = engine.tick(&input.reloading().firing(), DT);
    assert_eq!(snap.ammo.count, 8);
}

#[test]
fn test_ammo_invariant_random_inputs() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut last_points = 0;
    let mut shots = 0;

    for _ in 0..1000 {
        let forward = Vec3::new(rng.gen_range(-0.3..0.3), 0.0, 1.0);
        let mut input = aim(forward);
        input.fire = rng.gen_bool(0.5);
        input.reload = rng.gen_bool(0.05);

        let snap = engine.tick(&input, DT);
        shots += shots_fired_in(&snap);

        assert!(snap.ammo.count <= MAGAZINE_CAPACITY);
        assert!(snap.score.points >= last_points, "score went down");
        assert_eq!(snap.targets.len(), TARGET_COUNT);
        assert!(snap
            .targets
            .iter()
            .all(|t| TARGET_BOUNDS.contains(t.position)));
        last_points = snap.score.points;
    }

    assert_eq!(engine.score().shots_fired as usize, shots);
}

// ---- Projectile flight ----

#[test]
fn test_projectile_hits_target_on_third_tick() {
    for (mode, expected) in [
        (ScoringMode::DistanceWeighted, 37),
        (ScoringMode::FlatRate { points: 10 }, 10),
    ] {
        let mut engine = SimulationEngine::new(lane_config(mode));
        engine.place_target(0, Vec3::new(0.0, 2.0, 37.0));
        clear_lane(&mut engine);
        let input = aim(Vec3::Z);

        let snap = engine.tick(&input.firing(), 1.0);
        assert_eq!(snap.ammo.count, 8);
        assert_eq!(engine.live_projectiles(), 1);

        for _ in 0..2 {
            let snap = engine.tick(&input, 1.0);
            assert_eq!(engine.live_projectiles(), 1);
            assert_eq!(snap.score.points, 0);
        }

        let snap = engine.tick(&input, 1.0);
        assert_eq!(snap.score.points, expected, "scoring {mode:?}");
        assert_eq!(snap.score.hits, 1);
        assert_eq!(snap.hud.points_text, format!("Points:{expected}"));
        assert_eq!(engine.live_projectiles(), 0);
        assert!(snap.projectiles.is_empty());

        let hit = snap
            .events
            .iter()
            .find_map(|e| match e {
                GameEvent::TargetHit {
                    target_id,
                    points_awarded,
                    distance,
                    ..
                } => Some((*target_id, *points_awarded, *distance)),
                _ => None,
            })
            .expect("expected a TargetHit event");
        assert_eq!(hit.0, 0);
        assert_eq!(hit.1, expected);
        assert_approx_eq!(hit.2, 37.0);

        let relocated = snap
            .events
            .iter()
            .find_map(|e| match e {
                GameEvent::TargetRelocated {
                    target_id: 0,
                    position,
                } => Some(*position),
                _ => None,
            })
            .expect("expected a TargetRelocated event");
        assert!(TARGET_BOUNDS.contains(relocated));
        assert_eq!(snap.targets[0].position, relocated);
        assert!(snap.events.contains(&GameEvent::ProjectileDestroyed {
            shot: 1,
            outcome: ProjectileOutcome::Hit,
        }));
        assert!(snap
            .hud_updates
            .contains(&HudUpdate::Points { points: expected }));
    }
}

#[test]
fn test_projectile_not_advanced_on_spawn_tick() {
    let mut engine = SimulationEngine::new(lane_config(ScoringMode::FlatRate { points: 10 }));
    // Target sits right on the muzzle.
    engine.place_target(0, PLAYER_SPAWN_POINT);
    clear_lane(&mut engine);
    let input = aim(Vec3::Z);

    let snap = engine.tick(&input.firing(), 1.0);
    assert_eq!(snap.score.points, 0);
    assert_eq!(engine.live_projectiles(), 1);

    let snap = engine.tick(&input, 1.0);
    assert_eq!(snap.score.points, 10);
    assert_eq!(engine.live_projectiles(), 0);
}

#[test]
fn test_projectile_expires_after_ttl() {
    let mut engine = SimulationEngine::new(SimConfig {
        projectile: Some(ProjectileProfile {
            speed: 1.0,
            ttl_secs: 3.0,
        }),
        ..Default::default()
    });
    // Away from the targets, which all sit at positive z.
    let input = aim(Vec3::NEG_Z);

    engine.tick(&input.firing(), 1.0);
    for _ in 0..2 {
        engine.tick(&input, 1.0);
        assert_eq!(engine.live_projectiles(), 1);
    }

    let snap = engine.tick(&input, 1.0);
    assert_eq!(engine.live_projectiles(), 0);
    assert_eq!(snap.score.points, 0);
    assert!(snap.events.contains(&GameEvent::ProjectileDestroyed {
        shot: 1,
        outcome: ProjectileOutcome::Expired,
    }));
}

#[test]
fn test_projectile_lifetime_at_frame_rate() {
    for preset in [RangePreset::Distance, RangePreset::Arcade] {
        let config = SimConfig::preset(preset);
        let ttl_ticks = (config.projectile_profile().ttl_secs * FRAME_RATE as f32).round() as u32;
        let mut engine = SimulationEngine::new(config);
        // Away from the targets, which all sit at positive z.
        let input = aim(Vec3::NEG_Z);

        engine.tick(&input.firing(), DT);
        let mut ticks = 0;
        while engine.live_projectiles() > 0 {
            engine.tick(&input, DT);
            ticks += 1;
            assert!(ticks <= ttl_ticks, "{preset:?}: round outlived {ttl_ticks} ticks");
        }
        assert_eq!(ticks, ttl_ticks, "{preset:?}");
    }
}

#[test]
fn test_projectile_moves_along_weapon_forward() {
    let mut engine = SimulationEngine::new(SimConfig {
        projectile: Some(ProjectileProfile {
            speed: 2.0,
            ttl_secs: 10.0,
        }),
        ..Default::default()
    });
    // Unnormalized forward gets normalized at spawn.
    let input = aim(Vec3::new(0.0, 0.0, -4.0));
    engine.tick(&input.firing(), 0.5);
    let snap = engine.tick(&input, 0.5);

    let projectile = &snap.projectiles[0];
    assert_eq!(projectile.direction, Vec3::NEG_Z);
    assert_approx_eq!(projectile.position.z, -1.0);
    assert_approx_eq!(projectile.age_secs, 0.5);
}

#[test]
fn test_projectiles_ignore_floor() {
    let mut engine = SimulationEngine::new(SimConfig {
        projectile: Some(ProjectileProfile {
            speed: 12.5,
            ttl_secs: 2.0,
        }),
        ..Default::default()
    });
    // Straight down through the floor slab.
    let input = aim(Vec3::NEG_Y);

    engine.tick(&input.firing(), 1.0);
    let snap = engine.tick(&input, 1.0);
    assert_eq!(engine.live_projectiles(), 1);
    assert_eq!(snap.score.hits, 0);

    let snap = engine.tick(&input, 1.0);
    assert_eq!(engine.live_projectiles(), 0);
    assert!(snap.events.contains(&GameEvent::ProjectileDestroyed {
        shot: 1,
        outcome: ProjectileOutcome::Expired,
    }));
}

#[test]
fn test_fast_round_does_not_tunnel() {
    // Default speed covers well over a thousand units per tick.
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.place_target(0, Vec3::new(0.0, 2.0, 60.0));
    clear_lane(&mut engine);
    let input = aim(Vec3::Z);

    engine.tick(&input.firing(), DT);
    let snap = engine.tick(&input, DT);
    assert_eq!(snap.score.hits, 1);
    assert_eq!(snap.score.points, 60);
}

#[test]
fn test_nearest_target_wins() {
    let mut engine = SimulationEngine::new(lane_config(ScoringMode::DistanceWeighted));
    clear_lane(&mut engine);
    engine.place_target(0, Vec3::new(0.0, 2.0, 10.0));
    engine.place_target(1, Vec3::new(0.0, 2.0, 6.0));
    let input = aim(Vec3::Z);

    engine.tick(&input.firing(), 1.0);
    let snap = engine.tick(&input, 1.0);
    assert!(snap.events.iter().any(|e| matches!(
        e,
        GameEvent::TargetHit { target_id: 1, .. }
    )));
    assert_eq!(snap.score.hits, 1);
}

// ---- Pluggable policies ----

#[test]
fn test_custom_scoring_policy() {
    let mut engine = SimulationEngine::new(lane_config(ScoringMode::DistanceWeighted))
        .with_scoring_policy(Box::new(|_: Vec3, _: Vec3| -> u32 { 7 }));
    engine.place_target(0, Vec3::new(0.0, 2.0, 37.0));
    clear_lane(&mut engine);
    let input = aim(Vec3::Z);

    engine.tick(&input.firing(), 1.0);
    for _ in 0..3 {
        engine.tick(&input, 1.0);
    }
    assert_eq!(engine.score().points, 7);
}

#[test]
fn test_custom_collision_provider() {
    let engine = SimulationEngine::new(lane_config(ScoringMode::FlatRate { points: 10 }));
    let Some(target) = engine.targets().by_id(3) else {
        panic!("target 3 missing");
    };
    let mut engine = engine.with_collision_provider(Box::new(
        move |_: &World, _: &Sweep| -> Option<Entity> { Some(target) },
    ));
    let input = aim(Vec3::NEG_Z);

    engine.tick(&input.firing(), 1.0);
    let snap = engine.tick(&input, 1.0);
    assert_eq!(snap.score.points, 10);
    assert!(snap.events.iter().any(|e| matches!(
        e,
        GameEvent::TargetHit { target_id: 3, .. }
    )));
}

#[test]
fn test_collision_provider_that_never_hits() {
    let mut engine = SimulationEngine::new(lane_config(ScoringMode::FlatRate { points: 10 }))
        .with_collision_provider(Box::new(|_: &World, _: &Sweep| -> Option<Entity> {
            None
        }));
    engine.place_target(0, Vec3::new(0.0, 2.0, 37.0));
    let input = aim(Vec3::Z);

    engine.tick(&input.firing(), 1.0);
    for _ in 0..5 {
        engine.tick(&input, 1.0);
    }
    assert_eq!(engine.score().points, 0);
    assert_eq!(engine.live_projectiles(), 0);
}

#[test]
fn test_distance_weighted_floors_distance() {
    let policy = DistanceWeighted;
    assert_eq!(policy.score(Vec3::ZERO, Vec3::new(3.0, 4.0, 0.0)), 5);
    assert_eq!(policy.score(Vec3::ZERO, Vec3::new(0.0, 0.0, 25.9)), 25);
    assert_eq!(FlatRate { points: 10 }.score(Vec3::ZERO, Vec3::splat(80.0)), 10);
}

#[test]
fn test_score_tracker_saturates() {
    let mut score = ScoreTracker {
        points: u32::MAX - 1,
        ..Default::default()
    };
    let awarded = score.award(&FlatRate { points: 10 }, Vec3::ZERO, Vec3::Z);
    assert_eq!(awarded, 10);
    assert_eq!(score.points, u32::MAX);
    assert_eq!(score.hits, 1);
}

#[test]
fn test_arcade_preset_flat_scoring() {
    let mut engine = SimulationEngine::new(SimConfig {
        projectile: Some(ProjectileProfile {
            speed: 12.5,
            ttl_secs: 5.0,
        }),
        ..SimConfig::preset(RangePreset::Arcade)
    });
    engine.place_target(0, Vec3::new(0.0, 2.0, 37.0));
    clear_lane(&mut engine);
    let input = aim(Vec3::Z);

    engine.tick(&input.firing(), 1.0);
    for _ in 0..3 {
        engine.tick(&input, 1.0);
    }
    assert_eq!(engine.score().points, FLAT_RATE_POINTS);
}

// ---- Targets ----

#[test]
fn test_target_count_constant_after_hits() {
    let mut engine = SimulationEngine::new(lane_config(ScoringMode::DistanceWeighted));
    let input = aim(Vec3::Z);
    for _ in 0..5 {
        engine.place_target(0, Vec3::new(0.0, 2.0, 30.0));
        clear_lane(&mut engine);
        press(&mut engine, input, 1.0);
        engine.tick(&input, 1.0);
        engine.tick(&input, 1.0);
    }
    assert_eq!(engine.score().hits, 5);
    assert_eq!(engine.targets().len(), TARGET_COUNT);
}

#[test]
fn test_respawn_only_moves_registered_targets() {
    let mut world = World::new();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut targets = TargetRegistry::new(TARGET_BOUNDS, TARGET_SCALE);
    targets.spawn_initial(&mut world, &mut rng, 3);
    let floor = world_setup::spawn_floor(&mut world, FLOOR_SCALE);

    assert_eq!(targets.len(), 3);
    assert!(!targets.contains(floor));
    assert!(targets.respawn(&mut world, &mut rng, floor).is_none());

    let Some(first) = targets.by_id(0) else {
        panic!("target 0 missing");
    };
    let moved = targets.respawn(&mut world, &mut rng, first);
    assert!(moved.is_some_and(|p| TARGET_BOUNDS.contains(p)));
}

// ---- Player and weapon ----

#[test]
fn test_fall_recovery() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let fallen = Vec3::new(0.0, -6.0, 0.0);

    let snap = engine.tick(&InputSample::idle(fallen), DT);
    assert_eq!(snap.player.position, PLAYER_SPAWN_POINT);
    assert_eq!(engine.player_position(), PLAYER_SPAWN_POINT);
    assert!(snap.events.contains(&GameEvent::PlayerRecovered {
        from: fallen,
        to: PLAYER_SPAWN_POINT,
    }));
}

#[test]
fn test_no_recovery_at_threshold() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let edge = Vec3::new(3.0, FALL_THRESHOLD_Y, 1.0);
    let snap = engine.tick(&InputSample::idle(edge), DT);
    assert_eq!(snap.player.position, edge);
    assert!(snap.events.is_empty());
}

#[test]
fn test_recoil_follows_trigger() {
    let mut engine = SimulationEngine::new(SimConfig::default());

    let snap = engine.tick(&aim(Vec3::Z).firing(), DT);
    assert!(snap.weapon.recoil_active);
    assert_eq!(snap.weapon.offset, WEAPON_RECOIL_OFFSET);

    // Held with no new edge: recoil stays.
    let snap = engine.tick(&aim(Vec3::Z).firing(), DT);
    assert!(snap.weapon.recoil_active);

    let snap = engine.tick(&aim(Vec3::Z), DT);
    assert!(!snap.weapon.recoil_active);
    assert_eq!(snap.weapon.offset, WEAPON_IDLE_OFFSET);

    let mut arcade = SimulationEngine::new(SimConfig::preset(RangePreset::Arcade));
    let snap = arcade.tick(&aim(Vec3::Z).firing(), DT);
    assert_eq!(snap.weapon.offset, WEAPON_RECOIL_OFFSET_ARCADE);
}

// ---- Quit ----

#[test]
fn test_quit_terminates() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.tick(&InputSample::default(), DT);

    let snap = engine.tick(&aim(Vec3::Z).firing().quitting(), DT);
    assert_eq!(snap.phase, GamePhase::Terminated);
    assert_eq!(engine.phase(), GamePhase::Terminated);
    assert!(snap.events.contains(&GameEvent::Quit));
    // Quit wins over fire in the same tick.
    assert_eq!(snap.ammo.count, 9);

    let tick_at_quit = engine.time().tick;
    let snap = engine.tick(&aim(Vec3::Z).firing(), DT);
    assert_eq!(engine.time().tick, tick_at_quit);
    assert_eq!(snap.ammo.count, 9);
    assert!(snap.events.is_empty());
    assert_eq!(engine.world().query::<&Projectile>().iter().count(), 0);
}

// ---- Snapshot ----

#[test]
fn test_snapshot_size_small() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let input = aim(Vec3::Z);
    for _ in 0..3 {
        press(&mut engine, input, DT);
    }
    let snap = engine.tick(&input.firing(), DT);
    let json = serde_json::to_string(&snap).unwrap();
    assert!(
        json.len() < 8 * 1024,
        "Snapshot should stay small, was {} bytes",
        json.len()
    );
    let back: FrameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.ammo, snap.ammo);
    assert_eq!(back.targets.len(), TARGET_COUNT);
}
