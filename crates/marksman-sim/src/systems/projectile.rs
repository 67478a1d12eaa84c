//! Projectile system: spawns rounds, advances them, resolves hits and
//! expiry.
//!
//! A round is created only by a fresh trigger press with ammo available.
//! It is not advanced on the tick it was spawned, so its first collision
//! query happens one tick later. Every round is destroyed on its first hit
//! or once its age reaches its ttl, whichever comes first.

use glam::Vec3;
use hecs::{Entity, World};
use log::debug;
use rand_chacha::ChaCha8Rng;

use marksman_core::components::{BoxCollider, Projectile, Target, Transform};
use marksman_core::config::ProjectileProfile;
use marksman_core::constants::{MUZZLE_OFFSET, PROJECTILE_SCALE};
use marksman_core::enums::ProjectileOutcome;
use marksman_core::events::{GameEvent, HudUpdate};
use marksman_core::input::WeaponPose;
use marksman_core::types::SimTime;

use crate::capabilities::{ProjectileBody, Tickable};
use crate::collision::CollisionProvider;
use crate::scoring::{ScoreTracker, ScoringPolicy};
use crate::targets::TargetRegistry;

use super::FrameOutbox;

/// Result of advancing one projectile by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    InFlight,
    Hit { target: Entity },
    Expired,
}

/// Shared state the projectile system reads and mutates during a tick.
pub struct ProjectileContext<'a> {
    pub targets: &'a TargetRegistry,
    pub rng: &'a mut ChaCha8Rng,
    pub collider: &'a dyn CollisionProvider,
    pub scoring: &'a dyn ScoringPolicy,
    pub score: &'a mut ScoreTracker,
    pub player_position: Vec3,
}

/// Create a round at the muzzle, travelling along the weapon's forward axis.
pub fn spawn(
    world: &mut World,
    pose: &WeaponPose,
    profile: ProjectileProfile,
    time: &SimTime,
    shot: u32,
) -> Entity {
    let direction = pose.forward.try_normalize().unwrap_or(Vec3::Z);
    let origin = pose.position + MUZZLE_OFFSET;

    debug!("shot {shot} fired from {origin} toward {direction}");

    world.spawn((
        Projectile {
            direction,
            speed: profile.speed,
            spawn_tick: time.tick,
            spawn_time_secs: time.elapsed_secs,
            age_secs: 0.0,
            ttl_secs: profile.ttl_secs,
            shot,
        },
        Transform {
            position: origin,
            scale: PROJECTILE_SCALE,
        },
        BoxCollider {
            half_extents: PROJECTILE_SCALE * 0.5,
        },
    ))
}

/// Advance one projectile by `dt` and query for a hit along the way.
///
/// Writes the new position and age back to the entity but never despawns;
/// the caller acts on the result.
pub fn tick(
    world: &mut World,
    entity: Entity,
    dt: f32,
    collider: &dyn CollisionProvider,
) -> TickResult {
    let mut body = {
        let Ok(mut query) = world.query_one::<(&Projectile, &Transform, &BoxCollider)>(entity)
        else {
            return TickResult::Expired;
        };
        let Some((projectile, transform, box_collider)) = query.get() else {
            return TickResult::Expired;
        };
        ProjectileBody {
            projectile: *projectile,
            transform: *transform,
            collider: *box_collider,
        }
    };

    let sweep = body.advance(dt);

    if let Ok(mut projectile) = world.get::<&mut Projectile>(entity) {
        *projectile = body.projectile;
    }
    if let Ok(mut transform) = world.get::<&mut Transform>(entity) {
        *transform = body.transform;
    }

    if let Some(target) = collider.first_hit(world, &sweep) {
        return TickResult::Hit { target };
    }
    if body.expired() {
        return TickResult::Expired;
    }
    TickResult::InFlight
}

/// Advance every live projectile spawned before `current_tick`.
pub fn run(
    world: &mut World,
    ctx: &mut ProjectileContext<'_>,
    outbox: &mut FrameOutbox,
    despawn_buffer: &mut Vec<Entity>,
    dt: f32,
    current_tick: u64,
) {
    despawn_buffer.clear();

    let mut live: Vec<(u32, Entity)> = world
        .query::<&Projectile>()
        .iter()
        .filter(|(_, projectile)| projectile.spawn_tick < current_tick)
        .map(|(entity, projectile)| (projectile.shot, entity))
        .collect();
    // Oldest shot first, so simultaneous hits resolve in firing order.
    live.sort_by_key(|&(shot, _)| shot);

    for (shot, entity) in live {
        match tick(world, entity, dt, ctx.collider) {
            TickResult::InFlight => {}
            TickResult::Hit { target } => {
                resolve_hit(world, ctx, outbox, shot, target);
                outbox.event(GameEvent::ProjectileDestroyed {
                    shot,
                    outcome: ProjectileOutcome::Hit,
                });
                despawn_buffer.push(entity);
            }
            TickResult::Expired => {
                debug!("shot {shot} expired");
                outbox.event(GameEvent::ProjectileDestroyed {
                    shot,
                    outcome: ProjectileOutcome::Expired,
                });
                despawn_buffer.push(entity);
            }
        }

        // Destroy immediately so later rounds this tick never see it.
        for dead in despawn_buffer.drain(..) {
            let _ = world.despawn(dead);
        }
    }
}

/// Score the hit against the target's pre-hit position, then relocate it.
fn resolve_hit(
    world: &mut World,
    ctx: &mut ProjectileContext<'_>,
    outbox: &mut FrameOutbox,
    shot: u32,
    target: Entity,
) {
    let Some((target_id, target_position)) = world
        .query_one_mut::<(&Target, &Transform)>(target)
        .ok()
        .map(|(t, transform)| (t.id, transform.position))
    else {
        return;
    };

    let distance = ctx.player_position.distance(target_position);
    let points = ctx
        .score
        .award(ctx.scoring, ctx.player_position, target_position);

    debug!(
        "shot {shot} hit target {target_id} at {distance:.1} units for {points} points (total {})",
        ctx.score.points
    );

    outbox.event(GameEvent::TargetHit {
        shot,
        target_id,
        points_awarded: points,
        distance,
    });
    outbox.hud(HudUpdate::Points {
        points: ctx.score.points,
    });

    if let Some(position) = ctx.targets.respawn(world, ctx.rng, target) {
        outbox.event(GameEvent::TargetRelocated {
            target_id,
            position,
        });
    }
}
