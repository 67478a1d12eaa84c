//! Collision queries for projectiles.
//!
//! Rounds travel far enough per tick to skip clean over a target, so the
//! query tests the whole volume a round swept this tick rather than its end
//! position.

use glam::Vec3;
use hecs::{Entity, World};

use marksman_core::components::{BoxCollider, Target, Transform};

use crate::capabilities::{Collidable, TargetBody};

/// Box of `half_extents` moved from `start` to `end` during one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sweep {
    pub start: Vec3,
    pub end: Vec3,
    pub half_extents: Vec3,
}

/// Answers "what did this sweep hit?".
///
/// Implementations must only ever report registered targets: never the
/// floor, the weapon or another projectile.
pub trait CollisionProvider {
    fn first_hit(&self, world: &World, sweep: &Sweep) -> Option<Entity>;
}

/// Built-in provider: swept box against every target box, nearest entry wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct TargetSweepCollider;

impl CollisionProvider for TargetSweepCollider {
    fn first_hit(&self, world: &World, sweep: &Sweep) -> Option<Entity> {
        let mut nearest: Option<(f32, Entity)> = None;

        for (entity, (target, transform, collider)) in world
            .query::<(&Target, &Transform, &BoxCollider)>()
            .iter()
        {
            if !target.active {
                continue;
            }

            let body = TargetBody {
                target: *target,
                transform: *transform,
                collider: *collider,
            };
            let bounds = body.bounds().expanded(sweep.half_extents);

            if let Some(entry) = bounds.segment_entry(sweep.start, sweep.end) {
                if nearest.map_or(true, |(best, _)| entry < best) {
                    nearest = Some((entry, entity));
                }
            }
        }

        nearest.map(|(_, entity)| entity)
    }
}

impl<F> CollisionProvider for F
where
    F: Fn(&World, &Sweep) -> Option<Entity>,
{
    fn first_hit(&self, world: &World, sweep: &Sweep) -> Option<Entity> {
        self(world, sweep)
    }
}
