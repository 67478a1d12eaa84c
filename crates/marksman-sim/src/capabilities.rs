//! Capability traits for entity views.
//!
//! Entities are plain component bundles in the hecs world. Systems copy the
//! components they need into a body view, work on the view through these
//! traits, then write the result back.

use glam::Vec3;

use marksman_core::components::{BoxCollider, Projectile, Target, Transform};
use marksman_core::types::Aabb;

use crate::collision::Sweep;

/// Slack for the summed `dt` steps in a projectile's age: 180 steps of
/// 1/60 s add up to slightly less than 3.0 in `f32`.
const AGE_TOLERANCE_SECS: f32 = 1e-3;

/// Has a world position.
pub trait Positioned {
    fn position(&self) -> Vec3;
}

/// Has a world-space bounding volume.
pub trait Collidable: Positioned {
    fn bounds(&self) -> Aabb;
}

/// Advances itself once per tick.
pub trait Tickable {
    /// Move forward by `dt` seconds and return the volume swept this tick.
    fn advance(&mut self, dt: f32) -> Sweep;

    /// True once the body has outlived its deadline.
    fn expired(&self) -> bool;
}

/// Copied view of a target entity.
#[derive(Debug, Clone, Copy)]
pub struct TargetBody {
    pub target: Target,
    pub transform: Transform,
    pub collider: BoxCollider,
}

impl Positioned for TargetBody {
    fn position(&self) -> Vec3 {
        self.transform.position
    }
}

impl Collidable for TargetBody {
    fn bounds(&self) -> Aabb {
        Aabb::from_center(self.transform.position, self.collider.half_extents)
    }
}

/// Copied view of a projectile entity.
#[derive(Debug, Clone, Copy)]
pub struct ProjectileBody {
    pub projectile: Projectile,
    pub transform: Transform,
    pub collider: BoxCollider,
}

impl Positioned for ProjectileBody {
    fn position(&self) -> Vec3 {
        self.transform.position
    }
}

impl Collidable for ProjectileBody {
    fn bounds(&self) -> Aabb {
        Aabb::from_center(self.transform.position, self.collider.half_extents)
    }
}

impl Tickable for ProjectileBody {
    fn advance(&mut self, dt: f32) -> Sweep {
        let start = self.transform.position;
        let end = start + self.projectile.direction * self.projectile.speed * dt;
        self.transform.position = end;
        self.projectile.age_secs += dt;
        Sweep {
            start,
            end,
            half_extents: self.collider.half_extents,
        }
    }

    fn expired(&self) -> bool {
        self.projectile.age_secs + AGE_TOLERANCE_SECS >= self.projectile.ttl_secs
    }
}
