//! Target registry: the fixed set of targets on the range.
//!
//! Targets are spawned once and relocated on every hit. Nothing removes
//! them, so the count is constant for the life of the engine.

use glam::Vec3;
use hecs::{Entity, World};
use log::debug;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use marksman_core::components::{BoxCollider, Target, Transform};
use marksman_core::types::SpawnBounds;

/// Owns the handles of every target entity.
#[derive(Debug, Clone)]
pub struct TargetRegistry {
    entities: Vec<Entity>,
    bounds: SpawnBounds,
    scale: Vec3,
}

impl TargetRegistry {
    pub fn new(bounds: SpawnBounds, scale: Vec3) -> Self {
        Self {
            entities: Vec::new(),
            bounds,
            scale,
        }
    }

    /// Spawn `count` targets, each at an independently sampled position.
    pub fn spawn_initial(&mut self, world: &mut World, rng: &mut ChaCha8Rng, count: usize) {
        for _ in 0..count {
            let id = self.entities.len() as u32;
            let position = sample_position(&self.bounds, rng);
            let entity = world.spawn((
                Target { id, active: true },
                Transform {
                    position,
                    scale: self.scale,
                },
                BoxCollider {
                    half_extents: self.scale * 0.5,
                },
            ));
            debug!("target {id} spawned at {position}");
            self.entities.push(entity);
        }
    }

    /// Move a target to a fresh random position within bounds.
    /// Returns the new position, or `None` if `entity` is not a registered target.
    pub fn respawn(
        &self,
        world: &mut World,
        rng: &mut ChaCha8Rng,
        entity: Entity,
    ) -> Option<Vec3> {
        if !self.contains(entity) {
            return None;
        }
        let position = sample_position(&self.bounds, rng);
        let mut transform = world.get::<&mut Transform>(entity).ok()?;
        transform.position = position;
        Some(position)
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.entities.contains(&entity)
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn bounds(&self) -> &SpawnBounds {
        &self.bounds
    }

    /// Entity of the target with the given id.
    pub fn by_id(&self, id: u32) -> Option<Entity> {
        self.entities.get(id as usize).copied()
    }
}

/// Uniform sample inside the inclusive bounds.
pub fn sample_position(bounds: &SpawnBounds, rng: &mut ChaCha8Rng) -> Vec3 {
    Vec3::new(
        rng.gen_range(bounds.x.0..=bounds.x.1),
        rng.gen_range(bounds.y.0..=bounds.y.1),
        rng.gen_range(bounds.z.0..=bounds.z.1),
    )
}
