//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world and every piece of gameplay
//! state (magazine, score, targets, live projectiles). The host calls
//! [`SimulationEngine::tick`] once per rendered frame with that frame's
//! input and delta time. Completely headless, enabling deterministic
//! testing.

use glam::Vec3;
use hecs::{Entity, World};
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use marksman_core::config::{ProjectileProfile, SimConfig};
use marksman_core::components::{Projectile, Transform};
use marksman_core::constants::{PLAYER_SPAWN_POINT, TARGET_BOUNDS, TARGET_SCALE};
use marksman_core::enums::GamePhase;
use marksman_core::events::{GameEvent, HudUpdate};
use marksman_core::input::InputSample;
use marksman_core::state::{FrameSnapshot, HudView};
use marksman_core::types::SimTime;
use marksman_weapon::{AmmoMagazine, WeaponController};

use crate::collision::{CollisionProvider, TargetSweepCollider};
use crate::scoring::{policy_for, ScoreTracker, ScoringPolicy};
use crate::systems;
use crate::systems::projectile::ProjectileContext;
use crate::systems::FrameOutbox;
use crate::targets::TargetRegistry;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    config: SimConfig,
    projectile_profile: ProjectileProfile,
    magazine: AmmoMagazine,
    controller: WeaponController,
    targets: TargetRegistry,
    score: ScoreTracker,
    scoring: Box<dyn ScoringPolicy>,
    collider: Box<dyn CollisionProvider>,
    player: Entity,
    next_shot: u32,
    despawn_buffer: Vec<Entity>,
    outbox: FrameOutbox,
}

impl SimulationEngine {
    /// Create a new engine with the range already set up and running.
    pub fn new(config: SimConfig) -> Self {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut targets = TargetRegistry::new(TARGET_BOUNDS, TARGET_SCALE);
        let player = world_setup::setup_range(
            &mut world,
            &mut rng,
            &mut targets,
            config.target_count,
            config.floor_scale(),
        );

        let magazine = AmmoMagazine::new(config.magazine_capacity);
        let score = ScoreTracker::default();

        // First frame publishes the starting HUD.
        let mut outbox = FrameOutbox::default();
        outbox.hud(HudUpdate::Ammo {
            count: magazine.count(),
        });
        outbox.hud(HudUpdate::Points {
            points: score.points,
        });

        info!(
            "range ready: seed={} preset={:?} scoring={:?} targets={}",
            config.seed,
            config.preset,
            config.scoring_mode(),
            targets.len()
        );

        Self {
            world,
            time: SimTime::default(),
            phase: GamePhase::Running,
            rng,
            projectile_profile: config.projectile_profile(),
            magazine,
            controller: WeaponController::new(config.recoil_offset()),
            targets,
            score,
            scoring: policy_for(config.scoring_mode()),
            collider: Box::new(TargetSweepCollider),
            player,
            next_shot: 0,
            despawn_buffer: Vec::new(),
            outbox,
            config,
        }
    }

    /// Replace the scoring rule.
    pub fn with_scoring_policy(mut self, policy: Box<dyn ScoringPolicy>) -> Self {
        self.scoring = policy;
        self
    }

    /// Replace the collision provider (e.g. with an external physics engine).
    pub fn with_collision_provider(mut self, provider: Box<dyn CollisionProvider>) -> Self {
        self.collider = provider;
        self
    }

    /// Advance the simulation by one frame and return the resulting snapshot.
    ///
    /// Order within a tick: input sampling, quit, reload, trigger/recoil,
    /// fire, projectile advancement, fall recovery.
    pub fn tick(&mut self, input: &InputSample, dt: f32) -> FrameSnapshot {
        if self.phase == GamePhase::Terminated {
            return self.snapshot();
        }

        let dt = dt.max(0.0);
        systems::bounds::sync_player(&mut self.world, input.player_position);

        // 1. Quit
        if input.quit {
            info!(
                "quit at tick {} with {} points",
                self.time.tick, self.score.points
            );
            self.phase = GamePhase::Terminated;
            self.outbox.event(GameEvent::Quit);
            return self.snapshot();
        }

        // 2. Reload
        systems::weapon::run_reload(&mut self.magazine, input, &mut self.outbox);

        // 3. Trigger sample and recoil
        let trigger = systems::weapon::run_trigger(&mut self.controller, input);

        // 4. Fire
        if systems::weapon::run_fire(&mut self.magazine, &trigger, &mut self.outbox) {
            self.next_shot += 1;
            self.score.record_shot();
            let entity = systems::projectile::spawn(
                &mut self.world,
                &input.weapon,
                self.projectile_profile,
                &self.time,
                self.next_shot,
            );
            if let Ok(mut query) = self.world.query_one::<(&Transform, &Projectile)>(entity) {
                if let Some((transform, projectile)) = query.get() {
                    self.outbox.event(GameEvent::ShotFired {
                        shot: projectile.shot,
                        origin: transform.position,
                        direction: projectile.direction,
                    });
                }
            }
        }

        // 5. Projectiles
        let mut ctx = ProjectileContext {
            targets: &self.targets,
            rng: &mut self.rng,
            collider: self.collider.as_ref(),
            scoring: self.scoring.as_ref(),
            score: &mut self.score,
            player_position: input.player_position,
        };
        systems::projectile::run(
            &mut self.world,
            &mut ctx,
            &mut self.outbox,
            &mut self.despawn_buffer,
            dt,
            self.time.tick,
        );

        // 6. Fall recovery
        systems::bounds::run(&mut self.world, &mut self.outbox);

        self.time.advance(dt);
        self.snapshot()
    }

    /// Drain this tick's outbox into a snapshot.
    fn snapshot(&mut self) -> FrameSnapshot {
        let outbox = std::mem::take(&mut self.outbox);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.magazine,
            &self.score,
            &self.controller.pose(),
            outbox,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn magazine(&self) -> &AmmoMagazine {
        &self.magazine
    }

    pub fn score(&self) -> &ScoreTracker {
        &self.score
    }

    pub fn targets(&self) -> &TargetRegistry {
        &self.targets
    }

    pub fn hud(&self) -> HudView {
        systems::snapshot::build_hud(&self.magazine, &self.score)
    }

    pub fn player_position(&self) -> Vec3 {
        self.world
            .get::<&Transform>(self.player)
            .map(|t| t.position)
            .unwrap_or(PLAYER_SPAWN_POINT)
    }

    /// Number of projectiles currently in flight.
    pub fn live_projectiles(&self) -> usize {
        self.world.query::<&Projectile>().iter().count()
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Move a target to an exact position (for tests needing a clear lane).
    #[cfg(test)]
    pub fn place_target(&mut self, id: u32, position: Vec3) {
        if let Some(entity) = self.targets.by_id(id) {
            if let Ok(mut transform) = self.world.get::<&mut Transform>(entity) {
                transform.position = position;
            }
        }
    }
}
