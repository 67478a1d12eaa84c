//! Fall recovery: players below the floor threshold are teleported back
//! to the spawn point.

use hecs::World;
use log::debug;

use marksman_core::components::{Player, Transform};
use marksman_core::constants::{FALL_THRESHOLD_Y, PLAYER_SPAWN_POINT};
use marksman_core::events::GameEvent;

use super::FrameOutbox;

/// Write the externally controlled player position into the mirror entity.
pub fn sync_player(world: &mut World, position: glam::Vec3) {
    for (_entity, (_player, transform)) in world.query_mut::<(&Player, &mut Transform)>() {
        transform.position = position;
    }
}

/// Teleport any player below the threshold. Unconditional, not physics.
pub fn run(world: &mut World, outbox: &mut FrameOutbox) {
    for (_entity, (_player, transform)) in world.query_mut::<(&Player, &mut Transform)>() {
        if transform.position.y < FALL_THRESHOLD_Y {
            let from = transform.position;
            transform.position = PLAYER_SPAWN_POINT;
            debug!("player fell to {from}, recovered at {PLAYER_SPAWN_POINT}");
            outbox.event(GameEvent::PlayerRecovered {
                from,
                to: PLAYER_SPAWN_POINT,
            });
        }
    }
}
