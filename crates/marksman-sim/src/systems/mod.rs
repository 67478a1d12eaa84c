//! Systems that operate on the simulation world each tick.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for
//! read-only) plus the engine state they touch. They own no state
//! themselves. The engine calls them in a fixed order.

pub mod bounds;
pub mod projectile;
pub mod snapshot;
pub mod weapon;

use marksman_core::events::{GameEvent, HudUpdate};

/// Everything a tick publishes besides world state.
#[derive(Debug, Clone, Default)]
pub struct FrameOutbox {
    pub events: Vec<GameEvent>,
    pub hud: Vec<HudUpdate>,
}

impl FrameOutbox {
    pub fn event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn hud(&mut self, update: HudUpdate) {
        self.hud.push(update);
    }
}
