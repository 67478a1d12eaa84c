//! Weapon system: reload, trigger sampling and shot requests.

use log::debug;

use marksman_core::events::{GameEvent, HudUpdate};
use marksman_core::input::InputSample;
use marksman_weapon::{AmmoMagazine, TriggerSample, WeaponController};

use super::FrameOutbox;

/// Reload while the reload control is held. Re-applied every tick it is
/// held, and the HUD is refreshed each time.
pub fn run_reload(magazine: &mut AmmoMagazine, input: &InputSample, outbox: &mut FrameOutbox) {
    if !input.reload {
        return;
    }

    let was_full = magazine.is_full();
    magazine.reload();
    if !was_full {
        debug!("reloaded to {}", magazine.count());
        outbox.event(GameEvent::Reloaded {
            count: magazine.count(),
        });
    }
    outbox.hud(HudUpdate::Ammo {
        count: magazine.count(),
    });
}

/// Sample the trigger. Recoil follows the held level; the returned edge
/// decides whether a shot is requested.
pub fn run_trigger(controller: &mut WeaponController, input: &InputSample) -> TriggerSample {
    controller.sample(input.fire)
}

/// Spend a round for a fresh trigger press.
///
/// Returns true when a projectile should be spawned. A press on an empty
/// magazine is silently ignored.
pub fn run_fire(
    magazine: &mut AmmoMagazine,
    trigger: &TriggerSample,
    outbox: &mut FrameOutbox,
) -> bool {
    if !trigger.fire_edge || !magazine.consume() {
        return false;
    }
    outbox.hud(HudUpdate::Ammo {
        count: magazine.count(),
    });
    true
}
