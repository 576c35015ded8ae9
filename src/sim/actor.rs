//! Player vertical kinematics and pose selection
//!
//! The actor runs in place; only its vertical motion is simulated. Order
//! within a frame matters and is fixed: integrate position, animate if
//! grounded, resolve the ground contact, then accept a jump edge. The run
//! cycle only advances while grounded, so the jump pose holds its frame.

use super::state::{GameEvent, Player, SoundKind};
use crate::consts::*;

/// Is the actor resting on (or below) the ground line for its footprint?
fn on_ground(player: &Player) -> bool {
    player.pos.y >= FIELD_HEIGHT - player.footprint().y
}

/// Advance the actor by one Gameplay frame
pub fn update(player: &mut Player, jump_pressed: bool, dt: f32, events: &mut Vec<GameEvent>) {
    player.pos.y += player.velocity_y * dt;

    if !player.airborne {
        player.clip.advance(dt, PLAYER_RUN_MAX_FRAME);
    }

    if on_ground(player) {
        player.velocity_y = 0.0;
        player.airborne = false;
        // Snap to the ground line so repeated landings don't drift
        player.pos.y = FIELD_HEIGHT - player.footprint().y;
    } else {
        player.velocity_y += GRAVITY * dt;
        player.airborne = true;
    }

    if jump_pressed && !player.airborne {
        player.velocity_y = JUMP_IMPULSE;
        events.push(GameEvent::PlaySound(SoundKind::Jump));
    }
}
