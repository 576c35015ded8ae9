//! Collision detection and response
//!
//! Everything is an axis-aligned rectangle anchored at its top-left.
//! Pickups are resolved before hazards each frame, so a heal collected in
//! the same frame as a hit still counts.

use glam::Vec2;

use super::anim::OneShotClip;
use super::pool::SlotPool;
use super::state::{GameEvent, Hazard, HealthState, Pickup, Player, SoundKind};
use crate::consts::{GRACE_DURATION, PICKUP_HEIGHT, PICKUP_WIDTH};

/// Axis-aligned rectangle intersection (top-left anchored)
pub fn overlaps(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    a_pos.x < b_pos.x + b_size.x
        && b_pos.x < a_pos.x + a_size.x
        && a_pos.y < b_pos.y + b_size.y
        && b_pos.y < a_pos.y + a_size.y
}

/// Collect every pickup overlapping the actor. A pickup is always consumed
/// on contact; it only heals (and sounds) when there is headroom.
pub(crate) fn collect_pickups(
    player: &Player,
    pickups: &mut SlotPool<Pickup>,
    health: &mut HealthState,
    events: &mut Vec<GameEvent>,
) {
    let footprint = player.footprint();
    let eaten: Vec<usize> = pickups
        .iter_active()
        .filter(|(_, p)| {
            overlaps(
                player.pos,
                footprint,
                p.pos,
                Vec2::new(PICKUP_WIDTH, PICKUP_HEIGHT),
            )
        })
        .map(|(i, _)| i)
        .collect();

    for index in eaten {
        if health.current < health.max {
            health.current += 1;
            events.push(GameEvent::PlaySound(SoundKind::Eat));
        }
        pickups.free(index);
    }
}

/// Apply hazard damage for this frame.
///
/// While the grace window is open it runs down by `dt` and no hazard is
/// even tested. Otherwise the first overlapping hazard in slot order is
/// processed and the rest wait for a later frame. Returns true when the
/// hit was fatal; the caller owns the phase transition.
pub(crate) fn resolve_hazards(
    player: &Player,
    hazards: &mut SlotPool<Hazard>,
    health: &mut HealthState,
    impact: &mut OneShotClip,
    dt: f32,
    events: &mut Vec<GameEvent>,
) -> bool {
    if health.grace_active() {
        health.grace_remaining = (health.grace_remaining - dt).max(0.0);
        return false;
    }

    let footprint = player.footprint();
    let hit = hazards
        .iter_active()
        .find(|(_, h)| overlaps(player.pos, footprint, h.pos, h.kind.footprint()))
        .map(|(i, h)| (i, h.pos.x));

    let Some((index, hazard_x)) = hit else {
        return false;
    };

    health.current -= 1;
    if health.current == 0 {
        events.push(GameEvent::PlaySound(SoundKind::Meow));
        return true;
    }

    events.push(GameEvent::PlaySound(SoundKind::Impact));
    health.grace_remaining = GRACE_DURATION;
    impact.trigger(Vec2::new(hazard_x, player.pos.y));
    hazards.free(index);
    false
}
