//! Per-frame state machine
//!
//! One `tick` per host frame. The host supplies the frame's elapsed time,
//! its input edges, a monotonic clock reading and the session RNG; the
//! tick mutates [`GameState`] and returns the notifications the host's
//! audio layer should act on. Nothing here blocks or suspends.

use rand::Rng;

use super::actor;
use super::collision;
use super::pool::SlotPool;
use super::state::{
    GameEvent, GamePhase, GameState, Hazard, MusicTrack, Pickup, SoundKind,
};
use crate::consts::*;

/// Input edges for a single frame. All fields are pressed-this-frame
/// queries; edges that don't apply to the current phase are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Jump (Gameplay)
    pub jump: bool,
    /// Start the game (Intro)
    pub start: bool,
    /// Move the retry selection up (GameOver)
    pub menu_up: bool,
    /// Move the retry selection down (GameOver)
    pub menu_down: bool,
    /// Confirm the retry selection (GameOver)
    pub confirm: bool,
}

/// Advance the game by one frame
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    dt: f32,
    now: f64,
    rng: &mut impl Rng,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    match state.phase {
        GamePhase::Intro => tick_intro(state, input, now, &mut events),
        GamePhase::Countdown => tick_countdown(state, now, &mut events),
        GamePhase::Gameplay => tick_gameplay(state, input, dt, rng, &mut events),
        GamePhase::GameOver => tick_game_over(state, input, now),
    }
    events
}

fn tick_intro(state: &mut GameState, input: &TickInput, now: f64, events: &mut Vec<GameEvent>) {
    state.set_music(Some(MusicTrack::Menu), events);
    if input.start {
        state.set_music(None, events);
        state.countdown.begin(now);
        state.phase = GamePhase::Countdown;
    }
}

fn tick_countdown(state: &mut GameState, now: f64, events: &mut Vec<GameEvent>) {
    let elapsed = now - state.countdown.last_tick_at;
    if state.countdown.value >= 0 {
        if elapsed >= 1.0 {
            state.countdown.value -= 1;
            if state.countdown.value >= 0 {
                state.countdown.last_tick_at = now;
                events.push(GameEvent::PlaySound(SoundKind::Alarm));
            } else {
                // The "go" beat: the timestamp is left alone so the extra
                // delay below is measured from the final visible tick.
                events.push(GameEvent::PlaySound(SoundKind::Angry));
            }
        }
    } else if elapsed >= 1.0 + COUNTDOWN_GO_DELAY {
        state.reset_session();
        state.phase = GamePhase::Gameplay;
    }
}

fn tick_gameplay(
    state: &mut GameState,
    input: &TickInput,
    dt: f32,
    rng: &mut impl Rng,
    events: &mut Vec<GameEvent>,
) {
    state.set_music(Some(MusicTrack::Gameplay), events);
    state.stats.elapsed += dt as f64;

    actor::update(&mut state.player, input.jump, dt, events);

    state.ground_lane.update(&mut state.hazards, dt, rng);
    state.air_lane.update(&mut state.hazards, dt, rng);
    state.pickup_lane.update(&mut state.pickups, dt, rng);

    advance_hazards(&mut state.hazards, dt);
    advance_pickups(&mut state.pickups, dt);
    state.impact.advance(dt);

    collision::collect_pickups(&state.player, &mut state.pickups, &mut state.health, events);
    let fatal = collision::resolve_hazards(
        &state.player,
        &mut state.hazards,
        &mut state.health,
        &mut state.impact,
        dt,
        events,
    );
    if fatal {
        state.player.velocity_y = 0.0;
        state.player.airborne = false;
        state.retry_selected = true;
        state.set_music(None, events);
        state.phase = GamePhase::GameOver;
    }
}

fn tick_game_over(state: &mut GameState, input: &TickInput, now: f64) {
    if input.menu_up {
        state.retry_selected = true;
    }
    if input.menu_down {
        state.retry_selected = false;
    }
    if input.confirm {
        state.countdown.begin(now);
        if state.retry_selected {
            state.reset_session();
            state.phase = GamePhase::Countdown;
        } else {
            state.phase = GamePhase::Intro;
        }
    }
}

/// Scroll active hazards left, animate them, free the ones fully off the
/// left edge.
fn advance_hazards(pool: &mut SlotPool<Hazard>, dt: f32) {
    let mut offscreen = Vec::new();
    for (index, hazard) in pool.iter_active_mut() {
        hazard.pos.x -= hazard.speed * dt;
        if hazard.pos.x + hazard.kind.sprite_size().x < 0.0 {
            offscreen.push(index);
            continue;
        }
        hazard.clip.advance(dt, hazard.kind.max_frame());
    }
    for index in offscreen {
        pool.free(index);
    }
}

fn advance_pickups(pool: &mut SlotPool<Pickup>, dt: f32) {
    let mut offscreen = Vec::new();
    for (index, pickup) in pool.iter_active_mut() {
        pickup.pos.x -= pickup.speed * dt;
        if pickup.pos.x + PICKUP_WIDTH < 0.0 {
            offscreen.push(index);
        }
    }
    for index in offscreen {
        pool.free(index);
    }
}
