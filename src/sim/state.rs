//! Game state and core simulation types
//!
//! Everything the simulation owns lives in [`GameState`]; the tick function
//! is its sole mutator. Hosts read the world through [`WorldSnapshot`] and
//! react to the [`GameEvent`] queue each tick returns.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::anim::{AnimClip, OneShotClip};
use super::pool::SlotPool;
use super::spawn::{HazardLane, Lane, PickupLane};
use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the start input
    Intro,
    /// 3..2..1..0 display before gameplay begins
    Countdown,
    /// Active gameplay
    Gameplay,
    /// Health exhausted; retry prompt
    GameOver,
}

/// One-shot sound effects the host should fire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundKind {
    Jump,
    Impact,
    Eat,
    Alarm,
    Angry,
    Meow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MusicTrack {
    Menu,
    Gameplay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MusicAction {
    Start,
    Stop,
}

/// Notifications emitted by a tick. The core never touches an audio
/// device; playback timing is entirely the host's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    PlaySound(SoundKind),
    Music { track: MusicTrack, action: MusicAction },
}

/// The four drone variants. Frame counts, cadences and footprints are an
/// exhaustive lookup here rather than parallel arrays, so adding a variant
/// without its tuning fails to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HazardKind {
    #[default]
    Scout,
    Twinrotor,
    Mantis,
    Glider,
}

impl HazardKind {
    /// Variants the ground lane draws from (the air lane is always Glider)
    pub const GROUND: [HazardKind; 3] = [Self::Scout, Self::Twinrotor, Self::Mantis];

    pub fn frame_count(self) -> u32 {
        match self {
            Self::Scout => 4,
            Self::Twinrotor => 8,
            Self::Mantis => 4,
            Self::Glider => 4,
        }
    }

    pub fn max_frame(self) -> u32 {
        self.frame_count() - 1
    }

    pub fn seconds_per_frame(self) -> f32 {
        match self {
            Self::Twinrotor => 1.0 / 15.0,
            _ => 1.0 / 10.0,
        }
    }

    /// Drawn sprite size (world units)
    pub fn sprite_size(self) -> Vec2 {
        match self {
            Self::Scout => Vec2::new(64.0, 48.0),
            Self::Twinrotor => Vec2::new(72.0, 40.0),
            Self::Mantis => Vec2::new(64.0, 56.0),
            Self::Glider => Vec2::new(80.0, 44.0),
        }
    }

    /// Collision footprint, deliberately tighter than the sprite
    pub fn footprint(self) -> Vec2 {
        self.sprite_size() * 0.5
    }
}

/// A hazard slot's payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hazard {
    pub kind: HazardKind,
    /// Top-left corner
    pub pos: Vec2,
    /// Leftward speed (units/s)
    pub speed: f32,
    pub clip: AnimClip,
}

impl Default for Hazard {
    fn default() -> Self {
        let kind = HazardKind::default();
        Self {
            kind,
            pos: Vec2::ZERO,
            speed: 0.0,
            clip: AnimClip::new(kind.seconds_per_frame()),
        }
    }
}

/// A pickup slot's payload. No animation; activation and deactivation are
/// its whole lifecycle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pickup {
    /// Top-left corner
    pub pos: Vec2,
    /// Leftward speed (units/s)
    pub speed: f32,
}

/// The player actor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    /// Vertical velocity (units/s, downward positive)
    pub velocity_y: f32,
    pub airborne: bool,
    pub clip: AnimClip,
}

impl Player {
    pub fn new() -> Self {
        let mut player = Self {
            pos: Vec2::ZERO,
            velocity_y: 0.0,
            airborne: false,
            clip: AnimClip::new(PLAYER_RUN_FRAME_SECS),
        };
        player.reset();
        player
    }

    /// Back to the spawn point on the ground line
    pub fn reset(&mut self) {
        self.pos = Vec2::new(
            PLAYER_ANCHOR_X - PLAYER_RUN_WIDTH / 2.0,
            FIELD_HEIGHT - PLAYER_HEIGHT,
        );
        self.velocity_y = 0.0;
        self.airborne = false;
        self.clip.reset();
    }

    /// Collision footprint; the jump pose is slightly narrower
    pub fn footprint(&self) -> Vec2 {
        if self.airborne {
            Vec2::new(PLAYER_JUMP_WIDTH, PLAYER_HEIGHT)
        } else {
            Vec2::new(PLAYER_RUN_WIDTH, PLAYER_HEIGHT)
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// Hearts plus the post-hit invincibility window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthState {
    pub max: u32,
    pub current: u32,
    /// Seconds of invincibility left; only ever set to the full grace
    /// duration on a hit, otherwise runs down toward 0.
    pub grace_remaining: f32,
}

impl HealthState {
    pub fn new(max: u32) -> Self {
        Self {
            max,
            current: max,
            grace_remaining: 0.0,
        }
    }

    pub fn grace_active(&self) -> bool {
        self.grace_remaining > 0.0
    }
}

/// Elapsed gameplay time and the score derived from it
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SessionStats {
    /// Seconds spent in Gameplay this session
    pub elapsed: f64,
}

impl SessionStats {
    /// Score is elapsed milliseconds, displayed by hosts as seconds.tenths
    pub fn score(&self) -> u64 {
        (self.elapsed * 1000.0) as u64
    }
}

/// Countdown clockwork: the display value plus the clock reading of its
/// last decrement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CountdownState {
    pub value: i32,
    pub last_tick_at: f64,
}

impl CountdownState {
    pub fn begin(&mut self, now: f64) {
        self.value = COUNTDOWN_START;
        self.last_tick_at = now;
    }
}

/// Complete session state, owned and mutated only by [`super::tick`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub player: Player,
    pub health: HealthState,
    pub stats: SessionStats,
    pub hazards: SlotPool<Hazard>,
    pub pickups: SlotPool<Pickup>,
    pub ground_lane: HazardLane,
    pub air_lane: HazardLane,
    pub pickup_lane: PickupLane,
    pub impact: OneShotClip,
    pub countdown: CountdownState,
    /// Game-over prompt selection; true = retry
    pub retry_selected: bool,
    /// Track currently playing, for idempotent start/stop events
    music: Option<MusicTrack>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Intro,
            player: Player::new(),
            health: HealthState::new(MAX_HEALTH),
            stats: SessionStats::default(),
            hazards: SlotPool::new(HAZARD_POOL_CAPACITY),
            pickups: SlotPool::new(PICKUP_POOL_CAPACITY),
            ground_lane: HazardLane::new(Lane::Ground),
            air_lane: HazardLane::new(Lane::Air),
            pickup_lane: PickupLane::new(),
            impact: OneShotClip::new(IMPACT_FRAME_COUNT, IMPACT_FRAME_SECS),
            countdown: CountdownState {
                value: COUNTDOWN_START,
                last_tick_at: 0.0,
            },
            retry_selected: true,
            music: None,
        }
    }

    /// Wipe everything a fresh run starts from. Runs at the
    /// Countdown→Gameplay transition and on a confirmed retry.
    pub fn reset_session(&mut self) {
        self.player.reset();
        self.health = HealthState::new(self.health.max);
        self.stats = SessionStats::default();
        self.hazards.clear();
        self.pickups.clear();
        self.ground_lane.reset();
        self.air_lane.reset();
        self.pickup_lane.reset();
        self.impact.cancel();
    }

    /// Switch the active music track, emitting stop/start events only on
    /// an actual change.
    pub fn set_music(&mut self, track: Option<MusicTrack>, events: &mut Vec<GameEvent>) {
        if self.music == track {
            return;
        }
        if let Some(old) = self.music {
            events.push(GameEvent::Music {
                track: old,
                action: MusicAction::Stop,
            });
        }
        if let Some(new) = track {
            events.push(GameEvent::Music {
                track: new,
                action: MusicAction::Start,
            });
        }
        self.music = track;
    }

    /// Read-only view of everything a renderer needs this frame
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            phase: self.phase,
            actor: ActorView {
                pos: self.player.pos,
                frame: self.player.clip.frame,
                airborne: self.player.airborne,
            },
            health: HealthView {
                current: self.health.current,
                max: self.health.max,
                grace_active: self.health.grace_active(),
            },
            hazards: self
                .hazards
                .iter_active()
                .map(|(_, h)| HazardView {
                    pos: h.pos,
                    kind: h.kind,
                    frame: h.clip.frame,
                })
                .collect(),
            pickups: self.pickups.iter_active().map(|(_, p)| p.pos).collect(),
            impact: self.impact.active.then_some(ImpactView {
                pos: self.impact.pos,
                frame: self.impact.frame,
            }),
            score: self.stats.score(),
            elapsed: self.stats.elapsed,
            countdown_value: self.countdown.value,
            retry_selected: self.retry_selected,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActorView {
    pub pos: Vec2,
    pub frame: u32,
    pub airborne: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthView {
    pub current: u32,
    pub max: u32,
    pub grace_active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HazardView {
    pub pos: Vec2,
    pub kind: HazardKind,
    pub frame: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImpactView {
    pub pos: Vec2,
    pub frame: u32,
}

/// Per-frame world view handed to the rendering/audio collaborators.
/// Built after the tick completes; no partial state is ever visible.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorldSnapshot {
    pub phase: GamePhase,
    pub actor: ActorView,
    pub health: HealthView,
    pub hazards: Vec<HazardView>,
    pub pickups: Vec<Vec2>,
    pub impact: Option<ImpactView>,
    pub score: u64,
    pub elapsed: f64,
    pub countdown_value: i32,
    pub retry_selected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hazard_kind_table_is_consistent() {
        for kind in [
            HazardKind::Scout,
            HazardKind::Twinrotor,
            HazardKind::Mantis,
            HazardKind::Glider,
        ] {
            assert!(kind.frame_count() > 0);
            assert_eq!(kind.max_frame(), kind.frame_count() - 1);
            assert!(kind.seconds_per_frame() > 0.0);
            let fp = kind.footprint();
            let sprite = kind.sprite_size();
            assert!(fp.x < sprite.x && fp.y < sprite.y);
        }
        assert!(!HazardKind::GROUND.contains(&HazardKind::Glider));
    }

    #[test]
    fn test_set_music_is_idempotent() {
        let mut state = GameState::new();
        let mut events = Vec::new();

        state.set_music(Some(MusicTrack::Menu), &mut events);
        state.set_music(Some(MusicTrack::Menu), &mut events);
        assert_eq!(
            events,
            vec![GameEvent::Music {
                track: MusicTrack::Menu,
                action: MusicAction::Start
            }]
        );

        events.clear();
        state.set_music(Some(MusicTrack::Gameplay), &mut events);
        assert_eq!(
            events,
            vec![
                GameEvent::Music {
                    track: MusicTrack::Menu,
                    action: MusicAction::Stop
                },
                GameEvent::Music {
                    track: MusicTrack::Gameplay,
                    action: MusicAction::Start
                },
            ]
        );

        events.clear();
        state.set_music(None, &mut events);
        assert_eq!(
            events,
            vec![GameEvent::Music {
                track: MusicTrack::Gameplay,
                action: MusicAction::Stop
            }]
        );
    }

    #[test]
    fn test_reset_session_wipes_stale_run() {
        let mut state = GameState::new();
        state.health.current = 0;
        state.health.grace_remaining = 0.7;
        state.stats.elapsed = 12.5;
        state.hazards.allocate().unwrap();
        state.pickups.allocate().unwrap();
        state.impact.trigger(Vec2::ZERO);
        state.player.pos.y = 10.0;

        state.reset_session();

        assert_eq!(state.health.current, state.health.max);
        assert_eq!(state.health.grace_remaining, 0.0);
        assert_eq!(state.stats.score(), 0);
        assert_eq!(state.hazards.active_count(), 0);
        assert_eq!(state.pickups.active_count(), 0);
        assert!(!state.impact.active);
        assert_eq!(state.player.pos.y, FIELD_HEIGHT - PLAYER_HEIGHT);
    }
}
