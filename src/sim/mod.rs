//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One `tick` per host frame, always running to completion
//! - Injected dt, clock reading and RNG only (nothing ambient)
//! - Stable iteration order (by pool slot index)
//! - No rendering, audio or platform dependencies

pub mod actor;
pub mod anim;
pub mod collision;
pub mod pool;
pub mod spawn;
pub mod state;
pub mod tick;

pub use anim::{AnimClip, OneShotClip};
pub use collision::overlaps;
pub use pool::SlotPool;
pub use state::{
    GameEvent, GamePhase, GameState, Hazard, HazardKind, HealthState, MusicAction, MusicTrack,
    Pickup, Player, SoundKind, WorldSnapshot,
};
pub use tick::{TickInput, tick};
