//! Drone Dash - a side-scrolling runner game core
//!
//! This crate is the simulation half of the game only. The host loop owns
//! the window, renderer, audio device and timing source; it feeds each
//! frame's elapsed time, input edges, clock reading and RNG into
//! [`sim::tick`] and consumes the returned notification queue plus a
//! [`sim::WorldSnapshot`] of everything visible.

pub mod sim;

/// Game tuning constants
pub mod consts {
    /// Playfield dimensions (world units; y grows downward)
    pub const FIELD_WIDTH: f32 = 700.0;
    pub const FIELD_HEIGHT: f32 = 300.0;

    /// Player footprint while running / while jumping
    pub const PLAYER_RUN_WIDTH: f32 = 64.0;
    pub const PLAYER_JUMP_WIDTH: f32 = 56.0;
    pub const PLAYER_HEIGHT: f32 = 64.0;
    /// Horizontal anchor of the player (the world scrolls, the player doesn't)
    pub const PLAYER_ANCHOR_X: f32 = 150.0;

    /// Run cycle: frames 0..=4 at 16 fps
    pub const PLAYER_RUN_MAX_FRAME: u32 = 4;
    pub const PLAYER_RUN_FRAME_SECS: f32 = 1.0 / 16.0;

    /// Vertical kinematics (units/s², downward positive)
    pub const GRAVITY: f32 = 1600.0;
    /// Jump impulse (units/s, upward)
    pub const JUMP_IMPULSE: f32 = -580.0;

    /// Starting and maximum hearts
    pub const MAX_HEALTH: u32 = 3;
    /// Post-hit invincibility window (seconds)
    pub const GRACE_DURATION: f32 = 1.5;

    /// Slot capacity for each entity pool
    pub const HAZARD_POOL_CAPACITY: usize = 10;
    pub const PICKUP_POOL_CAPACITY: usize = 10;

    /// Ground-lane hazard cadence (seconds) and speed (units/s)
    pub const GROUND_SPAWN_SECS_MIN: i32 = 2;
    pub const GROUND_SPAWN_SECS_MAX: i32 = 8;
    pub const GROUND_SPEED_MIN: i32 = 400;
    pub const GROUND_SPEED_MAX: i32 = 800;
    /// Second ground spawn height, this far above the ground line
    pub const GROUND_SPAWN_RAISE: f32 = 45.0;

    /// Air-lane hazard cadence and speed
    pub const AIR_SPAWN_SECS_MIN: i32 = 8;
    pub const AIR_SPAWN_SECS_MAX: i32 = 12;
    pub const AIR_SPEED_MIN: i32 = 200;
    pub const AIR_SPEED_MAX: i32 = 300;
    /// Air lane altitude reference, measured up from the field bottom
    pub const AIR_SPAWN_ALTITUDE: f32 = 145.0;

    /// Pickup cadence: first window is fixed, later ones are redrawn
    pub const PICKUP_FIRST_SPAWN_SECS: f32 = 15.0;
    pub const PICKUP_SPAWN_SECS_MIN: i32 = 15;
    pub const PICKUP_SPAWN_SECS_MAX: i32 = 30;
    pub const PICKUP_SPEED: f32 = 200.0;
    pub const PICKUP_WIDTH: f32 = 32.0;
    pub const PICKUP_HEIGHT: f32 = 32.0;
    /// Vertical clearance above the field bottom for the two pickup lanes
    pub const PICKUP_GROUND_CLEARANCE: f32 = 10.0;
    pub const PICKUP_AIR_CLEARANCE: f32 = 120.0;

    /// Impact flash: 8 frames at 16 fps, one-shot
    pub const IMPACT_FRAME_COUNT: u32 = 8;
    pub const IMPACT_FRAME_SECS: f32 = 1.0 / 16.0;

    /// Countdown display starts here and runs down through 0
    pub const COUNTDOWN_START: i32 = 3;
    /// Extra delay between the countdown passing 0 and gameplay starting
    pub const COUNTDOWN_GO_DELAY: f64 = 1.0;
}
