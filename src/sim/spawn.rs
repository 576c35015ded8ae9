//! Hazard and pickup spawning
//!
//! Each spawn lane is a timer compared against a stored randomized
//! threshold. When the window elapses the lane tries to claim a pool slot;
//! full pools skip the spawn but the window is still consumed and a fresh
//! threshold drawn, so a lane never spawn-storms the moment a slot frees.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::anim::AnimClip;
use super::pool::SlotPool;
use super::state::{Hazard, HazardKind, Pickup};
use crate::consts::*;

/// Uniform integer draw over an inclusive range. An inverted range is a
/// caller bug, not a runtime condition.
pub(crate) fn roll(rng: &mut impl Rng, min: i32, max: i32) -> i32 {
    assert!(min <= max, "inverted roll range: {min}..={max}");
    rng.random_range(min..=max)
}

/// The two independent hazard cadences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lane {
    Ground,
    Air,
}

impl Lane {
    fn threshold_range(self) -> (i32, i32) {
        match self {
            Self::Ground => (GROUND_SPAWN_SECS_MIN, GROUND_SPAWN_SECS_MAX),
            Self::Air => (AIR_SPAWN_SECS_MIN, AIR_SPAWN_SECS_MAX),
        }
    }

    fn speed_range(self) -> (i32, i32) {
        match self {
            Self::Ground => (GROUND_SPEED_MIN, GROUND_SPEED_MAX),
            Self::Air => (AIR_SPEED_MIN, AIR_SPEED_MAX),
        }
    }

    /// First window of a session, before any randomized redraw
    fn initial_threshold(self) -> f32 {
        self.threshold_range().0 as f32
    }
}

/// Spawn state for one hazard lane
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HazardLane {
    pub lane: Lane,
    pub timer: f32,
    pub threshold: f32,
}

impl HazardLane {
    pub fn new(lane: Lane) -> Self {
        Self {
            lane,
            timer: 0.0,
            threshold: lane.initial_threshold(),
        }
    }

    pub fn reset(&mut self) {
        self.timer = 0.0;
        self.threshold = self.lane.initial_threshold();
    }

    /// Accumulate `dt`; spawn when the window elapses
    pub fn update(&mut self, pool: &mut SlotPool<Hazard>, dt: f32, rng: &mut impl Rng) {
        self.timer += dt;
        if self.timer < self.threshold {
            return;
        }

        if let Some((_, hazard)) = pool.allocate() {
            let kind = match self.lane {
                Lane::Ground => HazardKind::GROUND[roll(rng, 0, 2) as usize],
                Lane::Air => HazardKind::Glider,
            };
            let size = kind.sprite_size();
            let y = match self.lane {
                Lane::Ground => {
                    let on_ground_line = roll(rng, 0, 1) == 0;
                    if on_ground_line {
                        FIELD_HEIGHT - size.y
                    } else {
                        FIELD_HEIGHT - size.y - GROUND_SPAWN_RAISE
                    }
                }
                Lane::Air => (FIELD_HEIGHT - AIR_SPAWN_ALTITUDE) - size.y / 2.0,
            };
            let (speed_min, speed_max) = self.lane.speed_range();

            hazard.kind = kind;
            hazard.pos = Vec2::new(FIELD_WIDTH, y);
            hazard.speed = roll(rng, speed_min, speed_max) as f32;
            hazard.clip = AnimClip::new(kind.seconds_per_frame());
        }

        // Window consumed whether or not a slot was free
        let (min, max) = self.lane.threshold_range();
        self.timer = 0.0;
        self.threshold = roll(rng, min, max) as f32;
    }
}

/// Spawn state for health pickups: a single timer, alternating between the
/// ground and air placements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupLane {
    pub timer: f32,
    pub threshold: f32,
    pub spawn_on_ground: bool,
}

impl PickupLane {
    pub fn new() -> Self {
        Self {
            timer: 0.0,
            threshold: PICKUP_FIRST_SPAWN_SECS,
            spawn_on_ground: true,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn update(&mut self, pool: &mut SlotPool<Pickup>, dt: f32, rng: &mut impl Rng) {
        self.timer += dt;
        if self.timer < self.threshold {
            return;
        }

        if let Some((_, pickup)) = pool.allocate() {
            let clearance = if self.spawn_on_ground {
                PICKUP_GROUND_CLEARANCE
            } else {
                PICKUP_AIR_CLEARANCE
            };
            pickup.pos = Vec2::new(FIELD_WIDTH, FIELD_HEIGHT - (PICKUP_HEIGHT + clearance));
            pickup.speed = PICKUP_SPEED;
        }

        // The alternation flips and the window re-arms even when the pool
        // was full.
        self.timer = 0.0;
        self.threshold = roll(rng, PICKUP_SPAWN_SECS_MIN, PICKUP_SPAWN_SECS_MAX) as f32;
        self.spawn_on_ground = !self.spawn_on_ground;
    }
}

impl Default for PickupLane {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(0xD1CE)
    }

    #[test]
    #[should_panic(expected = "inverted roll range")]
    fn test_roll_rejects_inverted_range() {
        roll(&mut rng(), 5, 2);
    }

    #[test]
    fn test_ground_lane_spawns_within_tuning_ranges() {
        let mut rng = rng();
        let mut lane = HazardLane::new(Lane::Ground);
        let mut pool: SlotPool<Hazard> = SlotPool::new(HAZARD_POOL_CAPACITY);

        lane.update(&mut pool, lane.threshold, &mut rng);

        assert_eq!(pool.active_count(), 1);
        let (_, hazard) = pool.iter_active().next().unwrap();
        assert!(HazardKind::GROUND.contains(&hazard.kind));
        assert_eq!(hazard.pos.x, FIELD_WIDTH);
        let ground_y = FIELD_HEIGHT - hazard.kind.sprite_size().y;
        assert!(hazard.pos.y == ground_y || hazard.pos.y == ground_y - GROUND_SPAWN_RAISE);
        assert!((GROUND_SPEED_MIN as f32..=GROUND_SPEED_MAX as f32).contains(&hazard.speed));
        assert_eq!(hazard.clip.frame, 0);

        assert_eq!(lane.timer, 0.0);
        let (min, max) = (GROUND_SPAWN_SECS_MIN as f32, GROUND_SPAWN_SECS_MAX as f32);
        assert!((min..=max).contains(&lane.threshold));
    }

    #[test]
    fn test_air_lane_is_always_glider() {
        let mut rng = rng();
        let mut lane = HazardLane::new(Lane::Air);
        let mut pool: SlotPool<Hazard> = SlotPool::new(HAZARD_POOL_CAPACITY);

        for _ in 0..5 {
            lane.update(&mut pool, lane.threshold, &mut rng);
        }
        assert_eq!(pool.active_count(), 5);
        for (_, hazard) in pool.iter_active() {
            assert_eq!(hazard.kind, HazardKind::Glider);
            let size = hazard.kind.sprite_size();
            assert_eq!(hazard.pos.y, (FIELD_HEIGHT - AIR_SPAWN_ALTITUDE) - size.y / 2.0);
            assert!((AIR_SPEED_MIN as f32..=AIR_SPEED_MAX as f32).contains(&hazard.speed));
        }
    }

    #[test]
    fn test_full_pool_still_consumes_window() {
        let mut rng = rng();
        let mut lane = HazardLane::new(Lane::Ground);
        let mut pool: SlotPool<Hazard> = SlotPool::new(2);
        pool.allocate().unwrap();
        pool.allocate().unwrap();

        let before = lane.threshold;
        lane.update(&mut pool, before, &mut rng);

        assert_eq!(pool.active_count(), 2);
        assert_eq!(lane.timer, 0.0, "failed spawn must re-arm the timer");
    }

    #[test]
    fn test_pickup_lane_alternates_even_when_full() {
        let mut rng = rng();
        let mut lane = PickupLane::new();
        let mut pool: SlotPool<Pickup> = SlotPool::new(1);

        lane.update(&mut pool, PICKUP_FIRST_SPAWN_SECS, &mut rng);
        assert_eq!(pool.active_count(), 1);
        let (_, first) = pool.iter_active().next().unwrap();
        assert_eq!(
            first.pos.y,
            FIELD_HEIGHT - (PICKUP_HEIGHT + PICKUP_GROUND_CLEARANCE)
        );
        assert_eq!(first.speed, PICKUP_SPEED);
        assert!(!lane.spawn_on_ground);

        // Pool full: no spawn, but the flag keeps flipping
        lane.update(&mut pool, lane.threshold, &mut rng);
        assert_eq!(pool.active_count(), 1);
        assert!(lane.spawn_on_ground);
    }

    #[test]
    fn test_timer_accumulates_below_threshold() {
        let mut rng = rng();
        let mut lane = HazardLane::new(Lane::Air);
        let mut pool: SlotPool<Hazard> = SlotPool::new(HAZARD_POOL_CAPACITY);

        lane.update(&mut pool, 0.5, &mut rng);
        assert_eq!(pool.active_count(), 0);
        assert_eq!(lane.timer, 0.5);
    }
}
