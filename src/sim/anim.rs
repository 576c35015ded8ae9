//! Animation frame advancement
//!
//! Every animated entity carries a clip: a frame index, a per-frame cadence
//! and a running-time accumulator. Clips never look at a wall clock; they
//! are advanced with the frame's dt so replays stay bit-identical.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A looping animation clip
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimClip {
    /// Current frame index
    pub frame: u32,
    /// Seconds each frame is held
    pub seconds_per_frame: f32,
    /// Time accumulated toward the next frame step
    pub running_time: f32,
}

impl AnimClip {
    pub fn new(seconds_per_frame: f32) -> Self {
        Self {
            frame: 0,
            seconds_per_frame,
            running_time: 0.0,
        }
    }

    /// Rewind to frame 0 (on spawn / session reset)
    pub fn reset(&mut self) {
        self.frame = 0;
        self.running_time = 0.0;
    }

    /// Accumulate `dt`; step at most one frame, wrapping past `max_frame`
    /// back to 0.
    pub fn advance(&mut self, dt: f32, max_frame: u32) {
        self.running_time += dt;
        if self.running_time >= self.seconds_per_frame {
            self.running_time = 0.0;
            self.frame += 1;
            if self.frame > max_frame {
                self.frame = 0;
            }
        }
    }
}

/// A non-looping clip with a world position, used for the impact flash.
/// Plays through its frames once, then deactivates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OneShotClip {
    pub active: bool,
    pub pos: Vec2,
    pub frame: u32,
    frame_count: u32,
    seconds_per_frame: f32,
    running_time: f32,
}

impl OneShotClip {
    pub fn new(frame_count: u32, seconds_per_frame: f32) -> Self {
        Self {
            active: false,
            pos: Vec2::ZERO,
            frame: 0,
            frame_count,
            seconds_per_frame,
            running_time: 0.0,
        }
    }

    /// Restart the clip at `pos`
    pub fn trigger(&mut self, pos: Vec2) {
        self.active = true;
        self.pos = pos;
        self.frame = 0;
        self.running_time = 0.0;
    }

    pub fn cancel(&mut self) {
        self.active = false;
        self.frame = 0;
        self.running_time = 0.0;
    }

    /// Advance the clip; deactivates after the last frame instead of wrapping
    pub fn advance(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.running_time += dt;
        if self.running_time >= self.seconds_per_frame {
            self.running_time = 0.0;
            self.frame += 1;
            if self.frame >= self.frame_count {
                self.cancel();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clip_steps_one_frame_per_cadence() {
        let mut clip = AnimClip::new(0.1);
        clip.advance(0.05, 3);
        assert_eq!(clip.frame, 0);
        clip.advance(0.05, 3);
        assert_eq!(clip.frame, 1);
    }

    #[test]
    fn test_clip_steps_at_most_once_on_large_dt() {
        let mut clip = AnimClip::new(0.1);
        clip.advance(1.0, 3);
        assert_eq!(clip.frame, 1);
        assert_eq!(clip.running_time, 0.0);
    }

    #[test]
    fn test_clip_wraps_after_max_frame() {
        let mut clip = AnimClip::new(0.1);
        for expected in [1, 2, 3, 0] {
            clip.advance(0.1, 3);
            assert_eq!(clip.frame, expected);
        }
    }

    #[test]
    fn test_one_shot_plays_through_and_stops() {
        let mut flash = OneShotClip::new(3, 0.1);
        flash.advance(0.1);
        assert!(!flash.active, "must not animate before trigger");

        flash.trigger(Vec2::new(40.0, 200.0));
        assert!(flash.active);
        assert_eq!(flash.pos, Vec2::new(40.0, 200.0));

        flash.advance(0.1);
        assert_eq!(flash.frame, 1);
        flash.advance(0.1);
        assert_eq!(flash.frame, 2);
        flash.advance(0.1);
        assert!(!flash.active);
        assert_eq!(flash.frame, 0);
    }

    proptest! {
        /// Advancing by exactly the cadence revisits frame 0 after max+1
        /// steps, and the index never leaves [0, max].
        #[test]
        fn prop_clip_wraparound(max_frame in 0u32..16, spf in 0.01f32..0.5) {
            let mut clip = AnimClip::new(spf);
            for _ in 0..=max_frame {
                clip.advance(spf, max_frame);
                prop_assert!(clip.frame <= max_frame);
            }
            prop_assert_eq!(clip.frame, 0);
        }
    }
}
