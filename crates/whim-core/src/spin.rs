//! Tick-driven spin state machine
//!
//! The state machine never sleeps; it is advanced one frame per call by the
//! UI's tick timer, which also gives reset a way to cancel an in-flight
//! animation.

use crate::easing;
use crate::wheel::Wheel;
use rand::Rng;
use std::ops::RangeInclusive;
use std::time::Duration;

/// Number of trajectory samples per spin
pub const DEFAULT_FRAME_COUNT: usize = 160;
/// Delay between animation frames (the UI tick rate)
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(50);
/// Total rotation drawn per spin: five to seven full turns, in degrees
pub const SPIN_RANGE: RangeInclusive<u32> = 1800..=2520;

/// Bookkeeping for an in-flight spin
#[derive(Debug, Clone, PartialEq)]
struct Animation {
    total_spin: f64,
    frame: usize,
    frame_count: usize,
}

/// Rotation angle, winner, and spinning flag for one wheel session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpinState {
    angle: f64,
    winner: Option<usize>,
    animation: Option<Animation>,
}

/// What a tick did to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinEvent {
    /// No spin in flight
    Idle,
    /// Advanced one frame; re-render at the new angle
    Frame,
    /// Spin completed and landed on this option index
    Finished(usize),
}

impl SpinState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current rotation in degrees
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Winning option index of the last completed spin, if any
    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// Whether a spin is in flight
    pub fn is_spinning(&self) -> bool {
        self.animation.is_some()
    }

    /// Start a spin with a random total rotation from [`SPIN_RANGE`].
    /// Returns false (state unchanged) if a spin is already in flight.
    pub fn start(&mut self, rng: &mut impl Rng, frame_count: usize) -> bool {
        let total_spin = f64::from(rng.gen_range(SPIN_RANGE));
        self.start_with(total_spin, frame_count)
    }

    /// Start a spin with an explicit rotation and frame count
    pub fn start_with(&mut self, total_spin: f64, frame_count: usize) -> bool {
        if self.animation.is_some() {
            return false;
        }
        debug_assert!(frame_count >= 2);
        tracing::debug!(total_spin, frame_count, "spin started");
        self.angle = 0.0;
        self.winner = None;
        self.animation = Some(Animation {
            total_spin,
            frame: 0,
            frame_count,
        });
        true
    }

    /// Advance the animation one frame. Call once per tick; returns what
    /// changed so the caller knows when to announce the winner.
    pub fn tick(&mut self, wheel: &Wheel) -> SpinEvent {
        let Some(anim) = self.animation.as_mut() else {
            return SpinEvent::Idle;
        };

        anim.frame += 1;
        if anim.frame >= anim.frame_count - 1 {
            let total_spin = anim.total_spin;
            self.animation = None;
            self.angle = total_spin;
            let winner = wheel.winner_at(total_spin);
            self.winner = Some(winner);
            tracing::debug!(
                winner,
                final_angle = total_spin.rem_euclid(crate::wheel::FULL_TURN),
                "spin finished"
            );
            return SpinEvent::Finished(winner);
        }

        self.angle = easing::angle_at(anim.total_spin, anim.frame, anim.frame_count);
        SpinEvent::Frame
    }

    /// Forget the winner without touching the rest of the state. Used when
    /// the option list changes under a finished wheel.
    pub fn clear_winner(&mut self) {
        self.winner = None;
    }

    /// Hard reset to the initial state, cancelling any in-flight spin
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
