//! Fixed timestep clock
//!
//! Hosts report wall-clock frame deltas; the stepper turns them into a whole
//! number of fixed simulation steps, carrying the remainder to the next frame.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Fixed-step accumulator
#[derive(Debug, Clone, PartialEq)]
pub struct Stepper {
    step: f32,
    max_substeps: u32,
    /// Longest frame delta accepted, `max_substeps` steps worth
    max_frame_dt: f32,
    accumulator: f32,
}

impl Default for Stepper {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl Stepper {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        debug_assert!(step > 0.0);
        Self {
            step,
            max_substeps,
            max_frame_dt: step * max_substeps as f32,
            accumulator: 0.0,
        }
    }

    /// Fixed step duration in seconds
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Time banked toward the next step
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    /// Bank a frame delta and return how many fixed steps to run now.
    ///
    /// Non-finite deltas count as zero. Deltas are clamped to `max_substeps`
    /// steps worth, and at most one step of backlog is kept afterwards so
    /// slow frames can't pile up debt.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        let frame_dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, self.max_frame_dt)
        } else {
            0.0
        };
        self.accumulator += frame_dt;

        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_substeps {
            self.accumulator -= self.step;
            steps += 1;
        }
        self.accumulator = self.accumulator.min(self.step);
        steps
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
