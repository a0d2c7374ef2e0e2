// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Time-based knob animation driven by the egui frame clock.

use egui::emath::easing;

/// Length of the knob slide and color cross-fade, in seconds.
pub const TOGGLE_DURATION: f64 = 0.1;

/// An in-flight slide between two progress values.
///
/// Progress `0.0` is the off position, `1.0` the on position. A new tap
/// starts a fresh animation from wherever the knob currently is, so the
/// latest target always wins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KnobAnimation {
    from: f32,
    to: f32,
    started_at: f64,
}

impl KnobAnimation {
    /// Start sliding from `from` toward the rest position of `target_on`.
    pub fn start(from: f32, target_on: bool, now: f64) -> Self {
        Self {
            from,
            to: if target_on { 1.0 } else { 0.0 },
            started_at: now,
        }
    }

    /// Eased progress at `now`. Clamped to the start before `started_at`.
    pub fn progress(&self, now: f64) -> f32 {
        let t = ((now - self.started_at) / TOGGLE_DURATION).clamp(0.0, 1.0) as f32;
        egui::lerp(self.from..=self.to, easing::quadratic_in(t))
    }

    pub fn is_finished(&self, now: f64) -> bool {
        now - self.started_at >= TOGGLE_DURATION
    }
}
