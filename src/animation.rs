//! Fade animation and single-shot idle timer, both driven by an explicit clock.
//!
//! Times are seconds on the same clock as `egui::InputState::time`.

use crate::constants::FADE_DURATION;
use eframe::egui::emath::easing;

/// What to do once a fade run reaches its end value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeCompletion {
    Hide,
}

/// Result of advancing a running fade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeStep {
    pub value: f32,
    /// Set exactly once, on the tick that finishes the run.
    pub completed: Option<FadeCompletion>,
}

/// Eased interpolation of a single value between two endpoints.
#[derive(Debug, Clone)]
pub struct FadeAnimation {
    duration: f64,
    from: f32,
    to: f32,
    started_at: f64,
    running: bool,
    on_finished: Option<FadeCompletion>,
}

impl Default for FadeAnimation {
    fn default() -> Self {
        Self::new(FADE_DURATION)
    }
}

impl FadeAnimation {
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            from: 0.0,
            to: 0.0,
            started_at: 0.0,
            running: false,
            on_finished: None,
        }
    }

    /// Starts a new run. Any pending completion of a previous run is dropped.
    pub fn start(&mut self, now: f64, from: f32, to: f32, on_finished: Option<FadeCompletion>) {
        self.from = from;
        self.to = to;
        self.started_at = now;
        self.running = true;
        self.on_finished = on_finished;
    }

    /// Stops the current run without reaching its end; its completion never fires.
    pub fn stop(&mut self) {
        self.running = false;
        self.on_finished = None;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advances to `now`. Returns `None` when no run is active.
    pub fn tick(&mut self, now: f64) -> Option<FadeStep> {
        if !self.running {
            return None;
        }

        let progress = if self.duration <= 0.0 {
            1.0
        } else {
            ((now - self.started_at) / self.duration).clamp(0.0, 1.0) as f32
        };
        let eased = easing::cubic_in_out(progress);
        let value = self.from + (self.to - self.from) * eased;

        if progress >= 1.0 {
            self.running = false;
            return Some(FadeStep {
                value: self.to,
                completed: self.on_finished.take(),
            });
        }

        Some(FadeStep {
            value,
            completed: None,
        })
    }
}

/// Single-shot deadline timer.
#[derive(Debug, Clone, Default)]
pub struct AutoHideTimer {
    deadline: Option<f64>,
}

impl AutoHideTimer {
    /// (Re)starts the timer so that it fires `timeout_ms` after `now`.
    pub fn start(&mut self, now: f64, timeout_ms: u32) {
        self.deadline = Some(now + f64::from(timeout_ms) / 1000.0);
    }

    pub fn stop(&mut self) {
        self.deadline = None;
    }

    pub fn is_active(&self) -> bool {
        self.deadline.is_some()
    }

    /// Seconds left until the timer fires.
    pub fn remaining(&self, now: f64) -> Option<f64> {
        self.deadline.map(|deadline| (deadline - now).max(0.0))
    }

    /// Returns true once when the deadline has passed, then disarms.
    pub fn poll(&mut self, now: f64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
