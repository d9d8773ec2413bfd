// SPDX-License-Identifier: MPL-2.0
//! Fade sub-component: the overlay fade-in replayed on every page settle.
//!
//! Progress is derived from wall-clock time rather than accumulated ticks,
//! so the animation stays correct however often the runtime redraws; the
//! periodic tick subscription only exists to trigger repaints while the
//! animation is live.

use std::time::{Duration, Instant};

/// How long the overlay takes to fade in.
pub const FADE_DURATION: Duration = Duration::from_millis(250);

/// Fade sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// When the current fade started. `None` renders fully opaque.
    started_at: Option<Instant>,
}

impl State {
    /// Restarts the fade from fully transparent.
    pub fn restart(&mut self) {
        self.started_at = Some(Instant::now());
    }

    /// Linear progress through the fade, in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        match self.started_at {
            None => 1.0,
            Some(started) => {
                let elapsed = started.elapsed().as_secs_f32();
                (elapsed / FADE_DURATION.as_secs_f32()).clamp(0.0, 1.0)
            }
        }
    }

    /// Eased opacity for the overlay.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        ease_out_cubic(self.progress())
    }

    /// Whether a repaint tick is still needed.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.progress() < 1.0
    }
}

/// Cubic ease-out: fast start, gentle landing.
fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn default_state_is_fully_opaque() {
        let state = State::default();
        assert_abs_diff_eq!(state.opacity(), 1.0, epsilon = F32_EPSILON);
        assert!(!state.is_animating());
    }

    #[test]
    fn restart_begins_near_transparent() {
        let mut state = State::default();
        state.restart();
        assert!(state.opacity() < 0.3);
        assert!(state.is_animating());
    }

    #[test]
    fn finished_fade_is_opaque_and_quiet() {
        let state = State {
            started_at: Instant::now().checked_sub(Duration::from_secs(2)),
        };
        assert_abs_diff_eq!(state.opacity(), 1.0, epsilon = F32_EPSILON);
        assert!(!state.is_animating());
    }

    #[test]
    fn midway_fade_is_partially_opaque() {
        let state = State {
            started_at: Instant::now().checked_sub(FADE_DURATION / 2),
        };
        let opacity = state.opacity();
        assert!(opacity > 0.5, "ease-out should be past half at t=0.5");
        assert!(opacity < 1.0);
    }

    #[test]
    fn ease_out_cubic_hits_the_endpoints() {
        assert_abs_diff_eq!(ease_out_cubic(0.0), 0.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(ease_out_cubic(1.0), 1.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn ease_out_cubic_is_monotonic() {
        let mut last = 0.0;
        for i in 1..=10 {
            let value = ease_out_cubic(i as f32 / 10.0);
            assert!(value >= last);
            last = value;
        }
    }
}
