//! # Send Pulse
//!
//! Normalized [0,1] animation progress for the post-send flourish.
//! The value rises toward 1 over ~100ms on a critically damped spring,
//! then springs back to 0. Purely cosmetic: nothing reads this value
//! except the renderer, and triggering it never blocks the submit path.
//!
//! All timing is a function of an injected `Instant`, so the curve is
//! testable without sleeping. The event loop keeps polling on a short
//! timeout while `is_active` — that deferred re-draw is the scheduling
//! mechanism, not a sleep.

use std::time::{Duration, Instant};

/// Rise phase duration (spring toward 1).
const RISE: Duration = Duration::from_millis(100);
/// Fall phase duration (spring back to 0).
const FALL: Duration = Duration::from_millis(150);

/// Spring stiffness for the normalized curve. At x = 1 the curve has
/// effectively converged (within 0.4% of the target).
const STIFFNESS: f32 = 8.0;

/// Critically damped spring step response, normalized to x in [0,1].
fn spring(x: f32) -> f32 {
    let kx = STIFFNESS * x.clamp(0.0, 1.0);
    1.0 - (1.0 + kx) * (-kx).exp()
}

/// One-shot send animation. `trigger` restarts it; `progress` reads it.
#[derive(Default)]
pub struct SendPulse {
    started: Option<Instant>,
}

impl SendPulse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the pulse at `now`.
    pub fn trigger(&mut self, now: Instant) {
        self.started = Some(now);
    }

    /// Animation progress in [0,1] at `now`; 0 when no pulse is running.
    pub fn progress(&self, now: Instant) -> f32 {
        let Some(started) = self.started else {
            return 0.0;
        };
        let elapsed = now.saturating_duration_since(started);
        if elapsed < RISE {
            spring(elapsed.as_secs_f32() / RISE.as_secs_f32())
        } else if elapsed < RISE + FALL {
            let fall_x = (elapsed - RISE).as_secs_f32() / FALL.as_secs_f32();
            1.0 - spring(fall_x)
        } else {
            0.0
        }
    }

    /// Whether the pulse still needs animation frames.
    pub fn is_active(&self, now: Instant) -> bool {
        self.started
            .is_some_and(|started| now.saturating_duration_since(started) < RISE + FALL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_pulse_is_zero() {
        let pulse = SendPulse::new();
        assert_eq!(pulse.progress(Instant::now()), 0.0);
        assert!(!pulse.is_active(Instant::now()));
    }

    #[test]
    fn pulse_rises_then_falls() {
        let mut pulse = SendPulse::new();
        let t0 = Instant::now();
        pulse.trigger(t0);

        let at = |ms| pulse.progress(t0 + Duration::from_millis(ms));

        assert_eq!(at(0), 0.0);
        // Mid-rise: strictly between endpoints
        assert!(at(50) > 0.5);
        assert!(at(50) < 1.0);
        // Peak (end of rise): essentially 1
        assert!(at(100) > 0.99);
        // Falling back down
        assert!(at(175) < at(100));
        // Finished
        assert_eq!(at(300), 0.0);
    }

    #[test]
    fn is_active_tracks_lifetime() {
        let mut pulse = SendPulse::new();
        let t0 = Instant::now();
        pulse.trigger(t0);

        assert!(pulse.is_active(t0));
        assert!(pulse.is_active(t0 + Duration::from_millis(200)));
        assert!(!pulse.is_active(t0 + Duration::from_millis(250)));
    }

    #[test]
    fn retrigger_restarts_the_curve() {
        let mut pulse = SendPulse::new();
        let t0 = Instant::now();
        pulse.trigger(t0);
        let t1 = t0 + Duration::from_millis(400);
        assert!(!pulse.is_active(t1));

        pulse.trigger(t1);
        assert!(pulse.is_active(t1));
        assert!(pulse.progress(t1 + Duration::from_millis(100)) > 0.99);
    }

    #[test]
    fn progress_stays_normalized() {
        let mut pulse = SendPulse::new();
        let t0 = Instant::now();
        pulse.trigger(t0);
        for ms in (0u64..400).step_by(10) {
            let p = pulse.progress(t0 + Duration::from_millis(ms));
            assert!((0.0..=1.0).contains(&p), "progress {p} out of range at {ms}ms");
        }
    }
}
