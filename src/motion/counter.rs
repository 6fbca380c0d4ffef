//! Eased count-up from zero to a fixed target.

use crate::config;

/// `1 - (1 - p)^n`, with `p` clamped to `[0, 1]`.
pub fn ease_out(progress: f64, exponent: i32) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(exponent)
}

pub fn counter_text(prefix: &str, value: u32, suffix: &str) -> String {
    format!("{}{}{}", prefix, value, suffix)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterStep {
    Running(u32),
    Finished(u32),
}

impl CounterStep {
    pub fn value(self) -> u32 {
        match self {
            CounterStep::Running(v) | CounterStep::Finished(v) => v,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterState {
    current_value: u32,
    target_value: u32,
    start_timestamp: Option<f64>,
    duration_ms: f64,
    exponent: i32,
}

impl CounterState {
    pub fn new(target: u32) -> Self {
        Self::with_timing(target, config::COUNTER_DURATION_MS, config::COUNTER_EASE_EXPONENT)
    }

    pub fn with_timing(target: u32, duration_ms: f64, exponent: i32) -> Self {
        Self {
            current_value: 0,
            target_value: target,
            start_timestamp: None,
            duration_ms,
            exponent,
        }
    }

    #[cfg(test)]
    pub fn current(&self) -> u32 {
        self.current_value
    }

    #[cfg(test)]
    pub fn target(&self) -> u32 {
        self.target_value
    }

    #[cfg(test)]
    pub fn is_finished(&self) -> bool {
        self.current_value == self.target_value
    }

    /// Advances to the frame at `timestamp` (ms, as handed to
    /// `requestAnimationFrame` callbacks). The first call pins the start time.
    pub fn step(&mut self, timestamp: f64) -> CounterStep {
        let start = *self.start_timestamp.get_or_insert(timestamp);
        let progress = if self.duration_ms > 0.0 {
            ((timestamp - start) / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };

        let value = if progress >= 1.0 {
            self.target_value
        } else {
            let eased = ease_out(progress, self.exponent) * f64::from(self.target_value);
            (eased.floor() as u32).min(self.target_value)
        };
        // Monotonic even if the host hands us an out-of-order timestamp.
        self.current_value = self.current_value.max(value);

        if progress >= 1.0 {
            CounterStep::Finished(self.current_value)
        } else {
            CounterStep::Running(self.current_value)
        }
    }

    /// Jumps straight to the target, for hosts that can't animate.
    pub fn finish(&mut self) -> u32 {
        self.current_value = self.target_value;
        self.current_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME_MS: f64 = 1000.0 / 60.0;

    fn run_to_end(state: &mut CounterState, origin: f64) -> Vec<u32> {
        let mut seen = Vec::new();
        let mut ts = origin;
        loop {
            let step = state.step(ts);
            seen.push(step.value());
            if let CounterStep::Finished(_) = step {
                return seen;
            }
            ts += FRAME_MS;
            assert!(ts < origin + 10_000.0, "counter never finished");
        }
    }

    #[test]
    fn ease_hits_endpoints() {
        for n in [3, 4] {
            assert_eq!(ease_out(0.0, n), 0.0);
            assert_eq!(ease_out(1.0, n), 1.0);
            assert_eq!(ease_out(-1.0, n), 0.0);
            assert_eq!(ease_out(2.0, n), 1.0);
        }
        assert!((ease_out(0.5, 3) - 0.875).abs() < 1e-12);
        assert!((ease_out(0.5, 4) - 0.9375).abs() < 1e-12);
    }

    #[test]
    fn counts_up_monotonically_to_target() {
        for target in [0, 1, 7, 30, 40, 90, 110, 1_000, 2_500_000] {
            let mut state = CounterState::new(target);
            assert_eq!(state.current(), 0);
            let seen = run_to_end(&mut state, 4_321.5);
            assert!(seen.windows(2).all(|w| w[0] <= w[1]), "target {target} went backwards");
            assert!(seen.iter().all(|&v| v <= target));
            assert_eq!(*seen.last().unwrap(), target);
            assert!(state.is_finished());
        }
    }

    #[test]
    fn first_frame_starts_at_zero() {
        let mut state = CounterState::new(110);
        assert_eq!(state.step(0.0), CounterStep::Running(0));
        assert_eq!(state.step(900.0).value(), 96);
        assert_eq!(state.step(1800.0), CounterStep::Finished(110));
    }

    #[test]
    fn stale_timestamp_does_not_go_backwards() {
        let mut state = CounterState::new(40);
        state.step(100.0);
        let mid = state.step(1000.0).value();
        assert_eq!(state.step(200.0).value(), mid);
    }

    #[test]
    fn quartic_finishes_on_time() {
        let mut state = CounterState::with_timing(90, 2000.0, 4);
        state.step(0.0);
        assert!(matches!(state.step(1999.0), CounterStep::Running(_)));
        assert_eq!(state.step(2000.0), CounterStep::Finished(90));
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let mut state = CounterState::with_timing(12, 0.0, 3);
        assert_eq!(state.step(5.0), CounterStep::Finished(12));
    }

    #[test]
    fn renders_suffix_after_count() {
        let mut state = CounterState::new(40);
        run_to_end(&mut state, 0.0);
        assert_eq!(counter_text("", state.current(), "+"), "40+");
    }

    #[test]
    fn renders_prefix_and_suffix() {
        let mut state = CounterState::new(110);
        run_to_end(&mut state, 0.0);
        assert_eq!(counter_text("$", state.current(), "K+"), "$110K+");
    }

    #[test]
    fn finish_skips_the_animation() {
        let mut state = CounterState::new(90);
        assert_eq!(state.finish(), 90);
        assert!(state.is_finished());
    }
}
