//! One-shot viewport reveal state.
//!
//! `Unrevealed --(intersection at or above threshold)--> Revealed`, with no
//! way back. The host binding feeds raw intersection samples in and drops its
//! observer once [`RevealState::observe`] reports the transition.

use crate::config;

/// Absorbs float noise in the ratio the browser reports at the crossing.
const RATIO_TOLERANCE: f64 = 1e-3;

#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl RevealOptions {
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            ..Self::default()
        }
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: config::REVEAL_THRESHOLD,
            root_margin: config::REVEAL_ROOT_MARGIN.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    pub ratio: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    pub observed: bool,
    pub visible: bool,
}

impl RevealState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Already-revealed state, used when the host can't observe at all.
    pub fn revealed() -> Self {
        Self {
            observed: true,
            visible: true,
        }
    }

    /// Returns `true` only on the sample that performs the reveal.
    pub fn observe(&mut self, sample: IntersectionSample, threshold: f64) -> bool {
        if self.visible {
            return false;
        }
        self.observed = true;
        if sample.is_intersecting && sample.ratio + RATIO_TOLERANCE >= threshold {
            self.visible = true;
            return true;
        }
        false
    }

    pub fn class(&self) -> &'static str {
        if self.visible {
            "reveal visible"
        } else {
            "reveal"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(is_intersecting: bool, ratio: f64) -> IntersectionSample {
        IntersectionSample { is_intersecting, ratio }
    }

    #[test]
    fn fires_once_at_threshold() {
        let mut state = RevealState::new();
        assert!(!state.observe(sample(false, 0.0), 0.5));
        assert!(state.observed);
        assert!(!state.visible);
        assert!(!state.observe(sample(true, 0.2), 0.5));
        assert!(state.observe(sample(true, 0.5), 0.5));
        assert!(state.visible);
        assert!(!state.observe(sample(true, 1.0), 0.5));
    }

    #[test]
    fn never_reverts_after_scrolling_away() {
        for threshold in [0.01, 0.1, 0.25, 0.5, 0.75, 1.0] {
            let mut state = RevealState::new();
            let mut fired = 0;
            let samples = [
                sample(true, 1.0),
                sample(false, 0.0),
                sample(true, threshold),
                sample(false, 0.0),
            ];
            for s in samples {
                if state.observe(s, threshold) {
                    fired += 1;
                }
                if fired > 0 {
                    assert!(state.visible, "reverted at threshold {threshold}");
                }
            }
            assert_eq!(fired, 1);
        }
    }

    #[test]
    fn intersecting_flag_is_required() {
        let mut state = RevealState::new();
        assert!(!state.observe(sample(false, 0.9), 0.1));
        assert!(!state.visible);
    }

    #[test]
    fn class_follows_visibility() {
        let mut state = RevealState::new();
        assert_eq!(state.class(), "reveal");
        state.observe(sample(true, 1.0), 0.1);
        assert_eq!(state.class(), "reveal visible");
        assert_eq!(RevealState::revealed().class(), "reveal visible");
    }

    #[test]
    fn options_clamp_threshold() {
        assert_eq!(RevealOptions::with_threshold(3.0).threshold, 1.0);
        let defaults = RevealOptions::default();
        assert_eq!(defaults.threshold, config::REVEAL_THRESHOLD);
        assert_eq!(defaults.root_margin, "0px 0px -60px 0px");
    }
}
