//! Auto-scrolling, draggable track with a seamless loop.
//!
//! The track renders its items `copies` times back to back. `scroll_offset`
//! is how far the track has moved left, kept in `[0, loop_width)` where
//! `loop_width` is the width of one copy, so wrapping never shows a seam.
//!
//! ```text
//! AutoScrolling --pointer_down--> Dragging --pointer_up/cancel--> Coasting
//!       ^                                                            |
//!       +---------------- velocity settles to auto speed ------------+
//! ```

/// Longest frame gap honoured; a tab that was in the background resumes
/// without leaping ahead.
pub const MAX_FRAME_DELTA_SECS: f64 = 0.1;
/// Exponential decay rate of post-drag momentum toward the auto speed.
pub const COAST_DECAY_PER_SEC: f64 = 4.0;
pub const MAX_FLICK_SPEED: f64 = 2400.0;
/// A release after holding still this long carries no momentum.
pub const FLICK_WINDOW_MS: f64 = 100.0;
const COAST_SETTLE_SPEED: f64 = 1.0;
const VELOCITY_SMOOTHING: f64 = 0.8;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

impl Direction {
    fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Reverse => -1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarqueeMode {
    AutoScrolling,
    Dragging,
    Coasting,
}

/// Repeats `items` back to back so the track can wrap. Always at least two
/// copies; an empty input stays empty.
pub fn looped<T: Clone>(items: &[T], copies: usize) -> Vec<T> {
    let copies = copies.max(2);
    let mut track = Vec::with_capacity(items.len() * copies);
    for _ in 0..copies {
        track.extend_from_slice(items);
    }
    track
}

#[derive(Clone, Debug, PartialEq)]
pub struct MarqueeState {
    scroll_offset: f64,
    mode: MarqueeMode,
    active_pointer: Option<i32>,
    last_pointer_x: f64,
    last_pointer_ts: Option<f64>,
    velocity: f64,
    loop_width: f64,
    item_count: usize,
    direction: Direction,
    speed: f64,
    last_frame: Option<f64>,
}

impl MarqueeState {
    pub fn new(item_count: usize, direction: Direction, speed: f64) -> Self {
        let speed = speed.max(0.0);
        Self {
            scroll_offset: 0.0,
            mode: MarqueeMode::AutoScrolling,
            active_pointer: None,
            last_pointer_x: 0.0,
            last_pointer_ts: None,
            velocity: direction.sign() * speed,
            loop_width: 0.0,
            item_count,
            direction,
            speed,
            last_frame: None,
        }
    }

    /// Whether this state was built for the given track configuration.
    pub fn configured_for(&self, item_count: usize, direction: Direction, speed: f64) -> bool {
        self.item_count == item_count && self.direction == direction && self.speed == speed.max(0.0)
    }

    #[cfg(test)]
    pub fn mode(&self) -> MarqueeMode {
        self.mode
    }

    pub fn is_dragging(&self) -> bool {
        self.mode == MarqueeMode::Dragging
    }

    #[cfg(test)]
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    #[cfg(test)]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    #[cfg(test)]
    pub fn loop_width(&self) -> f64 {
        self.loop_width
    }

    /// Copies needed so the rendered track always covers a strip
    /// `visible_width` wide: the offset stays below one copy, so one copy
    /// beyond `ceil(visible / copy)` is enough. Never fewer than `minimum`
    /// or two.
    pub fn required_copies(&self, visible_width: f64, minimum: usize) -> usize {
        let floor = minimum.max(2);
        if self.loop_width <= 0.0 || !visible_width.is_finite() || visible_width <= 0.0 {
            return floor;
        }
        let covering = (visible_width / self.loop_width).ceil() as usize + 1;
        covering.max(floor)
    }

    /// Horizontal translation to apply to the track, in px.
    pub fn translate_x(&self) -> f64 {
        if self.scroll_offset == 0.0 {
            0.0
        } else {
            -self.scroll_offset
        }
    }

    pub fn transform_style(&self) -> String {
        format!("transform: translate3d({:.3}px, 0, 0);", self.translate_x())
    }

    fn can_scroll(&self) -> bool {
        self.item_count > 0 && self.loop_width > 0.0
    }

    fn auto_velocity(&self) -> f64 {
        self.direction.sign() * self.speed
    }

    /// Sets the measured width of one copy. Non-positive or non-finite widths
    /// disable scrolling until a real measurement arrives.
    pub fn set_loop_width(&mut self, width: f64) {
        self.loop_width = if width.is_finite() && width > 0.0 {
            width
        } else {
            0.0
        };
        self.scroll_offset = self.wrap(self.scroll_offset);
    }

    fn wrap(&self, offset: f64) -> f64 {
        if self.loop_width <= 0.0 {
            return offset;
        }
        let wrapped = offset.rem_euclid(self.loop_width);
        // rem_euclid can round up to exactly the divisor.
        if wrapped >= self.loop_width {
            0.0
        } else {
            wrapped
        }
    }

    fn shift(&mut self, delta: f64) {
        self.scroll_offset = self.wrap(self.scroll_offset + delta);
    }

    /// Advances one animation frame. Returns whether the offset moved, so the
    /// caller only touches the DOM when there is something to draw.
    pub fn tick(&mut self, timestamp_ms: f64) -> bool {
        let dt = match self.last_frame.replace(timestamp_ms) {
            Some(prev) => ((timestamp_ms - prev) / 1000.0).clamp(0.0, MAX_FRAME_DELTA_SECS),
            None => 0.0,
        };
        if !self.can_scroll() || dt == 0.0 {
            return false;
        }

        match self.mode {
            MarqueeMode::Dragging => false,
            MarqueeMode::AutoScrolling => {
                let step = self.auto_velocity() * dt;
                self.shift(step);
                step != 0.0
            }
            MarqueeMode::Coasting => {
                let target = self.auto_velocity();
                self.velocity = target + (self.velocity - target) * (-COAST_DECAY_PER_SEC * dt).exp();
                if (self.velocity - target).abs() < COAST_SETTLE_SPEED {
                    self.velocity = target;
                    self.mode = MarqueeMode::AutoScrolling;
                }
                self.shift(self.velocity * dt);
                true
            }
        }
    }

    /// Grabs the track with `pointer_id`. Ignored when there is nothing to
    /// drag or another pointer already holds the track.
    pub fn pointer_down(&mut self, pointer_id: i32, x: f64, timestamp_ms: f64) -> bool {
        if self.item_count == 0 || self.active_pointer.is_some() {
            return false;
        }
        self.mode = MarqueeMode::Dragging;
        self.active_pointer = Some(pointer_id);
        self.last_pointer_x = x;
        self.last_pointer_ts = Some(timestamp_ms);
        self.velocity = 0.0;
        true
    }

    fn holds(&self, pointer_id: i32) -> bool {
        self.is_dragging() && self.active_pointer == Some(pointer_id)
    }

    /// Follows the grabbing pointer 1:1. Returns the applied pointer delta;
    /// moves from any other pointer are ignored.
    pub fn pointer_move(&mut self, pointer_id: i32, x: f64, timestamp_ms: f64) -> Option<f64> {
        if !self.holds(pointer_id) {
            return None;
        }
        let delta = x - self.last_pointer_x;
        self.shift(-delta);

        if let Some(prev) = self.last_pointer_ts {
            let dt = (timestamp_ms - prev) / 1000.0;
            if dt > 0.0 {
                let instant = -delta / dt;
                self.velocity =
                    VELOCITY_SMOOTHING * instant + (1.0 - VELOCITY_SMOOTHING) * self.velocity;
            }
        }
        self.last_pointer_x = x;
        self.last_pointer_ts = Some(timestamp_ms);
        Some(delta)
    }

    /// Lets go of the track; also used for pointer cancel/leave. Returns
    /// whether `pointer_id` was the one holding it.
    pub fn pointer_up(&mut self, pointer_id: i32, timestamp_ms: f64) -> bool {
        if !self.holds(pointer_id) {
            return false;
        }
        let held_still = self
            .last_pointer_ts
            .map_or(true, |ts| timestamp_ms - ts > FLICK_WINDOW_MS);
        if held_still {
            self.velocity = 0.0;
        }
        self.velocity = self.velocity.clamp(-MAX_FLICK_SPEED, MAX_FLICK_SPEED);
        self.active_pointer = None;
        self.last_pointer_ts = None;
        self.mode = MarqueeMode::Coasting;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME_MS: f64 = 1000.0 / 60.0;

    fn measured(direction: Direction, width: f64) -> MarqueeState {
        let mut state = MarqueeState::new(4, direction, 40.0);
        state.set_loop_width(width);
        state
    }

    fn run_frames(state: &mut MarqueeState, start: f64, frames: usize) -> f64 {
        let mut ts = start;
        for _ in 0..frames {
            state.tick(ts);
            ts += FRAME_MS;
        }
        ts
    }

    #[test]
    fn looped_duplicates_at_least_once() {
        assert_eq!(looped(&[1, 2, 3], 0), vec![1, 2, 3, 1, 2, 3]);
        assert_eq!(looped(&[1, 2], 3), vec![1, 2, 1, 2, 1, 2]);
        assert!(looped::<u8>(&[], 2).is_empty());
    }

    #[test]
    fn empty_track_never_moves() {
        let mut state = MarqueeState::new(0, Direction::Forward, 40.0);
        state.set_loop_width(800.0);
        let mut ts = 0.0;
        for _ in 0..120 {
            assert!(!state.tick(ts));
            ts += FRAME_MS;
        }
        assert!(!state.pointer_down(1, 10.0, ts));
        assert_eq!(state.pointer_move(1, 50.0, ts + 5.0), None);
        assert_eq!(state.scroll_offset(), 0.0);
        assert_eq!(state.mode(), MarqueeMode::AutoScrolling);
    }

    #[test]
    fn unmeasured_track_waits() {
        let mut state = MarqueeState::new(3, Direction::Forward, 40.0);
        assert!(!state.tick(0.0));
        assert!(!state.tick(16.0));
        assert_eq!(state.scroll_offset(), 0.0);
    }

    #[test]
    fn auto_scroll_runs_at_constant_speed() {
        let mut state = measured(Direction::Forward, 10_000.0);
        state.tick(0.0);
        assert!(state.tick(50.0));
        assert!((state.scroll_offset() - 2.0).abs() < 1e-9);
        state.tick(100.0);
        assert!((state.scroll_offset() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn reverse_scrolls_the_other_way_and_wraps() {
        let mut state = measured(Direction::Reverse, 1_000.0);
        state.tick(0.0);
        state.tick(100.0);
        assert!((state.scroll_offset() - 996.0).abs() < 1e-9);
        assert!(state.translate_x() < 0.0);
    }

    #[test]
    fn background_gap_is_capped() {
        let mut state = measured(Direction::Forward, 10_000.0);
        state.tick(0.0);
        state.tick(60_000.0);
        assert!((state.scroll_offset() - 40.0 * MAX_FRAME_DELTA_SECS).abs() < 1e-9);
    }

    #[test]
    fn offset_stays_within_one_copy() {
        let mut state = measured(Direction::Forward, 300.0);
        let mut ts = 0.0;
        for _ in 0..2_000 {
            state.tick(ts);
            ts += 100.0;
            let offset = state.scroll_offset();
            assert!((0.0..300.0).contains(&offset), "offset {offset} escaped the loop");
        }
    }

    #[test]
    fn one_copy_later_renders_identically() {
        let width = 4.0 * 320.0;
        let mut state = measured(Direction::Forward, width);
        state.tick(0.0);
        state.tick(90.0);
        let before = state.transform_style();

        state.pointer_down(1, 0.0, 100.0);
        state.pointer_move(1, -width, 120.0);
        assert_eq!(state.transform_style(), before);

        state.pointer_move(1, width, 140.0);
        assert_eq!(state.transform_style(), before);
    }

    #[test]
    fn drag_tracks_pointer_one_to_one() {
        let mut state = measured(Direction::Forward, 1_000.0);
        state.pointer_down(1, 200.0, 0.0);
        state.pointer_move(1, 150.0, 10.0);
        assert!((state.scroll_offset() - 50.0).abs() < 1e-9);
        let start = state.translate_x();

        for (i, dx) in [30.0, -12.5, 7.25].into_iter().enumerate() {
            let before = state.translate_x();
            let x = state.last_pointer_x + dx;
            assert_eq!(state.pointer_move(1, x, 20.0 + i as f64 * 10.0), Some(dx));
            assert!((state.translate_x() - before - dx).abs() < 1e-9);
        }
        assert!((state.translate_x() - start - 24.75).abs() < 1e-9);
    }

    #[test]
    fn dragging_suspends_auto_scroll() {
        let mut state = measured(Direction::Forward, 1_000.0);
        state.tick(0.0);
        state.pointer_down(1, 0.0, 10.0);
        let offset = state.scroll_offset();
        run_frames(&mut state, 16.0, 30);
        assert_eq!(state.scroll_offset(), offset);
        assert!(state.is_dragging());
    }

    #[test]
    fn release_coasts_back_to_auto_speed() {
        let mut state = measured(Direction::Forward, 1_000.0);
        state.tick(0.0);
        state.pointer_down(1, 500.0, 10.0);
        state.pointer_move(1, 400.0, 30.0);
        state.pointer_move(1, 300.0, 50.0);
        state.pointer_up(1, 60.0);
        assert_eq!(state.mode(), MarqueeMode::Coasting);
        assert!(state.velocity() > 40.0);
        assert!(state.velocity() <= MAX_FLICK_SPEED);

        run_frames(&mut state, 76.0, 600);
        assert_eq!(state.mode(), MarqueeMode::AutoScrolling);
        assert_eq!(state.velocity(), 40.0);
    }

    #[test]
    fn release_after_holding_still_has_no_momentum() {
        let mut state = measured(Direction::Reverse, 1_000.0);
        state.pointer_down(1, 500.0, 0.0);
        state.pointer_move(1, 400.0, 10.0);
        state.pointer_up(1, 500.0);
        assert_eq!(state.velocity(), 0.0);
        assert_eq!(state.mode(), MarqueeMode::Coasting);
    }

    #[test]
    fn pointer_up_without_drag_is_ignored() {
        let mut state = measured(Direction::Forward, 1_000.0);
        state.pointer_up(1, 10.0);
        assert_eq!(state.mode(), MarqueeMode::AutoScrolling);
    }

    #[test]
    fn bad_measurement_disables_scrolling() {
        let mut state = measured(Direction::Forward, 1_000.0);
        state.set_loop_width(f64::NAN);
        assert_eq!(state.loop_width(), 0.0);
        state.tick(0.0);
        assert!(!state.tick(16.0));
    }

    #[test]
    fn enough_copies_cover_a_wide_strip() {
        // Three 360px cards with a 20px margin in a 1440px window with 5% padding.
        let copy = 3.0 * 380.0;
        let visible = 1296.0;
        let mut state = measured(Direction::Forward, copy);
        let copies = state.required_copies(visible, 2);
        assert_eq!(copies, 3);

        let track = copies as f64 * copy;
        let mut ts = 0.0;
        for _ in 0..2_000 {
            state.tick(ts);
            ts += 50.0;
            assert!(
                state.scroll_offset() + visible <= track,
                "blank gap at offset {}",
                state.scroll_offset()
            );
        }
    }

    #[test]
    fn required_copies_never_below_two() {
        let state = measured(Direction::Forward, 4_000.0);
        assert_eq!(state.required_copies(1_000.0, 0), 2);
        assert_eq!(state.required_copies(1_000.0, 4), 4);
        let unmeasured = MarqueeState::new(3, Direction::Forward, 40.0);
        assert_eq!(unmeasured.required_copies(1_000.0, 2), 2);
        assert_eq!(state.required_copies(f64::NAN, 2), 2);
        assert_eq!(measured(Direction::Forward, 500.0).required_copies(1_000.0, 2), 3);
    }

    #[test]
    fn second_pointer_does_not_hijack_the_drag() {
        let mut state = measured(Direction::Forward, 10_000.0);
        assert!(state.pointer_down(1, 100.0, 0.0));
        state.pointer_move(1, 110.0, 10.0);
        let before = state.translate_x();

        assert!(!state.pointer_down(2, 700.0, 20.0));
        assert_eq!(state.pointer_move(2, 720.0, 25.0), None);
        assert_eq!(state.pointer_move(1, 115.0, 30.0), Some(5.0));
        assert!((state.translate_x() - before - 5.0).abs() < 1e-9);

        assert!(!state.pointer_up(2, 40.0));
        assert!(state.is_dragging());
        assert!(state.pointer_up(1, 50.0));
        assert_eq!(state.mode(), MarqueeMode::Coasting);
        assert!(state.pointer_down(2, 300.0, 60.0));
    }

    #[test]
    fn configuration_check() {
        let state = MarqueeState::new(3, Direction::Reverse, 40.0);
        assert!(state.configured_for(3, Direction::Reverse, 40.0));
        assert!(!state.configured_for(4, Direction::Reverse, 40.0));
        assert!(!state.configured_for(3, Direction::Forward, 40.0));
    }
}
