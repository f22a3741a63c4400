//! Core game model for Which Shade?.
//! State transitions are plain methods on `GameState` so they can be unit
//! tested without a DOM; the `Reducible` impl at the bottom wires them to Yew
//! and injects browser randomness for each fresh round.

use std::rc::Rc;
use yew::Reducible;

/// Smallest playable grid side.
pub const MIN_LEVEL: u32 = 2;
/// Largest grid side; difficulty plateaus here instead of erroring.
pub const MAX_LEVEL: u32 = 9;
/// Color delta at `MIN_LEVEL` (easiest rounds).
pub const DELTA_MAX: i32 = 22;
/// Color delta at `MAX_LEVEL` (hardest rounds).
pub const DELTA_MIN: i32 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Clamp a shifted channel back into the displayable range.
pub fn clamp_channel(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

/// Difficulty curve: shrinks linearly from `DELTA_MAX` at level 2 to
/// `DELTA_MIN` at level 9.
pub fn delta_for_level(level: u32) -> i32 {
    let span = (MAX_LEVEL - MIN_LEVEL) as f64;
    let t = ((level.saturating_sub(MIN_LEVEL)) as f64 / span).clamp(0.0, 1.0);
    (DELTA_MAX as f64 - t * (DELTA_MAX - DELTA_MIN) as f64).round() as i32
}

/// Shift all channels of `base` by a signed delta. The green and blue
/// channels move by 0.8x and 0.6x so the result reads as a hue change, not a
/// uniform brightness change.
pub fn odd_color(base: Rgb, delta: i32, dir: i32) -> Rgb {
    let d = delta * dir.signum();
    Rgb {
        r: clamp_channel(base.r as i32 + d),
        g: clamp_channel(base.g as i32 + (d as f64 * 0.8).round() as i32),
        b: clamp_channel(base.b as i32 + (d as f64 * 0.6).round() as i32),
    }
}

/// One round's derived palette. Regenerated wholesale on every transition
/// that starts a new round; nothing carries over.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Round {
    pub base: Rgb,
    pub odd: Rgb,
    pub odd_index: usize,
    pub delta: i32,
}

impl Round {
    pub fn tile_count(level: u32) -> usize {
        (level * level) as usize
    }

    /// Roll a fresh round for `level`. `rand` must yield uniform values in
    /// [0, 1); production passes `js_sys::Math::random`, tests pass scripted
    /// sequences.
    pub fn roll(level: u32, rand: &mut dyn FnMut() -> f64) -> Self {
        // Channels in [40, 220): avoids near-black / near-white bases.
        let channel = |rand: &mut dyn FnMut() -> f64| 40 + (rand() * 180.0).floor() as u8;
        let base = Rgb {
            r: channel(rand),
            g: channel(rand),
            b: channel(rand),
        };
        let delta = delta_for_level(level);
        let dir = if rand() < 0.5 { -1 } else { 1 };
        let odd = odd_color(base, delta, dir);
        let total = Self::tile_count(level);
        let odd_index = ((rand() * total as f64).floor() as usize).min(total - 1);
        Self {
            base,
            odd,
            odd_index,
            delta,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickResult {
    Correct,
    Incorrect,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    /// Grid side length, kept within [MIN_LEVEL, MAX_LEVEL].
    pub level: u32,
    /// Consecutive correct picks this session.
    pub streak: u32,
    /// Highest streak ever; persisted by an effect watching this field.
    pub best: u32,
    pub round: Round,
    /// Whether a mini-app host shell was detected. Display only.
    pub is_mini: bool,
    /// Status line text: gameplay feedback or the initial ready text.
    pub toast: String,
    /// Bumped on each fresh round so the board node is re-keyed.
    pub round_seq: u32,
    /// True only for the render immediately following a wrong pick.
    pub shaking: bool,
}

impl GameState {
    /// Fresh boot with browser randomness.
    pub fn boot(best: u32, ready_text: &str) -> Self {
        Self::new(best, ready_text, &mut js_random)
    }

    pub fn new(best: u32, ready_text: &str, rand: &mut dyn FnMut() -> f64) -> Self {
        Self {
            level: MIN_LEVEL,
            streak: 0,
            best,
            round: Round::roll(MIN_LEVEL, rand),
            is_mini: false,
            toast: ready_text.to_string(),
            round_seq: 0,
            shaking: false,
        }
    }

    /// Apply a tile pick to the gameplay fields. Does not roll the next
    /// round; the caller does that once the new level is known.
    pub fn apply_pick(&mut self, index: usize) -> PickResult {
        if index == self.round.odd_index {
            self.streak += 1;
            if self.streak > self.best {
                self.best = self.streak;
            }
            if self.streak % 2 == 0 && self.level < MAX_LEVEL {
                self.level += 1;
            }
            PickResult::Correct
        } else {
            self.streak = 0;
            self.level = self.level.saturating_sub(1).max(MIN_LEVEL);
            PickResult::Incorrect
        }
    }

    /// Back to a fresh 2x2 game. Best is deliberately untouched.
    pub fn apply_reset(&mut self) {
        self.level = MIN_LEVEL;
        self.streak = 0;
    }

    fn next_round(&mut self, rand: &mut dyn FnMut() -> f64) {
        self.round = Round::roll(self.level, rand);
        self.round_seq = self.round_seq.wrapping_add(1);
    }
}

/// A hint outline is only valid for the round it was requested in; once a
/// pick or reset rolls a fresh round the outline must not carry over and
/// reveal the new odd tile.
pub fn hint_visible(hint_round: Option<u32>, round_seq: u32) -> bool {
    hint_round == Some(round_seq)
}

#[derive(Clone, Debug)]
pub enum GameAction {
    Pick { index: usize },
    Reset,
    ShowHint,
    SetEnvironment { is_mini: bool },
}

fn js_random() -> f64 {
    js_sys::Math::random()
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        new.shaking = false;
        match action {
            GameAction::Pick { index } => {
                match new.apply_pick(index) {
                    PickResult::Correct => {
                        new.toast = "✓".to_string();
                    }
                    PickResult::Incorrect => {
                        new.toast = "✕".to_string();
                        new.shaking = true;
                    }
                }
                new.next_round(&mut js_random);
            }
            GameAction::Reset => {
                new.apply_reset();
                new.toast = "reset".to_string();
                new.next_round(&mut js_random);
            }
            GameAction::ShowHint => {
                new.toast = "odd outlined".to_string();
            }
            GameAction::SetEnvironment { is_mini } => {
                new.is_mini = is_mini;
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic random source cycling through a script.
    fn scripted(values: Vec<f64>) -> impl FnMut() -> f64 {
        let mut i = 0;
        move || {
            let v = values[i % values.len()];
            i += 1;
            v
        }
    }

    fn state_at(level: u32, streak: u32, best: u32) -> GameState {
        let mut rand = scripted(vec![0.5]);
        let mut s = GameState::new(best, "ready ✓", &mut rand);
        s.level = level;
        s.streak = streak;
        s.round = Round::roll(level, &mut rand);
        s
    }

    #[test]
    fn tile_count_is_level_squared() {
        for level in MIN_LEVEL..=MAX_LEVEL {
            assert_eq!(Round::tile_count(level), (level * level) as usize);
        }
    }

    #[test]
    fn rolled_odd_index_in_bounds_at_extremes() {
        for level in MIN_LEVEL..=MAX_LEVEL {
            let total = Round::tile_count(level);
            let mut low = scripted(vec![0.0]);
            assert_eq!(Round::roll(level, &mut low).odd_index, 0);
            let mut high = scripted(vec![0.999_999]);
            assert!(Round::roll(level, &mut high).odd_index < total);
        }
    }

    #[test]
    fn delta_monotone_and_bounded() {
        assert_eq!(delta_for_level(MIN_LEVEL), 22);
        assert_eq!(delta_for_level(MAX_LEVEL), 8);
        let mut prev = i32::MAX;
        for level in MIN_LEVEL..=MAX_LEVEL {
            let d = delta_for_level(level);
            assert!((8..=22).contains(&d), "delta {d} out of range at {level}");
            assert!(d <= prev, "delta grew at level {level}");
            prev = d;
        }
        // Out-of-domain levels stay clamped.
        assert_eq!(delta_for_level(1), 22);
        assert_eq!(delta_for_level(50), 8);
    }

    #[test]
    fn clamp_channel_never_escapes_range() {
        assert_eq!(clamp_channel(-10), 0);
        assert_eq!(clamp_channel(300), 255);
        assert_eq!(clamp_channel(0), 0);
        assert_eq!(clamp_channel(255), 255);
        assert_eq!(clamp_channel(128), 128);
    }

    #[test]
    fn base_channels_stay_in_palette_band() {
        for v in [0.0, 0.25, 0.5, 0.75, 0.999_999] {
            let mut rand = scripted(vec![v]);
            let round = Round::roll(MIN_LEVEL, &mut rand);
            for c in [round.base.r, round.base.g, round.base.b] {
                assert!((40..220).contains(&c), "channel {c} outside [40,220)");
            }
        }
    }

    #[test]
    fn odd_color_shift_is_asymmetric_per_channel() {
        let base = Rgb {
            r: 100,
            g: 100,
            b: 100,
        };
        let up = odd_color(base, 20, 1);
        assert_eq!((up.r, up.g, up.b), (120, 116, 112));
        let down = odd_color(base, 20, -1);
        assert_eq!((down.r, down.g, down.b), (80, 84, 88));
    }

    #[test]
    fn odd_color_clamps_at_extremes() {
        let bright = Rgb {
            r: 250,
            g: 250,
            b: 250,
        };
        let shifted = odd_color(bright, 22, 1);
        assert_eq!((shifted.r, shifted.g, shifted.b), (255, 255, 255));
        let dark = Rgb { r: 5, g: 5, b: 5 };
        let shifted = odd_color(dark, 22, -1);
        assert_eq!((shifted.r, shifted.g, shifted.b), (0, 0, 0));
    }

    #[test]
    fn correct_pick_grows_streak_and_level_on_even_streaks() {
        let mut s = state_at(2, 0, 0);
        s.round.odd_index = 1;

        assert_eq!(s.apply_pick(1), PickResult::Correct);
        assert_eq!((s.streak, s.level, s.best), (1, 2, 1));

        s.round.odd_index = 0;
        assert_eq!(s.apply_pick(0), PickResult::Correct);
        assert_eq!((s.streak, s.level, s.best), (2, 3, 2));
    }

    #[test]
    fn level_caps_at_max_on_even_streaks() {
        let mut s = state_at(MAX_LEVEL, 1, 10);
        let odd = s.round.odd_index;
        assert_eq!(s.apply_pick(odd), PickResult::Correct);
        assert_eq!(s.streak, 2);
        assert_eq!(s.level, MAX_LEVEL);
    }

    #[test]
    fn incorrect_pick_resets_streak_and_shrinks_level() {
        let mut s = state_at(5, 4, 9);
        let wrong = (s.round.odd_index + 1) % Round::tile_count(5);
        assert_eq!(s.apply_pick(wrong), PickResult::Incorrect);
        assert_eq!((s.streak, s.level, s.best), (0, 4, 9));
    }

    #[test]
    fn level_floors_at_min_on_incorrect_pick() {
        let mut s = state_at(MIN_LEVEL, 3, 3);
        let wrong = (s.round.odd_index + 1) % Round::tile_count(MIN_LEVEL);
        s.apply_pick(wrong);
        assert_eq!(s.level, MIN_LEVEL);
    }

    #[test]
    fn reset_preserves_best() {
        let mut s = state_at(7, 5, 11);
        s.apply_reset();
        assert_eq!((s.level, s.streak, s.best), (MIN_LEVEL, 0, 11));
    }

    #[test]
    fn best_never_decreases_across_mixed_play() {
        let mut rand = scripted(vec![0.3, 0.7, 0.1, 0.9, 0.5]);
        let mut s = GameState::new(0, "ready ✓", &mut rand);
        let mut prev_best = s.best;
        for i in 0..200 {
            match i % 7 {
                // Alternate correct picks, wrong picks and resets.
                0 | 1 | 2 | 3 => {
                    let odd = s.round.odd_index;
                    s.apply_pick(odd);
                }
                4 | 5 => {
                    let wrong = (s.round.odd_index + 1) % Round::tile_count(s.level);
                    s.apply_pick(wrong);
                }
                _ => s.apply_reset(),
            }
            assert!(s.best >= prev_best, "best decreased at step {i}");
            assert!((MIN_LEVEL..=MAX_LEVEL).contains(&s.level));
            prev_best = s.best;
            s.round = Round::roll(s.level, &mut rand);
        }
    }

    #[test]
    fn scenario_two_correct_picks_from_fresh_start() {
        let mut s = state_at(2, 0, 0);
        for _ in 0..2 {
            let odd = s.round.odd_index;
            s.apply_pick(odd);
            let mut rand = scripted(vec![0.4]);
            s.round = Round::roll(s.level, &mut rand);
        }
        assert_eq!((s.streak, s.level, s.best), (2, 3, 2));
    }

    #[test]
    fn hint_outline_does_not_survive_into_next_round() {
        let mut rand = scripted(vec![0.5]);
        let mut s = GameState::new(0, "ready ✓", &mut rand);
        // Hint requested during the current round.
        let issued_for = Some(s.round_seq);
        assert!(hint_visible(issued_for, s.round_seq));

        // A correct pick rolls a fresh round; the old outline must be gone.
        let odd = s.round.odd_index;
        s.apply_pick(odd);
        s.next_round(&mut rand);
        assert!(!hint_visible(issued_for, s.round_seq));

        // Same after a reset.
        let issued_for = Some(s.round_seq);
        s.apply_reset();
        s.next_round(&mut rand);
        assert!(!hint_visible(issued_for, s.round_seq));
    }

    #[test]
    fn hint_hidden_when_no_hint_pending() {
        assert!(!hint_visible(None, 0));
        assert!(!hint_visible(None, 42));
    }

    #[test]
    fn scenario_miss_at_level_five() {
        let mut s = state_at(5, 4, 4);
        let wrong = (s.round.odd_index + 1) % Round::tile_count(5);
        s.apply_pick(wrong);
        assert_eq!((s.streak, s.level, s.best), (0, 4, 4));
    }
}
