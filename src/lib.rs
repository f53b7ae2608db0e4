use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Default input field contents at mount.
pub mod defaults {
    pub const MINUTES_TEXT: &str = "01";
    pub const SECONDS_TEXT: &str = "00";
}

// Leading digits after optional whitespace. Everything after the digits is
// ignored; text with no leading digits counts as 0.
static LEADING_DIGITS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(\d+)").unwrap());

/// Parse a free-form duration field into a non-negative integer.
///
/// Lenient: `"12abc"` parses as 12, `"abc"` and the empty string parse
/// as 0. Digit runs too large for `u32` saturate.
pub fn parse_duration_field(text: &str) -> u32 {
    match LEADING_DIGITS_REGEX.captures(text) {
        Some(caps) => caps[1].parse::<u32>().unwrap_or(u32::MAX),
        None => 0,
    }
}

/// Format a second count as a zero-padded `MM:SS` clock string.
pub fn format_secs_to_minsec(total_secs: u32) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

/// Whether the countdown is actively ticking.
///
/// `Idle` covers "not yet started", "paused", and "finished"; the inputs are
/// editable and authoritative. `Running` means a periodic decrement is live
/// and the inputs are frozen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
}

/// Events the countdown reacts to: user intents forwarded by the view, plus
/// the periodic `Tick` delivered by the interval source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountdownAction {
    EditMinutes(String),
    EditSeconds(String),
    ToggleStartPause,
    Reset,
    ApplyPreset(u32),
    Tick,
}

/// The countdown controller: owns the input texts, the remaining-seconds
/// counter, and the run state. All operations are total synchronous
/// functions over in-memory state; there is no failure mode.
///
/// While `Idle`, `remaining` is re-derived from the input texts on every
/// edit. Once `Running`, it decrements independently and the inputs no
/// longer feed it until the countdown is idle again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    minutes_text: String,
    seconds_text: String,
    remaining: u32,
    run_state: RunState,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Countdown {
    /// A fresh controller: inputs ("01","00"), 60 seconds remaining, idle.
    pub fn new() -> Self {
        let mut countdown = Self {
            minutes_text: defaults::MINUTES_TEXT.to_string(),
            seconds_text: defaults::SECONDS_TEXT.to_string(),
            remaining: 0,
            run_state: RunState::Idle,
        };
        countdown.remaining = countdown.input_total_secs();
        countdown
    }

    pub fn minutes_text(&self) -> &str {
        &self.minutes_text
    }

    pub fn seconds_text(&self) -> &str {
        &self.seconds_text
    }

    /// Seconds left on the clock. The view formats this as `MM:SS`.
    pub fn remaining_secs(&self) -> u32 {
        self.remaining
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// The input fields are frozen exactly while the countdown runs.
    pub fn inputs_disabled(&self) -> bool {
        self.is_running()
    }

    /// Total seconds currently implied by the two input texts.
    fn input_total_secs(&self) -> u32 {
        parse_duration_field(&self.minutes_text)
            .saturating_mul(60)
            .saturating_add(parse_duration_field(&self.seconds_text))
    }

    /// Store the minutes text verbatim. Re-derives `remaining` only while
    /// idle; a running countdown keeps decrementing untouched.
    pub fn set_minutes_text(&mut self, text: String) {
        self.minutes_text = text;
        if self.run_state == RunState::Idle {
            self.remaining = self.input_total_secs();
        }
    }

    /// Store the seconds text verbatim; same idle-only re-derivation as
    /// [`set_minutes_text`](Self::set_minutes_text).
    pub fn set_seconds_text(&mut self, text: String) {
        self.seconds_text = text;
        if self.run_state == RunState::Idle {
            self.remaining = self.input_total_secs();
        }
    }

    /// Flip between running and paused. Pausing leaves `remaining` at its
    /// current value rather than re-deriving it from the inputs.
    pub fn toggle_start_pause(&mut self) {
        self.run_state = match self.run_state {
            RunState::Idle => RunState::Running,
            RunState::Running => RunState::Idle,
        };
        debug!(
            "toggled to {:?} with {}s remaining",
            self.run_state, self.remaining
        );
    }

    /// Stop the countdown and restore `remaining` to whatever the current
    /// input texts imply, regardless of prior run state.
    pub fn reset(&mut self) {
        self.run_state = RunState::Idle;
        self.remaining = self.input_total_secs();
        debug!("reset to {}s", self.remaining);
    }

    /// Stop the countdown, set `remaining` directly, and rewrite both input
    /// texts to the zero-padded minutes/seconds decomposition of the preset.
    pub fn apply_preset(&mut self, total_secs: u32) {
        self.run_state = RunState::Idle;
        self.remaining = total_secs;
        self.minutes_text = format!("{:02}", total_secs / 60);
        self.seconds_text = format!("{:02}", total_secs % 60);
        debug!("preset applied: {}s", total_secs);
    }

    /// One elapsed second. The final tick drives `remaining` to 0 and goes
    /// idle in the same transition, so the countdown never sits at 0 while
    /// still running. A stray tick delivered while idle is a no-op.
    pub fn tick(&mut self) {
        if self.run_state != RunState::Running {
            return;
        }
        if self.remaining <= 1 {
            self.remaining = 0;
            self.run_state = RunState::Idle;
            debug!("countdown finished");
        } else {
            self.remaining -= 1;
        }
    }

    /// Apply one action. This is the single entry point the reducer in the
    /// view layer dispatches through.
    pub fn apply(&mut self, action: CountdownAction) {
        match action {
            CountdownAction::EditMinutes(text) => self.set_minutes_text(text),
            CountdownAction::EditSeconds(text) => self.set_seconds_text(text),
            CountdownAction::ToggleStartPause => self.toggle_start_pause(),
            CountdownAction::Reset => self.reset(),
            CountdownAction::ApplyPreset(total_secs) => self.apply_preset(total_secs),
            CountdownAction::Tick => self.tick(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_duration_field("0"), 0);
        assert_eq!(parse_duration_field("7"), 7);
        assert_eq!(parse_duration_field("42"), 42);
        assert_eq!(parse_duration_field("  15"), 15);
    }

    #[test]
    fn non_numeric_and_empty_parse_to_zero() {
        assert_eq!(parse_duration_field(""), 0);
        assert_eq!(parse_duration_field("abc"), 0);
        assert_eq!(parse_duration_field("-5"), 0);
        assert_eq!(parse_duration_field("."), 0);
    }

    #[test]
    fn leading_digits_win_over_trailing_garbage() {
        assert_eq!(parse_duration_field("12abc"), 12);
        assert_eq!(parse_duration_field("1x"), 1);
        assert_eq!(parse_duration_field("03 "), 3);
    }

    #[test]
    fn oversized_digit_runs_saturate() {
        assert_eq!(parse_duration_field("99999999999999999999"), u32::MAX);
    }

    #[test]
    fn formats_clock_strings() {
        assert_eq!(format_secs_to_minsec(0), "00:00");
        assert_eq!(format_secs_to_minsec(60), "01:00");
        assert_eq!(format_secs_to_minsec(150), "02:30");
        assert_eq!(format_secs_to_minsec(599), "09:59");
        assert_eq!(format_secs_to_minsec(600), "10:00");
    }

    #[test]
    fn starts_idle_at_one_minute() {
        let countdown = Countdown::new();
        assert_eq!(countdown.minutes_text(), "01");
        assert_eq!(countdown.seconds_text(), "00");
        assert_eq!(countdown.remaining_secs(), 60);
        assert_eq!(countdown.run_state(), RunState::Idle);
        assert!(!countdown.inputs_disabled());
    }

    #[test]
    fn idle_edits_rederive_remaining() {
        let mut countdown = Countdown::new();
        countdown.set_minutes_text("2".to_string());
        countdown.set_seconds_text("30".to_string());
        assert_eq!(countdown.remaining_secs(), 150);

        countdown.set_minutes_text("0".to_string());
        assert_eq!(countdown.remaining_secs(), 30);
    }

    #[test]
    fn invalid_fields_contribute_zero() {
        let mut countdown = Countdown::new();
        countdown.set_minutes_text("abc".to_string());
        assert_eq!(countdown.remaining_secs(), 0);
        countdown.set_seconds_text("45".to_string());
        assert_eq!(countdown.remaining_secs(), 45);
        countdown.set_seconds_text(String::new());
        assert_eq!(countdown.remaining_secs(), 0);
    }

    #[test]
    fn partial_input_transiently_shows_smaller_duration() {
        // "1" typed on the way to "12" counts as 1 minute for that instant.
        let mut countdown = Countdown::new();
        countdown.set_seconds_text("0".to_string());
        countdown.set_minutes_text("1".to_string());
        assert_eq!(countdown.remaining_secs(), 60);
        countdown.set_minutes_text("12".to_string());
        assert_eq!(countdown.remaining_secs(), 720);
    }

    #[test]
    fn ticks_decrement_while_running() {
        let mut countdown = Countdown::new();
        countdown.toggle_start_pause();
        for expected in (50..60).rev() {
            countdown.tick();
            assert_eq!(countdown.remaining_secs(), expected);
            assert_eq!(countdown.run_state(), RunState::Running);
        }
    }

    #[test]
    fn edits_while_running_do_not_touch_remaining() {
        let mut countdown = Countdown::new();
        countdown.toggle_start_pause();
        countdown.tick();
        countdown.set_minutes_text("59".to_string());
        assert_eq!(countdown.minutes_text(), "59");
        assert_eq!(countdown.remaining_secs(), 59);
        assert!(countdown.inputs_disabled());
    }

    #[test]
    fn final_tick_hits_zero_and_stops() {
        let mut countdown = Countdown::new();
        countdown.set_minutes_text("0".to_string());
        countdown.set_seconds_text("3".to_string());
        countdown.toggle_start_pause();

        countdown.tick();
        countdown.tick();
        assert_eq!(countdown.remaining_secs(), 1);
        assert_eq!(countdown.run_state(), RunState::Running);

        countdown.tick();
        assert_eq!(countdown.remaining_secs(), 0);
        assert_eq!(countdown.run_state(), RunState::Idle);
    }

    #[test]
    fn tick_while_idle_is_a_noop() {
        let mut countdown = Countdown::new();
        countdown.tick();
        assert_eq!(countdown.remaining_secs(), 60);
        assert_eq!(countdown.run_state(), RunState::Idle);
    }

    #[test]
    fn starting_at_zero_finishes_on_first_tick() {
        let mut countdown = Countdown::new();
        countdown.set_minutes_text("0".to_string());
        countdown.set_seconds_text("0".to_string());
        countdown.toggle_start_pause();
        assert_eq!(countdown.run_state(), RunState::Running);

        countdown.tick();
        assert_eq!(countdown.remaining_secs(), 0);
        assert_eq!(countdown.run_state(), RunState::Idle);
    }

    #[test]
    fn toggle_twice_restores_state() {
        let mut countdown = Countdown::new();
        countdown.toggle_start_pause();
        countdown.toggle_start_pause();
        assert_eq!(countdown.run_state(), RunState::Idle);
        assert_eq!(countdown.remaining_secs(), 60);
    }

    #[test]
    fn pause_keeps_remaining_not_inputs() {
        let mut countdown = Countdown::new();
        countdown.toggle_start_pause();
        for _ in 0..10 {
            countdown.tick();
        }
        countdown.toggle_start_pause();
        assert_eq!(countdown.run_state(), RunState::Idle);
        // Paused value sticks; it is not re-derived from "01"/"00".
        assert_eq!(countdown.remaining_secs(), 50);
    }

    #[test]
    fn reset_while_running_restores_input_value() {
        let mut countdown = Countdown::new();
        countdown.set_minutes_text("0".to_string());
        countdown.set_seconds_text("10".to_string());
        countdown.toggle_start_pause();
        countdown.tick();
        countdown.tick();
        countdown.tick();
        assert_eq!(countdown.remaining_secs(), 7);

        countdown.reset();
        assert_eq!(countdown.run_state(), RunState::Idle);
        assert_eq!(countdown.remaining_secs(), 10);
    }

    #[test]
    fn preset_overrides_any_prior_state() {
        let mut countdown = Countdown::new();
        countdown.set_minutes_text("7".to_string());
        countdown.toggle_start_pause();
        countdown.tick();

        countdown.apply_preset(300);
        assert_eq!(countdown.run_state(), RunState::Idle);
        assert_eq!(countdown.remaining_secs(), 300);
        assert_eq!(countdown.minutes_text(), "05");
        assert_eq!(countdown.seconds_text(), "00");
    }

    #[test]
    fn preset_decomposes_odd_totals() {
        let mut countdown = Countdown::new();
        countdown.apply_preset(90);
        assert_eq!(countdown.minutes_text(), "01");
        assert_eq!(countdown.seconds_text(), "30");
        assert_eq!(countdown.remaining_secs(), 90);
    }

    #[test]
    fn full_run_from_two_thirty() {
        let mut countdown = Countdown::new();
        countdown.apply(CountdownAction::EditMinutes("02".to_string()));
        countdown.apply(CountdownAction::EditSeconds("30".to_string()));
        assert_eq!(countdown.remaining_secs(), 150);

        countdown.apply(CountdownAction::ToggleStartPause);
        for _ in 0..150 {
            countdown.apply(CountdownAction::Tick);
        }
        assert_eq!(countdown.remaining_secs(), 0);
        assert_eq!(countdown.run_state(), RunState::Idle);

        // Extra ticks after completion change nothing.
        countdown.apply(CountdownAction::Tick);
        assert_eq!(countdown.remaining_secs(), 0);
    }
}
