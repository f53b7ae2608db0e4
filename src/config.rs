//! Application-level configuration constants.

// UI Behavior
pub const TICK_INTERVAL_MS: u32 = 1_000;

// Quick-set presets offered below the controls: label and total seconds.
pub const PRESETS: [(&str, u32); 3] = [("1 min", 60), ("5 min", 300), ("10 min", 600)];
