/// Typing speed at or above this many words/minute counts as "full speed".
/// Normalization caps here, so faster typing earns no extra credit.
pub const TYPING_SPEED_CEILING_WPM: f64 = 60.0;

/// Idle time up to this many seconds normalizes into 0..=1.
/// Beyond it the normalized value keeps growing (overrun regime).
pub const IDLE_GRACE_SEC: f64 = 30.0;

/// Tab switches at or above this count saturate the distraction signal.
pub const TAB_SWITCH_CEILING: f64 = 10.0;

/// Gain applied to normalized typing speed before weighting.
pub const TYPING_GAIN: f64 = 20.0;

/// Gain applied to normalized idle time within the grace window.
pub const IDLE_GAIN: f64 = 25.0;

/// Gain applied to the portion of normalized idle time past the grace
/// window. Steeper than IDLE_GAIN: long idling drains the score faster.
pub const IDLE_OVERRUN_GAIN: f64 = 40.0;

/// Gain applied to normalized tab switches before weighting.
pub const TAB_GAIN: f64 = 15.0;

/// Minimum score for the `Focused` label.
pub const FOCUSED_MIN: f64 = 80.0;

/// Minimum score for the `LosingFocus` label. Below this: `Distracted`.
pub const LOSING_FOCUS_MIN: f64 = 50.0;

/// Lower and upper clamp bounds for the final score.
pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 100.0;
