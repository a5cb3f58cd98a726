use crate::config::ScoringWeights;
use crate::consts::{
    FOCUSED_MIN, IDLE_GAIN, IDLE_GRACE_SEC, IDLE_OVERRUN_GAIN, LOSING_FOCUS_MIN, SCORE_MAX,
    SCORE_MIN, TAB_GAIN, TAB_SWITCH_CEILING, TYPING_GAIN, TYPING_SPEED_CEILING_WPM,
};
use crate::core_types::{ActivitySample, FocusLabel, Prediction};
use crate::error::{ScoreError, ScoreResult};
use tracing::debug;

/// Heuristic focus model: a weighted sum of three normalized activity
/// signals around a baseline score.
#[derive(Clone, Debug, Default)]
pub struct FocusScorer {
    pub weights: ScoringWeights,
}

impl FocusScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Scores one activity sample.
    ///
    /// Total over finite input: negative values clamp to zero, NaN and
    /// infinity are rejected. The returned score is clamped to 0..=100 and
    /// rounded to 2 decimals; the label is derived from the rounded score.
    pub fn predict(&self, sample: &ActivitySample) -> ScoreResult<Prediction> {
        let typing = sanitize(sample.typing_speed, "typing_speed")?;
        let idle = sanitize(sample.idle_time, "idle_time")?;
        let tabs = sanitize(sample.tab_switches, "tab_switches")?;

        let w = &self.weights;
        let mut score = w.baseline_score;
        score += normalized_typing(typing) * TYPING_GAIN * w.weight_typing;
        score += idle_penalty(normalized_idle(idle), w.weight_idle);
        score += normalized_tabs(tabs) * TAB_GAIN * w.weight_tabs;

        let focus_score = round2(score.clamp(SCORE_MIN, SCORE_MAX));

        Ok(Prediction {
            focus_score,
            focus_label: label_for(focus_score),
        })
    }
}

fn sanitize(value: f64, field: &str) -> ScoreResult<f64> {
    if !value.is_finite() {
        return Err(ScoreError::InvalidInput(format!(
            "{} must be a finite number, got {}",
            field, value
        )));
    }
    if value < 0.0 {
        debug!("Negative {} ({}) clamped to 0", field, value);
        return Ok(0.0);
    }
    Ok(value)
}

/// Typing at or above the ceiling counts as full speed.
fn normalized_typing(wpm: f64) -> f64 {
    (wpm / TYPING_SPEED_CEILING_WPM).min(1.0)
}

/// Piecewise: 0..=1 inside the grace window, unbounded past it so long
/// idle stretches stay distinguishable.
fn normalized_idle(seconds: f64) -> f64 {
    if seconds <= IDLE_GRACE_SEC {
        seconds / IDLE_GRACE_SEC
    } else {
        1.0 + (seconds - IDLE_GRACE_SEC) / IDLE_GRACE_SEC
    }
}

fn normalized_tabs(count: f64) -> f64 {
    (count / TAB_SWITCH_CEILING).min(1.0)
}

/// Idle inside the grace window costs at most IDLE_GAIN; every normalized
/// unit past 1.0 costs IDLE_OVERRUN_GAIN on top.
fn idle_penalty(normalized_idle: f64, weight: f64) -> f64 {
    if normalized_idle <= 1.0 {
        normalized_idle * IDLE_GAIN * weight
    } else {
        IDLE_GAIN * weight + (normalized_idle - 1.0) * IDLE_OVERRUN_GAIN * weight
    }
}

fn round2(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

fn label_for(score: f64) -> FocusLabel {
    if score >= FOCUSED_MIN {
        FocusLabel::Focused
    } else if score >= LOSING_FOCUS_MIN {
        FocusLabel::LosingFocus
    } else {
        FocusLabel::Distracted
    }
}
