use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// One observation window of user activity, as reported by the tracker.
///
/// - `typing_speed`: words per minute
/// - `idle_time`: seconds since last detected input
/// - `tab_switches`: tab-switch events in the window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivitySample {
    pub typing_speed: f64,
    pub idle_time: f64,
    pub tab_switches: f64,
}

impl ActivitySample {
    pub fn new(typing_speed: f64, idle_time: f64, tab_switches: f64) -> Self {
        Self {
            typing_speed,
            idle_time,
            tab_switches,
        }
    }
}

/// Categorical reading of the focus score.
/// Wire form keeps the space in "Losing Focus" for client compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum FocusLabel {
    Focused,
    #[serde(rename = "Losing Focus")]
    #[strum(serialize = "Losing Focus")]
    LosingFocus,
    Distracted,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub focus_score: f64,
    pub focus_label: FocusLabel,
}
