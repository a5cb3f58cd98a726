use clap::Args;
use serde::{Deserialize, Serialize};

/// Heuristic model weights. Defaults are the current model revision;
/// every weight is overridable from the command line.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Score before any signal is applied.
    #[arg(long, default_value_t = 75.0)]
    pub baseline_score: f64,

    // Typing speed helps, idle time and tab switching hurt.
    #[arg(long, default_value_t = 0.3)]
    pub weight_typing: f64,

    #[arg(long, default_value_t = -1.0, allow_hyphen_values = true)]
    pub weight_idle: f64,

    #[arg(long, default_value_t = -0.3, allow_hyphen_values = true)]
    pub weight_tabs: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            baseline_score: 75.0,
            weight_typing: 0.3,
            weight_idle: -1.0,
            weight_tabs: -0.3,
        }
    }
}
