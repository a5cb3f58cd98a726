use focusmeter_core::scorer::FocusScorer;

#[derive(Clone)]
pub struct AppState {
    pub scorer: FocusScorer,
}

impl AppState {
    pub fn new(scorer: FocusScorer) -> Self {
        Self { scorer }
    }
}
