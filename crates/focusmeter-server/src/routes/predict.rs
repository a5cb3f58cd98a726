use crate::error::{AppError, AppResult};
use crate::state::AppState;
use axum::{extract::State, Json};
use focusmeter_core::core_types::{ActivitySample, Prediction};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::debug;

pub async fn predict(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> AppResult<Json<Prediction>> {
    let sample = parse_sample(&payload)?;
    let prediction = state.scorer.predict(&sample)?;

    debug!(
        score = prediction.focus_score,
        label = %prediction.focus_label,
        "Prediction served"
    );

    Ok(Json(prediction))
}

fn parse_sample(payload: &Value) -> Result<ActivitySample, AppError> {
    let obj = payload
        .as_object()
        .ok_or_else(|| AppError::Validation("Request body must be a JSON object".to_string()))?;

    Ok(ActivitySample {
        typing_speed: numeric_field(obj, "typing_speed")?,
        idle_time: numeric_field(obj, "idle_time")?,
        tab_switches: numeric_field(obj, "tab_switches")?,
    })
}

/// Missing and null fields default to 0. Numeric strings are coerced, which
/// trackers sending form-ish payloads rely on.
fn numeric_field(obj: &Map<String, Value>, name: &str) -> Result<f64, AppError> {
    match obj.get(name) {
        None | Some(Value::Null) => Ok(0.0),
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| AppError::Validation(format!("Field '{}' is out of range", name))),
        Some(Value::String(s)) => s.trim().parse::<f64>().map_err(|_| {
            AppError::Validation(format!("Field '{}' is not numeric: '{}'", name, s))
        }),
        Some(other) => Err(AppError::Validation(format!(
            "Field '{}' is not numeric: {}",
            name, other
        ))),
    }
}
