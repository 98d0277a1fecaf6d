//! Schema-checked decoding of completion model replies.

use super::{ModelError, Recommendation};
use serde::Deserialize;

/// Largest magnitude accepted for an integer-coerced field.
const MAX_COERCIBLE: f64 = 1e15;

#[derive(Debug, Deserialize)]
struct ReplyBody {
    recommendations: Vec<ReplyEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReplyEntry {
    task_name: String,
    session_duration: f64,
    priority: f64,
    reason: String,
    current_completion: f64,
    target_completion: f64,
    #[serde(default)]
    deadline: Option<String>,
    #[serde(default)]
    time_remaining: Option<String>,
}

/// Decodes the model's message content into recommendations.
///
/// The content must be a JSON object with a `recommendations` array whose
/// entries carry every required field. `sessionDuration` and `priority` are
/// rounded with [`round_half_up`]; all other values are kept as given.
///
/// # Errors
///
/// Returns [`ModelError::InvalidJson`] when the content is not JSON and
/// [`ModelError::SchemaMismatch`] when it is JSON of the wrong shape or a
/// coerced number is not finite.
pub fn decode_reply(content: &str) -> Result<Vec<Recommendation>, ModelError> {
    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|error| ModelError::InvalidJson(error.to_string()))?;
    let body: ReplyBody = serde_json::from_value(value)
        .map_err(|error| ModelError::SchemaMismatch(error.to_string()))?;

    body.recommendations
        .into_iter()
        .map(|entry| {
            Ok(Recommendation::new(
                entry.task_name,
                round_half_up(entry.session_duration, "sessionDuration")?,
                round_half_up(entry.priority, "priority")?,
                entry.reason,
            )
            .with_completion(entry.current_completion, entry.target_completion)
            .with_deadline(entry.deadline)
            .with_time_remaining(entry.time_remaining))
        })
        .collect()
}

/// Rounds `value` to the nearest integer, sending halves towards positive
/// infinity (`2.5 -> 3`, `-2.5 -> -2`).
///
/// # Errors
///
/// Returns [`ModelError::SchemaMismatch`] naming `field` when the value is
/// not finite or too large to represent.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    reason = "the magnitude check keeps the rounded value inside i64"
)]
pub fn round_half_up(value: f64, field: &str) -> Result<i64, ModelError> {
    if !value.is_finite() {
        return Err(ModelError::SchemaMismatch(format!(
            "{field} must be a finite number"
        )));
    }
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };
    if rounded.abs() > MAX_COERCIBLE {
        return Err(ModelError::SchemaMismatch(format!(
            "{field} is out of range: {value}"
        )));
    }
    Ok(rounded as i64)
}
