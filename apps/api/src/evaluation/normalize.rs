//! Normalization — coerces an arbitrary/partial upstream JSON object into a
//! complete, type-correct `EvaluationResult` via field-wise defaulting.
//!
//! The upstream reply is untyped JSON of uncertain shape; every field gets a
//! defined default (score→0, passed→derived, strings→"", list→[]) so the
//! response shape is stable regardless of what the model returned.

use serde_json::Value;

use crate::evaluation::models::{EvaluationResult, PASS_SCORE};

/// Parses upstream message content as a JSON object, stripping markdown code
/// fences first (a known LLM failure mode even with JSON output requested).
pub fn parse_result_content(content: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(strip_json_fences(content))
}

/// Coerces a parsed upstream value into the canonical result shape.
///
/// Idempotent: a payload already matching the canonical shape exactly comes
/// back unchanged. `passed` is recomputed from `score` unless the upstream
/// explicitly supplied a boolean.
pub fn normalize(value: &Value) -> EvaluationResult {
    let score = value
        .get("score")
        .and_then(Value::as_i64)
        .unwrap_or(0)
        .clamp(0, 1000);

    let passed = value
        .get("passed")
        .and_then(Value::as_bool)
        .unwrap_or(score >= PASS_SCORE);

    EvaluationResult {
        score,
        passed,
        breakdown: string_field(value, "breakdown"),
        explanation: string_field(value, "explanation"),
        grammar_issues: value
            .get("grammarIssues")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default(),
        better_version: string_field(value, "betterVersion"),
    }
}

fn string_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
