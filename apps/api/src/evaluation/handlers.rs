use axum::{body::Bytes, extract::State, Json};
use tracing::info;

use crate::errors::AppError;
use crate::evaluation::models::{EvaluationRequest, EvaluationResult};
use crate::evaluation::normalize::{normalize, parse_result_content};
use crate::evaluation::prompts::{build_evaluation_prompt, EXAMINER_SYSTEM};
use crate::state::AppState;

/// POST /api/v1/evaluate
///
/// Validates the submission, issues exactly one upstream completion call and
/// returns the normalized evaluation. Every failure maps to an `AppError`
/// variant; nothing propagates to the runtime.
///
/// The body is read as raw bytes rather than through the `Json` extractor so
/// that a missing content-type header or an unparseable body still gets our
/// canonical 400 JSON response instead of an extractor rejection. An
/// unusable body is treated as an empty object.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<EvaluationResult>, AppError> {
    let req: EvaluationRequest = serde_json::from_slice(&body).unwrap_or_default();

    let (text, theme, tags) = req
        .require_fields()
        .ok_or_else(|| AppError::Validation("Missing text/theme/tags".to_string()))?;

    // Verified per request, not once at startup: the service stays up while
    // the credential is absent, but no evaluation can run.
    let api_key = state
        .config
        .openai_api_key
        .as_deref()
        .ok_or_else(|| AppError::Configuration("OPENAI_API_KEY is not set".to_string()))?;

    let prompt = build_evaluation_prompt(theme, &tags.joined(), text);

    let content = state
        .backend
        .complete(api_key, EXAMINER_SYSTEM, &prompt)
        .await?;

    let parsed = parse_result_content(&content)
        .map_err(|e| AppError::MalformedUpstream(format!("{e}; content: {content}")))?;

    let result = normalize(&parsed);
    info!(score = result.score, passed = result.passed, "evaluation completed");

    Ok(Json(result))
}
