use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::services::prompts;
use crate::services::providers::GenerationParams;
use crate::startup::AppState;
use service_core::error::AppError;

const DEFAULT_TONE: &str = "professional";
const ERROR_MESSAGE: &str = "Email analysis or reply generation failed";

#[derive(Debug, Deserialize, Validate)]
pub struct AnalyzeAndReplyRequest {
    #[validate(required, length(min = 1, message = "Original email content is required"))]
    pub original_email: Option<String>,
    pub tone: Option<String>,
    pub user_name: Option<String>,
    pub additional_context: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeAndReplyResponse {
    pub success: bool,
    pub summary: String,
    pub reply: String,
}

/// Summarizes the received email, then drafts a reply whose prompt embeds the
/// summary. The second call cannot start before the first completes.
#[tracing::instrument(skip(state, request))]
pub async fn analyze_and_reply(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeAndReplyRequest>,
) -> Result<Json<AnalyzeAndReplyResponse>, AppError> {
    request.validate()?;

    let original_email = request.original_email.as_deref().unwrap_or_default();
    let tone = request
        .tone
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_TONE);
    let user_name = request.user_name.as_deref().unwrap_or_default();
    let additional_context = request.additional_context.as_deref().unwrap_or_default();

    let params = GenerationParams::default();

    // Step 1: summarize the email
    let summary_prompt = prompts::summarize(original_email);
    let summary = state
        .text_provider
        .generate(&summary_prompt, &params)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Email summarization failed");
            AppError::GenerationError(ERROR_MESSAGE.to_string())
        })?
        .text
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::GenerationError(ERROR_MESSAGE.to_string()))?;

    // Step 2: generate a reply based on the summary
    let reply_prompt = prompts::reply(original_email, &summary, tone, user_name, additional_context);
    let reply = state
        .text_provider
        .generate(&reply_prompt, &params)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Reply generation failed");
            AppError::GenerationError(ERROR_MESSAGE.to_string())
        })?
        .text
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::GenerationError(ERROR_MESSAGE.to_string()))?;

    tracing::info!(tone = %tone, "Generated email summary and reply");

    Ok(Json(AnalyzeAndReplyResponse {
        success: true,
        summary,
        reply,
    }))
}
