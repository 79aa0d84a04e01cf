use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::services::prompts;
use crate::services::providers::GenerationParams;
use crate::startup::AppState;
use service_core::error::AppError;

const DEFAULT_TONE: &str = "neutral";

#[derive(Debug, Deserialize, Validate)]
pub struct ParaphraseRequest {
    #[validate(required, length(min = 1, message = "Text to paraphrase is required"))]
    pub text: Option<String>,
    pub tone: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParaphraseResponse {
    pub success: bool,
    pub paraphrased_content: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn paraphrase_text(
    State(state): State<AppState>,
    Json(request): Json<ParaphraseRequest>,
) -> Result<Json<ParaphraseResponse>, AppError> {
    request.validate()?;

    let text = request.text.as_deref().unwrap_or_default();
    // An empty tone also falls back to the default.
    let tone = request
        .tone
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_TONE);

    let prompt = prompts::paraphrase(text, tone);

    let response = state
        .text_provider
        .generate(&prompt, &GenerationParams::default())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Paraphrasing failed");
            AppError::GenerationError("Paraphrasing failed".to_string())
        })?;

    let paraphrased_content = response
        .text
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::GenerationError("Paraphrasing failed".to_string()))?;

    tracing::info!(
        output_tokens = response.output_tokens,
        tone = %tone,
        "Paraphrased text"
    );

    Ok(Json(ParaphraseResponse {
        success: true,
        paraphrased_content,
    }))
}
