use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::services::prompts::{self, EmailOutline};
use crate::services::providers::GenerationParams;
use crate::startup::AppState;
use service_core::error::AppError;

#[derive(Debug, Deserialize, Validate)]
pub struct GenerateEmailRequest {
    #[validate(required, length(min = 1, message = "Purpose cannot be empty"))]
    pub purpose: Option<String>,
    #[validate(required, length(min = 1, message = "Recipient info cannot be empty"))]
    pub recipient_info: Option<String>,
    #[validate(required, length(min = 1, message = "Sender name cannot be empty"))]
    pub sender_name: Option<String>,
    #[validate(required, length(min = 1, message = "Tone cannot be empty"))]
    pub tone: Option<String>,
    #[validate(required, length(min = 1, message = "Subject cannot be empty"))]
    pub subject: Option<String>,
    #[validate(required, length(min = 1, message = "Key points cannot be empty"))]
    pub key_points: Option<String>,
    pub context: Option<String>,
    pub actions: Option<String>,
    pub attachments: Option<String>,
    pub length: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateEmailResponse {
    pub success: bool,
    pub email_content: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn generate_email(
    State(state): State<AppState>,
    Json(request): Json<GenerateEmailRequest>,
) -> Result<Json<GenerateEmailResponse>, AppError> {
    request.validate()?;

    let outline = EmailOutline {
        purpose: request.purpose.as_deref().unwrap_or_default(),
        recipient_info: request.recipient_info.as_deref().unwrap_or_default(),
        sender_name: request.sender_name.as_deref().unwrap_or_default(),
        tone: request.tone.as_deref().unwrap_or_default(),
        subject: request.subject.as_deref().unwrap_or_default(),
        key_points: request.key_points.as_deref().unwrap_or_default(),
        context: request.context.as_deref().unwrap_or_default(),
        actions: request.actions.as_deref().unwrap_or_default(),
        attachments: request.attachments.as_deref().unwrap_or_default(),
        length: request.length.as_deref().unwrap_or_default(),
    };
    let prompt = prompts::compose_email(&outline);

    let response = state
        .text_provider
        .generate(&prompt, &GenerationParams::default())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Email generation failed");
            AppError::GenerationError("Email generation failed".to_string())
        })?;

    let email_content = response
        .text
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::GenerationError("Email generation failed".to_string()))?;

    tracing::info!(
        output_tokens = response.output_tokens,
        "Generated email draft"
    );

    Ok(Json(GenerateEmailResponse {
        success: true,
        email_content,
    }))
}
