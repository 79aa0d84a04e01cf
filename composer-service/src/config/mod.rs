use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct ComposerConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub gemini: GeminiSettings,
    pub models: ModelConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiSettings {
    pub api_key: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Model used for all text generation (e.g., gemini-2.0-flash-lite)
    pub text_model: String,
}

impl ComposerConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = core_config::is_prod();

        Ok(ComposerConfig {
            common: common_config,
            gemini: GeminiSettings {
                api_key: core_config::get_env("GEMINI_API_KEY", Some(""), is_prod)?,
                enabled: env::var("GEMINI_ENABLED")
                    .unwrap_or_else(|_| "true".to_string())
                    .parse()
                    .unwrap_or(true),
            },
            models: ModelConfig {
                text_model: core_config::get_env(
                    "GEMINI_TEXT_MODEL",
                    Some("gemini-2.0-flash-lite"),
                    is_prod,
                )?,
            },
        })
    }
}
