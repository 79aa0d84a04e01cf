use composer_service::config::{ComposerConfig, GeminiSettings, ModelConfig};
use composer_service::startup::Application;
use service_core::config::Config as CoreConfig;

pub struct TestApp {
    pub address: String,
}

/// Test configuration: random port, Gemini disabled so the mock provider is
/// wired in.
pub fn test_config() -> ComposerConfig {
    ComposerConfig {
        common: CoreConfig { port: 0 },
        gemini: GeminiSettings {
            api_key: String::new(),
            enabled: false,
        },
        models: ModelConfig {
            text_model: "gemini-2.0-flash-lite".to_string(),
        },
    }
}

impl TestApp {
    pub async fn spawn() -> Self {
        let app = Application::build(test_config())
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        }

        TestApp { address }
    }
}
