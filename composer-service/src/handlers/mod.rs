//! HTTP handlers for composer-service.

pub mod email;
pub mod health;
pub mod paraphrase;
pub mod reply;

pub use email::generate_email;
pub use health::{api_status, health_check, readiness_check};
pub use paraphrase::paraphrase_text;
pub use reply::analyze_and_reply;
