//! Library root for `interview-ace`.
//!
//! Interview-ace holds the startup defaults of an interview-practice voice bot:
//! - The conversation seed carrying the InterviewAce coaching directive
//! - The bot configuration for the voice-activity-detection and language-model stages
//! - The API keys for the generative-language and real-time communication providers
//!
//! Everything is resolved once, from settings and the environment, and then shared read-only.
//! The environment lookup sits behind a trait so it can be swapped out.

#[deny(missing_docs)]
pub mod base;
pub mod defaults;
pub mod prelude;
pub mod service;
pub mod session;

use base::config::Settings;
use defaults::Defaults;
use service::keys::ServiceApiKeys;
use session::{bot_config::BotConfig, conversation::ConversationSeed};

/// Public entry for the binary crate.
///
/// Resolves the defaults against the process environment.
pub fn start(settings: &Settings) -> Defaults {
    tracing::info!("Resolving interview-ace defaults ...");

    Defaults::load(settings)
}

/// Read the service credentials from the process environment.
pub fn load_service_api_keys() -> ServiceApiKeys {
    ServiceApiKeys::from_env()
}

/// The stock InterviewAce conversation seed.
pub fn build_default_conversation_seed() -> ConversationSeed {
    session::conversation::build_default_conversation_seed()
}

/// The stock InterviewAce bot configuration.
pub fn build_default_bot_config() -> BotConfig {
    session::bot_config::build_default_bot_config()
}
