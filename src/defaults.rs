//! The resolved defaults shared by every consumer for the life of the process.

use std::{ops::Deref, sync::Arc};

use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    base::config::Settings,
    service::{
        env::{EnvSource, GenericEnvSource},
        keys::ServiceApiKeys,
    },
    session::{bot_config::BotConfig, conversation::ConversationSeed},
};

/// Defaults resolved once at startup.
///
/// This struct holds the conversation seed, the bot configuration, and the service credentials.
/// It is designed to be trivially cloneable, allowing it to be passed around without the need
/// for `Arc` or `Mutex`. Nothing can mutate it once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Defaults {
    inner: Arc<DefaultsInner>,
}

impl Deref for Defaults {
    type Target = DefaultsInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug, PartialEq, Serialize)]
pub struct DefaultsInner {
    /// Initial message list for a new session.
    pub seed: ConversationSeed,
    /// Options for the VAD and LLM stages.
    pub bot_config: BotConfig,
    /// Credentials for the external services.
    pub api_keys: ServiceApiKeys,
}

impl Defaults {
    /// Resolve the defaults against the process environment.
    pub fn load(settings: &Settings) -> Self {
        Self::from_parts(settings, &*EnvSource::process())
    }

    /// Resolve the defaults against the given environment source.
    #[instrument(skip_all)]
    pub fn from_parts(settings: &Settings, env: &dyn GenericEnvSource) -> Self {
        let seed = ConversationSeed::from_settings(settings);
        let bot_config = BotConfig::from_settings(settings);
        let api_keys = ServiceApiKeys::from_source(env);

        info!(services = bot_config.len(), seed_messages = seed.len(), "Resolved defaults.");

        Self {
            inner: Arc::new(DefaultsInner { seed, bot_config, api_keys }),
        }
    }
}
