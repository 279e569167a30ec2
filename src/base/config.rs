//! Load settings via `config` crate with env-override support.

use std::path::Path;

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::Deserialize;
use serde_with::{NoneAsEmptyString, serde_as};
use tracing::{debug, instrument};

use super::types::{Res, Void};

/// Prefix for settings overrides taken from the environment.
pub const ENV_PREFIX: &str = "INTERVIEW_ACE";

/// Settings file that is picked up when no explicit path is given.
pub const DEFAULT_SETTINGS_PATH: &str = ".hidden/config.toml";

/// Upper bound accepted for the VAD silence threshold, in seconds.
pub const MAX_VAD_STOP_SECS: f64 = 10.0;

/// Default VAD silence threshold, in seconds.
fn default_vad_stop_secs() -> f64 {
    0.5
}

/// Default `run_on_config` flag for the LLM stage.
fn default_llm_run_on_config() -> bool {
    false
}

/// Settings for interview-ace.
///
/// Every field is optional in every source, and the defaults reproduce the stock bot exactly.
#[serde_as]
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// Optional custom system directive to override the default (`INTERVIEW_ACE_SYSTEM_DIRECTIVE`).
    /// An empty string means "use the default".
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub system_directive: Option<String>,
    /// Seconds of silence before the VAD stage decides the user stopped talking (`INTERVIEW_ACE_VAD_STOP_SECS`).
    #[serde(default = "default_vad_stop_secs")]
    pub vad_stop_secs: f64,
    /// Whether the LLM stage starts generating as soon as it is configured (`INTERVIEW_ACE_LLM_RUN_ON_CONFIG`).
    #[serde(default = "default_llm_run_on_config")]
    pub llm_run_on_config: bool,
    /// Optional model for the LLM stage (`INTERVIEW_ACE_LLM_MODEL`).
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub llm_model: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            system_directive: None,
            vad_stop_secs: default_vad_stop_secs(),
            llm_run_on_config: default_llm_run_on_config(),
            llm_model: None,
        }
    }
}

impl Settings {
    /// Load settings from the prefixed environment and, if present, a TOML file.
    ///
    /// An explicit path must exist; the fallback `.hidden/config.toml` is only read when it does.
    pub fn load(explicit_path: Option<&Path>) -> Res<Self> {
        Self::load_with_vars(explicit_path, None)
    }

    /// Like [`Settings::load`], but with the prefixed variables taken from `vars` instead of the
    /// process environment when given.
    #[instrument(skip_all)]
    pub fn load_with_vars(explicit_path: Option<&Path>, vars: Option<config::Map<String, String>>) -> Res<Self> {
        let mut cfg = Config::builder().add_source(Environment::default().prefix(ENV_PREFIX).source(vars));

        if let Some(p) = explicit_path {
            debug!("Reading settings from `{}`.", p.display());
            cfg = cfg.add_source(File::from(p.to_path_buf()));
        } else if Path::new(DEFAULT_SETTINGS_PATH).exists() {
            debug!("Reading settings from `{}`.", DEFAULT_SETTINGS_PATH);
            cfg = cfg.add_source(File::with_name(DEFAULT_SETTINGS_PATH));
        }

        Self::build(cfg)
    }

    /// Load settings from a TOML document only.
    pub fn from_toml(source: &str) -> Res<Self> {
        Self::build(Config::builder().add_source(File::from_str(source, FileFormat::Toml)))
    }

    fn build(cfg: ConfigBuilder<DefaultState>) -> Res<Self> {
        let result: Settings = cfg.build()?.try_deserialize()?;

        result.validate()?;

        Ok(result)
    }

    /// Check the override values that downstream stages cannot cope with.
    pub fn validate(&self) -> Void {
        if !self.vad_stop_secs.is_finite() || self.vad_stop_secs < 0.0 || self.vad_stop_secs > MAX_VAD_STOP_SECS {
            return Err(anyhow::anyhow!("VAD stop seconds must be between 0 and {}.", MAX_VAD_STOP_SECS));
        }

        if self.system_directive.as_deref().is_some_and(|directive| directive.trim().is_empty()) {
            return Err(anyhow::anyhow!("System directive must not be blank."));
        }

        if self.llm_model.as_deref().is_some_and(|model| model.trim().is_empty()) {
            return Err(anyhow::anyhow!("LLM model must not be blank."));
        }

        Ok(())
    }
}
