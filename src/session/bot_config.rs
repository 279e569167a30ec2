//! The per-service option payload used to bootstrap a bot session.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::base::config::Settings;

/// Voice-activity-detection stage.
pub const VAD_SERVICE: &str = "vad";
/// Language-model stage.
pub const LLM_SERVICE: &str = "llm";

/// VAD option holding the nested detector parameters.
pub const PARAMS_OPTION: &str = "params";
/// Key inside the VAD parameters for the silence threshold.
pub const STOP_SECS_PARAM: &str = "stop_secs";
/// LLM option controlling whether generation starts on configuration.
pub const RUN_ON_CONFIG_OPTION: &str = "run_on_config";
/// LLM option selecting the model.
pub const MODEL_OPTION: &str = "model";

/// Value of a single option; its shape depends on the option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Number(f64),
    Text(String),
    Map(BTreeMap<String, OptionValue>),
}

impl OptionValue {
    /// The boolean, if this is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The number, if this is one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            OptionValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The text, if this is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The nested map, if this is one.
    pub fn as_map(&self) -> Option<&BTreeMap<String, OptionValue>> {
        match self {
            OptionValue::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Look up a key in a nested value; `None` for anything that is not a map.
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.as_map().and_then(|m| m.get(key))
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Number(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

impl From<BTreeMap<String, OptionValue>> for OptionValue {
    fn from(value: BTreeMap<String, OptionValue>) -> Self {
        OptionValue::Map(value)
    }
}

/// A named option for one service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigOption {
    pub name: String,
    pub value: OptionValue,
}

impl ConfigOption {
    /// An option with the given name and value.
    pub fn new(name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        Self { name: name.into(), value: value.into() }
    }
}

/// Options for one service stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub service: String,
    pub options: Vec<ConfigOption>,
}

impl ServiceConfig {
    /// A service entry with the given options.
    pub fn new(service: impl Into<String>, options: Vec<ConfigOption>) -> Self {
        Self { service: service.into(), options }
    }

    /// The value of the first option with this name.
    pub fn option(&self, name: &str) -> Option<&OptionValue> {
        self.options.iter().find(|o| o.name == name).map(|o| &o.value)
    }
}

/// Ordered list of service stages and their options.
///
/// Service names may repeat in general; lookups return the first match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BotConfig {
    services: Vec<ServiceConfig>,
}

impl BotConfig {
    /// A configuration from explicit entries.
    pub fn new(services: Vec<ServiceConfig>) -> Self {
        Self { services }
    }

    /// The bot configuration described by the given settings.
    pub fn from_settings(settings: &Settings) -> Self {
        let vad_params = BTreeMap::from([(STOP_SECS_PARAM.to_string(), OptionValue::Number(settings.vad_stop_secs))]);

        let config = Self::new(vec![
            ServiceConfig::new(VAD_SERVICE, vec![ConfigOption::new(PARAMS_OPTION, vad_params)]),
            ServiceConfig::new(LLM_SERVICE, vec![ConfigOption::new(RUN_ON_CONFIG_OPTION, settings.llm_run_on_config)]),
        ]);

        match &settings.llm_model {
            Some(model) => config.with_option(LLM_SERVICE, MODEL_OPTION, model.as_str()),
            None => config,
        }
    }

    /// Every service entry, in order.
    pub fn services(&self) -> &[ServiceConfig] {
        &self.services
    }

    /// Number of service entries.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether there are no service entries.
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// The first entry for a service.
    pub fn service(&self, service: &str) -> Option<&ServiceConfig> {
        self.services.iter().find(|s| s.service == service)
    }

    /// The value of an option on the first entry for a service.
    pub fn option(&self, service: &str, name: &str) -> Option<&OptionValue> {
        self.service(service).and_then(|s| s.option(name))
    }

    /// Return a copy with one option set.
    ///
    /// An existing option of the same name on the service is replaced; otherwise the option is
    /// appended. A service with no entry gets a new one at the end.
    pub fn with_option(mut self, service: &str, name: &str, value: impl Into<OptionValue>) -> Self {
        let option = ConfigOption::new(name, value);

        match self.services.iter_mut().find(|s| s.service == service) {
            Some(entry) => match entry.options.iter_mut().find(|o| o.name == name) {
                Some(existing) => *existing = option,
                None => entry.options.push(option),
            },
            None => self.services.push(ServiceConfig::new(service, vec![option])),
        }

        self
    }

    /// The VAD silence threshold, in seconds.
    pub fn vad_stop_secs(&self) -> Option<f64> {
        self.option(VAD_SERVICE, PARAMS_OPTION)?.get(STOP_SECS_PARAM)?.as_f64()
    }

    /// Whether the LLM stage starts generating as soon as it is configured.
    pub fn llm_run_on_config(&self) -> Option<bool> {
        self.option(LLM_SERVICE, RUN_ON_CONFIG_OPTION)?.as_bool()
    }
}

/// The stock InterviewAce bot configuration.
pub fn build_default_bot_config() -> BotConfig {
    BotConfig::from_settings(&Settings::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_config_has_vad_and_llm() {
        let config = build_default_bot_config();

        assert_eq!(config.len(), 2);
        assert_eq!(config.services()[0].service, VAD_SERVICE);
        assert_eq!(config.services()[1].service, LLM_SERVICE);
        assert_eq!(config.vad_stop_secs(), Some(0.5));
        assert_eq!(config.llm_run_on_config(), Some(false));
        assert_eq!(config.option(LLM_SERVICE, MODEL_OPTION), None);
    }

    #[test]
    fn default_config_is_idempotent() {
        assert_eq!(build_default_bot_config(), build_default_bot_config());
    }

    #[test]
    fn default_config_wire_shape() {
        let value = serde_json::to_value(build_default_bot_config()).unwrap();

        assert_eq!(
            value,
            json!([
                { "service": "vad", "options": [{ "name": "params", "value": { "stop_secs": 0.5 } }] },
                { "service": "llm", "options": [{ "name": "run_on_config", "value": false }] },
            ])
        );
    }

    #[test]
    fn with_option_replaces_existing_option() {
        let config = build_default_bot_config().with_option(LLM_SERVICE, RUN_ON_CONFIG_OPTION, true);

        assert_eq!(config.llm_run_on_config(), Some(true));
        assert_eq!(config.service(LLM_SERVICE).unwrap().options.len(), 1);
    }

    #[test]
    fn with_option_appends_new_option() {
        let config = build_default_bot_config().with_option(LLM_SERVICE, MODEL_OPTION, "gemini-2.0-flash");
        let llm = config.service(LLM_SERVICE).unwrap();

        assert_eq!(llm.options.len(), 2);
        assert_eq!(llm.options[1].name, MODEL_OPTION);
        assert_eq!(llm.option(MODEL_OPTION).and_then(OptionValue::as_str), Some("gemini-2.0-flash"));
    }

    #[test]
    fn with_option_appends_new_service() {
        let config = build_default_bot_config().with_option("tts", "voice", "Puck");

        assert_eq!(config.len(), 3);
        assert_eq!(config.services()[2].service, "tts");
        assert_eq!(config.option("tts", "voice").and_then(OptionValue::as_str), Some("Puck"));
    }

    #[test]
    fn settings_drive_the_payload() {
        let settings = Settings {
            vad_stop_secs: 0.8,
            llm_run_on_config: true,
            llm_model: Some("gemini-2.0-flash".to_string()),
            ..Default::default()
        };
        let config = BotConfig::from_settings(&settings);

        assert_eq!(config.vad_stop_secs(), Some(0.8));
        assert_eq!(config.llm_run_on_config(), Some(true));
        assert_eq!(config.option(LLM_SERVICE, MODEL_OPTION), Some(&OptionValue::from("gemini-2.0-flash")));
    }

    #[test]
    fn values_deserialize_to_matching_variants() {
        let config: BotConfig = serde_json::from_value(json!([
            { "service": "llm", "options": [
                { "name": "run_on_config", "value": true },
                { "name": "temperature", "value": 1 },
                { "name": "model", "value": "gemini" },
                { "name": "extra", "value": { "top_k": 40 } },
            ] },
        ]))
        .unwrap();

        assert_eq!(config.option(LLM_SERVICE, "run_on_config"), Some(&OptionValue::Bool(true)));
        assert_eq!(config.option(LLM_SERVICE, "temperature"), Some(&OptionValue::Number(1.0)));
        assert_eq!(config.option(LLM_SERVICE, "model"), Some(&OptionValue::Text("gemini".to_string())));
        assert_eq!(config.option(LLM_SERVICE, "extra").and_then(|v| v.get("top_k")).and_then(OptionValue::as_f64), Some(40.0));
    }

    #[test]
    fn accessors_reject_other_variants() {
        let value = OptionValue::from(0.5);

        assert_eq!(value.as_bool(), None);
        assert_eq!(value.as_str(), None);
        assert_eq!(value.get("stop_secs"), None);
    }
}
