//! Per-service credentials resolved from the environment.

use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::Serialize;

use crate::prelude::*;

use super::env::{EnvSource, GenericEnvSource};

/// External providers the bot holds credentials for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    /// Generative-language provider.
    Gemini,
    /// Real-time communication provider.
    Daily,
}

impl Service {
    /// Every known service, in key order.
    pub const ALL: [Service; 2] = [Service::Gemini, Service::Daily];

    /// The identifier used as the mapping key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Service::Gemini => "gemini",
            Service::Daily => "daily",
        }
    }

    /// The environment variable holding the credential.
    pub fn env_var(&self) -> &'static str {
        match self {
            Service::Gemini => "GEMINI_API_KEY",
            Service::Daily => "DAILY_API_KEY",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Service {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Res<Self> {
        Service::ALL
            .into_iter()
            .find(|service| service.as_str() == s)
            .ok_or_else(|| anyhow!("Unknown service `{}`.", s))
    }
}

/// Mapping from service to credential.
///
/// Always holds exactly one entry per [`Service`]; a credential is `None` when its variable is
/// unset or empty. Whether a missing credential matters is up to the caller.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ServiceApiKeys {
    keys: BTreeMap<Service, Option<String>>,
}

impl ServiceApiKeys {
    /// Resolve every credential from the process environment.
    pub fn from_env() -> Self {
        Self::from_source(&*EnvSource::process())
    }

    /// Resolve every credential from the given environment source.
    ///
    /// Never fails: unset and empty variables both resolve to `None`.
    #[instrument(skip_all)]
    pub fn from_source(env: &dyn GenericEnvSource) -> Self {
        let keys = Service::ALL
            .into_iter()
            .map(|service| {
                let key = env.var(service.env_var()).filter(|value| !value.is_empty());

                debug!(%service, present = key.is_some(), "Resolved API key.");

                (service, key)
            })
            .collect();

        Self { keys }
    }

    /// The credential for a service, if one is set.
    pub fn get(&self, service: Service) -> Option<&str> {
        self.keys.get(&service).and_then(|key| key.as_deref())
    }

    /// Whether a credential is set for a service.
    pub fn is_present(&self, service: Service) -> bool {
        self.get(service).is_some()
    }

    /// The credential for a service, or an error naming the variable to set.
    pub fn require(&self, service: Service) -> Res<&str> {
        self.get(service)
            .ok_or_else(|| anyhow!("No API key for `{}`; set `{}`.", service, service.env_var()))
    }

    /// Iterate over every service and its credential, in key order.
    pub fn iter(&self) -> impl Iterator<Item = (Service, Option<&str>)> {
        self.keys.iter().map(|(service, key)| (*service, key.as_deref()))
    }

    /// A copy safe to print: present credentials are replaced by `"present"`.
    pub fn redacted(&self) -> BTreeMap<Service, Option<&'static str>> {
        self.iter().map(|(service, key)| (service, key.map(|_| "present"))).collect()
    }
}

impl fmt::Debug for ServiceApiKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.redacted()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_names_round_trip_through_from_str() {
        for service in Service::ALL {
            assert_eq!(service.as_str().parse::<Service>().unwrap(), service);
        }

        assert!("openai".parse::<Service>().is_err());
    }

    #[test]
    fn empty_value_is_absent() {
        let keys = ServiceApiKeys::from_source(&*EnvSource::from_pairs([("GEMINI_API_KEY", ""), ("DAILY_API_KEY", "d-1")]));

        assert_eq!(keys.get(Service::Gemini), None);
        assert_eq!(keys.get(Service::Daily), Some("d-1"));
    }

    #[test]
    fn require_names_the_variable() {
        let keys = ServiceApiKeys::from_source(&*EnvSource::from_pairs::<_, String, String>([]));
        let err = keys.require(Service::Daily).unwrap_err().to_string();

        assert!(err.contains("DAILY_API_KEY"));
    }

    #[test]
    fn redacted_keys_serialize_as_present_or_null() {
        let keys = ServiceApiKeys::from_source(&*EnvSource::from_pairs([("GEMINI_API_KEY", "super-secret")]));
        let value = serde_json::to_value(keys.redacted()).unwrap();

        assert_eq!(value, serde_json::json!({ "gemini": "present", "daily": null }));
        assert!(!value.to_string().contains("super-secret"));
    }

    #[test]
    fn debug_output_hides_credentials() {
        let keys = ServiceApiKeys::from_source(&*EnvSource::from_pairs([("GEMINI_API_KEY", "super-secret")]));
        let debug = format!("{:?}", keys);

        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("present"));
    }
}
