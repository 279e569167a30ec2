//! Environment sources for credential lookup.

use std::{collections::HashMap, ops::Deref, sync::Arc};

// Traits.

/// Generic environment source that lookups must go through.
///
/// The process environment is the production implementation; tests and embedders can
/// supply any other mapping.
pub trait GenericEnvSource: Send + Sync + 'static {
    /// Look up a variable by name, returning `None` when it is unset or unreadable.
    fn var(&self, name: &str) -> Option<String>;
}

// Structs.

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl GenericEnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        // Non-unicode values are as unusable as missing ones.
        std::env::var(name).ok()
    }
}

impl GenericEnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Environment source for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct EnvSource {
    inner: Arc<dyn GenericEnvSource>,
}

impl Deref for EnvSource {
    type Target = dyn GenericEnvSource;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl EnvSource {
    /// Wrap any environment source.
    pub fn new(inner: Arc<dyn GenericEnvSource>) -> Self {
        Self { inner }
    }

    /// The environment of the running process.
    pub fn process() -> Self {
        Self::new(Arc::new(ProcessEnv))
    }

    /// A fixed set of variables.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map: HashMap<String, String> = pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect();

        Self::new(Arc::new(map))
    }
}

impl Default for EnvSource {
    fn default() -> Self {
        Self::process()
    }
}
