//! Key/value stores the accessors read from and the loaders write into.
//!
//! [`ProcessEnv`] is the host process environment and the default everywhere.
//! [`MapEnv`] keeps variables in memory so tests and embedded callers never
//! touch process-global state.

use std::collections::HashMap;
use std::sync::RwLock;

/// A case-sensitive string-to-string store.
pub trait EnvSource: Send + Sync {
    /// The raw value for `key`, or `None` when unset.
    fn var(&self, key: &str) -> Option<String>;

    /// Insert or replace `key`.
    fn set_var(&self, key: &str, value: &str);

    /// Whether `key` is set at all (an empty value counts as set).
    fn contains(&self, key: &str) -> bool {
        self.var(key).is_some()
    }
}

/// The host process environment table.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        // Non-unicode values read as unset, like a missing key.
        std::env::var(key).ok()
    }

    fn set_var(&self, key: &str, value: &str) {
        // SAFETY: environment mutation races with concurrent readers on some
        // platforms. Loaders are meant to run during startup, before other
        // threads read the environment.
        unsafe { std::env::set_var(key, value) }
    }
}

/// In-memory variables.
#[derive(Debug, Default)]
pub struct MapEnv {
    vars: RwLock<HashMap<String, String>>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(key, value)` pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let vars = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            vars: RwLock::new(vars),
        }
    }

    /// Remove `key`, returning its previous value.
    #[cfg(test)]
    pub(crate) fn remove_var(&self, key: &str) -> Option<String> {
        self.vars
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(key)
    }

    /// Copy of every variable.
    #[cfg(test)]
    pub(crate) fn snapshot(&self) -> HashMap<String, String> {
        self.vars.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    fn set_var(&self, key: &str, value: &str) {
        self.vars
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value.to_string());
    }
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }

    fn set_var(&self, key: &str, value: &str) {
        (**self).set_var(key, value)
    }
}

impl<S: EnvSource + ?Sized> EnvSource for std::sync::Arc<S> {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }

    fn set_var(&self, key: &str, value: &str) {
        (**self).set_var(key, value)
    }
}
