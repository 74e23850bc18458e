//! Environment variable configuration overrides

use super::ConfigStore;
use std::env;

/// Prefix used by [`EnvConfigStore::new`]
pub const DEFAULT_ENV_PREFIX: &str = "CAIRN_CONFIG_";

/// Reads configuration from `{prefix}{KEY}` environment variables
///
/// `KEY` is the config key uppercased with every non-alphanumeric character
/// replaced by `_`, so `myapp:owner` is read from `CAIRN_CONFIG_MYAPP_OWNER`.
#[derive(Debug, Clone)]
pub struct EnvConfigStore {
    prefix: String,
}

impl EnvConfigStore {
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_ENV_PREFIX)
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Environment variable consulted for `key`
    pub fn var_name(&self, key: &str) -> String {
        let suffix: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect();
        format!("{}{}", self.prefix, suffix)
    }
}

impl Default for EnvConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for EnvConfigStore {
    fn get(&self, key: &str) -> Option<String> {
        env::var(self.var_name(key)).ok()
    }
}
