//! Stack configuration stores and accessors
//!
//! Accessors never reach for an ambient store: callers pass the
//! [`ConfigStore`] they want read, which lets tests substitute a
//! [`MemoryConfigStore`].

mod env;
mod layered;
mod memory;
mod stack;

pub use env::{EnvConfigStore, DEFAULT_ENV_PREFIX};
pub use layered::LayeredConfigStore;
pub use memory::MemoryConfigStore;
pub use stack::{stack_file_name, StackConfig};

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::str::FromStr;
use tracing::{debug, warn};

/// Key-value source of deployment-time parameters
pub trait ConfigStore: Send + Sync {
    /// Look up a key, returning `None` when the store has no value for it
    fn get(&self, key: &str) -> Option<String>;

    /// Look up a key that must be present
    fn require(&self, key: &str) -> Result<String> {
        self.get(key).ok_or_else(|| Error::configuration_missing(key))
    }
}

impl<T: ConfigStore + ?Sized> ConfigStore for Box<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn require(&self, key: &str) -> Result<String> {
        (**self).require(key)
    }
}

/// Read `key` as `T`, falling back to `default` when it is unset
///
/// A value that does not parse as `T` is logged and treated as unset.
pub fn get_or_default<T, S>(store: &S, key: &str, default: T) -> T
where
    T: FromStr,
    S: ConfigStore + ?Sized,
{
    match store.get(key) {
        Some(raw) => match raw.parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                warn!(
                    "Config value for '{}' could not be parsed ({:?}), using default",
                    key, raw
                );
                default
            }
        },
        None => {
            debug!("Config key '{}' not set, using default", key);
            default
        }
    }
}

/// Resolve every key, failing on the first one the store cannot supply
pub fn require_all<S, K>(store: &S, keys: &[K]) -> Result<HashMap<String, String>>
where
    S: ConfigStore + ?Sized,
    K: AsRef<str>,
{
    let mut resolved = HashMap::with_capacity(keys.len());

    for key in keys {
        let key = key.as_ref();
        let value = store.require(key)?;
        resolved.insert(key.to_string(), value);
    }

    Ok(resolved)
}
