//! Stack configuration file loading
//!
//! A stack file (`Cairn.<stack>.yaml`) holds the deployment-time parameters
//! for one stack:
//!
//! ```yaml
//! namespace: myapp
//! config:
//!   myapp:project: test-project
//!   owner: team-infra
//!   replicas: 3
//! ```

use super::ConfigStore;
use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use serde_yaml_ng::Value;
use std::collections::BTreeMap;
use std::fs;
use tracing::debug;

/// Extensions searched for, in order
const STACK_FILE_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// File name of the stack configuration for `stack`
pub fn stack_file_name(stack: &str) -> String {
    format!("Cairn.{}.yaml", stack)
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct StackFile {
    #[serde(default)]
    namespace: Option<String>,

    #[serde(default)]
    config: BTreeMap<String, Value>,
}

/// Loaded stack configuration
#[derive(Debug, Clone, Default)]
pub struct StackConfig {
    namespace: Option<String>,
    values: BTreeMap<String, String>,
    path: Option<Utf8PathBuf>,
}

impl StackConfig {
    /// Parse stack configuration from YAML content
    pub fn from_yaml(content: &str) -> Result<Self> {
        let file: StackFile = if content.trim().is_empty() {
            StackFile::default()
        } else {
            serde_yaml_ng::from_str(content)?
        };

        let mut values = BTreeMap::new();
        for (key, value) in file.config {
            if let Some(flat) = flatten_value(&key, value)? {
                values.insert(key, flat);
            }
        }

        Ok(Self {
            namespace: file.namespace,
            values,
            path: None,
        })
    }

    /// Load stack configuration from an explicit path
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::config_not_found(path.as_str())
            } else {
                Error::Io(e)
            }
        })?;

        let mut config = Self::from_yaml(&content)
            .map_err(|e| Error::invalid_config(format!("Failed to parse {}: {}", path, e)))?;
        config.path = Some(path.to_owned());

        debug!("Loaded {} config values from {}", config.len(), path);
        Ok(config)
    }

    /// Find the stack file in the current directory or its parents
    pub fn discover(stack: &str) -> Result<Self> {
        let cwd = std::env::current_dir().map_err(Error::Io)?;
        let cwd = Utf8PathBuf::try_from(cwd)
            .map_err(|_| Error::invalid_config("Current directory path is not valid UTF-8"))?;

        Self::discover_from(&cwd, stack)
    }

    /// Find the stack file starting at `start` and walking up
    pub fn discover_from(start: &Utf8Path, stack: &str) -> Result<Self> {
        let mut current = start;

        loop {
            for ext in STACK_FILE_EXTENSIONS {
                let path = current.join(format!("Cairn.{}.{}", stack, ext));
                if path.is_file() {
                    return Self::load(&path);
                }
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        Err(Error::config_not_found(format!(
            "{} (searched current and parent directories)",
            stack_file_name(stack)
        )))
    }

    /// Namespace bare keys are resolved under
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// File this configuration was loaded from, if any
    pub fn path(&self) -> Option<&Utf8Path> {
        self.path.as_deref()
    }

    /// Stored keys exactly as written in the file
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ConfigStore for StackConfig {
    fn get(&self, key: &str) -> Option<String> {
        if let Some(ns) = self.namespace.as_deref() {
            if !key.contains(':') {
                if let Some(value) = self.values.get(&format!("{}:{}", ns, key)) {
                    return Some(value.clone());
                }
            }
        }

        self.values.get(key).cloned()
    }
}

/// Scalars keep their string form, collections become compact JSON, null is unset
fn flatten_value(key: &str, value: Value) -> Result<Option<String>> {
    let flat = match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(serde_json::to_string(&other).map_err(|e| {
            Error::invalid_config(format!("Config value for '{}' is not representable: {}", key, e))
        })?),
    };

    Ok(flat)
}
