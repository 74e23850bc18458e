//! Standard label set attached to every declared resource
//!
//! Labels carry enough metadata for cost attribution and ownership tracing:
//! the project, the environment, the owning team, and the tooling that
//! manages the resource.

use serde::Serialize;
use std::collections::BTreeMap;

/// Value of the `managed-by` label on every resource Cairn declares
pub const MANAGED_BY: &str = "cairn";

// Label keys
pub const ENVIRONMENT_KEY: &str = "environment";
pub const MANAGED_BY_KEY: &str = "managed-by";
pub const OWNER_KEY: &str = "owner";
pub const PROJECT_KEY: &str = "project";

/// Fixed-shape label mapping
///
/// Only [`derive_labels`] builds one, so the key set is always exactly
/// `project`, `environment`, `owner` and `managed-by`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LabelSet(BTreeMap<String, String>);

impl LabelSet {
    /// Look up a label value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn project(&self) -> &str {
        self.get(PROJECT_KEY).unwrap_or_default()
    }

    pub fn environment(&self) -> &str {
        self.get(ENVIRONMENT_KEY).unwrap_or_default()
    }

    pub fn owner(&self) -> &str {
        self.get(OWNER_KEY).unwrap_or_default()
    }

    /// Iterate over `(key, value)` pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<LabelSet> for BTreeMap<String, String> {
    fn from(labels: LabelSet) -> Self {
        labels.0
    }
}

/// Derive the standard labels for a resource
pub fn derive_labels(project: &str, environment: &str, owner: &str) -> LabelSet {
    let mut labels = BTreeMap::new();
    labels.insert(PROJECT_KEY.to_string(), project.to_string());
    labels.insert(ENVIRONMENT_KEY.to_string(), environment.to_string());
    labels.insert(OWNER_KEY.to_string(), owner.to_string());
    labels.insert(MANAGED_BY_KEY.to_string(), MANAGED_BY.to_string());
    LabelSet(labels)
}
