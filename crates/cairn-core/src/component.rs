//! Standard component: the naming and labeling core of every declared resource
//!
//! Concrete resources compose a [`StandardComponent`] and expose it through
//! [`NamedLabeledResource`]. The component derives its name prefix and
//! labels once, registers itself once, and never changes afterwards.

use crate::error::Result;
use crate::labels::{derive_labels, LabelSet};
use crate::naming::derive_name;
use crate::registration::{ComponentOptions, RegistrationRequest, ResourceRegistrar, ResourceUrn};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Identity supplied by the caller declaring a component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardResourceArgs {
    pub project: String,
    pub environment: String,
    pub owner: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl StandardResourceArgs {
    pub fn new(
        project: impl Into<String>,
        environment: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            environment: environment.into(),
            owner: owner.into(),
            region: None,
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }
}

/// Registered component carrying a derived name prefix and label set
#[derive(Debug, Clone, PartialEq)]
pub struct StandardComponent {
    kind: String,
    name: String,
    urn: ResourceUrn,
    name_prefix: String,
    labels: LabelSet,
    region: Option<String>,
}

impl StandardComponent {
    /// Derive naming and labels for `name`, then register it with `registrar`
    ///
    /// A registrar rejection is returned unchanged and no component is built.
    pub fn new<R>(
        registrar: &R,
        kind: &str,
        name: &str,
        args: &StandardResourceArgs,
        opts: &ComponentOptions,
    ) -> Result<Self>
    where
        R: ResourceRegistrar + ?Sized,
    {
        let name_prefix = derive_name(&args.project, &args.environment, name);
        let labels = derive_labels(&args.project, &args.environment, &args.owner);

        let urn = registrar.register(RegistrationRequest {
            kind,
            name,
            properties: serde_json::Value::Object(serde_json::Map::new()),
            options: opts,
        })?;

        debug!("Declared component {} with prefix {}", urn, name_prefix);

        Ok(Self {
            kind: kind.to_string(),
            name: name.to_string(),
            urn,
            name_prefix,
            labels,
            region: args.region.clone(),
        })
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Logical name the component was declared with
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn urn(&self) -> &ResourceUrn {
        &self.urn
    }

    pub fn name_prefix(&self) -> &str {
        &self.name_prefix
    }

    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Name for a nested resource: `{name_prefix}-{suffix}`
    pub fn child_name(&self, suffix: &str) -> String {
        format!("{}-{}", self.name_prefix, suffix)
    }

    /// Options that nest a child resource under this component
    pub fn child_options(&self) -> ComponentOptions {
        ComponentOptions::new().with_parent(self.urn.clone())
    }
}

/// Capability of every resource that carries a standard name and labels
pub trait NamedLabeledResource {
    /// The composed component
    fn component(&self) -> &StandardComponent;

    fn name_prefix(&self) -> &str {
        self.component().name_prefix()
    }

    fn labels(&self) -> &LabelSet {
        self.component().labels()
    }

    fn urn(&self) -> &ResourceUrn {
        self.component().urn()
    }

    fn child_name(&self, suffix: &str) -> String {
        self.component().child_name(suffix)
    }
}

impl NamedLabeledResource for StandardComponent {
    fn component(&self) -> &StandardComponent {
        self
    }
}
