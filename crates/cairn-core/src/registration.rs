//! Resource registration
//!
//! Declaring a resource hands its kind, logical name, properties and options
//! to a [`ResourceRegistrar`], which assigns it a [`ResourceUrn`]. Cairn
//! never provisions anything itself; the registrar is the engine's seam.
//! [`RecordingRegistrar`] keeps every accepted declaration in memory, which
//! is what previews and tests run against.

use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::{Mutex, PoisonError};
use thiserror::Error;
use tracing::debug;

/// Opaque failure reported by a registrar
#[derive(Debug, Error)]
#[error(transparent)]
pub struct RegistrationError(#[from] anyhow::Error);

impl RegistrationError {
    /// Create a registration error from a message
    pub fn msg<M>(message: M) -> Self
    where
        M: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Self(anyhow::Error::msg(message))
    }
}

/// Unique resource name assigned at registration
///
/// Rendered as `urn:cairn:{stack}::{project}::{type}::{name}`, where `type`
/// is the resource kind prefixed by its parent's type chain joined with `$`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct ResourceUrn {
    stack: String,
    project: String,
    qualified_type: String,
    name: String,
}

impl ResourceUrn {
    pub fn new(
        stack: impl Into<String>,
        project: impl Into<String>,
        parent_type: Option<&str>,
        kind: &str,
        name: impl Into<String>,
    ) -> Self {
        let qualified_type = match parent_type {
            Some(parent) => format!("{}${}", parent, kind),
            None => kind.to_string(),
        };

        Self {
            stack: stack.into(),
            project: project.into(),
            qualified_type,
            name: name.into(),
        }
    }

    pub fn stack(&self) -> &str {
        &self.stack
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    /// Type including the parent chain
    pub fn qualified_type(&self) -> &str {
        &self.qualified_type
    }

    /// Resource kind without the parent chain
    pub fn kind(&self) -> &str {
        self.qualified_type
            .rsplit('$')
            .next()
            .unwrap_or(&self.qualified_type)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ResourceUrn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "urn:cairn:{}::{}::{}::{}",
            self.stack, self.project, self.qualified_type, self.name
        )
    }
}

impl From<ResourceUrn> for String {
    fn from(urn: ResourceUrn) -> Self {
        urn.to_string()
    }
}

/// Options forwarded to the registrar alongside a declaration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentOptions {
    /// Resource this one is nested under
    pub parent: Option<ResourceUrn>,

    /// Resources that must exist before this one
    pub depends_on: Vec<ResourceUrn>,

    /// Refuse deletion of the resource
    pub protect: bool,
}

impl ComponentOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parent(mut self, parent: ResourceUrn) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn depends_on(mut self, urn: ResourceUrn) -> Self {
        self.depends_on.push(urn);
        self
    }

    pub fn protected(mut self) -> Self {
        self.protect = true;
        self
    }
}

/// A single declaration handed to a registrar
#[derive(Debug, Clone)]
pub struct RegistrationRequest<'a> {
    pub kind: &'a str,
    pub name: &'a str,
    pub properties: Value,
    pub options: &'a ComponentOptions,
}

/// Registration collaborator invoked once per declared resource
pub trait ResourceRegistrar: Send + Sync {
    fn register(&self, request: RegistrationRequest<'_>) -> Result<ResourceUrn, RegistrationError>;
}

/// Accepted declaration, as recorded by [`RecordingRegistrar`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub urn: ResourceUrn,
    pub kind: String,
    pub name: String,
    pub properties: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<ResourceUrn>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<ResourceUrn>,
    pub protect: bool,
}

/// In-memory registrar that records declarations in order
///
/// Rejects a URN that was already registered, and a parent or dependency it
/// has not seen.
#[derive(Debug)]
pub struct RecordingRegistrar {
    stack: String,
    project: String,
    records: Mutex<Vec<Registration>>,
}

impl RecordingRegistrar {
    pub fn new(stack: impl Into<String>, project: impl Into<String>) -> Self {
        Self {
            stack: stack.into(),
            project: project.into(),
            records: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of every accepted declaration
    pub fn registrations(&self) -> Vec<Registration> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Look up a recorded declaration by URN
    pub fn find(&self, urn: &ResourceUrn) -> Option<Registration> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|r| &r.urn == urn)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResourceRegistrar for RecordingRegistrar {
    fn register(&self, request: RegistrationRequest<'_>) -> Result<ResourceUrn, RegistrationError> {
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        let known = |urn: &ResourceUrn| records.iter().any(|r| &r.urn == urn);

        let parent_type = match &request.options.parent {
            Some(parent) if !known(parent) => {
                return Err(RegistrationError::msg(format!(
                    "parent resource '{}' has not been registered",
                    parent
                )));
            }
            Some(parent) => Some(parent.qualified_type().to_string()),
            None => None,
        };

        if let Some(missing) = request.options.depends_on.iter().find(|&d| !known(d)) {
            return Err(RegistrationError::msg(format!(
                "dependency '{}' has not been registered",
                missing
            )));
        }

        let urn = ResourceUrn::new(
            self.stack.as_str(),
            self.project.as_str(),
            parent_type.as_deref(),
            request.kind,
            request.name,
        );

        if known(&urn) {
            return Err(RegistrationError::msg(format!(
                "duplicate resource URN '{}'",
                urn
            )));
        }

        debug!("Registered {}", urn);
        records.push(Registration {
            urn: urn.clone(),
            kind: request.kind.to_string(),
            name: request.name.to_string(),
            properties: request.properties,
            parent: request.options.parent.clone(),
            depends_on: request.options.depends_on.clone(),
            protect: request.options.protect,
        });

        Ok(urn)
    }
}
