//! Storage bucket declared through a standard component
//!
//! The component's name prefix becomes the bucket name, so a `data` bucket
//! in project `myapp`, environment `dev` is named `myapp-dev-data` and
//! served at `gs://myapp-dev-data`.

use crate::component::{NamedLabeledResource, StandardComponent, StandardResourceArgs};
use crate::error::Result;
use crate::labels::LabelSet;
use crate::registration::{ComponentOptions, RegistrationRequest, ResourceRegistrar, ResourceUrn};
use serde::Serialize;
use tracing::info;

/// Component kind of a data bucket
pub const DATA_BUCKET_KIND: &str = "cairn:storage:DataBucket";

/// Provider kind of the nested bucket resource
pub const BUCKET_KIND: &str = "gcp:storage/bucket:Bucket";

const SELF_LINK_BASE: &str = "https://www.googleapis.com/storage/v1/b";

/// Bucket settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataBucketArgs {
    pub location: String,
    pub uniform_bucket_level_access: bool,
    pub versioning: bool,
}

impl DataBucketArgs {
    /// Uniform access and versioning enabled
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            uniform_bucket_level_access: true,
            versioning: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Versioning {
    pub enabled: bool,
}

/// Properties registered for the nested bucket resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketProperties {
    pub name: String,
    pub location: String,
    pub labels: LabelSet,
    pub uniform_bucket_level_access: bool,
    pub versioning: Versioning,
}

/// Declared data bucket
#[derive(Debug, Clone)]
pub struct DataBucket {
    component: StandardComponent,
    bucket_urn: ResourceUrn,
    properties: BucketProperties,
}

impl DataBucket {
    /// Declare the bucket component and its nested bucket resource
    ///
    /// Registration is not transactional. If the registrar rejects the nested
    /// bucket, the component registered just before it stays recorded and the
    /// error is returned.
    pub fn new<R>(
        registrar: &R,
        name: &str,
        identity: &StandardResourceArgs,
        args: DataBucketArgs,
        opts: &ComponentOptions,
    ) -> Result<Self>
    where
        R: ResourceRegistrar + ?Sized,
    {
        let component = StandardComponent::new(registrar, DATA_BUCKET_KIND, name, identity, opts)?;

        let properties = BucketProperties {
            name: component.name_prefix().to_string(),
            location: args.location,
            labels: component.labels().clone(),
            uniform_bucket_level_access: args.uniform_bucket_level_access,
            versioning: Versioning {
                enabled: args.versioning,
            },
        };

        let child_opts = component.child_options();
        let bucket_urn = registrar.register(RegistrationRequest {
            kind: BUCKET_KIND,
            name: &properties.name,
            properties: serde_json::to_value(&properties)?,
            options: &child_opts,
        })?;

        info!("Declared bucket {} in {}", properties.name, properties.location);

        Ok(Self {
            component,
            bucket_urn,
            properties,
        })
    }

    pub fn bucket_name(&self) -> &str {
        &self.properties.name
    }

    pub fn bucket_urn(&self) -> &ResourceUrn {
        &self.bucket_urn
    }

    pub fn properties(&self) -> &BucketProperties {
        &self.properties
    }

    pub fn url(&self) -> String {
        format!("gs://{}", self.bucket_name())
    }

    pub fn self_link(&self) -> String {
        format!("{}/{}", SELF_LINK_BASE, self.bucket_name())
    }

    /// Name reserved for the bucket's access-log sink
    pub fn log_bucket_name(&self) -> String {
        self.child_name("logs")
    }
}

impl NamedLabeledResource for DataBucket {
    fn component(&self) -> &StandardComponent {
        &self.component
    }
}
