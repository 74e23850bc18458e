//! Sample `dev` stack program
//!
//! Reads the stack configuration (falling back to built-in defaults),
//! declares the project's data bucket with the standard name and labels,
//! and returns the stack exports.

use crate::component::{NamedLabeledResource, StandardResourceArgs};
use crate::config::{get_or_default, ConfigStore};
use crate::error::Result;
use crate::labels::LabelSet;
use crate::region::validate_region;
use crate::registration::{ComponentOptions, ResourceRegistrar};
use crate::resources::{DataBucket, DataBucketArgs};
use serde::Serialize;
use tracing::info;

pub const DEFAULT_PROJECT: &str = "test-project";
pub const DEFAULT_OWNER: &str = "test-owner";
pub const DEFAULT_REGION: &str = "us-central1";

/// Logical name of the data bucket
pub const DATA_BUCKET_NAME: &str = "data";

/// Values exported by the stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StackOutputs {
    pub bucket_url: String,
    pub bucket_self_link: String,
    pub name_prefix: String,
    pub region: String,
    pub labels: LabelSet,
}

/// Declare the stack's resources for `environment`
pub fn declare_dev_stack<S, R>(store: &S, registrar: &R, environment: &str) -> Result<StackOutputs>
where
    S: ConfigStore + ?Sized,
    R: ResourceRegistrar + ?Sized,
{
    let project: String = get_or_default(store, "project", DEFAULT_PROJECT.to_string());
    let owner: String = get_or_default(store, "owner", DEFAULT_OWNER.to_string());
    let region: String = get_or_default(store, "region", DEFAULT_REGION.to_string());

    validate_region(&region)?;
    info!(
        "Declaring stack for project {} ({}) in {}",
        project, environment, region
    );

    let identity = StandardResourceArgs::new(project, environment, owner).with_region(region.as_str());
    let bucket = DataBucket::new(
        registrar,
        DATA_BUCKET_NAME,
        &identity,
        DataBucketArgs::new(region.as_str()),
        &ComponentOptions::new(),
    )?;

    Ok(StackOutputs {
        bucket_url: bucket.url(),
        bucket_self_link: bucket.self_link(),
        name_prefix: bucket.name_prefix().to_string(),
        region,
        labels: bucket.labels().clone(),
    })
}
