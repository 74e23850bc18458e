//! # cairn-core
//!
//! Core library for Cairn providing:
//! - Deterministic resource naming and standard label sets
//! - Region allow-list validation
//! - Stack configuration stores and accessors
//! - The `StandardComponent` building block for declaring labeled resources

pub mod component;
pub mod config;
pub mod error;
pub mod labels;
pub mod naming;
pub mod program;
pub mod region;
pub mod registration;
pub mod resources;

pub use component::{NamedLabeledResource, StandardComponent, StandardResourceArgs};
pub use config::{get_or_default, require_all, ConfigStore};
pub use error::{Error, Result};
pub use labels::{derive_labels, LabelSet, MANAGED_BY};
pub use naming::derive_name;
pub use region::{is_valid_region, validate_region, VALID_REGIONS};
pub use registration::{
    ComponentOptions, RecordingRegistrar, RegistrationError, RegistrationRequest,
    ResourceRegistrar, ResourceUrn,
};
