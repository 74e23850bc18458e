//! Resource naming policy
//!
//! Every resource in a deployment shares the `project-environment-resource`
//! prefix, folded to lowercase so names survive case-sensitive providers.

/// Derive the canonical resource name for a project/environment pair.
///
/// Inputs are not validated; empty segments are concatenated as-is.
pub fn derive_name(project: &str, environment: &str, resource: &str) -> String {
    format!("{}-{}-{}", project, environment, resource).to_lowercase()
}
