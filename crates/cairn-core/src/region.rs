//! Region allow-list

use crate::error::{Error, Result};

/// Regions resources may be declared in
pub const VALID_REGIONS: &[&str] = &[
    "us-central1",
    "us-east1",
    "us-west1",
    "europe-west1",
    "asia-east1",
];

/// Exact, case-sensitive membership check against [`VALID_REGIONS`]
pub fn is_valid_region(region: &str) -> bool {
    VALID_REGIONS.iter().any(|valid| *valid == region)
}

/// Return the region unchanged if allowed, otherwise an `InvalidRegion` error
pub fn validate_region(region: &str) -> Result<&str> {
    if is_valid_region(region) {
        Ok(region)
    } else {
        Err(Error::invalid_region(region))
    }
}
