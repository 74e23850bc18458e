//! Region command

use anyhow::Result;
use cairn_core::{validate_region, VALID_REGIONS};

use crate::cli::{RegionCheckArgs, RegionCommands};
use crate::output;

pub fn run(cmd: RegionCommands) -> Result<()> {
    match cmd {
        RegionCommands::Check(args) => check(args),
        RegionCommands::List => {
            list();
            Ok(())
        }
    }
}

/// Fails with the allow-list in the error message; `main` prints it once
fn check(args: RegionCheckArgs) -> Result<()> {
    let region = validate_region(&args.region)?;
    output::success(&format!("{} is an allowed region", region));
    Ok(())
}

fn list() {
    for region in VALID_REGIONS {
        println!("{}", region);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_region(region: &str) -> Result<()> {
        check(RegionCheckArgs {
            region: region.to_string(),
        })
    }

    #[test]
    fn test_check_accepts_every_allowed_region() {
        for region in VALID_REGIONS {
            assert!(check_region(region).is_ok(), "{} should be allowed", region);
        }
    }

    #[test]
    fn test_check_rejects_wrong_case_and_empty() {
        for region in ["US-CENTRAL1", "", "us-central2"] {
            let err = check_region(region).unwrap_err();
            assert!(err.to_string().contains("us-central1"));
        }
    }
}
