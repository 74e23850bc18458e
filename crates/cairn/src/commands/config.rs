//! Config command

use anyhow::{anyhow, Result};
use cairn_core::{require_all, ConfigStore};
use std::collections::BTreeMap;

use super::StackSource;
use crate::cli::{ConfigCommands, ConfigGetArgs, ConfigRequireArgs};
use crate::output;

pub fn run(cmd: ConfigCommands, stack: &StackSource) -> Result<()> {
    let store = stack.open()?;

    match cmd {
        ConfigCommands::Get(args) => get(&store, args),
        ConfigCommands::Require(args) => require(&store, args),
    }
}

fn get(store: &dyn ConfigStore, args: ConfigGetArgs) -> Result<()> {
    let value = match args.fallback {
        Some(fallback) => cairn_core::get_or_default(store, &args.key, fallback),
        None => store
            .get(&args.key)
            .ok_or_else(|| anyhow!("Config key '{}' is not set", args.key))?,
    };

    println!("{}", value);
    Ok(())
}

fn require(store: &dyn ConfigStore, args: ConfigRequireArgs) -> Result<()> {
    let resolved = require_all(store, &args.keys)?;

    if args.json {
        // Sorted for stable output
        let sorted: BTreeMap<_, _> = resolved.into_iter().collect();
        println!("{}", serde_json::to_string_pretty(&sorted)?);
    } else {
        output::success(&format!("All {} required keys are set", args.keys.len()));
        for key in &args.keys {
            output::kv(key, &resolved[key]);
        }
    }

    Ok(())
}
