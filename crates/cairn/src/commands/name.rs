//! Name command

use anyhow::Result;
use cairn_core::derive_name;

use crate::cli::NameArgs;

pub fn run(args: NameArgs) -> Result<()> {
    println!("{}", render(&args));
    Ok(())
}

fn render(args: &NameArgs) -> String {
    let name = derive_name(&args.project, &args.environment, &args.resource);
    match &args.child {
        Some(suffix) => format!("{}-{}", name, suffix),
        None => name,
    }
}
