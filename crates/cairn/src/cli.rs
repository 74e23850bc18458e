//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

use crate::commands::StackSource;

/// Cairn - consistent naming and labeling for infrastructure stacks
#[derive(Parser, Debug)]
#[command(name = "cairn")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Stack to read configuration for
    #[arg(short, long, global = true, env = "CAIRN_STACK", default_value = "dev")]
    pub stack: String,

    /// Path to the stack file (defaults to Cairn.<stack>.yaml, searched upwards)
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Where stack configuration should be read from
    pub fn stack_source(&self) -> StackSource {
        StackSource {
            stack: self.stack.clone(),
            path: self.config.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Derive a resource name
    Name(NameArgs),

    /// Derive the standard label set
    Labels(LabelsArgs),

    /// Region allow-list
    #[command(subcommand)]
    Region(RegionCommands),

    /// Read stack configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Declare the stack's resources and show what would be registered
    Preview(PreviewArgs),
}

#[derive(Args, Debug)]
pub struct NameArgs {
    /// Project name
    pub project: String,

    /// Environment (dev, staging, prod, ...)
    pub environment: String,

    /// Logical resource name
    pub resource: String,

    /// Derive a child name with this suffix
    #[arg(long)]
    pub child: Option<String>,
}

#[derive(Args, Debug)]
pub struct LabelsArgs {
    /// Project name
    pub project: String,

    /// Environment (dev, staging, prod, ...)
    pub environment: String,

    /// Owning team
    pub owner: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum RegionCommands {
    /// Check a region against the allow-list
    Check(RegionCheckArgs),

    /// List allowed regions
    List,
}

#[derive(Args, Debug)]
pub struct RegionCheckArgs {
    /// Region identifier (case-sensitive)
    pub region: String,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print a configuration value
    Get(ConfigGetArgs),

    /// Check that every key is set
    Require(ConfigRequireArgs),
}

#[derive(Args, Debug)]
pub struct ConfigGetArgs {
    /// Configuration key
    pub key: String,

    /// Value to print when the key is unset
    #[arg(long = "default")]
    pub fallback: Option<String>,
}

#[derive(Args, Debug)]
pub struct ConfigRequireArgs {
    /// Keys that must be set
    #[arg(required = true)]
    pub keys: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Environment to declare (defaults to the stack name)
    #[arg(short, long)]
    pub environment: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_name_with_child() {
        let cli = Cli::try_parse_from(["cairn", "name", "app", "staging", "myservice", "--child", "logs"])
            .unwrap();

        match cli.command {
            Commands::Name(args) => {
                assert_eq!(args.project, "app");
                assert_eq!(args.environment, "staging");
                assert_eq!(args.resource, "myservice");
                assert_eq!(args.child.as_deref(), Some("logs"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_stack_flags() {
        let cli = Cli::try_parse_from([
            "cairn",
            "preview",
            "--stack",
            "staging",
            "--config",
            "infra/Cairn.staging.yaml",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        let source = cli.stack_source();
        assert_eq!(source.stack, "staging");
        assert_eq!(source.path.as_deref().map(|p| p.as_str()), Some("infra/Cairn.staging.yaml"));
    }

    #[test]
    fn test_config_require_needs_keys() {
        assert!(Cli::try_parse_from(["cairn", "config", "require"]).is_err());

        let cli = Cli::try_parse_from(["cairn", "config", "require", "project", "owner"]).unwrap();
        match cli.command {
            Commands::Config(ConfigCommands::Require(args)) => {
                assert_eq!(args.keys, vec!["project", "owner"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_config_get_default_flag() {
        let cli = Cli::try_parse_from(["cairn", "config", "get", "region", "--default", "us-east1"])
            .unwrap();
        match cli.command {
            Commands::Config(ConfigCommands::Get(args)) => {
                assert_eq!(args.key, "region");
                assert_eq!(args.fallback.as_deref(), Some("us-east1"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
