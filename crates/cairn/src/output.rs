//! Terminal output for Cairn commands
//!
//! Status lines go to stderr when they report a problem, stdout otherwise.
//! The `format_*` functions return the unstyled text so callers and tests
//! can use it without a terminal.

use cairn_core::program::StackOutputs;
use console::style;
use std::fmt::Display;

pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

pub fn warning(msg: &str) {
    eprintln!("{} {}", style("⚠").yellow().bold(), msg);
}

pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Section title, preceded by a blank line
pub fn header(msg: &str) {
    println!("\n{}", style(msg).bold().underlined());
}

/// Print a resolved key and its value, indented under the current header
pub fn kv(key: &str, value: impl Display) {
    println!("  {}: {}", style(key).dim(), value);
}

pub fn format_kv(key: &str, value: impl Display) -> String {
    format!("  {}: {}", key, value)
}

/// Exported stack values in the order they are listed
pub fn output_pairs(outputs: &StackOutputs) -> [(&'static str, &str); 4] {
    [
        ("bucketUrl", outputs.bucket_url.as_str()),
        ("bucketSelfLink", outputs.bucket_self_link.as_str()),
        ("namePrefix", outputs.name_prefix.as_str()),
        ("region", outputs.region.as_str()),
    ]
}

pub fn stack_outputs(outputs: &StackOutputs) {
    for (key, value) in output_pairs(outputs) {
        kv(key, value);
    }
}

pub fn format_resource_count(count: usize) -> String {
    match count {
        1 => "1 resource would be registered".to_string(),
        n => format!("{} resources would be registered", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cairn_core::config::MemoryConfigStore;
    use cairn_core::program::declare_dev_stack;
    use cairn_core::RecordingRegistrar;

    #[test]
    fn test_format_kv_accepts_any_display_value() {
        assert_eq!(format_kv("replicas", 3), "  replicas: 3");
        assert_eq!(format_kv("owner", "team-infra"), "  owner: team-infra");
    }

    #[test]
    fn test_output_pairs_follow_stack_outputs() {
        let registrar = RecordingRegistrar::new("dev", "infra");
        let outputs = declare_dev_stack(&MemoryConfigStore::new(), &registrar, "dev").unwrap();

        let pairs = output_pairs(&outputs);
        assert_eq!(pairs[0], ("bucketUrl", "gs://test-project-dev-data"));
        assert_eq!(pairs[2], ("namePrefix", "test-project-dev-data"));
        assert_eq!(pairs[3], ("region", "us-central1"));
    }

    #[test]
    fn test_format_resource_count() {
        assert_eq!(format_resource_count(1), "1 resource would be registered");
        assert_eq!(format_resource_count(2), "2 resources would be registered");
        assert_eq!(format_resource_count(0), "0 resources would be registered");
    }
}
