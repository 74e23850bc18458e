//! Preview command
//!
//! Runs the stack program against a recording registrar and prints what
//! would be registered, without touching any cloud API.

use anyhow::{Context, Result};
use cairn_core::program::{declare_dev_stack, StackOutputs};
use cairn_core::registration::Registration;
use cairn_core::{ConfigStore, RecordingRegistrar};
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use super::labels::label_table;
use super::StackSource;
use crate::cli::PreviewArgs;
use crate::output;

/// Registrar project recorded in preview URNs
const PREVIEW_PROJECT: &str = "infra";

/// Table row for a registered resource
#[derive(Tabled)]
struct ResourceRow {
    #[tabled(rename = "TYPE")]
    kind: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "PARENT")]
    parent: String,
}

#[derive(Debug, Serialize)]
struct PreviewReport {
    stack: String,
    environment: String,
    resources: Vec<Registration>,
    outputs: StackOutputs,
}

pub fn run(args: PreviewArgs, stack: &StackSource) -> Result<()> {
    let store = stack.open()?;
    let environment = args.environment.unwrap_or_else(|| stack.stack.clone());
    let report = build_report(&store, &stack.stack, environment)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

/// Declare the stack against a fresh recording registrar
fn build_report<S>(store: &S, stack: &str, environment: String) -> Result<PreviewReport>
where
    S: ConfigStore + ?Sized,
{
    let registrar = RecordingRegistrar::new(stack, PREVIEW_PROJECT);

    let outputs = declare_dev_stack(store, &registrar, &environment)
        .with_context(|| format!("Preview of stack '{}' failed", stack))?;

    Ok(PreviewReport {
        stack: stack.to_string(),
        environment,
        resources: registrar.registrations(),
        outputs,
    })
}

fn print_report(report: &PreviewReport) {
    output::header(&format!(
        "Stack {} ({})",
        report.stack, report.environment
    ));

    if report.resources.is_empty() {
        output::warning("No resources declared");
    } else {
        println!("{}", resource_table(&report.resources));
    }

    output::header("Labels");
    println!("{}", label_table(&report.outputs.labels));

    output::header("Outputs");
    output::stack_outputs(&report.outputs);

    output::info(&output::format_resource_count(report.resources.len()));
}

fn resource_table(resources: &[Registration]) -> String {
    let rows: Vec<ResourceRow> = resources
        .iter()
        .map(|r| ResourceRow {
            kind: r.kind.clone(),
            name: r.name.clone(),
            parent: r
                .parent
                .as_ref()
                .map(|p| p.name().to_string())
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    table.to_string()
}
