//! Labels command

use anyhow::Result;
use cairn_core::{derive_labels, LabelSet};
use tabled::{settings::Style, Table, Tabled};

use crate::cli::LabelsArgs;

/// Table row for a single label
#[derive(Tabled)]
struct LabelRow {
    #[tabled(rename = "KEY")]
    key: String,
    #[tabled(rename = "VALUE")]
    value: String,
}

pub fn run(args: LabelsArgs) -> Result<()> {
    let labels = derive_labels(&args.project, &args.environment, &args.owner);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&labels)?);
    } else {
        println!("{}", label_table(&labels));
    }

    Ok(())
}

/// Render labels as a two-column table
pub fn label_table(labels: &LabelSet) -> String {
    let rows: Vec<LabelRow> = labels
        .iter()
        .map(|(key, value)| LabelRow {
            key: key.to_string(),
            value: value.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    table.to_string()
}
