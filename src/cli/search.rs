use std::path::Path;

use clap::Args;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use crate::catalog::store::ReferenceCatalog;
use crate::cli::OutputFormat;
use crate::matching::engine::{LookupOutcome, LookupStatus, ReferenceMatcher};
use crate::matching::filter::MatchTable;

#[derive(Args)]
pub struct SearchArgs {
    /// Reference string, e.g. "FO 371/15/12" (file 15, Code 12)
    #[arg(required = true)]
    pub query: String,
}

/// Execute search subcommand
///
/// A status message (malformed query, excluded code, no match) is printed as
/// output, not returned as an error.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or JSON output fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SearchArgs, format: OutputFormat, dataset: &Path) -> anyhow::Result<()> {
    let catalog = ReferenceCatalog::load_from_file(dataset)?;

    let outcome = ReferenceMatcher::new(&catalog.table).lookup(&args.query);

    match format {
        OutputFormat::Text => print_text_outcome(&outcome),
        OutputFormat::Json => print_json_outcome(&args.query, &outcome)?,
        OutputFormat::Tsv => print_tsv_outcome(&outcome),
    }

    Ok(())
}

fn print_text_outcome(outcome: &LookupOutcome) {
    match outcome {
        LookupOutcome::Matches(matches) => println!("{}", render_table(matches)),
        LookupOutcome::Status(status) => println!("{status}"),
    }
}

/// Render results as a terminal table
#[must_use]
pub fn render_table(matches: &MatchTable) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            MatchTable::COLUMNS
                .iter()
                .map(|c| Cell::new(c).add_attribute(Attribute::Bold)),
        );

    for row in &matches.rows {
        table.add_row(vec![
            Cell::new(row.citable_reference.as_deref().unwrap_or("")),
            Cell::new(&row.description),
        ]);
    }

    table
}

fn print_json_outcome(query: &str, outcome: &LookupOutcome) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&outcome.to_json(query))?);
    Ok(())
}

fn print_tsv_outcome(outcome: &LookupOutcome) {
    match outcome {
        LookupOutcome::Matches(matches) => {
            println!("{}", MatchTable::COLUMNS.join("\t"));
            for row in &matches.rows {
                println!(
                    "{}\t{}",
                    tsv_field(row.citable_reference.as_deref().unwrap_or("")),
                    tsv_field(&row.description)
                );
            }
        }
        LookupOutcome::Status(status) => print_tsv_status(status),
    }
}

fn print_tsv_status(status: &LookupStatus) {
    println!("status\tmessage");
    println!("{}\t{}", status.kind(), tsv_field(&status.to_string()));
}

/// Tabs and newlines inside a field would break the row
fn tsv_field(value: &str) -> String {
    value.replace(['\t', '\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::filter::MatchedReference;

    fn matches() -> MatchTable {
        MatchTable {
            rows: vec![MatchedReference {
                citable_reference: Some("FO 371/4383".to_string()),
                description: "Code 12, Files 10 - 20".to_string(),
            }],
        }
    }

    #[test]
    fn test_render_table_contains_rows() {
        let rendered = render_table(&matches()).to_string();
        assert!(rendered.contains("Citable Reference"));
        assert!(rendered.contains("FO 371/4383"));
        assert!(rendered.contains("Code 12, Files 10 - 20"));
    }

    #[test]
    fn test_tsv_field_flattens_whitespace() {
        assert_eq!(tsv_field("a\tb\nc"), "a b c");
    }
}
