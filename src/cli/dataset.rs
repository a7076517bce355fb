use std::path::Path;

use crate::catalog::store::{CatalogSummary, ReferenceCatalog};
use crate::cli::OutputFormat;

/// Execute dataset subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or JSON output fails.
pub fn run(format: OutputFormat, dataset: &Path) -> anyhow::Result<()> {
    let catalog = ReferenceCatalog::load_from_file(dataset)?;
    let summary = catalog.summary();

    match format {
        OutputFormat::Text => print_text_summary(dataset, &summary),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Tsv => print_tsv_summary(&summary),
    }

    Ok(())
}

fn print_text_summary(dataset: &Path, summary: &CatalogSummary) {
    println!("Catalog: {}", dataset.display());
    println!("{}", "=".repeat(60));
    println!("  Rows: {}", summary.rows);
    println!("  Columns: {}", summary.columns.join(", "));
    println!("  Rows with a description: {}", summary.described);
    println!("  Rows with a file or file range: {}", summary.with_file_range);

    if !summary.missing_columns.is_empty() {
        println!(
            "\n  Warning: missing required column(s): {}",
            summary.missing_columns.join(", ")
        );
        println!("  Searches against this catalog will report an error.");
    }
}

fn print_tsv_summary(summary: &CatalogSummary) {
    println!("rows\tcolumns\tdescribed\twith_file_range\tmissing_columns");
    println!(
        "{}\t{}\t{}\t{}\t{}",
        summary.rows,
        summary.columns.len(),
        summary.described,
        summary.with_file_range,
        summary.missing_columns.join(","),
    );
}
