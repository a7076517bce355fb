//! Command-line interface for fo-lookup.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **search**: Find citable references for a reference string
//! - **dataset**: Summarize the loaded catalog
//! - **serve**: Start the search web page
//!
//! ## Usage
//!
//! ```text
//! # Look up file 15 of Code 12
//! fo-lookup search "FO 371/15/12"
//!
//! # Use another export of the catalog
//! fo-lookup --dataset fo_1920-25.csv.gz search "FO 371/15/12"
//!
//! # JSON output for scripting
//! fo-lookup search "FO 371/15/12" --format json
//!
//! # Start web UI
//! fo-lookup serve --port 8080 --open
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::catalog::store::DEFAULT_CATALOG_PATH;

pub mod dataset;
pub mod search;

#[derive(Parser)]
#[command(name = "fo-lookup")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Find citable references in FO correspondence data")]
#[command(
    long_about = "fo-lookup finds catalog records for a slash-delimited reference string.\n\nFor a string like 'FO 371/15/12' it searches descriptions for 'Code 12' and keeps the records whose file or file range covers file 15."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Catalog CSV file (optionally gzip-compressed)
    #[arg(
        short,
        long,
        global = true,
        env = "FO_LOOKUP_DATASET",
        default_value = DEFAULT_CATALOG_PATH
    )]
    pub dataset: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find citable references for a reference string
    Search(search::SearchArgs),

    /// Summarize the catalog
    Dataset,

    /// Start the web server
    Serve(ServeArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
