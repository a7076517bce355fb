use clap::Parser;
use tracing_subscriber::EnvFilter;

use fo_lookup::{cli, web};

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("fo_lookup=debug,info")
    } else {
        EnvFilter::new("fo_lookup=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Search(args) => {
            cli::search::run(args, cli.format, &cli.dataset)?;
        }
        cli::Commands::Dataset => {
            cli::dataset::run(cli.format, &cli.dataset)?;
        }
        cli::Commands::Serve(args) => {
            web::server::run(args, &cli.dataset)?;
        }
    }

    Ok(())
}
