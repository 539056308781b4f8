//! Storefront CLI - Query a storefront catalog from the command line.
//!
//! Commands:
//! - `storefront search` - Run a faceted search from a query string
//! - `storefront suggest` - Autocomplete suggestions
//! - `storefront carousel` - Curated hero selection
//! - `storefront list` - Plain product listing
//! - `storefront config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CarouselArgs, ConfigArgs, ListArgs, SearchArgs, SuggestArgs};

/// Storefront CLI - Search, filter and curate a product catalog
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a faceted search (or suggestions with `type=suggestions`)
    Search(SearchArgs),

    /// Autocomplete suggestions for a partial query
    Suggest(SuggestArgs),

    /// Select products for the hero carousel
    Carousel(CarouselArgs),

    /// List products with simple filters
    List(ListArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // STOREFRONT_LOG overrides; --verbose => debug; else warn
    let filter = EnvFilter::try_from_env("STOREFRONT_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose {
            "storefront_core=debug"
        } else {
            "storefront_core=warn"
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let output = output::Output::new(cli.verbose, cli.json);
    let ctx = context::Context::load(cli.config.as_deref(), output)?;

    let result = match cli.command {
        Commands::Search(args) => commands::search::run(args, &ctx),
        Commands::Suggest(args) => commands::suggest::run(args, &ctx),
        Commands::Carousel(args) => commands::carousel::run(args, &ctx),
        Commands::List(args) => commands::list::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
