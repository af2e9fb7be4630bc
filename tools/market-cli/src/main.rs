//! Market CLI - Command line storefront for the marketplace catalog.
//!
//! Commands:
//! - `market search` - Search and filter listings by section and category
//! - `market locations` - List cities with listings
//! - `market prices` - Show the price span of priced listings
//! - `market show` - Show a single listing
//! - `market favorite` - Toggle a favorite
//! - `market favorites` - List favorites
//! - `market status` - Check the listing API
//! - `market config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ConfigArgs, FavoriteArgs, PricesArgs, SearchArgs, ShowArgs};

/// Market CLI - Browse the marketplace catalog
#[derive(Parser)]
#[command(name = "market")]
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

    /// Skip the listing API and use the built-in catalog
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search and filter listings
    Search(SearchArgs),

    /// List cities that currently have listings
    Locations,

    /// Show lowest and highest asking price
    Prices(PricesArgs),

    /// Show a single listing
    Show(ShowArgs),

    /// Add or remove a listing from favorites
    Favorite(FavoriteArgs),

    /// List favorited listings
    Favorites,

    /// Check that the listing API is reachable
    Status,

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.json);

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, cli.offline, output)?;

    let result = match cli.command {
        Commands::Search(args) => commands::search::run(args, &ctx).await,
        Commands::Locations => commands::catalog::locations(&ctx).await,
        Commands::Prices(args) => commands::catalog::prices(args, &ctx).await,
        Commands::Show(args) => commands::catalog::show(args, &ctx).await,
        Commands::Favorite(args) => commands::favorites::toggle(args, &ctx).await,
        Commands::Favorites => commands::favorites::list(&ctx).await,
        Commands::Status => commands::status::run(&ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
