//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod favorites;
pub mod search;
pub mod status;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use market_catalog::{Location, Price, PriceBounds, SearchFilters, Section};

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Words to look for in listing titles.
    pub query: Vec<String>,

    /// Only listings in this city.
    #[arg(short, long)]
    pub location: Option<Location>,

    /// Lowest asking price in euros.
    #[arg(long)]
    pub min: Option<f64>,

    /// Highest asking price in euros.
    #[arg(long)]
    pub max: Option<f64>,

    /// Only one section (free, second-hand, new).
    #[arg(long)]
    pub condition: Option<Section>,
}

impl SearchArgs {
    /// The query text, words joined by spaces.
    pub fn query_text(&self) -> String {
        self.query.join(" ")
    }

    /// Build engine filters from the flags.
    pub fn filters(&self) -> Result<SearchFilters> {
        let mut filters = SearchFilters::new().with_query(self.query_text());

        if let Some(location) = self.location {
            filters = filters.with_location(location);
        }

        let min = self
            .min
            .map(Price::from_decimal)
            .transpose()
            .context("Invalid --min")?;
        let max = self
            .max
            .map(Price::from_decimal)
            .transpose()
            .context("Invalid --max")?;
        if min.is_some() || max.is_some() {
            filters = filters.with_price_range(PriceBounds::new(min, max));
        }

        if let Some(condition) = self.condition {
            filters = filters.with_condition(condition);
        }

        Ok(filters)
    }
}

/// Arguments for the prices command.
#[derive(Args)]
pub struct PricesArgs {
    /// Restrict to one section (free, second-hand, new).
    #[arg(short, long)]
    pub section: Option<Section>,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Listing id.
    pub id: String,
}

/// Arguments for the favorite command.
#[derive(Args)]
pub struct FavoriteArgs {
    /// Listing id to add or remove.
    pub id: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
