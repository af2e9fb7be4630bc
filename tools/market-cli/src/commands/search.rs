//! Search command.

use anyhow::Result;
use market_catalog::prelude::*;
use market_data::CatalogOrigin;
use serde::Serialize;

use super::SearchArgs;
use crate::context::Context;

#[derive(Serialize)]
struct SearchReport<'a> {
    origin: CatalogOrigin,
    filters: &'a SearchFilters,
    total: usize,
    results: &'a Categories,
}

/// Run the search command.
pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let filters = args.filters()?;
    let loaded = ctx.load_catalog().await?;
    let favorites = ctx.load_favorites()?;

    let mut results = filter_all_categories(&loaded.catalog, &filters.query, Some(&filters));
    if let Some(section) = filters.condition {
        results = results.narrow_to(section);
    }

    if ctx.output.is_json() {
        ctx.output.json(&SearchReport {
            origin: loaded.origin,
            filters: &filters,
            total: results.product_count(),
            results: &results,
        });
        return Ok(());
    }

    if results.is_empty() {
        ctx.output.info("No listings match your search");
        return Ok(());
    }

    for (section, categories) in results.sections() {
        if categories.is_empty() {
            continue;
        }

        ctx.output.header(section.display_name());
        for category in categories.values() {
            println!("  {} {} ({})", category.emoji, category.title, category.len());
            for product in &category.items {
                ctx.output
                    .product(product, section, favorites.contains(&product.id));
            }
        }
    }

    println!();
    ctx.output.success(&format!("{} listings found", results.product_count()));

    Ok(())
}
