//! Catalog facet and detail commands.

use anyhow::Result;
use market_catalog::prelude::*;
use serde::Serialize;

use super::{PricesArgs, ShowArgs};
use crate::context::Context;
use crate::output::product_line;

/// List cities that have at least one listing.
pub async fn locations(ctx: &Context) -> Result<()> {
    let loaded = ctx.load_catalog().await?;
    let locations = available_locations(&collect_all_products(&loaded.catalog));

    if ctx.output.is_json() {
        ctx.output.json(&locations);
        return Ok(());
    }

    ctx.output.header("Locations");
    for location in &locations {
        ctx.output
            .list_item(&format!("{} {}", location.emoji(), location.as_str()));
    }

    Ok(())
}

/// Show the lowest and highest asking price.
pub async fn prices(args: PricesArgs, ctx: &Context) -> Result<()> {
    let loaded = ctx.load_catalog().await?;
    let products = match args.section {
        Some(section) => products_in_section(&loaded.catalog, section),
        None => collect_all_products(&loaded.catalog),
    };
    let span = price_range(&products);

    if ctx.output.is_json() {
        ctx.output.json(&span);
        return Ok(());
    }

    let Some(span) = span else {
        ctx.output.info("No priced listings");
        return Ok(());
    };

    match args.section {
        Some(section) => ctx.output.header(&format!("Prices · {}", section.display_name())),
        None => ctx.output.header("Prices"),
    }
    ctx.output.kv("min", &span.min.display());
    ctx.output.kv("max", &span.max.display());

    Ok(())
}

#[derive(Serialize)]
struct ListingDetail<'a> {
    section: Section,
    category: &'a str,
    favorite: bool,
    #[serde(flatten)]
    product: &'a Product,
}

/// Show a single listing.
pub async fn show(args: ShowArgs, ctx: &Context) -> Result<()> {
    let loaded = ctx.load_catalog().await?;
    let favorites = ctx.load_favorites()?;
    let id = ProductId::new(args.id);

    let found = product_by_id(&loaded.catalog, &id)?;
    let favorite = favorites.contains(&id);

    if ctx.output.is_json() {
        ctx.output.json(&ListingDetail {
            section: found.section,
            category: found.category_key,
            favorite,
            product: found.product,
        });
        return Ok(());
    }

    let product = found.product;
    ctx.output.header(&product.title);
    println!("  {}", product_line(product, found.section, favorite));
    ctx.output.kv("section", found.section.display_name());
    ctx.output.kv("category", found.category_key);
    ctx.output.kv("location", product.location.as_str());
    if let Some(price) = product.price.filter(|_| found.section.shows_price()) {
        ctx.output.kv("price", &price.display());
    }
    ctx.output.kv("image", &product.image);

    Ok(())
}
