//! Favorites commands.

use anyhow::Result;
use market_catalog::prelude::*;
use serde::Serialize;

use super::FavoriteArgs;
use crate::context::Context;

#[derive(Serialize)]
struct ToggleReport<'a> {
    id: &'a ProductId,
    favorite: bool,
}

/// Add a listing to favorites, or remove it if already there.
pub async fn toggle(args: FavoriteArgs, ctx: &Context) -> Result<()> {
    let id = ProductId::new(args.id);
    let mut favorites = ctx.load_favorites()?;

    // Removing never needs the catalog, so stale ids can always be cleared.
    if !favorites.contains(&id) {
        let loaded = ctx.load_catalog().await?;
        product_by_id(&loaded.catalog, &id)?;
    }

    let favorite = favorites.toggle(id.clone());
    ctx.save_favorites(&favorites)?;

    if ctx.output.is_json() {
        ctx.output.json(&ToggleReport { id: &id, favorite });
    } else if favorite {
        ctx.output.success(&format!("Added {} to favorites", id));
    } else {
        ctx.output.success(&format!("Removed {} from favorites", id));
    }

    Ok(())
}

/// List favorited listings that still exist in the catalog.
pub async fn list(ctx: &Context) -> Result<()> {
    let mut favorites = ctx.load_favorites()?;
    let loaded = ctx.load_catalog().await?;

    let dropped = favorites.retain_known(&loaded.catalog);
    if dropped > 0 {
        ctx.output
            .debug(&format!("{} favorites are no longer listed", dropped));
    }

    let listed: Vec<ProductMatch<'_>> = favorites
        .iter()
        .filter_map(|id| find_product(&loaded.catalog, id))
        .collect();

    if ctx.output.is_json() {
        let products: Vec<&Product> = listed.iter().map(|found| found.product).collect();
        ctx.output.json(&products);
        return Ok(());
    }

    if listed.is_empty() {
        ctx.output.info("No favorites yet");
        return Ok(());
    }

    ctx.output.header("Favorites");
    for found in &listed {
        ctx.output.product(found.product, found.section, true);
    }

    Ok(())
}
