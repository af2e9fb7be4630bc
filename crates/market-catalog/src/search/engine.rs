//! Catalog-wide filter pass and facet helpers.

use std::collections::BTreeSet;

use tracing::debug;

use crate::catalog::{Categories, CategorySection, Location, Product, Section};
use crate::error::CatalogError;
use crate::ids::ProductId;
use crate::search::filter::{filter_products, SearchFilters};
use crate::search::results::PriceSpan;

/// Run the filter over every category of every section.
///
/// Categories left with no listings are dropped from their section, so a
/// missing key means "nothing to render here". All three sections are always
/// present in the result, possibly empty. `filters.condition` is not applied.
pub fn filter_all_categories(
    categories: &Categories,
    query: &str,
    filters: Option<&SearchFilters>,
) -> Categories {
    let mut filtered = Categories::new();

    for (section, source) in categories.sections() {
        *filtered.section_mut(section) = filter_section(source, query, filters);
    }

    debug!(
        query = query.trim(),
        before = categories.product_count(),
        after = filtered.product_count(),
        "filter pass"
    );

    filtered
}

fn filter_section(
    section: &CategorySection,
    query: &str,
    filters: Option<&SearchFilters>,
) -> CategorySection {
    section
        .iter()
        .filter_map(|(key, category)| {
            let items = filter_products(&category.items, query, filters);
            (!items.is_empty()).then(|| (key.clone(), category.with_replaced_items(items)))
        })
        .collect()
}

/// Flatten the catalog: `free`, then `secondHand`, then `new`, each in
/// category key order.
pub fn collect_all_products(categories: &Categories) -> Vec<Product> {
    Section::ALL
        .into_iter()
        .flat_map(|section| products_in_section(categories, section))
        .collect()
}

/// Flatten a single section in category key order.
pub fn products_in_section(categories: &Categories, section: Section) -> Vec<Product> {
    categories
        .section(section)
        .values()
        .flat_map(|category| category.items.iter().cloned())
        .collect()
}

/// Distinct locations present in `products`, sorted by name.
pub fn available_locations(products: &[Product]) -> Vec<Location> {
    products
        .iter()
        .map(|product| product.location)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Lowest and highest price among priced listings.
///
/// Returns `None` when nothing carries a price, which is distinct from a
/// span of zero-priced listings.
pub fn price_range(products: &[Product]) -> Option<PriceSpan> {
    let mut prices = products.iter().filter_map(|product| product.price);
    let first = prices.next()?;

    Some(prices.fold(PriceSpan::new(first, first), |span, price| {
        PriceSpan::new(span.min.min(price), span.max.max(price))
    }))
}

/// Where a product lives in the catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductMatch<'a> {
    pub section: Section,
    pub category_key: &'a str,
    pub product: &'a Product,
}

/// Look up a listing by id for the detail view.
pub fn find_product<'a>(categories: &'a Categories, id: &ProductId) -> Option<ProductMatch<'a>> {
    categories.sections().find_map(|(section, categories)| {
        categories.iter().find_map(|(key, category)| {
            category
                .items
                .iter()
                .find(|product| &product.id == id)
                .map(|product| ProductMatch {
                    section,
                    category_key: key.as_str(),
                    product,
                })
        })
    })
}

/// Like [`find_product`], but a missing listing is an error.
pub fn product_by_id<'a>(
    categories: &'a Categories,
    id: &ProductId,
) -> Result<ProductMatch<'a>, CatalogError> {
    find_product(categories, id).ok_or_else(|| CatalogError::ProductNotFound(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::price::Price;
    use crate::search::PriceBounds;
    use pretty_assertions::assert_eq;

    fn product(id: &str, title: &str, location: Location, price: Option<u32>) -> Product {
        let product = Product::new(id, title, "img", location);
        match price {
            Some(euros) => product.with_price(Price::euros(euros)),
            None => product,
        }
    }

    fn catalog() -> Categories {
        let mut catalog = Categories::new();
        catalog.insert(
            Section::Free,
            "technology",
            Category::new("💻", "Tecnología").with_items(vec![product(
                "1",
                "Monitor LCD",
                Location::Madrid,
                None,
            )]),
        );
        catalog.insert(
            Section::Free,
            "home",
            Category::new("🏠", "Hogar").with_items(vec![product(
                "5",
                "Lámpara de Mesa",
                Location::Madrid,
                None,
            )]),
        );
        catalog.insert(
            Section::SecondHand,
            "electronics",
            Category::new("📱", "Electrónicos").with_items(vec![
                product("9", "iPhone 12", Location::Madrid, Some(399)),
                product("10", "Samsung TV", Location::Barcelona, Some(299)),
            ]),
        );
        catalog.insert(
            Section::New,
            "appliances",
            Category::new("🔌", "Electrodomésticos").with_items(vec![product(
                "23",
                "Microondas",
                Location::Valencia,
                Some(129),
            )]),
        );
        catalog
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let catalog = catalog();
        assert_eq!(filter_all_categories(&catalog, "", None), catalog);
    }

    #[test]
    fn test_unmatched_category_key_is_absent() {
        let filtered = filter_all_categories(&catalog(), "lámpara", None);

        assert!(!filtered.free.contains_key("technology"));
        let home = &filtered.free["home"];
        assert_eq!(home.title, "Hogar");
        assert_eq!(home.emoji, "🏠");
        assert_eq!(home.items.len(), 1);
        assert_eq!(home.items[0].title, "Lámpara de Mesa");

        assert!(filtered.second_hand.is_empty());
        assert!(filtered.new.is_empty());
    }

    #[test]
    fn test_price_filter_empties_free_section() {
        let filters =
            SearchFilters::new().with_price_range(PriceBounds::at_most(Price::euros(300)));
        let filtered = filter_all_categories(&catalog(), "", Some(&filters));

        assert!(filtered.free.is_empty());
        let electronics: Vec<&str> = filtered.second_hand["electronics"]
            .items
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(electronics, vec!["10"]);
        assert_eq!(filtered.new["appliances"].items.len(), 1);
    }

    #[test]
    fn test_filter_pass_ignores_condition() {
        let filters = SearchFilters::new().with_condition(Section::New);
        let filtered = filter_all_categories(&catalog(), "", Some(&filters));
        assert_eq!(filtered.product_count(), catalog().product_count());
    }

    #[test]
    fn test_collect_all_products_order() {
        let ids: Vec<String> = collect_all_products(&catalog())
            .into_iter()
            .map(|p| p.id.into_inner())
            .collect();
        assert_eq!(ids, vec!["1", "5", "9", "10", "23"]);
    }

    #[test]
    fn test_products_in_section() {
        let second_hand = products_in_section(&catalog(), Section::SecondHand);
        assert_eq!(second_hand.len(), 2);
        assert!(products_in_section(&Categories::new(), Section::Free).is_empty());
    }

    #[test]
    fn test_available_locations_dedup_sorted() {
        let products = vec![
            product("a", "A", Location::Madrid, None),
            product("b", "B", Location::Sevilla, None),
            product("c", "C", Location::Madrid, None),
        ];
        assert_eq!(
            available_locations(&products),
            vec![Location::Madrid, Location::Sevilla]
        );

        let all = collect_all_products(&catalog());
        assert_eq!(
            available_locations(&all),
            vec![Location::Barcelona, Location::Madrid, Location::Valencia]
        );
    }

    #[test]
    fn test_price_range() {
        let products = vec![
            product("a", "A", Location::Madrid, Some(399)),
            product("b", "B", Location::Madrid, Some(89)),
            product("c", "C", Location::Madrid, None),
        ];
        assert_eq!(
            price_range(&products),
            Some(PriceSpan::new(Price::euros(89), Price::euros(399)))
        );
        assert_eq!(price_range(&[]), None);
        assert_eq!(price_range(&[product("c", "C", Location::Madrid, None)]), None);
    }

    #[test]
    fn test_price_range_of_zero_priced_listing_is_some() {
        let products = vec![product("z", "Z", Location::Madrid, Some(0))];
        let span = price_range(&products).unwrap();
        assert!(span.min.is_zero() && span.max.is_zero());
    }

    #[test]
    fn test_find_product() {
        let catalog = catalog();
        let found = find_product(&catalog, &ProductId::new("10")).unwrap();
        assert_eq!(found.section, Section::SecondHand);
        assert_eq!(found.category_key, "electronics");
        assert_eq!(found.product.title, "Samsung TV");

        assert!(find_product(&catalog, &ProductId::new("999")).is_none());
    }

    #[test]
    fn test_product_by_id_reports_missing_listing() {
        let catalog = catalog();
        assert_eq!(
            product_by_id(&catalog, &ProductId::new("10")).map(|found| found.category_key),
            Ok("electronics")
        );

        let err = product_by_id(&catalog, &ProductId::new("999")).unwrap_err();
        assert_eq!(err, CatalogError::ProductNotFound("999".to_string()));
        assert_eq!(err.to_string(), "Product not found: 999");
    }
}
