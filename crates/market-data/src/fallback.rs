//! Built-in catalog served when the listing API is unreachable.

use async_trait::async_trait;
use market_catalog::{Categories, Category, Location, Price, Product, Section};

use crate::api::category_label;
use crate::error::FetchError;
use crate::source::CatalogSource;

const IMAGE_BASE: &str = "https://images.unsplash.com/";

/// Source that always yields [`static_catalog`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

#[async_trait]
impl CatalogSource for StaticCatalog {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn load(&self) -> Result<Categories, FetchError> {
        Ok(static_catalog())
    }
}

type Row = (&'static str, &'static str, &'static str, Location, Option<u32>);

/// The storefront's fallback listings: three categories per section, four
/// listings per category, one per served city.
pub fn static_catalog() -> Categories {
    use Location::*;

    let mut catalog = Categories::new();

    add(&mut catalog, Section::Free, "technology", &[
        ("1", "Monitor LCD", "photo-1586210579191-33b45e38fa2c", Madrid, None),
        ("2", "Teclado Mecánico", "photo-1587829741301-dc798b83add3", Barcelona, None),
        ("3", "Mouse Gaming", "photo-1527864550417-7fd91fc51a46", Valencia, None),
        ("4", "Webcam HD", "photo-1587826080692-f560d8f3f213", Sevilla, None),
    ]);
    add(&mut catalog, Section::Free, "home", &[
        ("5", "Lámpara de Mesa", "photo-1507473885765-e6ed057f782c", Madrid, None),
        ("6", "Cojines", "photo-1584100936595-c0654b55a2e6", Barcelona, None),
        ("7", "Espejo Decorativo", "photo-1618220179428-22790b461013", Valencia, None),
        ("8", "Maceta", "photo-1485955900006-10f4d324d411", Sevilla, None),
    ]);
    add(&mut catalog, Section::Free, "books", &[
        ("25", "Novela Histórica", "photo-1544947950-fa07a98d237f", Madrid, None),
        ("26", "Libros Cocina", "photo-1589998059171-988d887df646", Barcelona, None),
        ("27", "Comics Manga", "photo-1613376023733-0a73315d9b06", Valencia, None),
        ("28", "Libros Técnicos", "photo-1456513080510-7bf3a84b82f8", Sevilla, None),
    ]);

    add(&mut catalog, Section::SecondHand, "electronics", &[
        ("9", "iPhone 12", "photo-1605637064671-c03a5fae76cd", Madrid, Some(399)),
        ("10", "Samsung TV", "photo-1593359677879-a4bb92f829d1", Barcelona, Some(299)),
        ("11", "iPad Pro", "photo-1544244015-0df4b3ffc6b0", Valencia, Some(449)),
        ("12", "MacBook Air", "photo-1611186871348-b1ce696e52c9", Sevilla, Some(699)),
    ]);
    add(&mut catalog, Section::SecondHand, "furniture", &[
        ("13", "Sofá", "photo-1555041469-a586c61ea9bc", Madrid, Some(299)),
        ("14", "Mesa Comedor", "photo-1577140917170-285929fb55b7", Barcelona, Some(199)),
        ("15", "Silla Oficina", "photo-1505843490538-5133c6c7d0e1", Valencia, Some(89)),
        ("16", "Estantería", "photo-1594620302200-9a762244a156", Sevilla, Some(129)),
    ]);
    add(&mut catalog, Section::SecondHand, "sports", &[
        ("29", "Bicicleta MTB", "photo-1576435728678-68d0fbf94e91", Madrid, Some(245)),
        ("30", "Raqueta Tenis", "photo-1595435934249-5df7ed86e1c0", Barcelona, Some(49)),
        ("31", "Tabla Surf", "photo-1531722569936-825d3dd91b15", Valencia, Some(180)),
        ("32", "Patines", "photo-1600188769730-3df7f8b8bc01", Sevilla, Some(75)),
    ]);

    add(&mut catalog, Section::New, "clothing", &[
        ("17", "Chaqueta", "photo-1591047139829-d91aecb6caea", Madrid, Some(79)),
        ("18", "Zapatillas", "photo-1542291026-7eec264c27ff", Barcelona, Some(99)),
        ("19", "Jeans", "photo-1582418702059-97ebafb35d09", Valencia, Some(59)),
        ("20", "Camiseta", "photo-1521572163474-6864f9cf17ab", Sevilla, Some(29)),
    ]);
    add(&mut catalog, Section::New, "appliances", &[
        ("21", "Nevera", "photo-1571175443880-49e1d25b2bc5", Madrid, Some(899)),
        ("22", "Lavadora", "photo-1626806787461-102c1bfbed00", Barcelona, Some(599)),
        ("23", "Microondas", "photo-1585659722983-3a675dabf23d", Valencia, Some(129)),
        ("24", "Cafetera", "photo-1517668808822-9ebb02f2a0e6", Sevilla, Some(89)),
    ]);
    add(&mut catalog, Section::New, "gaming", &[
        ("33", "PS5", "photo-1606813907291-d86efa9b94db", Madrid, Some(499)),
        ("34", "Nintendo Switch", "photo-1578303512597-81e6cc155b3e", Barcelona, Some(299)),
        ("35", "Xbox Series X", "photo-1621259182978-fbf93132d53d", Valencia, Some(499)),
        ("36", "Gaming PC", "photo-1587202372775-e229f172b9d7", Sevilla, Some(1299)),
    ]);

    catalog
}

fn add(catalog: &mut Categories, section: Section, key: &str, rows: &[Row]) {
    let (emoji, title) = category_label(key);
    let items = rows
        .iter()
        .map(|&(id, name, photo, location, price)| {
            let product = Product::new(id, name, format!("{IMAGE_BASE}{photo}"), location);
            match price {
                Some(euros) => product.with_price(Price::euros(euros)),
                None => product,
            }
        })
        .collect();

    catalog.insert(section, key, Category::new(emoji, title).with_items(items));
}

#[cfg(test)]
mod tests {
    use super::*;
    use market_catalog::search::{available_locations, collect_all_products, price_range, PriceSpan};

    #[test]
    fn test_static_catalog_shape() {
        let catalog = static_catalog();
        assert_eq!(catalog.product_count(), 36);
        for (_, categories) in catalog.sections() {
            assert_eq!(categories.len(), 3);
        }
        let free_keys: Vec<&str> = catalog.free.keys().map(String::as_str).collect();
        assert_eq!(free_keys, vec!["technology", "home", "books"]);
    }

    #[test]
    fn test_free_listings_have_no_price() {
        let catalog = static_catalog();
        assert!(catalog
            .free
            .values()
            .flat_map(|c| c.items.iter())
            .all(|p| p.price.is_none()));
    }

    #[test]
    fn test_facets_over_static_catalog() {
        let all = collect_all_products(&static_catalog());
        assert_eq!(available_locations(&all), {
            let mut locations = Location::ALL.to_vec();
            locations.sort();
            locations
        });
        assert_eq!(
            price_range(&all),
            Some(PriceSpan::new(Price::euros(29), Price::euros(1299)))
        );
    }

    #[tokio::test]
    async fn test_static_source_never_fails() {
        let catalog = StaticCatalog.load().await.unwrap();
        assert_eq!(catalog, static_catalog());
    }
}
