//! Listing API wire types and their mapping onto the catalog.

use market_catalog::search::Pagination;
use market_catalog::{Categories, Category, Location, Price, Product, ProductId, Section};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A product as returned by the listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiProduct {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    pub category: String,
    #[serde(default)]
    pub subcategory: Option<String>,
    /// Wear grade (`new`, `like_new`, `good`, ...), not the listing section.
    #[serde(default)]
    pub condition: Option<String>,
    /// `free`, `second_hand` or `new`.
    pub product_type: String,
    pub location: String,
    #[serde(default)]
    pub image_urls: Option<Vec<String>>,
    #[serde(default)]
    pub main_image_url: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl ApiProduct {
    /// Map onto a catalog listing, returning its section and category key.
    ///
    /// Listings with an unknown section, a location outside the served
    /// cities, or an invalid price are skipped. Free listings never keep a
    /// price.
    pub fn into_listing(self) -> Option<(Section, String, Product)> {
        let Some(section) = Section::from_api_name(&self.product_type) else {
            warn!(
                id = self.id,
                product_type = %self.product_type,
                "skipping listing with unknown product type"
            );
            return None;
        };

        let location: Location = match self.location.parse() {
            Ok(location) => location,
            Err(e) => {
                warn!(id = self.id, error = %e, "skipping listing outside served locations");
                return None;
            }
        };

        let price = match (section, self.price) {
            (Section::Free, _) | (_, None) => None,
            (_, Some(amount)) => match Price::from_decimal(amount) {
                Ok(price) => Some(price),
                Err(e) => {
                    warn!(id = self.id, error = %e, "skipping listing with invalid price");
                    return None;
                }
            },
        };

        let image = self
            .main_image_url
            .or_else(|| self.image_urls.and_then(|urls| urls.into_iter().next()))
            .unwrap_or_default();

        let id = ProductId::from_numeric(self.id);
        let mut product = Product::new(id, self.title, image, location);
        product.price = price;

        Some((section, category_key(&self.category), product))
    }
}

/// Paginated listing envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaginatedResponse<T> {
    /// Page items. The backend's list route names this field `products`.
    #[serde(alias = "products")]
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub size: u32,
    pub pages: u32,
}

impl<T> PaginatedResponse<T> {
    /// Paging state implied by the envelope's page, size and total.
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.size, self.total)
    }
}

/// Body of the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Group remote listings into sections and categories, keeping the order in
/// which categories are first seen.
pub fn group_into_categories(products: impl IntoIterator<Item = ApiProduct>) -> Categories {
    let mut catalog = Categories::new();

    for (section, key, product) in products.into_iter().filter_map(ApiProduct::into_listing) {
        catalog
            .section_mut(section)
            .entry(key)
            .or_insert_with_key(|key| {
                let (emoji, title) = category_label(key);
                Category::new(emoji, title)
            })
            .items
            .push(product);
    }

    catalog
}

fn category_key(category: &str) -> String {
    category.trim().to_lowercase()
}

/// Emoji and display label for a category key.
pub(crate) fn category_label(key: &str) -> (&'static str, String) {
    let known = match key {
        "technology" => Some(("💻", "Tecnología")),
        "home" => Some(("🏠", "Hogar")),
        "books" => Some(("📚", "Libros")),
        "electronics" => Some(("📱", "Electrónicos")),
        "furniture" => Some(("🪑", "Muebles")),
        "sports" => Some(("⚽", "Deportes")),
        "clothing" => Some(("👕", "Ropa")),
        "appliances" => Some(("🔌", "Electrodomésticos")),
        "gaming" => Some(("🎮", "Gaming")),
        _ => None,
    };

    match known {
        Some((emoji, title)) => (emoji, title.to_string()),
        None => ("📦", capitalize(key)),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn page() -> PaginatedResponse<ApiProduct> {
        serde_json::from_value(json!({
            "products": [
                {
                    "id": 9, "title": "iPhone 12", "price": 399.0, "category": "Electronics",
                    "product_type": "second_hand", "condition": "good", "location": "Madrid",
                    "main_image_url": "https://img/iphone.jpg", "status": "active"
                },
                {
                    "id": 1, "title": "Monitor LCD", "price": 15.0, "category": "technology",
                    "product_type": "free", "location": "Madrid",
                    "image_urls": ["https://img/monitor.jpg"]
                },
                {
                    "id": 40, "title": "Kayak", "price": 220.5, "category": "outdoor",
                    "product_type": "new", "location": "Valencia"
                },
                {
                    "id": 41, "title": "Tienda", "category": "outdoor",
                    "product_type": "new", "location": "Bilbao"
                },
                {
                    "id": 10, "title": "Samsung TV", "price": 299, "category": "electronics",
                    "product_type": "second_hand", "location": "Barcelona"
                }
            ],
            "total": 5, "page": 1, "size": 20, "pages": 1
        }))
        .unwrap()
    }

    #[test]
    fn test_envelope_accepts_products_alias() {
        let page = page();
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.total, 5);
    }

    #[test]
    fn test_envelope_pagination() {
        let page: PaginatedResponse<ApiProduct> = serde_json::from_value(json!({
            "items": [], "total": 45, "page": 2, "size": 20, "pages": 3
        }))
        .unwrap();

        let pagination = page.pagination();
        assert_eq!(pagination.pages, 3);
        assert!(pagination.has_next);
        assert!(pagination.has_prev);
    }

    #[test]
    fn test_grouping() {
        let catalog = group_into_categories(page().items);

        let electronics = &catalog.second_hand["electronics"];
        assert_eq!(electronics.title, "Electrónicos");
        assert_eq!(electronics.emoji, "📱");
        let titles: Vec<&str> = electronics.items.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["iPhone 12", "Samsung TV"]);
        assert_eq!(electronics.items[0].price, Some(Price::euros(399)));
        assert_eq!(electronics.items[0].image, "https://img/iphone.jpg");

        let monitor = &catalog.free["technology"].items[0];
        assert_eq!(monitor.price, None);
        assert_eq!(monitor.image, "https://img/monitor.jpg");
        assert_eq!(monitor.id.as_str(), "1");

        let outdoor = &catalog.new["outdoor"];
        assert_eq!(outdoor.title, "Outdoor");
        assert_eq!(outdoor.emoji, "📦");
        assert_eq!(outdoor.items.len(), 1);
        assert_eq!(outdoor.items[0].price, Some(Price::from_cents(22050)));
    }

    #[test]
    fn test_unknown_product_type_is_skipped() {
        let product: ApiProduct = serde_json::from_value(json!({
            "id": 3, "title": "Mystery", "category": "misc",
            "product_type": "auction", "location": "Madrid"
        }))
        .unwrap();
        assert!(product.into_listing().is_none());
    }

    #[test]
    fn test_sub_cent_price_is_skipped() {
        let product: ApiProduct = serde_json::from_value(json!({
            "id": 5, "title": "Casi cien", "price": 99.996, "category": "misc",
            "product_type": "second_hand", "location": "Madrid"
        }))
        .unwrap();
        assert!(product.into_listing().is_none());
    }

    #[test]
    fn test_negative_price_is_skipped() {
        let product: ApiProduct = serde_json::from_value(json!({
            "id": 4, "title": "Broken", "price": -5.0, "category": "misc",
            "product_type": "new", "location": "Sevilla"
        }))
        .unwrap();
        assert!(product.into_listing().is_none());
    }
}
