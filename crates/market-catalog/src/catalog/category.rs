//! Category types for organizing listings into sections.

use crate::catalog::Product;
use crate::error::CatalogError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level grouping of listings by condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    /// Given away at no cost.
    Free,
    /// Used items with an asking price.
    SecondHand,
    /// New items with an asking price.
    New,
}

impl Section {
    /// All sections in display order.
    pub const ALL: [Section; 3] = [Section::Free, Section::SecondHand, Section::New];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Free => "free",
            Section::SecondHand => "secondHand",
            Section::New => "new",
        }
    }

    /// Name used by the backend's `product_type` column.
    pub fn api_name(&self) -> &'static str {
        match self {
            Section::Free => "free",
            Section::SecondHand => "second_hand",
            Section::New => "new",
        }
    }

    pub fn from_api_name(s: &str) -> Option<Self> {
        match s {
            "free" => Some(Section::Free),
            "second_hand" => Some(Section::SecondHand),
            "new" => Some(Section::New),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Section::Free => "Free",
            Section::SecondHand => "Second hand",
            Section::New => "New",
        }
    }

    /// Whether listings in this section are expected to carry a price.
    pub fn shows_price(&self) -> bool {
        !matches!(self, Section::Free)
    }
}

impl FromStr for Section {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "free" => Ok(Section::Free),
            "secondHand" | "second_hand" | "second-hand" => Ok(Section::SecondHand),
            "new" => Ok(Section::New),
            other => Err(CatalogError::UnknownSection(other.to_string())),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A titled, emoji-tagged bucket of listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Icon shown before the title.
    pub emoji: String,
    /// Display label (e.g. "Electrónicos").
    pub title: String,
    /// Listings in display order.
    pub items: Vec<Product>,
}

impl Category {
    /// Create an empty category.
    pub fn new(emoji: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            emoji: emoji.into(),
            title: title.into(),
            items: Vec::new(),
        }
    }

    /// Replace the listings.
    pub fn with_items(mut self, items: Vec<Product>) -> Self {
        self.items = items;
        self
    }

    /// Same label and emoji, different listings.
    pub fn with_replaced_items(&self, items: Vec<Product>) -> Self {
        Self {
            emoji: self.emoji.clone(),
            title: self.title.clone(),
            items,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Categories of one section keyed by category key, in insertion order.
pub type CategorySection = IndexMap<String, Category>;

/// The full catalog: one `CategorySection` per `Section`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Categories {
    #[serde(default)]
    pub free: CategorySection,
    #[serde(default, rename = "secondHand")]
    pub second_hand: CategorySection,
    #[serde(default)]
    pub new: CategorySection,
}

impl Categories {
    /// Create a catalog with three empty sections.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self, section: Section) -> &CategorySection {
        match section {
            Section::Free => &self.free,
            Section::SecondHand => &self.second_hand,
            Section::New => &self.new,
        }
    }

    pub fn section_mut(&mut self, section: Section) -> &mut CategorySection {
        match section {
            Section::Free => &mut self.free,
            Section::SecondHand => &mut self.second_hand,
            Section::New => &mut self.new,
        }
    }

    /// Iterate sections in display order.
    pub fn sections(&self) -> impl Iterator<Item = (Section, &CategorySection)> {
        Section::ALL.into_iter().map(move |s| (s, self.section(s)))
    }

    /// Insert or replace a category under `key`.
    pub fn insert(&mut self, section: Section, key: impl Into<String>, category: Category) {
        self.section_mut(section).insert(key.into(), category);
    }

    /// Copy of the catalog with only `section` populated.
    ///
    /// This is how a condition filter is applied: the filter pass itself
    /// never looks at `SearchFilters::condition`.
    pub fn narrow_to(&self, section: Section) -> Categories {
        let mut narrowed = Categories::new();
        *narrowed.section_mut(section) = self.section(section).clone();
        narrowed
    }

    /// Total number of listings across all sections.
    pub fn product_count(&self) -> usize {
        self.sections()
            .flat_map(|(_, categories)| categories.values())
            .map(Category::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.product_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Location;
    use crate::price::Price;

    fn sample() -> Categories {
        let mut catalog = Categories::new();
        catalog.insert(
            Section::Free,
            "home",
            Category::new("🏠", "Hogar").with_items(vec![Product::new(
                "5",
                "Lámpara de Mesa",
                "img",
                Location::Madrid,
            )]),
        );
        catalog.insert(
            Section::New,
            "gaming",
            Category::new("🎮", "Gaming").with_items(vec![
                Product::new("33", "PS5", "img", Location::Madrid).with_price(Price::euros(499)),
                Product::new("34", "Nintendo Switch", "img", Location::Barcelona)
                    .with_price(Price::euros(299)),
            ]),
        );
        catalog
    }

    #[test]
    fn test_section_names() {
        assert_eq!(Section::SecondHand.as_str(), "secondHand");
        assert_eq!(Section::SecondHand.api_name(), "second_hand");
        assert_eq!(Section::from_api_name("second_hand"), Some(Section::SecondHand));
        assert_eq!("second-hand".parse::<Section>(), Ok(Section::SecondHand));
        assert!("used".parse::<Section>().is_err());
        assert!(!Section::Free.shows_price());
    }

    #[test]
    fn test_product_count() {
        let catalog = sample();
        assert_eq!(catalog.product_count(), 3);
        assert!(!catalog.is_empty());
        assert!(Categories::new().is_empty());
    }

    #[test]
    fn test_narrow_to_keeps_one_section() {
        let narrowed = sample().narrow_to(Section::New);
        assert!(narrowed.free.is_empty());
        assert!(narrowed.second_hand.is_empty());
        assert_eq!(narrowed.new.len(), 1);
        assert_eq!(narrowed.product_count(), 2);
    }

    #[test]
    fn test_categories_json_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("secondHand").is_some());
        assert_eq!(json["free"]["home"]["title"], "Hogar");
        assert_eq!(json["new"]["gaming"]["items"][1]["title"], "Nintendo Switch");

        let back: Categories = serde_json::from_value(json).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut catalog = Categories::new();
        for key in ["technology", "home", "books"] {
            catalog.insert(Section::Free, key, Category::new("x", key));
        }
        let keys: Vec<&str> = catalog.free.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["technology", "home", "books"]);
    }
}
