//! Product catalog module.
//!
//! Contains types for products, locations, categories, and the three
//! listing sections.

mod category;
mod product;

pub use category::{Categories, Category, CategorySection, Section};
pub use product::{Location, Product};
