//! Favorited listings.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::catalog::Categories;
use crate::ids::ProductId;
use crate::search::find_product;

/// Product ids the user has favorited, in the order they were added.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Favorites {
    ids: IndexSet<ProductId>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the favorite state of `id`, returning the new state.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        if self.ids.shift_remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductId> {
        self.ids.iter()
    }

    /// Drop ids that no longer exist in `catalog`. Returns how many went.
    pub fn retain_known(&mut self, catalog: &Categories) -> usize {
        let before = self.ids.len();
        self.ids.retain(|id| find_product(catalog, id).is_some());
        before - self.ids.len()
    }
}

impl FromIterator<ProductId> for Favorites {
    fn from_iter<I: IntoIterator<Item = ProductId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
