//! Catalog filter.

use serde::{Deserialize, Serialize};

use crate::catalog::{CategoryFilter, Item};

/// Search criteria entered by the shopper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Free text, matched case-insensitively.
    pub query: String,
    /// Category tab.
    pub category: CategoryFilter,
}

impl FilterState {
    pub fn new(query: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            query: query.into(),
            category,
        }
    }

    /// Replace the query. Returns true if it changed.
    pub fn set_query(&mut self, query: impl Into<String>) -> bool {
        let query = query.into();
        if self.query == query {
            return false;
        }
        self.query = query;
        true
    }

    /// Replace the category. Returns true if it changed.
    pub fn set_category(&mut self, category: CategoryFilter) -> bool {
        if self.category == category {
            return false;
        }
        self.category = category;
        true
    }

    /// Whether any criterion narrows the catalog.
    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.category != CategoryFilter::All
    }

    /// Apply these criteria to a list of items.
    pub fn apply<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        filter(items, &self.query, self.category)
    }
}

/// Select the items matching `query` and `category`, keeping their order.
///
/// An empty result is a normal outcome.
pub fn filter<'a>(items: &'a [Item], query: &str, category: CategoryFilter) -> Vec<&'a Item> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| category.matches(item.category) && matches_text(item, &needle))
        .collect()
}

/// Check a single item against the criteria.
pub fn matches(item: &Item, query: &str, category: CategoryFilter) -> bool {
    category.matches(item.category) && matches_text(item, &query.to_lowercase())
}

/// `needle` must already be lower-cased.
fn matches_text(item: &Item, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let hit = |s: &str| s.to_lowercase().contains(needle);
    hit(&item.name) || hit(&item.description) || item.ingredients.iter().any(|i| hit(i))
}
