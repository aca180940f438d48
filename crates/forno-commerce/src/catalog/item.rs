//! Catalog item type.

use serde::{Deserialize, Serialize};

use crate::catalog::Category;
use crate::ids::ItemId;

/// A purchasable menu item.
///
/// Items are owned by the catalog and never mutated by the storefront.
/// `subtitle`, `badge`, `image` and `theme` are display data the core
/// passes through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Stable unique identifier.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Tagline shown under the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Long description, searched by the filter.
    pub description: String,
    /// Menu category.
    pub category: Category,
    /// Ingredients in display order, searched by the filter.
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Localized price string, e.g. `"R$ 49,90"`.
    pub price: String,
    /// Short badge text, e.g. "Classica".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    /// Image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Theme colors and other presentation attributes.
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub theme: serde_json::Map<String, serde_json::Value>,
}

impl Item {
    /// Create an item with the fields the core reads; display data left empty.
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        price: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            subtitle: None,
            description: description.into(),
            category,
            ingredients: Vec::new(),
            price: price.into(),
            badge: None,
            image: None,
            theme: serde_json::Map::new(),
        }
    }

    /// Builder-style ingredient list.
    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }
}
