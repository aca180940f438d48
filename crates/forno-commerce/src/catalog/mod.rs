//! Catalog module.
//!
//! The catalog is the immutable, ordered list of menu items supplied by
//! an external provider (a file, a service). The storefront only reads it.

mod category;
mod item;

pub use category::{Category, CategoryFilter};
pub use item::Item;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::error::CommerceError;
use crate::ids::ItemId;

/// Serialized catalog document: a top-level `items` array.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub items: Vec<Item>,
}

/// An immutable, ordered set of menu items with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(into = "CatalogDocument")]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate item ids.
    pub fn new(items: Vec<Item>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(CommerceError::DuplicateItemId(item.id.to_string()));
            }
        }
        Ok(Self { items })
    }

    /// Parse a TOML catalog (`[[items]]` tables).
    pub fn from_toml_str(s: &str) -> Result<Self, CommerceError> {
        let doc: CatalogDocument = toml::from_str(s)?;
        Self::new(doc.items)
    }

    /// Parse a JSON catalog (`{"items": [...]}`).
    pub fn from_json_str(s: &str) -> Result<Self, CommerceError> {
        let doc: CatalogDocument =
            serde_json::from_str(s).map_err(|e| CommerceError::CatalogParse(e.to_string()))?;
        Self::new(doc.items)
    }

    /// Items in catalog order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Look up an item by id.
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|i| &i.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items per category. Categories with no items are omitted.
    pub fn count_by_category(&self) -> BTreeMap<Category, usize> {
        let mut counts = BTreeMap::new();
        for item in &self.items {
            *counts.entry(item.category).or_insert(0) += 1;
        }
        counts
    }
}

impl From<Catalog> for CatalogDocument {
    fn from(catalog: Catalog) -> Self {
        CatalogDocument {
            items: catalog.items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MENU_TOML: &str = r##"
[[items]]
id = "margherita"
name = "Margherita"
description = "Molho de tomate e mozzarella"
category = "salgado"
ingredients = ["Tomate San Marzano", "Mozzarella di Bufala"]
price = "R$ 49,90"
image = "/images/pizza-margherita.png"

[items.theme]
accent = "#d4442a"

[[items]]
id = "chocolate"
name = "Chocolate"
description = "Chocolate ao leite derretido"
category = "doce"
price = "R$ 44,90"
"##;

    #[test]
    fn test_catalog_from_toml() {
        let catalog = Catalog::from_toml_str(MENU_TOML).unwrap();
        assert_eq!(catalog.len(), 2);
        let margherita = catalog.get(&ItemId::new("margherita")).unwrap();
        assert_eq!(margherita.ingredients.len(), 2);
        assert_eq!(margherita.theme["accent"], "#d4442a");
        assert!(catalog.get(&ItemId::new("chocolate")).unwrap().ingredients.is_empty());
    }

    #[test]
    fn test_catalog_from_json() {
        let json = r#"{"items":[{"id":"agua","name":"Agua","description":"Sem gas",
            "category":"bebida","price":"R$ 5,00"}]}"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.items()[0].category, Category::Bebida);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let items = vec![
            Item::new("a", "A", "", Category::Doce, "R$ 1,00"),
            Item::new("a", "A again", "", Category::Doce, "R$ 2,00"),
        ];
        assert_eq!(
            Catalog::new(items),
            Err(CommerceError::DuplicateItemId("a".to_string()))
        );
    }

    #[test]
    fn test_unknown_category_is_parse_error() {
        let toml = r#"
[[items]]
id = "x"
name = "X"
description = ""
category = "pizza"
price = "R$ 1,00"
"#;
        assert!(matches!(
            Catalog::from_toml_str(toml),
            Err(CommerceError::CatalogParse(_))
        ));
    }

    #[test]
    fn test_count_by_category() {
        let catalog = Catalog::from_toml_str(MENU_TOML).unwrap();
        let counts = catalog.count_by_category();
        assert_eq!(counts.get(&Category::Salgado), Some(&1));
        assert_eq!(counts.get(&Category::Bebida), None);
    }

    #[test]
    fn test_catalog_serializes_as_document() {
        let catalog = Catalog::from_toml_str(MENU_TOML).unwrap();
        let json = serde_json::to_value(&catalog).unwrap();
        assert_eq!(json["items"][1]["id"], "chocolate");
        assert_eq!(Catalog::from_json_str(&json.to_string()).unwrap(), catalog);
    }
}
