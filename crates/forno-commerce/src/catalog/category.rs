//! Menu categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CommerceError;

/// A menu category. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Savory pizzas.
    Salgado,
    /// Sweet pizzas.
    Doce,
    /// Drinks.
    Bebida,
}

impl Category {
    /// Every category, in menu tab order.
    pub const ALL: [Category; 3] = [Category::Salgado, Category::Doce, Category::Bebida];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Salgado => "salgado",
            Category::Doce => "doce",
            Category::Bebida => "bebida",
        }
    }

    /// Tab label shown by the storefront.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Salgado => "Salgados",
            Category::Doce => "Doces",
            Category::Bebida => "Bebidas",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "salgado" => Ok(Category::Salgado),
            "doce" => Ok(Category::Doce),
            "bebida" => Ok(Category::Bebida),
            _ => Err(CommerceError::UnknownCategory(s.to_string())),
        }
    }
}

/// Category selection for the catalog filter: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Every selectable filter, "all" first.
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }

    /// Check whether a category passes this filter.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(c) => c.as_str(),
        }
    }

    /// Tab label shown by the storefront.
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "Todos",
            CategoryFilter::Only(c) => c.label(),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CategoryFilter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!("doce".parse::<Category>().unwrap(), Category::Doce);
        assert_eq!("Bebida".parse::<Category>().unwrap(), Category::Bebida);
        assert!(matches!(
            "pizza".parse::<Category>(),
            Err(CommerceError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "salgado".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Salgado)
        );
    }

    #[test]
    fn test_category_filter_matches() {
        assert!(CategoryFilter::All.matches(Category::Doce));
        assert!(CategoryFilter::Only(Category::Doce).matches(Category::Doce));
        assert!(!CategoryFilter::Only(Category::Doce).matches(Category::Salgado));
    }

    #[test]
    fn test_category_filter_serde() {
        let json = serde_json::to_string(&CategoryFilter::Only(Category::Bebida)).unwrap();
        assert_eq!(json, "\"bebida\"");
        let back: CategoryFilter = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(back, CategoryFilter::All);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<_> = CategoryFilter::options().map(|f| f.label()).collect();
        assert_eq!(labels, ["Todos", "Salgados", "Doces", "Bebidas"]);
    }
}
