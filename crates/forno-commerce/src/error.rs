//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in menu and cart operations.
///
/// Conditions the storefront treats as normal control flow (unknown item
/// ids, non-positive quantities, out-of-range navigation, empty search
/// results) are reported through return values, never through this type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Price string does not match the configured currency format.
    #[error("Malformed price: {0:?}")]
    MalformedPrice(String),

    /// Category tag outside the closed set.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Two catalog items share the same id.
    #[error("Duplicate item id in catalog: {0}")]
    DuplicateItemId(String),

    /// Attempted to finalize an order with no items.
    #[error("Cannot finalize an empty cart")]
    EmptyCart,

    /// Catalog document could not be parsed.
    #[error("Catalog parse error: {0}")]
    CatalogParse(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::CatalogParse(e.to_string())
    }
}
