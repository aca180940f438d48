//! CLI configuration.

use anyhow::{Context, Result};
use forno_commerce::PriceFormat;
use serde::{Deserialize, Serialize};

/// File names searched for, in order, from the working directory upward.
pub const CONFIG_NAMES: [&str; 3] = ["forno.toml", ".forno.toml", "forno.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where the menu comes from.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Currency display format.
    #[serde(default)]
    pub pricing: PriceFormat,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }
}

/// Catalog source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog file (TOML or JSON). The bundled menu is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

/// Generate a default forno.toml config file.
pub fn generate_default_config() -> String {
    r#"# Forno storefront configuration

[catalog]
# path = "menu.toml"

[pricing]
prefix = "R$"
decimal_separator = ","
thousands_separator = "."

[logging]
level = "warn"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config: CliConfig = toml::from_str(
            r#"
[catalog]
path = "cardapio.json"

[pricing]
prefix = "$"
"#,
        )
        .unwrap();
        assert_eq!(config.catalog.path.as_deref(), Some("cardapio.json"));
        assert_eq!(config.pricing.prefix, "$");
        assert_eq!(config.pricing.decimal_separator, ',');
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_config_serializes_back() {
        let config = CliConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let back: CliConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
