//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use forno_commerce::catalog::Catalog;
use forno_commerce::PriceParser;

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;

/// Menu bundled with the binary.
const BUILTIN_MENU: &str = include_str!("../data/menu.toml");

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        Self::load_in(cwd, config_path, output)
    }

    /// Load context as if run from `cwd`.
    fn load_in(cwd: PathBuf, config_path: Option<&str>, output: Output) -> Result<Self> {
        let (config, config_path) = if let Some(path) = config_path {
            let path = resolve_against(&cwd, path);
            (CliConfig::load(&path.to_string_lossy())?, Some(path))
        } else {
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Price parser for the configured currency format.
    pub fn parser(&self) -> PriceParser {
        PriceParser::new(self.config.pricing.clone())
    }

    /// Load the configured catalog, or the bundled menu.
    ///
    /// Prices that do not parse are reported; they count as zero in totals.
    pub fn load_catalog(&self) -> Result<Arc<Catalog>> {
        let catalog = match &self.config.catalog.path {
            Some(path) => {
                let path = resolve_against(self.config_dir(), path);
                let content = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
                let parsed = if path.extension().is_some_and(|ext| ext == "json") {
                    Catalog::from_json_str(&content)
                } else {
                    Catalog::from_toml_str(&content)
                };
                parsed.with_context(|| format!("Invalid catalog: {}", path.display()))?
            }
            None => Catalog::from_toml_str(BUILTIN_MENU).context("Invalid bundled menu")?,
        };

        let parser = self.parser();
        for item in catalog.items() {
            if let Err(e) = parser.try_parse(&item.price) {
                self.output
                    .warn(&format!("{}: {} (counted as zero)", item.id, e));
            }
        }

        tracing::debug!(items = catalog.len(), "catalog loaded");
        Ok(Arc::new(catalog))
    }

    /// Directory that relative paths in the config are taken from: the
    /// config file's own directory, or the working directory without one.
    pub fn config_dir(&self) -> &Path {
        self.config_path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(self.cwd.as_path())
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve_against(&self.cwd, path)
    }
}

fn resolve_against(base: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_ITEM_MENU: &str = r#"
[[items]]
id = "agua"
name = "Agua"
description = "Sem gas"
category = "bebida"
price = "R$ 5,00"
"#;

    fn quiet() -> Output {
        Output::new(false, true)
    }

    #[test]
    fn test_catalog_path_is_relative_to_discovered_config() {
        let root = tempfile::tempdir().unwrap();
        let sub = root.path().join("sub");
        std::fs::create_dir(&sub).unwrap();
        std::fs::write(root.path().join("forno.toml"), "[catalog]\npath = \"menu.toml\"\n").unwrap();
        std::fs::write(root.path().join("menu.toml"), ONE_ITEM_MENU).unwrap();

        let ctx = Context::load_in(sub.clone(), None, quiet()).unwrap();
        assert_eq!(ctx.config_path, Some(root.path().join("forno.toml")));
        assert_eq!(ctx.config_dir(), root.path());

        let catalog = ctx.load_catalog().unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.items()[0].id.as_str(), "agua");
    }

    #[test]
    fn test_explicit_config_path_is_relative_to_cwd() {
        let root = tempfile::tempdir().unwrap();
        let conf = root.path().join("conf");
        std::fs::create_dir(&conf).unwrap();
        std::fs::write(conf.join("forno.toml"), "[catalog]\npath = \"menu.toml\"\n").unwrap();
        std::fs::write(conf.join("menu.toml"), ONE_ITEM_MENU).unwrap();

        let ctx = Context::load_in(root.path().to_path_buf(), Some("conf/forno.toml"), quiet()).unwrap();
        assert_eq!(ctx.config_dir(), conf.as_path());
        assert_eq!(ctx.load_catalog().unwrap().len(), 1);
    }

    #[test]
    fn test_no_config_uses_bundled_menu() {
        let root = tempfile::tempdir().unwrap();
        let ctx = Context::load_in(root.path().to_path_buf(), None, quiet()).unwrap();
        assert_eq!(ctx.config_dir(), root.path());
        assert_eq!(ctx.load_catalog().unwrap().len(), 6);
    }

    #[test]
    fn test_builtin_menu_is_valid() {
        let catalog = Catalog::from_toml_str(BUILTIN_MENU).unwrap();
        assert_eq!(catalog.len(), 6);

        let parser = PriceParser::default();
        for item in catalog.items() {
            assert!(parser.try_parse(&item.price).is_ok(), "{}", item.id);
        }
    }
}
