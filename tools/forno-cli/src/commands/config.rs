//! Configuration management commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { path, force } => init_config(&path, force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("[catalog]");
    ctx.output.kv(
        "path",
        ctx.config.catalog.path.as_deref().unwrap_or("(bundled menu)"),
    );

    ctx.output.info("[pricing]");
    let pricing = &ctx.config.pricing;
    ctx.output.kv("prefix", &pricing.prefix);
    ctx.output
        .kv("decimal_separator", &pricing.decimal_separator.to_string());
    ctx.output.kv(
        "thousands_separator",
        &pricing
            .thousands_separator
            .map(|c| c.to_string())
            .unwrap_or_else(|| "(none)".to_string()),
    );
    ctx.output.kv("example", &ctx.parser().format_amount(1234.5));

    ctx.output.info("[logging]");
    ctx.output.kv("level", &ctx.config.logging.level);

    Ok(())
}

fn init_config(path: &str, force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.resolve_path(path);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    if path.ends_with(".json") {
        CliConfig::default().save(&config_path.to_string_lossy())?;
    } else {
        std::fs::write(&config_path, generate_default_config())?;
    }
    ctx.output
        .success(&format!("Created: {}", config_path.display()));

    Ok(())
}
