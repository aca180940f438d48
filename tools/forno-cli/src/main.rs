//! Forno CLI - browse the menu and build orders from the terminal.
//!
//! Commands:
//! - `forno list` - List menu items matching a search
//! - `forno browse` - Browse the menu one item at a time and fill a cart
//! - `forno order` - Build an order request from item ids
//! - `forno config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BrowseArgs, ConfigArgs, ListArgs, OrderArgs};

/// Forno CLI - Browse the menu and build orders
#[derive(Parser)]
#[command(name = "forno")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List menu items
    List(ListArgs),

    /// Browse the menu interactively
    Browse(BrowseArgs),

    /// Build an order from item ids
    Order(OrderArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    init_logging(&ctx);

    // Execute command
    let result = match cli.command {
        Commands::List(args) => commands::list::run(args, &ctx),
        Commands::Browse(args) => commands::browse::run(args, &ctx),
        Commands::Order(args) => commands::order::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Log to stderr. `RUST_LOG` wins over the configured level.
fn init_logging(ctx: &context::Context) {
    let default_level = if ctx.output.is_verbose() {
        "debug"
    } else {
        ctx.config.logging.level.as_str()
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
