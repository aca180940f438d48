//! CLI command implementations.

pub mod browse;
pub mod config;
pub mod list;
pub mod order;

use clap::{Args, Subcommand};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Search text (name, description, ingredients).
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Category: all, salgado, doce or bebida.
    #[arg(short, long, default_value = "all")]
    pub category: String,
}

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Initial search text.
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Initial category.
    #[arg(short, long, default_value = "all")]
    pub category: String,
}

/// Arguments for the order command.
#[derive(Args)]
pub struct OrderArgs {
    /// Item ids to add; repeat an id to add it again.
    #[arg(required = true)]
    pub items: Vec<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// File to create; a `.json` name writes JSON.
        #[arg(default_value = "forno.toml")]
        path: String,

        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
