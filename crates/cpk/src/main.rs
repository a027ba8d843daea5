//! Check Plugin Kit - Entry Point
//!
//! Runs the demo plugin. Lives in the `cpk` facade crate next to the library
//! so `cargo install cpk` ships a working plugin.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `cpk` / `cpk serve` | Serve check requests over stdin/stdout |
//! | `cpk list` | Print the plugin's rules and categories as JSON |
//! | `cpk config` | Print the effective configuration as TOML |

use anyhow::Context;
use clap::{Parser, Subcommand};
use cpk::application::{SpecRegistry, list_rules};
use cpk::infrastructure::config::loader::to_toml_string;
use cpk::rules::demo_spec;
use cpk::server::init::load_config;
use std::path::PathBuf;

/// Command line interface for the demo plugin
#[derive(Parser, Debug)]
#[command(name = "cpk")]
#[command(about = "Check Plugin Kit - demo lint and breaking-change plugin")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// What to do; serves requests when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Serve check requests over stdin/stdout
    Serve,
    /// Print rules and categories as JSON
    List,
    /// Print the effective configuration as TOML
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => cpk::run_stdio(demo_spec(), cli.config.as_deref())
            .await
            .context("plugin server failed")?,
        Command::List => {
            let registry = SpecRegistry::new(demo_spec()).context("invalid plugin spec")?;
            let listing = serde_json::to_string_pretty(&list_rules(&registry))?;
            println!("{listing}");
        }
        Command::Config => {
            let config = load_config(cli.config.as_deref())?;
            print!("{}", to_toml_string(&config)?);
        }
    }
    Ok(())
}
