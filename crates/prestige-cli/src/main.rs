//! Prestige profile index CLI
//!
//! # Usage
//!
//! ```bash
//! prestige search "jane smith" [--category C] [--country C] [--role R] [-n N] [--no-fuzzy]
//! prestige rank <id>
//! prestige top [--category C] [-n N]
//! prestige classify <award>...
//! prestige honors <award>...
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded in order (later sources override earlier):
//! 1. Built-in defaults
//! 2. Config file (~/.config/prestige/config.toml)
//! 3. Environment variables (PRESTIGE_*)
//! 4. CLI flags

use anyhow::{Context, Result};

use prestige_cli::{execute, init_logging, load_settings, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    let settings = load_settings(
        cli.config.as_deref(),
        cli.profiles.as_deref(),
        cli.log_level.as_deref(),
    )?;
    init_logging(&settings.log_level)?;

    let output = execute(&settings, cli.command).await?;
    let rendered = serde_json::to_string_pretty(&output).context("Failed to render output")?;
    println!("{}", rendered);
    Ok(())
}
