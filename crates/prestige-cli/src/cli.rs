//! CLI argument parsing.
//!
//! Flags override the config file and `PRESTIGE_*` environment variables.

use clap::{Parser, Subcommand};

/// Prestige profile index
///
/// Search, rank, and classify the honors of professional profiles.
#[derive(Parser, Debug)]
#[command(name = "prestige")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default ~/.config/prestige/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Profiles file or directory (overrides profiles_path)
    #[arg(short, long, global = true)]
    pub profiles: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Search profiles
    Search {
        /// Query text; shorter than 2 chars lists the filtered profiles
        #[arg(default_value = "")]
        query: String,

        /// Exact specialty
        #[arg(long)]
        category: Option<String>,

        /// Exact country
        #[arg(long)]
        country: Option<String>,

        /// surgeon, researcher, or physician
        #[arg(long)]
        role: Option<String>,

        /// Maximum results (default from config)
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Disable typo-tolerant matching
        #[arg(long)]
        no_fuzzy: bool,
    },

    /// Show the rank of one profile within its group
    Rank {
        /// Profile id
        id: String,
    },

    /// List the highest-ranked profiles
    Top {
        /// Restrict to one group
        #[arg(long)]
        category: Option<String>,

        /// Maximum results
        #[arg(short = 'n', long, default_value = "10")]
        limit: usize,
    },

    /// Classify award names
    Classify {
        /// Award names
        #[arg(required = true)]
        awards: Vec<String>,
    },

    /// Aggregate honor points for a list of awards
    Honors {
        /// Award names
        #[arg(required = true)]
        awards: Vec<String>,
    },
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_search_with_filters() {
        let cli = Cli::parse_from([
            "prestige", "search", "jane smith", "--country", "USA", "--role", "surgeon", "-n", "5",
            "--no-fuzzy",
        ]);
        match cli.command {
            Commands::Search {
                query,
                country,
                role,
                limit,
                no_fuzzy,
                category,
            } => {
                assert_eq!(query, "jane smith");
                assert_eq!(country.as_deref(), Some("USA"));
                assert_eq!(role.as_deref(), Some("surgeon"));
                assert_eq!(limit, Some(5));
                assert!(no_fuzzy);
                assert!(category.is_none());
            }
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_cli_search_without_query_browses() {
        let cli = Cli::parse_from(["prestige", "search", "--category", "Cardiology"]);
        match cli.command {
            Commands::Search { query, .. } => assert!(query.is_empty()),
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_cli_global_flags() {
        let cli = Cli::parse_from([
            "prestige",
            "rank",
            "jane-doe",
            "--config",
            "/etc/prestige.toml",
            "--profiles",
            "/data/profiles",
            "--log-level",
            "debug",
        ]);
        assert_eq!(cli.config.as_deref(), Some("/etc/prestige.toml"));
        assert_eq!(cli.profiles.as_deref(), Some("/data/profiles"));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert_eq!(
            cli.command,
            Commands::Rank {
                id: "jane-doe".to_string()
            }
        );
    }

    #[test]
    fn test_cli_top_default_limit() {
        let cli = Cli::parse_from(["prestige", "top"]);
        assert_eq!(
            cli.command,
            Commands::Top {
                category: None,
                limit: 10
            }
        );
    }

    #[test]
    fn test_cli_classify_requires_awards() {
        assert!(Cli::try_parse_from(["prestige", "classify"]).is_err());
        let cli = Cli::parse_from(["prestige", "honors", "Nobel Prize", "Padma Shri"]);
        match cli.command {
            Commands::Honors { awards } => assert_eq!(awards.len(), 2),
            _ => panic!("Expected Honors command"),
        }
    }
}
