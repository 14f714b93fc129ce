//! Prestige CLI library exports.
//!
//! # Modules
//!
//! - `cli`: Command-line argument parsing with clap
//! - `commands`: Command implementations producing JSON

pub mod cli;
pub mod commands;

pub use cli::{Cli, Commands};
pub use commands::{
    execute, handle_classify, handle_honors, handle_rank, handle_search, handle_top,
    init_logging, load_settings,
};
