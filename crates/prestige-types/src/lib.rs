//! # prestige-types
//!
//! Shared domain types for the prestige ranking workspace.
//!
//! This crate defines the data every other crate agrees on:
//! - Profiles: flat records as supplied by the content source
//! - Tiers: the prestige bracket assigned to each profile
//! - Roles: derived practitioner roles used by search filters
//! - Settings: layered configuration
//!
//! ## Usage
//!
//! ```rust
//! use prestige_types::{PrestigeTier, ProfileRecord};
//!
//! let record = ProfileRecord::new("jane-doe", "Jane Doe", "Cardiology")
//!     .with_tier(PrestigeTier::Elite)
//!     .with_h_index(42);
//! assert_eq!(record.tier.search_bonus(), 10.0);
//! ```

pub mod config;
pub mod error;
pub mod profile;
pub mod tier;

pub use config::{GroupBy, RankingConfig, SearchConfig, Settings};
pub use error::PrestigeError;
pub use profile::{Affiliation, AwardEntry, Geography, ProfileRecord};
pub use tier::{PrestigeTier, Role};
