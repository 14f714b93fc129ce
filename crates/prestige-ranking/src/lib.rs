//! # prestige-ranking
//!
//! "#N in category" ranks for profiles.
//!
//! Profiles are grouped by specialty (or by one of the broad
//! [`specialty_groups`]), sorted by score with a stable sort, and numbered
//! from 1 within each group. [`RankingEngine`] serves the table from the
//! last loaded snapshot and can refresh it from a
//! [`prestige_search::ProfileSource`].

pub mod engine;
pub mod error;
pub mod specialty_groups;

pub use engine::{
    default_score, rank, score_with_honors, sort_for_display, Grouping, RankInfo, RankTable,
    RankingEngine, DEFAULT_TOP_LIMIT,
};
pub use error::RankingError;
pub use specialty_groups::{
    group_name, specialty_group, SpecialtyGroup, OTHER_SPECIALTIES, SPECIALTY_GROUPS,
};
