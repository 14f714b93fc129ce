//! # prestige-honors
//!
//! Converts free-text award names into standardized prestige brackets and
//! aggregates a subject's awards into a bonus score.
//!
//! ## Pipeline
//! 1. [`classify_award`] maps one award name to an [`HonorTier`] via exact
//!    catalog match, substring match, then keyword fallback.
//! 2. [`aggregate_honors`] classifies a whole award list, counts each
//!    dedup category once, and decides floor protection.
//! 3. [`effective_tier`] applies floor protection to a profile's tier.
//!
//! ## Usage
//!
//! ```rust
//! use prestige_honors::{aggregate_honors, classify_award, HonorTier};
//! use prestige_types::AwardEntry;
//!
//! let nobel = classify_award("Nobel Prize in Physiology or Medicine");
//! assert_eq!(nobel.tier, HonorTier::GlobalLandmark);
//!
//! let result = aggregate_honors(&[
//!     AwardEntry::new("Lasker Award"),
//!     AwardEntry::new("Lasker-Koshland Award"),
//! ]);
//! assert_eq!(result.total_points, 100);
//! assert!(result.floor_protection);
//! ```

pub mod aggregator;
pub mod catalog;
pub mod classifier;
pub mod types;

pub use aggregator::{aggregate_honors, effective_tier, honor_floor};
pub use catalog::HONORS;
pub use classifier::{classify_award, normalize_award_name, HonorClassifier};
pub use types::{Honor, HonorBonusResult, HonorClassification, HonorTier};
