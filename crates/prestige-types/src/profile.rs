//! Profile records as supplied by the content source.
//!
//! Records are deserialized from camelCase JSON documents. Every field the
//! source may omit is modeled as `Option` or defaulted, so a sparse document
//! still yields a usable record.

use serde::{Deserialize, Serialize};

use crate::tier::PrestigeTier;

/// Location of a profile's primary practice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Geography {
    /// Country name
    #[serde(default)]
    pub country: String,

    /// City name, when known
    #[serde(default)]
    pub city: Option<String>,
}

/// Institutional affiliation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Affiliation {
    /// Institution name
    pub institution: String,

    /// Role held at the institution (e.g. "Research Scientist")
    #[serde(default)]
    pub role: Option<String>,
}

/// One award as listed on a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardEntry {
    /// Free-text award name
    pub name: String,

    /// Year received
    #[serde(default)]
    pub year: Option<i32>,

    /// Awarding organization
    #[serde(default)]
    pub issuing_body: Option<String>,
}

impl AwardEntry {
    /// Create an award entry with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            year: None,
            issuing_body: None,
        }
    }

    /// Set the year.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }
}

/// A professional profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    /// Stable identifier (slug)
    pub id: String,

    /// Display name
    pub full_name: String,

    /// Primary specialty
    #[serde(default)]
    pub specialty: String,

    /// Optional sub-specialty
    #[serde(default)]
    pub sub_specialty: Option<String>,

    /// Academic or professional title (e.g. "MD, PhD")
    #[serde(default)]
    pub title: Option<String>,

    /// Assigned prestige tier
    #[serde(default, deserialize_with = "crate::tier::deserialize_lenient")]
    pub tier: PrestigeTier,

    /// Seniority metric
    #[serde(default)]
    pub h_index: Option<u32>,

    /// Precomputed composite ranking score
    #[serde(default)]
    pub ranking_score: Option<f64>,

    /// Practice location
    #[serde(default)]
    pub geography: Geography,

    /// Institutional affiliations
    #[serde(default)]
    pub affiliations: Vec<Affiliation>,

    /// Listed awards
    #[serde(default)]
    pub awards: Vec<AwardEntry>,

    /// Portrait image URL
    #[serde(default)]
    pub portrait_url: Option<String>,
}

impl ProfileRecord {
    /// Create a minimal record.
    pub fn new(
        id: impl Into<String>,
        full_name: impl Into<String>,
        specialty: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            specialty: specialty.into(),
            sub_specialty: None,
            title: None,
            tier: PrestigeTier::Unranked,
            h_index: None,
            ranking_score: None,
            geography: Geography::default(),
            affiliations: Vec::new(),
            awards: Vec::new(),
            portrait_url: None,
        }
    }

    /// Set the tier.
    pub fn with_tier(mut self, tier: PrestigeTier) -> Self {
        self.tier = tier;
        self
    }

    /// Set the h-index.
    pub fn with_h_index(mut self, h_index: u32) -> Self {
        self.h_index = Some(h_index);
        self
    }

    /// Set the composite ranking score.
    pub fn with_ranking_score(mut self, score: f64) -> Self {
        self.ranking_score = Some(score);
        self
    }

    /// Set the practice location.
    pub fn with_location(mut self, city: Option<&str>, country: impl Into<String>) -> Self {
        self.geography = Geography {
            country: country.into(),
            city: city.map(str::to_string),
        };
        self
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the sub-specialty.
    pub fn with_sub_specialty(mut self, sub_specialty: impl Into<String>) -> Self {
        self.sub_specialty = Some(sub_specialty.into());
        self
    }

    /// Add an affiliation.
    pub fn with_affiliation(mut self, institution: &str, role: Option<&str>) -> Self {
        self.affiliations.push(Affiliation {
            institution: institution.to_string(),
            role: role.map(str::to_string),
        });
        self
    }

    /// Add an award.
    pub fn with_award(mut self, award: AwardEntry) -> Self {
        self.awards.push(award);
        self
    }

    /// Seniority metric, zero when absent.
    pub fn seniority(&self) -> u32 {
        self.h_index.unwrap_or(0)
    }
}
