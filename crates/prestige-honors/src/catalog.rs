//! Static honors catalog.
//!
//! Entries are matched in declaration order, so longer, more specific names
//! come before the generic names they contain (e.g. "Nobel Prize in
//! Physiology or Medicine" before "Nobel Prize"). Variants of the same award
//! share a `category` and are counted once per subject.

use crate::types::{Honor, HonorTier};

impl Honor {
    /// Catalog entry constructor.
    pub const fn new(
        name: &'static str,
        tier: HonorTier,
        category: &'static str,
        country: Option<&'static str>,
    ) -> Self {
        Self {
            name,
            tier,
            category,
            country,
        }
    }
}

/// The honors catalog.
#[rustfmt::skip]
pub static HONORS: &[Honor] = &[
    // Global landmarks. Specific variants precede generic names.
    Honor::new("Nobel Prize in Physiology or Medicine", HonorTier::GlobalLandmark, "Nobel", None),
    Honor::new("Nobel Prize", HonorTier::GlobalLandmark, "Nobel", None),
    Honor::new("Lasker Award", HonorTier::GlobalLandmark, "Lasker", None),
    Honor::new("Lasker Award for Basic Medical Research", HonorTier::GlobalLandmark, "Lasker", None),
    Honor::new("Lasker Award for Clinical Medical Research", HonorTier::GlobalLandmark, "Lasker", None),
    Honor::new("Lasker Award for Public Service", HonorTier::GlobalLandmark, "Lasker", None),
    Honor::new("Lasker-DeBakey Clinical Medical Research Award", HonorTier::GlobalLandmark, "Lasker", None),
    Honor::new("Lasker-Koshland Award", HonorTier::GlobalLandmark, "Lasker", None),
    Honor::new("Wolf Prize in Medicine", HonorTier::GlobalLandmark, "Wolf", None),
    Honor::new("Wolf Prize", HonorTier::GlobalLandmark, "Wolf", None),
    Honor::new("Canada Gairdner International Award", HonorTier::GlobalLandmark, "Gairdner", None),
    Honor::new("Gairdner International Award", HonorTier::GlobalLandmark, "Gairdner", None),
    Honor::new("Gairdner Foundation International Award", HonorTier::GlobalLandmark, "Gairdner", None),
    Honor::new("Breakthrough Prize in Life Sciences", HonorTier::GlobalLandmark, "Breakthrough", None),
    Honor::new("Tang Prize in Biopharmaceutical Science", HonorTier::GlobalLandmark, "Tang", None),
    Honor::new("Japan Prize", HonorTier::GlobalLandmark, "Japan", None),
    Honor::new("Harvey Prize", HonorTier::GlobalLandmark, "Harvey", None),
    Honor::new("Robert Koch Gold Medal", HonorTier::GlobalLandmark, "Koch", None),
    Honor::new("Louisa Gross Horwitz Prize", HonorTier::GlobalLandmark, "Horwitz", None),

    // National honors
    Honor::new("Padma Vibhushan", HonorTier::NationalHonor, "Padma", Some("India")),
    Honor::new("Padma Bhushan", HonorTier::NationalHonor, "Padma", Some("India")),
    Honor::new("Padma Shri", HonorTier::NationalHonor, "Padma", Some("India")),
    Honor::new("Bharat Ratna", HonorTier::NationalHonor, "Padma", Some("India")),
    Honor::new("Presidential Medal of Freedom", HonorTier::NationalHonor, "Presidential", Some("USA")),
    Honor::new("National Medal of Science", HonorTier::NationalHonor, "Presidential", Some("USA")),
    Honor::new("National Medal of Technology and Innovation", HonorTier::NationalHonor, "Presidential", Some("USA")),
    Honor::new("Congressional Gold Medal", HonorTier::NationalHonor, "Congressional", Some("USA")),
    Honor::new("Knighthood", HonorTier::NationalHonor, "Royal", Some("UK")),
    Honor::new("Knight Bachelor", HonorTier::NationalHonor, "Royal", Some("UK")),
    Honor::new("Order of the British Empire", HonorTier::NationalHonor, "Royal", Some("UK")),
    Honor::new("OBE", HonorTier::NationalHonor, "Royal", Some("UK")),
    Honor::new("CBE", HonorTier::NationalHonor, "Royal", Some("UK")),
    Honor::new("KBE", HonorTier::NationalHonor, "Royal", Some("UK")),
    Honor::new("Order of Merit", HonorTier::NationalHonor, "Royal", Some("UK")),
    Honor::new("Fellow of the Royal Society", HonorTier::NationalHonor, "FRS", Some("UK")),
    Honor::new("Légion d'honneur", HonorTier::NationalHonor, "Legion", Some("France")),
    Honor::new("Legion of Honour", HonorTier::NationalHonor, "Legion", Some("France")),
    Honor::new("Légion of Honor", HonorTier::NationalHonor, "Legion", Some("France")),
    Honor::new("Order of Merit of the Federal Republic of Germany", HonorTier::NationalHonor, "Merit", Some("Germany")),
    Honor::new("Pour le Mérite", HonorTier::NationalHonor, "Merit", Some("Germany")),
    Honor::new("Order of Culture", HonorTier::NationalHonor, "Imperial", Some("Japan")),
    Honor::new("Order of the Rising Sun", HonorTier::NationalHonor, "Imperial", Some("Japan")),

    // Professional excellence
    Honor::new("Dr. B.C. Roy Award", HonorTier::ProfessionalExcellence, "Medical", Some("India")),
    Honor::new("B.C. Roy Award", HonorTier::ProfessionalExcellence, "Medical", Some("India")),
    Honor::new("Dhanvantari Award", HonorTier::ProfessionalExcellence, "Medical", Some("India")),
    Honor::new("AMA Medal of Valor", HonorTier::ProfessionalExcellence, "AMA", Some("USA")),
    Honor::new("AMA Distinguished Service Award", HonorTier::ProfessionalExcellence, "AMA", Some("USA")),
    Honor::new("Pulitzer Prize", HonorTier::ProfessionalExcellence, "Pulitzer", Some("USA")),
    Honor::new("MacArthur Fellowship", HonorTier::ProfessionalExcellence, "MacArthur", Some("USA")),
    Honor::new("Dan David Prize", HonorTier::ProfessionalExcellence, "DanDavid", None),
    Honor::new("Hunterian Professorship", HonorTier::ProfessionalExcellence, "RCS", Some("UK")),
    Honor::new("Lister Medal", HonorTier::ProfessionalExcellence, "Lister", Some("UK")),
    Honor::new("Cameron Prize", HonorTier::ProfessionalExcellence, "Edinburgh", Some("UK")),
    Honor::new("Prix Galien", HonorTier::ProfessionalExcellence, "Galien", Some("France")),
    Honor::new("Copley Medal", HonorTier::ProfessionalExcellence, "RoyalSociety", None),
    Honor::new("King Faisal International Prize", HonorTier::ProfessionalExcellence, "International", None),
    Honor::new("Prince Mahidol Award", HonorTier::ProfessionalExcellence, "International", None),

    // Research prizes and specialty society awards
    Honor::new("Shaw Prize in Life Science and Medicine", HonorTier::GlobalLandmark, "Shaw", None),
    Honor::new("Shaw Prize", HonorTier::GlobalLandmark, "Shaw", None),
    Honor::new("Albany Medical Center Prize", HonorTier::GlobalLandmark, "Albany", None),
    Honor::new("Kavli Prize in Neuroscience", HonorTier::GlobalLandmark, "Kavli", None),
    Honor::new("Warren Alpert Foundation Prize", HonorTier::GlobalLandmark, "WarrenAlpert", None),
    Honor::new("Dr. Paul Janssen Award", HonorTier::GlobalLandmark, "Janssen", None),
    Honor::new("Michael E. DeBakey Award", HonorTier::ProfessionalExcellence, "Surgery", None),
    Honor::new("Jacobson Innovation Award", HonorTier::ProfessionalExcellence, "Surgery", None),
    Honor::new("American College of Surgeons Distinguished Service Award", HonorTier::ProfessionalExcellence, "Surgery", None),
    Honor::new("Bigelow Medal", HonorTier::ProfessionalExcellence, "Surgery", None),
    Honor::new("Gold Heart Award", HonorTier::ProfessionalExcellence, "Cardiology", None),
    Honor::new("Distinguished Scientist Award - AHA", HonorTier::ProfessionalExcellence, "Cardiology", None),
    Honor::new("Research Achievement Award - ACC", HonorTier::ProfessionalExcellence, "Cardiology", None),
    Honor::new("Andreas Gruentzig Proctor", HonorTier::ProfessionalExcellence, "Cardiology", None),
    Honor::new("AACR Award for Outstanding Achievement in Cancer Research", HonorTier::ProfessionalExcellence, "Oncology", None),
    Honor::new("ASCO Distinguished Achievement Award", HonorTier::ProfessionalExcellence, "Oncology", None),
    Honor::new("Karnofsky Memorial Award", HonorTier::ProfessionalExcellence, "Oncology", None),
    Honor::new("Bruce F. Cain Memorial Award", HonorTier::ProfessionalExcellence, "Oncology", None),
    Honor::new("Potamkin Prize", HonorTier::ProfessionalExcellence, "Neurology", None),
    Honor::new("Cushing Medal", HonorTier::ProfessionalExcellence, "Neurosurgery", None),
    Honor::new("Grass Foundation Award", HonorTier::ProfessionalExcellence, "Neuroscience", None),
    Honor::new("Brain Prize", HonorTier::GlobalLandmark, "Neuroscience", None),
    Honor::new("Howland Award", HonorTier::ProfessionalExcellence, "Pediatrics", None),
    Honor::new("Pollin Prize", HonorTier::ProfessionalExcellence, "Pediatrics", None),
    Honor::new("Bristol-Myers Squibb Award for Distinguished Achievement", HonorTier::ProfessionalExcellence, "InfectiousDisease", None),
    Honor::new("Maxwell Finland Award", HonorTier::ProfessionalExcellence, "InfectiousDisease", None),
    Honor::new("Gates Award for Global Health", HonorTier::GlobalLandmark, "GlobalHealth", None),
    Honor::new("Jimmy and Rosalynn Carter Humanitarian Award", HonorTier::NationalHonor, "Humanitarian", None),
    Honor::new("Friedenwald Award", HonorTier::ProfessionalExcellence, "Ophthalmology", None),
    Honor::new("Pisart Vision Award", HonorTier::ProfessionalExcellence, "Ophthalmology", None),
    Honor::new("Antonio Champalimaud Vision Award", HonorTier::GlobalLandmark, "Ophthalmology", None),
    Honor::new("Kappa Delta Award", HonorTier::ProfessionalExcellence, "Orthopedics", None),
    Honor::new("Nicolas Andry Award", HonorTier::ProfessionalExcellence, "Orthopedics", None),
    Honor::new("Medawar Prize", HonorTier::ProfessionalExcellence, "Transplant", None),
    Honor::new("Starzl Prize", HonorTier::ProfessionalExcellence, "Transplant", None),
    Honor::new("Gruber Prize in Genetics", HonorTier::GlobalLandmark, "Genetics", None),
    Honor::new("March of Dimes Prize in Developmental Biology", HonorTier::ProfessionalExcellence, "Genetics", None),
    Honor::new("Gold Medal - RSNA", HonorTier::ProfessionalExcellence, "Radiology", None),
    Honor::new("Gold Medal - ACR", HonorTier::ProfessionalExcellence, "Radiology", None),

    // National orders and academies
    Honor::new("Order of Canada", HonorTier::NationalHonor, "OrderCanada", Some("Canada")),
    Honor::new("Companion of the Order of Canada", HonorTier::NationalHonor, "OrderCanada", Some("Canada")),
    Honor::new("Order of Australia", HonorTier::NationalHonor, "OrderAustralia", Some("Australia")),
    Honor::new("Companion of the Order of Australia", HonorTier::NationalHonor, "OrderAustralia", Some("Australia")),
    Honor::new("Australia Prize", HonorTier::NationalHonor, "AustraliaPrize", Some("Australia")),
    Honor::new("President's Science and Technology Award", HonorTier::NationalHonor, "Singapore", Some("Singapore")),
    Honor::new("Ho-Am Prize in Medicine", HonorTier::NationalHonor, "HoAm", Some("South Korea")),
    Honor::new("State Preeminent Science and Technology Award", HonorTier::NationalHonor, "ChinaNational", Some("China")),
    Honor::new("Member of the National Academy of Medicine", HonorTier::NationalHonor, "NAM", Some("USA")),
    Honor::new("National Academy of Medicine", HonorTier::NationalHonor, "NAM", Some("USA")),
    Honor::new("NAM Member", HonorTier::NationalHonor, "NAM", Some("USA")),
    Honor::new("Member of the National Academy of Sciences", HonorTier::NationalHonor, "NAS", Some("USA")),
    Honor::new("Howard Hughes Medical Institute Investigator", HonorTier::ProfessionalExcellence, "HHMI", Some("USA")),
    Honor::new("HHMI Investigator", HonorTier::ProfessionalExcellence, "HHMI", Some("USA")),
];
