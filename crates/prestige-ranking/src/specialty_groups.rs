//! Broad specialty groups for ranking display.
//!
//! A specialty belongs to the first group with a member that contains it or
//! is contained by it, so group order decides overlaps (neurosurgery is
//! Surgery, not Neuroscience).

use serde::Serialize;

/// Group name for specialties that match no group.
pub const OTHER_SPECIALTIES: &str = "Other Specialties";

/// A named set of related specialties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpecialtyGroup {
    /// Display name
    pub name: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Lowercase member specialties
    pub specialties: &'static [&'static str],
}

impl SpecialtyGroup {
    /// Whether a lowercased, trimmed specialty belongs to this group.
    pub fn contains(&self, normalized: &str) -> bool {
        self.specialties
            .iter()
            .any(|s| normalized.contains(s) || s.contains(normalized))
    }
}

/// All groups, in match order.
#[rustfmt::skip]
pub static SPECIALTY_GROUPS: &[SpecialtyGroup] = &[
    SpecialtyGroup {
        name: "Surgery",
        description: "All surgical specialties including cardiac, neuro, transplant, and general surgery",
        specialties: &[
            "surgery", "cardiac surgery", "cardiothoracic surgery", "neurosurgery",
            "orthopedic surgery", "transplant surgery", "vascular surgery",
            "plastic surgery", "general surgery", "pediatric surgery",
            "thoracic surgery", "bariatric surgery", "oncologic surgery",
            "trauma surgery", "surgical oncology", "hepatobiliary surgery",
            "colorectal surgery", "hand surgery", "breast surgery",
            "endocrine surgery", "robotic surgery", "minimally invasive surgery",
        ],
    },
    SpecialtyGroup {
        name: "Internal Medicine",
        description: "Internal medicine and its subspecialties",
        specialties: &[
            "internal medicine", "medicine", "general medicine",
            "gastroenterology", "pulmonology", "nephrology",
            "endocrinology", "rheumatology", "hepatology",
            "geriatrics", "hospitalist", "critical care medicine",
            "intensive care", "icu", "allergy and immunology",
        ],
    },
    SpecialtyGroup {
        name: "Cardiology",
        description: "Heart and cardiovascular medicine",
        specialties: &[
            "cardiology", "cardiovascular medicine", "interventional cardiology",
            "electrophysiology", "cardiac electrophysiology", "heart failure",
            "preventive cardiology", "cardiac imaging", "echocardiography",
        ],
    },
    SpecialtyGroup {
        name: "Oncology",
        description: "Cancer treatment and research",
        specialties: &[
            "oncology", "medical oncology", "radiation oncology",
            "hematology-oncology", "hematology", "pediatric oncology",
            "neuro-oncology", "gynecologic oncology", "cancer research",
            "immunotherapy", "cancer biology",
        ],
    },
    SpecialtyGroup {
        name: "Neuroscience",
        description: "Brain, spine, and nervous system specialists",
        specialties: &[
            "neurology", "neuroscience", "neurosurgery", "neuroradiology",
            "neuropsychiatry", "movement disorders", "epilepsy",
            "stroke", "neuroimmunology", "behavioral neurology",
            "pediatric neurology", "sleep medicine", "headache medicine",
        ],
    },
    SpecialtyGroup {
        name: "Pediatrics",
        description: "Child and adolescent medicine",
        specialties: &[
            "pediatrics", "pediatric surgery", "pediatric cardiology",
            "pediatric oncology", "pediatric neurology", "neonatology",
            "pediatric intensive care", "adolescent medicine",
            "pediatric gastroenterology", "pediatric pulmonology",
        ],
    },
    SpecialtyGroup {
        name: "Women's Health",
        description: "Obstetrics, gynecology, and reproductive medicine",
        specialties: &[
            "obstetrics", "gynecology", "obstetrics and gynecology", "ob-gyn",
            "maternal-fetal medicine", "reproductive endocrinology",
            "fertility", "urogynecology", "gynecologic oncology",
        ],
    },
    SpecialtyGroup {
        name: "Orthopedics & Sports",
        description: "Musculoskeletal and sports medicine",
        specialties: &[
            "orthopedics", "orthopedic surgery", "sports medicine",
            "spine surgery", "joint replacement", "trauma orthopedics",
            "pediatric orthopedics", "hand surgery", "foot and ankle",
            "shoulder surgery", "physical medicine", "rehabilitation",
        ],
    },
    SpecialtyGroup {
        name: "Psychiatry & Mental Health",
        description: "Mental health and behavioral medicine",
        specialties: &[
            "psychiatry", "psychology", "child psychiatry", "addiction psychiatry",
            "forensic psychiatry", "geriatric psychiatry", "neuropsychiatry",
            "consultation-liaison psychiatry", "psychosomatic medicine",
        ],
    },
    SpecialtyGroup {
        name: "Radiology & Imaging",
        description: "Medical imaging and interventional radiology",
        specialties: &[
            "radiology", "interventional radiology", "neuroradiology",
            "nuclear medicine", "diagnostic radiology", "pediatric radiology",
            "breast imaging", "musculoskeletal radiology",
        ],
    },
    SpecialtyGroup {
        name: "Emergency & Critical Care",
        description: "Emergency medicine and intensive care",
        specialties: &[
            "emergency medicine", "critical care", "intensive care",
            "trauma", "disaster medicine", "toxicology",
            "pediatric emergency medicine",
        ],
    },
    SpecialtyGroup {
        name: "Infectious Disease & Public Health",
        description: "Infectious diseases and global health",
        specialties: &[
            "infectious disease", "infectious diseases", "epidemiology",
            "public health", "global health", "tropical medicine",
            "hiv medicine", "virology", "microbiology", "immunology",
        ],
    },
    SpecialtyGroup {
        name: "Ophthalmology & Vision",
        description: "Eye care and vision science",
        specialties: &[
            "ophthalmology", "retina", "glaucoma", "cornea",
            "oculoplastics", "neuro-ophthalmology", "pediatric ophthalmology",
            "refractive surgery", "cataract surgery",
        ],
    },
    SpecialtyGroup {
        name: "ENT & Head/Neck",
        description: "Ear, nose, throat and head/neck surgery",
        specialties: &[
            "otolaryngology", "ent", "ear nose throat", "head and neck surgery",
            "otology", "rhinology", "laryngology", "facial plastic surgery",
        ],
    },
    SpecialtyGroup {
        name: "Dermatology",
        description: "Skin, hair, and nail disorders",
        specialties: &[
            "dermatology", "dermatologic surgery", "mohs surgery",
            "cosmetic dermatology", "pediatric dermatology",
        ],
    },
    SpecialtyGroup {
        name: "Urology",
        description: "Urinary tract and male reproductive health",
        specialties: &[
            "urology", "urologic oncology", "pediatric urology",
            "female urology", "andrology", "kidney transplant",
        ],
    },
    SpecialtyGroup {
        name: "Pathology & Laboratory",
        description: "Diagnostic pathology and laboratory medicine",
        specialties: &[
            "pathology", "anatomic pathology", "clinical pathology",
            "surgical pathology", "neuropathology", "dermatopathology",
            "cytopathology", "molecular pathology", "hematopathology",
        ],
    },
    SpecialtyGroup {
        name: "Anesthesiology & Pain",
        description: "Anesthesia and pain management",
        specialties: &[
            "anesthesiology", "pain medicine", "pain management",
            "cardiac anesthesia", "pediatric anesthesia", "regional anesthesia",
        ],
    },
];

/// Group of a specialty, or `None` when no group matches.
///
/// A blank specialty matches nothing.
pub fn specialty_group(specialty: &str) -> Option<&'static SpecialtyGroup> {
    let normalized = specialty.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }
    SPECIALTY_GROUPS.iter().find(|g| g.contains(&normalized))
}

/// Group name of a specialty, [`OTHER_SPECIALTIES`] when unmatched.
pub fn group_name(specialty: &str) -> &'static str {
    specialty_group(specialty).map_or(OTHER_SPECIALTIES, |g| g.name)
}
