//! Categorical bonuses: location preference and government/NGO affinity

use crate::matching::text::normalize;

/// Keywords that flag an employer as government/NGO-adjacent. Tunable
/// heuristics, not ground truth; matched against lowercase name+sector.
const GOV_KEYWORDS: [&str; 11] = [
    "ngo",
    "gov",
    "government",
    "public sector",
    "psu",
    "co-op",
    "cooperative",
    "council",
    "trust",
    "rural development",
    "community development",
];

/// Detect government/NGO affiliation from the company name and sector.
/// Computed once at catalog load and frozen on the entry.
pub fn detect_government(company_name: &str, sector: &str) -> bool {
    let text = format!("{} {}", company_name, sector).to_lowercase();
    GOV_KEYWORDS.iter().any(|k| text.contains(k))
}

/// Location bonus for one entry: 1.0 when the normalized, non-empty
/// preference is a substring of the normalized entry location.
pub fn location_bonus(preference: Option<&str>, entry_location: &str) -> f32 {
    let pref = match preference {
        Some(p) => normalize(p),
        None => return 0.0,
    };
    if !pref.is_empty() && normalize(entry_location).contains(&pref) {
        1.0
    } else {
        0.0
    }
}

/// Government bonus for one entry: only rural candidates receive it.
pub fn government_bonus(is_rural: bool, is_government: bool) -> f32 {
    if is_rural && is_government {
        1.0
    } else {
        0.0
    }
}
