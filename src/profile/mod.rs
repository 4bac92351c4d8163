//! Student profiles: the record shape shared by the manual entry path,
//! the resume extractor, and the CSV store

pub mod extractor;
pub mod store;

use crate::matching::CandidateQuery;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One registered student. Persisted to the student CSV store keyed by
/// email; all text fields are opaque strings and may be empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub sector_interests: String,
    #[serde(default)]
    pub location_pref: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub is_rural: bool,
    /// "manual" or "resume", recording which entry path produced the record.
    #[serde(default)]
    pub source: String,
    pub timestamp: DateTime<Utc>,
}

impl StudentProfile {
    /// Free text fed to the embedding index: the profile fields that carry
    /// topical signal, joined in a fixed order.
    pub fn candidate_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.education, self.skills, self.sector_interests, self.experience
        )
    }

    pub fn to_query(&self) -> CandidateQuery {
        let preference = self.location_pref.trim();
        CandidateQuery {
            candidate_text: self.candidate_text(),
            candidate_skills: self.skills.clone(),
            location_preference: if preference.is_empty() {
                None
            } else {
                Some(preference.to_string())
            },
            is_rural: self.is_rural,
        }
    }
}
