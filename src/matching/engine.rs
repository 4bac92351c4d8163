//! Ranking engine combining semantic similarity, skill overlap, and
//! categorical bonuses into one weighted score per catalog entry

use crate::catalog::CatalogEntry;
use crate::error::Result;
use crate::matching::bonus::{government_bonus, location_bonus};
use crate::matching::embedding::{EmbeddingIndex, TextEncoder};
use crate::matching::overlap::jaccard;
use crate::matching::text::parse_skills;
use log::debug;
use serde::{Deserialize, Serialize};

/// Immutable weight configuration for one ranking call. Defaults sum to
/// 1.0; the engine applies overrides exactly as given.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Weights {
    pub embed: f32,
    pub jaccard: f32,
    pub location: f32,
    pub gov: f32,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            embed: 0.7,
            jaccard: 0.2,
            location: 0.05,
            gov: 0.05,
        }
    }
}

/// Profile information used to rank catalog entries for one requester.
/// Constructed per request, never persisted here.
#[derive(Debug, Clone)]
pub struct CandidateQuery {
    pub candidate_text: String,
    pub candidate_skills: String,
    pub location_preference: Option<String>,
    pub is_rural: bool,
}

/// One catalog entry paired with its weighted match score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredResult {
    #[serde(flatten)]
    pub entry: CatalogEntry,
    pub score: f32,
}

/// Owns the catalog snapshot and its precomputed embeddings. Read-only
/// after construction; reloading the catalog means building a new engine.
pub struct RankingEngine {
    entries: Vec<CatalogEntry>,
    index: EmbeddingIndex,
}

impl RankingEngine {
    /// Build an engine over a catalog snapshot. Embeds every entry's
    /// combined text in one batch; an encoder failure here is fatal.
    pub fn new(entries: Vec<CatalogEntry>, encoder: Box<dyn TextEncoder>) -> Result<Self> {
        let texts: Vec<String> = entries.iter().map(|e| e.combined_text.clone()).collect();
        let index = EmbeddingIndex::build(encoder, &texts)?;
        Ok(Self { entries, index })
    }

    pub fn catalog_size(&self) -> usize {
        self.entries.len()
    }

    /// Rank all catalog entries for a candidate and return the top `top_k`.
    /// Ties keep catalog order (stable sort) so identical inputs always
    /// produce identical output. `top_k == 0` and an empty catalog both
    /// yield an empty result without error.
    pub fn recommend(
        &self,
        query: &CandidateQuery,
        top_k: usize,
        weights: &Weights,
    ) -> Result<Vec<ScoredResult>> {
        if top_k == 0 || self.entries.is_empty() {
            return Ok(Vec::new());
        }

        let similarities = self.index.similarity(&query.candidate_text)?;
        let candidate_skills = parse_skills(&query.candidate_skills);
        let preference = query.location_preference.as_deref();

        let mut results: Vec<ScoredResult> = self
            .entries
            .iter()
            .zip(similarities)
            .map(|(entry, sim)| {
                let entry_skills = parse_skills(&entry.skills_required);
                let skill_overlap = jaccard(&candidate_skills, &entry_skills);
                let loc = location_bonus(preference, &entry.location);
                let gov = government_bonus(query.is_rural, entry.is_government);

                let score = weights.embed * sim
                    + weights.jaccard * skill_overlap
                    + weights.location * loc
                    + weights.gov * gov;

                debug!(
                    "{} @ {}: sim={:.3} jaccard={:.3} loc={:.1} gov={:.1} -> {:.3}",
                    entry.posted_role, entry.company_name, sim, skill_overlap, loc, gov, score
                );

                ScoredResult {
                    entry: entry.clone(),
                    score,
                }
            })
            .collect();

        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        results.truncate(top_k);

        Ok(results)
    }
}
