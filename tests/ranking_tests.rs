//! Integration tests for the ranking engine

use internship_matcher::catalog::{entries_from_records, CatalogEntry};
use internship_matcher::error::{MatcherError, Result};
use internship_matcher::matching::embedding::TextEncoder;
use internship_matcher::matching::{CandidateQuery, RankingEngine, Weights};
use std::sync::atomic::{AtomicBool, Ordering};

/// Deterministic encoder for tests: each dimension counts occurrences of
/// one vocabulary word, so related texts get related vectors.
struct VocabEncoder {
    vocab: Vec<&'static str>,
}

impl VocabEncoder {
    fn new() -> Self {
        Self {
            vocab: vec![
                "python",
                "sql",
                "excel",
                "data",
                "analytics",
                "marketing",
                "design",
                "field",
                "agriculture",
            ],
        }
    }
}

impl TextEncoder for VocabEncoder {
    fn encode(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(texts
            .iter()
            .map(|text| {
                self.vocab
                    .iter()
                    .map(|word| text.matches(word).count() as f32)
                    .collect()
            })
            .collect())
    }
}

/// Fails on every encode call after the first, to exercise the query-time
/// failure path.
struct QueryFailingEncoder {
    first_call_done: AtomicBool,
}

impl TextEncoder for QueryFailingEncoder {
    fn encode(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if self.first_call_done.swap(true, Ordering::SeqCst) {
            Err(MatcherError::Embedding("backend unavailable".to_string()))
        } else {
            Ok(texts.iter().map(|_| vec![1.0, 0.0]).collect())
        }
    }
}

fn entry(company: &str, role: &str, industry: &str, sector: &str, location: &str, skills: &str) -> CatalogEntry {
    CatalogEntry {
        company_name: company.to_string(),
        posted_role: role.to_string(),
        industry: industry.to_string(),
        sector: sector.to_string(),
        location: location.to_string(),
        skills_required: skills.to_string(),
        stipend: String::new(),
        combined_text: String::new(),
        is_government: false,
    }
}

fn sample_catalog() -> Vec<CatalogEntry> {
    entries_from_records(vec![
        entry(
            "Acme Analytics",
            "Data Analyst Intern",
            "Analytics",
            "Private",
            "Pune, Maharashtra",
            "Python, SQL, Excel",
        ),
        entry(
            "BrightAds",
            "Marketing Intern",
            "Marketing",
            "Private",
            "Mumbai, Maharashtra",
            "Canva, Communication",
        ),
        entry(
            "Rural Development Trust",
            "Field Data Intern",
            "Agriculture",
            "Social",
            "Nagpur, Maharashtra",
            "Excel, Field Work",
        ),
    ])
}

fn engine() -> RankingEngine {
    RankingEngine::new(sample_catalog(), Box::new(VocabEncoder::new())).unwrap()
}

fn data_candidate() -> CandidateQuery {
    CandidateQuery {
        candidate_text: "B.Tech Python SQL data analytics".to_string(),
        candidate_skills: "Python, SQL".to_string(),
        location_preference: None,
        is_rural: false,
    }
}

#[test]
fn semantic_and_skill_signals_rank_the_data_role_first() {
    let results = engine()
        .recommend(&data_candidate(), 3, &Weights::default())
        .unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].entry.company_name, "Acme Analytics");
    assert!(results[0].score > results[1].score);
}

#[test]
fn top_k_zero_returns_empty() {
    let results = engine()
        .recommend(&data_candidate(), 0, &Weights::default())
        .unwrap();
    assert!(results.is_empty());
}

#[test]
fn top_k_larger_than_catalog_returns_all_sorted() {
    let results = engine()
        .recommend(&data_candidate(), 50, &Weights::default())
        .unwrap();

    assert_eq!(results.len(), 3);
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn empty_catalog_returns_empty_without_error() {
    let engine = RankingEngine::new(Vec::new(), Box::new(VocabEncoder::new())).unwrap();
    let results = engine
        .recommend(&data_candidate(), 5, &Weights::default())
        .unwrap();
    assert!(results.is_empty());
}

#[test]
fn jaccard_only_weights_reproduce_the_overlap_score() {
    let weights = Weights {
        embed: 0.0,
        jaccard: 1.0,
        location: 0.0,
        gov: 0.0,
    };
    let results = engine().recommend(&data_candidate(), 3, &weights).unwrap();

    // {python, sql} vs {python, sql, excel}: 2/3 overlap on the data role.
    let acme = results
        .iter()
        .find(|r| r.entry.company_name == "Acme Analytics")
        .unwrap();
    assert!((acme.score - 2.0 / 3.0).abs() < 1e-6);

    let ads = results
        .iter()
        .find(|r| r.entry.company_name == "BrightAds")
        .unwrap();
    assert_eq!(ads.score, 0.0);
}

#[test]
fn location_preference_boosts_matching_entries() {
    let weights = Weights {
        embed: 0.0,
        jaccard: 0.0,
        location: 1.0,
        gov: 0.0,
    };
    let query = CandidateQuery {
        location_preference: Some("Pune".to_string()),
        ..data_candidate()
    };
    let results = engine().recommend(&query, 3, &weights).unwrap();

    assert_eq!(results[0].entry.company_name, "Acme Analytics");
    assert_eq!(results[0].score, 1.0);
    assert_eq!(results[1].score, 0.0);
}

#[test]
fn rural_candidates_get_the_government_bonus() {
    let weights = Weights {
        embed: 0.0,
        jaccard: 0.0,
        location: 0.0,
        gov: 1.0,
    };

    let rural_query = CandidateQuery {
        is_rural: true,
        ..data_candidate()
    };
    let results = engine().recommend(&rural_query, 3, &weights).unwrap();
    assert_eq!(results[0].entry.company_name, "Rural Development Trust");
    assert_eq!(results[0].score, 1.0);

    // Without the rural flag the bonus never applies.
    let results = engine().recommend(&data_candidate(), 3, &weights).unwrap();
    assert!(results.iter().all(|r| r.score == 0.0));
}

#[test]
fn tied_scores_keep_catalog_order() {
    let weights = Weights {
        embed: 0.0,
        jaccard: 0.0,
        location: 0.0,
        gov: 0.0,
    };
    let results = engine().recommend(&data_candidate(), 3, &weights).unwrap();

    assert_eq!(results[0].entry.company_name, "Acme Analytics");
    assert_eq!(results[1].entry.company_name, "BrightAds");
    assert_eq!(results[2].entry.company_name, "Rural Development Trust");
}

#[test]
fn identical_inputs_produce_bit_identical_rankings() {
    let engine = engine();
    let query = CandidateQuery {
        location_preference: Some("Pune".to_string()),
        is_rural: true,
        ..data_candidate()
    };

    let first = engine.recommend(&query, 3, &Weights::default()).unwrap();
    let second = engine.recommend(&query, 3, &Weights::default()).unwrap();

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.entry.company_name, b.entry.company_name);
        assert_eq!(a.score.to_bits(), b.score.to_bits());
    }
}

#[test]
fn query_time_encoder_failure_surfaces_as_embedding_error() {
    let encoder = QueryFailingEncoder {
        first_call_done: AtomicBool::new(false),
    };
    let engine = RankingEngine::new(sample_catalog(), Box::new(encoder)).unwrap();

    let result = engine.recommend(&data_candidate(), 3, &Weights::default());
    assert!(matches!(result, Err(MatcherError::Embedding(_))));
}
