//! Scoring and ranking components

pub mod bonus;
pub mod embedding;
pub mod engine;
pub mod overlap;
pub mod text;

pub use engine::{CandidateQuery, RankingEngine, ScoredResult, Weights};
