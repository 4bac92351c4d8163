//! Semantic similarity over catalog entries using Model2Vec embeddings

use crate::error::{MatcherError, Result};
use crate::matching::text::normalize;
use log::info;
use model2vec_rs::model::StaticModel;
use std::path::Path;

/// Text embedding backend. The production implementation wraps a Model2Vec
/// static model; tests substitute deterministic encoders so ranking logic
/// can be exercised without model files on disk.
pub trait TextEncoder: Send + Sync {
    fn encode(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;
}

/// Model2Vec-backed encoder loaded from a local model directory.
pub struct Model2VecEncoder {
    model: StaticModel,
}

impl Model2VecEncoder {
    pub fn load(model_path: &Path) -> Result<Self> {
        info!("Loading Model2Vec embedding model from: {}", model_path.display());
        let model = StaticModel::from_pretrained(
            model_path,
            None, // token
            None, // normalize
            None, // subfolder
        )
        .map_err(|e| MatcherError::Embedding(format!("Failed to load model: {}", e)))?;
        Ok(Self { model })
    }
}

impl TextEncoder for Model2VecEncoder {
    fn encode(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(self.model.encode(texts))
    }
}

/// Holds one unit-normalized vector per catalog entry, in catalog order.
/// Built once per catalog load; immutable afterwards.
pub struct EmbeddingIndex {
    encoder: Box<dyn TextEncoder>,
    vectors: Vec<Vec<f32>>,
}

impl EmbeddingIndex {
    /// Batch-encode the combined text of every catalog entry. Texts are
    /// normalized before encoding so the index and queries share one
    /// canonical form.
    pub fn build(encoder: Box<dyn TextEncoder>, texts: &[String]) -> Result<Self> {
        let normalized: Vec<String> = texts.iter().map(|t| normalize(t)).collect();
        let mut vectors = encoder.encode(&normalized)?;
        if vectors.len() != texts.len() {
            return Err(MatcherError::Embedding(format!(
                "Encoder returned {} vectors for {} texts",
                vectors.len(),
                texts.len()
            )));
        }
        for vector in &mut vectors {
            l2_normalize(vector);
        }
        info!("Embedded {} catalog entries", vectors.len());
        Ok(Self { encoder, vectors })
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Cosine similarity of the query against every stored entry, in stored
    /// order. Stored vectors and the query are unit length, so a plain dot
    /// product suffices.
    pub fn similarity(&self, query_text: &str) -> Result<Vec<f32>> {
        let encoded = self.encoder.encode(&[normalize(query_text)])?;
        let mut query = encoded
            .into_iter()
            .next()
            .ok_or_else(|| MatcherError::Embedding("Encoder returned no query vector".to_string()))?;
        l2_normalize(&mut query);

        Ok(self.vectors.iter().map(|v| dot(v, &query)).collect())
    }
}

/// Scale a vector to unit length. Zero vectors are left untouched rather
/// than dividing by zero.
fn l2_normalize(vector: &mut [f32]) {
    let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for x in vector.iter_mut() {
            *x /= norm;
        }
    }
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}
