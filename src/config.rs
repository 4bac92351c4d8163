//! Configuration management for the internship matcher

use crate::error::{MatcherError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub models: ModelConfig,
    pub data: DataConfig,
    pub scoring: ScoringConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub models_dir: PathBuf,
    pub embedding_model: String,
    pub llm_model: String,
    pub llm_api_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    pub catalog_path: PathBuf,
    pub students_path: PathBuf,
}

/// Weights applied to the ranking sub-scores. The defaults sum to 1.0 so
/// final scores stay in a [0,1]-ish range, but callers may override them
/// and the engine applies whatever it is given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub embed_weight: f32,
    pub jaccard_weight: f32,
    pub location_weight: f32,
    pub gov_weight: f32,
    pub default_top_k: usize,
}

impl Default for Config {
    fn default() -> Self {
        let models_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".internship-matcher")
            .join("models");

        Self {
            models: ModelConfig {
                models_dir,
                embedding_model: "minishlab/M2V_base_output".to_string(),
                llm_model: "llama-3.1-8b-instant".to_string(),
                llm_api_url: "https://api.groq.com/openai/v1/chat/completions".to_string(),
            },
            data: DataConfig {
                catalog_path: PathBuf::from("companies.csv"),
                students_path: PathBuf::from("students.csv"),
            },
            scoring: ScoringConfig {
                embed_weight: 0.7,
                jaccard_weight: 0.2,
                location_weight: 0.05,
                gov_weight: 0.05,
                default_top_k: 5,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| MatcherError::Configuration(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| MatcherError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("internship-matcher")
            .join("config.toml")
    }

    pub fn embedding_model_path(&self) -> PathBuf {
        self.models.models_dir.join(&self.models.embedding_model)
    }
}
