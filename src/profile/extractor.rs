//! Resume extraction: PDF text extraction, remote LLM field extraction,
//! and a rule-based fallback

use crate::config::ModelConfig;
use crate::error::{MatcherError, Result};
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static RE_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("invalid RE_WHITESPACE"));
static RE_EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-z0-9_.+-]+@[a-z0-9-]+\.[a-z0-9-.]+").expect("invalid RE_EMAIL")
});
static RE_EXPERIENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s+year").expect("invalid RE_EXPERIENCE"));
static RE_JSON_OBJECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("invalid RE_JSON_OBJECT"));

/// Skill keywords the heuristic extractor looks for when the LLM path is
/// unavailable.
const FALLBACK_SKILLS: [&str; 13] = [
    "python",
    "sql",
    "excel",
    "pandas",
    "numpy",
    "machine learning",
    "flutter",
    "dart",
    "git",
    "aws",
    "tensorflow",
    "react",
    "canva",
];

/// Profile fields pulled out of a resume. Every field is plain text;
/// anything the resume does not state stays empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileFields {
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
    pub projects: String,
}

/// Which path produced the fields. Callers can distinguish a structured
/// LLM extraction from the heuristic fallback instead of getting silently
/// degraded data.
#[derive(Debug, Clone)]
pub enum ExtractedProfile {
    Structured(ProfileFields),
    Heuristic(ProfileFields),
}

impl ExtractedProfile {
    pub fn fields(&self) -> &ProfileFields {
        match self {
            ExtractedProfile::Structured(fields) | ExtractedProfile::Heuristic(fields) => fields,
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, ExtractedProfile::Structured(_))
    }
}

/// Extract plain text from resume bytes. PDF extraction is attempted
/// first; anything that fails or comes back empty is treated as a plain
/// text upload and decoded lossily.
pub fn extract_text_from_bytes(bytes: &[u8]) -> String {
    match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) if !text.trim().is_empty() => text,
        _ => String::from_utf8_lossy(bytes).to_string(),
    }
}

/// Rule-based extractor used when the LLM is unavailable: email regex, a
/// fixed skill dictionary, naive degree detection, and a years-of-experience
/// pattern defaulting to "Fresher".
pub fn fallback_extract(text: &str) -> ProfileFields {
    let lowered = text.to_lowercase();

    let email = RE_EMAIL
        .find(&lowered)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    let skills: Vec<&str> = FALLBACK_SKILLS
        .iter()
        .copied()
        .filter(|k| lowered.contains(k))
        .collect();

    let education = if lowered.contains("b.tech") || lowered.contains("btech") {
        "B.Tech"
    } else if lowered.contains("m.tech") || lowered.contains("mtech") {
        "M.Tech"
    } else if lowered.contains("mba") {
        "MBA"
    } else {
        ""
    };

    let experience = RE_EXPERIENCE
        .find(&lowered)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| "Fresher".to_string());

    ProfileFields {
        email,
        education: education.to_string(),
        skills: skills.join(", "),
        experience,
        ..ProfileFields::default()
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

/// Client for an OpenAI-compatible chat-completions endpoint (Groq in the
/// default configuration) that turns raw resume text into structured
/// profile fields.
pub struct LlmExtractor {
    client: reqwest::Client,
    api_url: String,
    model: String,
    api_key: String,
}

impl LlmExtractor {
    /// Build an extractor if an API key is configured; `None` means the
    /// caller should go straight to the heuristic fallback.
    pub fn from_env(config: &ModelConfig) -> Option<Self> {
        let api_key = std::env::var("GROQ_API_KEY").ok().filter(|k| !k.is_empty())?;
        Some(Self {
            client: reqwest::Client::new(),
            api_url: config.llm_api_url.clone(),
            model: config.llm_model.clone(),
            api_key,
        })
    }

    pub async fn extract(&self, resume_text: &str) -> Result<ProfileFields> {
        let cleaned = RE_WHITESPACE.replace_all(resume_text, " ").trim().to_string();
        let prompt = format!(
            "You are a resume parser. Read the resume text and return ONLY a valid JSON \
             object with the exact keys:\n\n\
             name, email, education, skills, sector_interests, location_pref, experience, projects\n\n\
             Rules:\n\
             - If a field is not present, set its value to an empty string (\"\").\n\
             - All fields must be plain text strings (no arrays, no objects).\n\
             - For multiple entries (education, skills, experience, projects), return a single \
             string with entries separated by semicolons.\n\
             - Do not invent data. Use only what is in the text.\n\
             - Return only valid JSON, no extra text, no markdown.\n\n\
             Resume text:\n{}",
            cleaned
        );

        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": "You are a helpful structured-data extractor." },
                { "role": "user", "content": prompt },
            ],
            "temperature": 0.0,
            "max_tokens": 800,
        });

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| MatcherError::LlmExtraction(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(MatcherError::LlmExtraction(format!(
                "API returned status {}",
                response.status()
            )));
        }

        let payload: ChatResponse = response
            .json()
            .await
            .map_err(|e| MatcherError::LlmExtraction(format!("Malformed API response: {}", e)))?;

        let content = payload
            .choices
            .first()
            .map(|c| c.message.content.trim())
            .ok_or_else(|| MatcherError::LlmExtraction("API returned no choices".to_string()))?;

        parse_fields_from_reply(content)
    }
}

/// Pull the first `{...}` block out of the model reply and deserialize it.
/// Missing keys default to empty strings.
fn parse_fields_from_reply(reply: &str) -> Result<ProfileFields> {
    let json_str = RE_JSON_OBJECT
        .find(reply)
        .map(|m| m.as_str())
        .ok_or_else(|| MatcherError::LlmExtraction("LLM did not return JSON-like output".to_string()))?;

    serde_json::from_str(json_str)
        .map_err(|e| MatcherError::LlmExtraction(format!("Failed to parse JSON from LLM output: {}", e)))
}

/// Orchestrates the extraction pipeline: text extraction, LLM extraction
/// when configured, heuristic fallback otherwise or on failure.
pub struct ResumeExtractor {
    llm: Option<LlmExtractor>,
}

impl ResumeExtractor {
    pub fn new(config: &ModelConfig) -> Self {
        let llm = LlmExtractor::from_env(config);
        if llm.is_none() {
            info!("No LLM API key configured; resume parsing will use the heuristic extractor");
        }
        Self { llm }
    }

    pub async fn extract(&self, resume_bytes: &[u8]) -> ExtractedProfile {
        let text = extract_text_from_bytes(resume_bytes);

        if let Some(llm) = &self.llm {
            match llm.extract(&text).await {
                Ok(fields) => return ExtractedProfile::Structured(fields),
                Err(e) => warn!("LLM extraction failed, falling back to heuristics: {}", e),
            }
        }

        ExtractedProfile::Heuristic(fallback_extract(&text))
    }
}
