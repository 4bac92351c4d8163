//! Text canonicalization shared by every scoring component

use once_cell::sync::Lazy;
use regex::Regex;

static RE_DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9, ]+").expect("invalid RE_DISALLOWED"));
static RE_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("invalid RE_WHITESPACE"));
static RE_SKILL_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,;\n]| and ").expect("invalid RE_SKILL_SPLIT"));

/// Canonicalize free text for comparison: lowercase, strip everything
/// outside `[a-z0-9, ]`, collapse whitespace runs, trim. Idempotent.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = RE_DISALLOWED.replace_all(&lowered, " ");
    RE_WHITESPACE.replace_all(&stripped, " ").trim().to_string()
}

/// Split a free-text skill string into normalized tokens. Splits on commas,
/// semicolons, newlines, and the conjunction " and "; duplicates are dropped
/// while first-seen order is preserved.
pub fn parse_skills(text: &str) -> Vec<String> {
    let normalized = normalize(text);
    let mut skills = Vec::new();
    for part in RE_SKILL_SPLIT.split(&normalized) {
        let skill = part.trim();
        if !skill.is_empty() && !skills.iter().any(|s| s == skill) {
            skills.push(skill.to_string());
        }
    }
    skills
}
