//! Rule-based skill overlap scoring

use crate::matching::text::normalize;
use std::collections::HashSet;

/// Jaccard similarity between two skill lists. Elements are normalized
/// before the set operations so casing and punctuation differences do not
/// break the overlap. Two empty sets score 0.0, not NaN: no declared skills
/// is no evidence of overlap.
pub fn jaccard(skills_a: &[String], skills_b: &[String]) -> f32 {
    let set_a: HashSet<String> = skills_a
        .iter()
        .map(|s| normalize(s))
        .filter(|s| !s.is_empty())
        .collect();
    let set_b: HashSet<String> = skills_b
        .iter()
        .map(|s| normalize(s))
        .filter(|s| !s.is_empty())
        .collect();

    if set_a.is_empty() && set_b.is_empty() {
        return 0.0;
    }

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();

    if union == 0 {
        0.0
    } else {
        intersection as f32 / union as f32
    }
}
