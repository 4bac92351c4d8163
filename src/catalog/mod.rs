//! Internship catalog: CSV loading and per-entry derivations

use crate::error::{MatcherError, Result};
use crate::matching::bonus::detect_government;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One internship posting. The derived fields (`combined_text`,
/// `is_government`) are computed once when the catalog is loaded and never
/// recomputed per query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(rename = "CompanyName", default)]
    pub company_name: String,

    #[serde(rename = "PostedRole", default)]
    pub posted_role: String,

    #[serde(rename = "Industry", default)]
    pub industry: String,

    #[serde(rename = "Sector", default)]
    pub sector: String,

    #[serde(rename = "Location", default)]
    pub location: String,

    #[serde(rename = "SkillsRequired", default)]
    pub skills_required: String,

    #[serde(rename = "Stipend", default)]
    pub stipend: String,

    #[serde(skip_deserializing)]
    pub combined_text: String,

    #[serde(skip_deserializing)]
    pub is_government: bool,
}

impl CatalogEntry {
    /// Compute the derived fields. Called exactly once per entry at load
    /// time; entries are immutable afterwards.
    fn derive(&mut self) {
        self.combined_text = format!(
            "{} {} {}",
            self.skills_required, self.posted_role, self.industry
        );
        self.is_government = detect_government(&self.company_name, &self.sector);
    }
}

/// Load the internship catalog from a CSV file. Missing fields deserialize
/// as empty strings. A missing or unreadable file is fatal to engine
/// construction and surfaces as `CatalogUnavailable`.
pub fn load_catalog(path: &Path) -> Result<Vec<CatalogEntry>> {
    if !path.exists() {
        return Err(MatcherError::CatalogUnavailable(format!(
            "{} not found. Place the internship catalog CSV at this path.",
            path.display()
        )));
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)
        .map_err(|e| MatcherError::CatalogUnavailable(format!("{}: {}", path.display(), e)))?;

    let mut entries = Vec::new();
    for record in reader.deserialize::<CatalogEntry>() {
        let mut entry = record
            .map_err(|e| MatcherError::CatalogUnavailable(format!("{}: {}", path.display(), e)))?;
        entry.derive();
        entries.push(entry);
    }

    info!("Loaded {} catalog entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Build catalog entries directly from source fields, running the same
/// derivations as the CSV path. Used by tests and embedding callers.
pub fn entries_from_records(records: Vec<CatalogEntry>) -> Vec<CatalogEntry> {
    records
        .into_iter()
        .map(|mut entry| {
            entry.derive();
            entry
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn entry(company: &str, sector: &str, skills: &str, role: &str, industry: &str) -> CatalogEntry {
        CatalogEntry {
            company_name: company.to_string(),
            posted_role: role.to_string(),
            industry: industry.to_string(),
            sector: sector.to_string(),
            location: String::new(),
            skills_required: skills.to_string(),
            stipend: String::new(),
            combined_text: String::new(),
            is_government: false,
        }
    }

    #[test]
    fn test_derivations_run_once_at_load() {
        let entries = entries_from_records(vec![entry(
            "Rural Development Trust",
            "Social",
            "Python, SQL",
            "Data Intern",
            "Analytics",
        )]);
        assert_eq!(entries[0].combined_text, "Python, SQL Data Intern Analytics");
        assert!(entries[0].is_government);
    }

    #[test]
    fn test_private_company_not_flagged_government() {
        let entries = entries_from_records(vec![entry(
            "Acme Analytics",
            "Finance",
            "Excel",
            "Analyst Intern",
            "Finance",
        )]);
        assert!(!entries[0].is_government);
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let result = load_catalog(Path::new("does/not/exist.csv"));
        assert!(matches!(result, Err(MatcherError::CatalogUnavailable(_))));
    }

    #[test]
    fn test_load_catalog_from_csv() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "CompanyName,PostedRole,Industry,Sector,Location,SkillsRequired,Stipend"
        )
        .unwrap();
        writeln!(
            file,
            "Acme Analytics,Data Intern,Analytics,Private,\"Pune, Maharashtra\",\"Python, SQL\",10000"
        )
        .unwrap();
        writeln!(file, "Gram Seva Council,Field Intern,Social,Public Sector,Nagpur,,").unwrap();

        let entries = load_catalog(file.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].location, "Pune, Maharashtra");
        assert_eq!(entries[0].combined_text, "Python, SQL Data Intern Analytics");
        assert!(!entries[0].is_government);

        // Missing fields come back as empty strings, not errors.
        assert_eq!(entries[1].skills_required, "");
        assert!(entries[1].is_government);
    }
}
