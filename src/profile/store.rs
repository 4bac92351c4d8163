//! CSV-backed student profile store

use crate::error::{MatcherError, Result};
use crate::profile::StudentProfile;
use log::info;
use std::path::{Path, PathBuf};

/// Save-or-update store over a students CSV file, keyed by email.
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Persist a profile. An existing record with the same email is updated
    /// in place; otherwise the profile is appended. A profile without an
    /// email cannot be keyed and is rejected.
    pub fn save(&self, profile: &StudentProfile) -> Result<()> {
        if profile.email.trim().is_empty() {
            return Err(MatcherError::InvalidInput(
                "Profile must contain an email to identify the student".to_string(),
            ));
        }

        let mut profiles = self.list()?;
        match profiles.iter_mut().find(|p| p.email == profile.email) {
            Some(existing) => *existing = profile.clone(),
            None => profiles.push(profile.clone()),
        }

        self.write_all(&profiles)?;
        info!("Saved profile for {} to {}", profile.email, self.path.display());
        Ok(())
    }

    /// All stored profiles, in file order. A missing or empty file is an
    /// empty store, not an error.
    pub fn list(&self) -> Result<Vec<StudentProfile>> {
        if !self.path.exists() || std::fs::metadata(&self.path)?.len() == 0 {
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&self.path)?;

        let mut profiles = Vec::new();
        for record in reader.deserialize::<StudentProfile>() {
            profiles.push(record?);
        }
        Ok(profiles)
    }

    fn write_all(&self, profiles: &[StudentProfile]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut writer = csv::Writer::from_path(&self.path)?;
        for profile in profiles {
            writer.serialize(profile)?;
        }
        writer
            .flush()
            .map_err(|e| MatcherError::ProfileStore(e.to_string()))?;
        Ok(())
    }
}
