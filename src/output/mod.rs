//! Output formatting for ranked recommendations

use crate::error::Result;
use crate::matching::ScoredResult;
use crate::profile::StudentProfile;
use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Console,
    Json,
}

impl OutputFormat {
    pub fn parse(format: &str) -> std::result::Result<Self, String> {
        match format.to_lowercase().as_str() {
            "console" => Ok(OutputFormat::Console),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid output format: {}. Supported: console, json",
                format
            )),
        }
    }
}

/// Render ranked results in the requested format.
pub fn format_results(results: &[ScoredResult], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Console => Ok(format_console(results)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(results)?),
    }
}

fn format_console(results: &[ScoredResult]) -> String {
    if results.is_empty() {
        return "No recommendations found.".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!("{}\n", "Top recommendations".bold().underline()));

    for (rank, result) in results.iter().enumerate() {
        let entry = &result.entry;
        let header = format!("{}. {} @ {}", rank + 1, entry.posted_role, entry.company_name);
        let score = format!("{:.1}%", result.score * 100.0);

        out.push_str(&format!("\n{}\n", header.cyan().bold()));
        out.push_str(&format!("   Location: {}", entry.location));
        if !entry.stipend.is_empty() {
            out.push_str(&format!("  Stipend: {}", entry.stipend));
        }
        out.push('\n');
        if !entry.skills_required.is_empty() {
            out.push_str(&format!("   Required skills: {}\n", entry.skills_required));
        }
        if entry.is_government {
            out.push_str(&format!("   {}\n", "Government/NGO".green()));
        }
        out.push_str(&format!("   Match score: {}\n", score.yellow().bold()));
    }

    out
}

/// Render the student register for the company preview view.
pub fn format_students(profiles: &[StudentProfile]) -> String {
    if profiles.is_empty() {
        return "No students registered yet.".to_string();
    }

    let mut out = format!("{}\n", format!("Registered students: {}", profiles.len()).bold());
    for profile in profiles {
        out.push_str(&format!(
            "\n{} <{}> [{}]\n   Education: {}\n   Skills: {}\n   Location: {}\n",
            profile.name.cyan(),
            profile.email,
            profile.source,
            profile.education,
            profile.skills,
            profile.location_pref,
        ));
    }
    out
}
