//! CLI interface for the internship matcher

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "internship-matcher")]
#[command(about = "AI-powered internship matching for student profiles")]
#[command(
    long_about = "Rank internship postings for a student profile using semantic embeddings, skill overlap, and location/government bonuses"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the internship catalog CSV (overrides config)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register a profile manually and print ranked matches
    Recommend {
        /// Full name
        #[arg(long, default_value = "")]
        name: String,

        /// Email (identifies the student in the store)
        #[arg(long)]
        email: String,

        /// Highest education (e.g., "B.Tech, 2nd year")
        #[arg(long, default_value = "")]
        education: String,

        /// Skills, comma separated (e.g., "Python, SQL, Excel")
        #[arg(long, default_value = "")]
        skills: String,

        /// Sector interests, comma separated
        #[arg(long, default_value = "")]
        interests: String,

        /// Preferred location (city) or "remote"
        #[arg(long)]
        location: Option<String>,

        /// Experience (e.g., "Fresher" or "2 years")
        #[arg(long, default_value = "")]
        experience: String,

        /// Candidate belongs to a rural/tribal background
        #[arg(long)]
        rural: bool,

        /// Number of recommendations to return
        #[arg(short = 'k', long)]
        top: Option<usize>,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,
    },

    /// Extract a profile from a resume (PDF or TXT) and print ranked matches
    Resume {
        /// Path to the resume file
        file: PathBuf,

        /// Candidate belongs to a rural/tribal background
        #[arg(long)]
        rural: bool,

        /// Number of recommendations to return
        #[arg(short = 'k', long)]
        top: Option<usize>,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,
    },

    /// List registered students (company preview)
    Students,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}
