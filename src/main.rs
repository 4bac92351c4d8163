//! Internship matcher: rank internship postings for student profiles

mod catalog;
mod cli;
mod config;
mod error;
mod matching;
mod output;
mod profile;

use chrono::Utc;
use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{MatcherError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use matching::embedding::Model2VecEncoder;
use matching::{RankingEngine, Weights};
use output::OutputFormat;
use profile::extractor::ResumeExtractor;
use profile::store::ProfileStore;
use profile::StudentProfile;
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, cli.catalog, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, catalog_override: Option<PathBuf>, config: Config) -> Result<()> {
    match command {
        Commands::Recommend {
            name,
            email,
            education,
            skills,
            interests,
            location,
            experience,
            rural,
            top,
            output,
        } => {
            let profile = StudentProfile {
                name: name.trim().to_string(),
                email: email.trim().to_string(),
                education: education.trim().to_string(),
                skills: skills.trim().to_string(),
                sector_interests: interests.trim().to_string(),
                location_pref: location.unwrap_or_default().trim().to_string(),
                experience: experience.trim().to_string(),
                is_rural: rural,
                source: "manual".to_string(),
                timestamp: Utc::now(),
            };

            save_and_recommend(&profile, top, &output, catalog_override.as_deref(), &config).await
        }

        Commands::Resume {
            file,
            rural,
            top,
            output,
        } => {
            info!("Extracting profile from {}", file.display());
            let bytes = tokio::fs::read(&file).await?;

            let extractor = ResumeExtractor::new(&config.models);
            let extracted = extractor.extract(&bytes).await;
            if extracted.is_structured() {
                println!("Profile extracted via LLM.");
            } else {
                println!("Profile extracted via heuristic fallback.");
            }

            let fields = extracted.fields();
            let profile = StudentProfile {
                name: fields.name.clone(),
                email: fields.email.clone(),
                education: fields.education.clone(),
                skills: fields.skills.clone(),
                sector_interests: fields.sector_interests.clone(),
                location_pref: fields.location_pref.clone(),
                experience: fields.experience.clone(),
                is_rural: rural,
                source: "resume".to_string(),
                timestamp: Utc::now(),
            };

            save_and_recommend(&profile, top, &output, catalog_override.as_deref(), &config).await
        }

        Commands::Students => {
            let store = ProfileStore::new(&config.data.students_path);
            let profiles = store.list()?;
            println!("{}", output::format_students(&profiles));
            Ok(())
        }

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let content = toml::to_string_pretty(&config)
                    .map_err(|e| MatcherError::Configuration(e.to_string()))?;
                println!("{}", content);
                Ok(())
            }
            ConfigAction::Reset => {
                let defaults = Config::default();
                defaults.save()?;
                println!("Configuration reset to defaults.");
                Ok(())
            }
        },
    }
}

async fn save_and_recommend(
    profile: &StudentProfile,
    top: Option<usize>,
    output: &str,
    catalog_override: Option<&Path>,
    config: &Config,
) -> Result<()> {
    let format = OutputFormat::parse(output).map_err(MatcherError::InvalidInput)?;

    // Persist before ranking so a ranking failure never loses the profile.
    let store = ProfileStore::new(&config.data.students_path);
    store.save(profile)?;
    println!("Profile saved for {} ({})", profile.name, profile.email);

    let engine = build_engine(catalog_override, config)?;

    let top_k = top.unwrap_or(config.scoring.default_top_k);
    let weights = Weights {
        embed: config.scoring.embed_weight,
        jaccard: config.scoring.jaccard_weight,
        location: config.scoring.location_weight,
        gov: config.scoring.gov_weight,
    };

    let results = engine.recommend(&profile.to_query(), top_k, &weights)?;
    println!("{}", output::format_results(&results, format)?);
    Ok(())
}

fn build_engine(catalog_override: Option<&Path>, config: &Config) -> Result<RankingEngine> {
    let catalog_path = catalog_override.unwrap_or(&config.data.catalog_path);
    let entries = catalog::load_catalog(catalog_path)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Embedding {} catalog entries...", entries.len()));
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let encoder = Model2VecEncoder::load(&config.embedding_model_path())?;
    let engine = RankingEngine::new(entries, Box::new(encoder));

    spinner.finish_and_clear();
    engine
}
