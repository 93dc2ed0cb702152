//! Bid matcher: opportunity matching and ranking for procurement notices

mod analysis;
mod classify;
mod cli;
mod config;
mod error;
mod matching;
mod output;
mod profile;
mod sources;

use analysis::RequirementAnalyzer;
use clap::Parser;
use classify::Classifier;
use cli::{Cli, Commands, ConfigAction, OutputFormat};
use config::Config;
use error::{BidMatcherError, Result};
use log::{error, info};
use matching::Matcher;
use output::report;
use profile::CapabilityProfile;
use sources::sample::{FederalSampleSource, UgandaSampleSource};
use sources::OpportunitySource;
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

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Match {
            profile,
            company,
            days_back,
            max,
            quick,
            budget_secs,
            output,
            detailed,
        } => {
            let output_format = cli::parse_output_format(&output).map_err(BidMatcherError::InvalidInput)?;

            info!("Starting opportunity matching");

            let profile_text = std::fs::read_to_string(&profile).map_err(|e| {
                BidMatcherError::InvalidInput(format!(
                    "Cannot read profile file {}: {}",
                    profile.display(),
                    e
                ))
            })?;

            let company_name = company.unwrap_or_else(|| config.company.name.clone());
            let capability_profile =
                CapabilityProfile::from_text(&profile_text, &company_name, &config.search_keywords());

            if capability_profile.is_empty() {
                return Err(BidMatcherError::Profile(
                    "Profile file contains no usable text".to_string(),
                ));
            }
            info!(
                "Profile loaded: {} chars, {} technical keywords",
                capability_profile.content.len(),
                capability_profile.technical_keywords.len()
            );

            let mut search_keywords = config.search_keywords();
            if quick {
                search_keywords.truncate(config.search.quick_search_keywords);
                info!("Quick search enabled: limiting to {} keywords", search_keywords.len());
            }

            let collectors: Vec<Box<dyn OpportunitySource>> = vec![
                Box::new(FederalSampleSource),
                Box::new(UgandaSampleSource),
            ];
            let days = days_back.unwrap_or(config.search.days_back);
            let mut opportunities = sources::collect_all(&collectors, &search_keywords, days);
            opportunities.truncate(max.unwrap_or(config.search.max_opportunities));

            let classifier = Classifier::new()?;
            let relevant: Vec<_> = opportunities
                .into_iter()
                .filter(|opp| classifier.is_technology_related(opp))
                .collect();
            info!("{} technology-relevant opportunities to match", relevant.len());

            let analyzer = RequirementAnalyzer::new(config.analysis.clone());
            let mut matcher = Matcher::new(analyzer);
            matcher.set_profile(capability_profile);

            let budget = budget_secs.unwrap_or(config.analysis.time_budget_secs);
            let results = matcher.match_all(&relevant, false, budget).await;

            match output_format {
                OutputFormat::Console => report::render_console(&results, &classifier, detailed),
                OutputFormat::Json => println!("{}", report::render_json(&results)?),
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Company: {}", config.company.name);
                println!("Codes: {}", config.company.codes.join(", "));
                println!("IT keywords: {}", config.search.it_keywords.join(", "));
                println!(
                    "Cybersecurity keywords: {}",
                    config.search.cybersecurity_keywords.join(", ")
                );
                println!("Days back: {}", config.search.days_back);
                println!("Max opportunities: {}", config.search.max_opportunities);
                println!("Analysis budget: {}s", config.analysis.time_budget_secs);
            }

            Some(ConfigAction::Reset) => {
                let default_config = Config::default();
                default_config.save()?;
                println!("Configuration reset to defaults");
            }
        },
    }

    Ok(())
}
