mod cli;
mod config;
mod dataset;
mod error;
mod listing;
mod output;
mod report;
mod score;
mod types;

use crate::error::IntyError;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn report_format(format: cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Text => report::OutputFormat::Text,
        cli::ReportFormat::Json => report::OutputFormat::Json,
    }
}

fn run() -> Result<i32, IntyError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(&cwd, cli.config.as_deref())?;

    match cli.command {
        cli::Commands::Score(cmd) => {
            let input_format = cmd.input_format.map(|format| match format {
                cli::InputFormatArg::Csv => dataset::InputFormat::Csv,
                cli::InputFormatArg::Json => dataset::InputFormat::Json,
                cli::InputFormatArg::Xlsx => dataset::InputFormat::Xlsx,
            });
            let sheet = cmd.sheet.unwrap_or_else(|| loaded.sheet_name());
            let table = dataset::load_table(&cmd.input, input_format, &sheet)?;
            if table.is_empty() {
                warn!(path = %cmd.input.display(), "dataset has no rows");
            }

            let rules = loaded.scoring_rules();
            let scores = score::score_table(&table, &rules);

            let output_path = cmd
                .output
                .unwrap_or_else(|| PathBuf::from(loaded.scored_file()));
            output::write_scored_file(&output_path, &table, &scores, &loaded.score_column())?;

            let top = score::rank::rank_companies(
                &table,
                &scores,
                &rules.fields.name,
                cmd.top.unwrap_or(0),
            );
            let summary = report::ScoringSummary::new(
                cmd.input.display().to_string(),
                output_path.display().to_string(),
                &scores,
                top,
            );
            info!(rows = summary.rows, mean = summary.mean_score, "scoring finished");

            if !cli.quiet {
                let rendered = report::render_scoring(&summary, report_format(cmd.format))?;
                print!("{rendered}");
                if matches!(cmd.format, cli::ReportFormat::Json) {
                    println!();
                }
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::List(cmd) => {
            if !cmd.input.exists() {
                return Err(IntyError::InputNotFound(cmd.input.display().to_string()));
            }
            let companies = listing::load_companies(&cmd.input)?;
            let query = listing::ListingQuery {
                city: cmd.city.unwrap_or_else(|| loaded.listing_city()),
                service: cmd.service.unwrap_or_else(|| loaded.listing_service()),
                order: if cmd.service_first {
                    listing::FilterOrder::ServiceFirst
                } else {
                    listing::FilterOrder::CityFirst
                },
            };
            let summary = listing::summarize(&companies, &query);

            let rendered = report::render_listing(&summary, report_format(cmd.format))?;
            print!("{rendered}");
            if matches!(cmd.format, cli::ReportFormat::Json) {
                println!();
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
