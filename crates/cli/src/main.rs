//! report-reader CLI
//!
//! Parses pre-captured OCR detection dumps (one JSON file per screenshot,
//! each an array of `[box, text, confidence]` entries as the OCR engine
//! reports them) through the same pipelines the server uses, and prints
//! the structured record as JSON.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use report_core::{
    parse_battle_report, parse_bonus_overview, RawDetection, ReportOptions, Token,
};

#[derive(Parser)]
#[command(name = "report-reader")]
#[command(about = "Reconstruct game stats from OCR detection dumps", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse bonus-overview dumps into one merged bonus record
    Overview {
        /// Detection dump files, one per screenshot
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Parse battle-report dumps into per-side stats
    Report {
        /// Detection dump files, one per screenshot
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Also read the battle-overview outcome table
        #[arg(long)]
        outcome: bool,

        /// Use the legacy strict stats-page search, which rejects images
        /// mentioning the special-bonuses or enemy overlays
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Overview { files } => {
            let images = load_images(&files)?;
            let stats = parse_bonus_overview(&images)?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        Commands::Report {
            files,
            outcome,
            strict,
        } => {
            let images = load_images(&files)?;
            let options = ReportOptions {
                stats_only: !outcome,
                strict_stats_page: strict,
            };
            let report = parse_battle_report(&images, &options)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

fn load_images(files: &[PathBuf]) -> Result<Vec<Vec<Token>>> {
    files
        .iter()
        .map(|path| {
            let data = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let detections: Vec<RawDetection> = serde_json::from_str(&data)
                .with_context(|| format!("parsing {}", path.display()))?;
            Ok(detections.into_iter().map(Token::from).collect())
        })
        .collect()
}
