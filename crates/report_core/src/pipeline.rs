//! Top-level parsing pipelines.
//!
//! Ties the stages together: row-merge each image's tokens, classify which
//! image shows the wanted screen, extract fields, and (overview path only)
//! merge the per-image records into one.

use crate::error::Error;
use crate::merge::merge_overview;
use crate::overview::extract_overview;
use crate::page::{find_page, PageQuery};
use crate::report::{extract_outcome, extract_report_stats};
use crate::rowmerge::merge_rows;
use crate::stats::{BattleReport, OverviewStats, UnitStats};
use crate::token::Token;

/// Options for battle-report parsing.
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    /// Skip the battle-overview outcome table and only read the stats
    /// table.
    pub stats_only: bool,
    /// Use the legacy strict stats-page search, which rejects images that
    /// mention the special-bonuses or enemy overlays.
    pub strict_stats_page: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            stats_only: true,
            strict_stats_page: false,
        }
    }
}

/// Parses a batch of bonus-overview screenshots into one merged record.
/// Every image contributes a record; fields any single capture missed are
/// recovered from the others by max-merge.
pub fn parse_bonus_overview(images: &[Vec<Token>]) -> Result<UnitStats, Error> {
    let records: Vec<OverviewStats> = images
        .iter()
        .map(|tokens| extract_overview(&merge_rows(tokens.clone())))
        .collect();
    merge_overview(&records)
}

/// Parses a batch of battle-report screenshots: classifies the stats page,
/// extracts both sides' stats, and optionally reads the battle-overview
/// outcome table from its own page.
pub fn parse_battle_report(
    images: &[Vec<Token>],
    options: &ReportOptions,
) -> Result<BattleReport, Error> {
    // Row-merge every image up front; classification and extraction both
    // operate on repaired tokens.
    let merged: Vec<Vec<Token>> = images
        .iter()
        .map(|tokens| merge_rows(tokens.clone()))
        .collect();

    let stats_query = if options.strict_stats_page {
        PageQuery::STATS_STRICT
    } else {
        PageQuery::STATS
    };
    let (_, tokens) = find_page(&merged, &stats_query)?;
    let stats = extract_report_stats(tokens)?;

    let outcome = if options.stats_only {
        None
    } else {
        let (_, tokens) = find_page(&merged, &PageQuery::BATTLE_OVERVIEW)?;
        Some(extract_outcome(tokens)?)
    };

    Ok(BattleReport {
        left: stats.left,
        right: stats.right,
        outcome,
    })
}
