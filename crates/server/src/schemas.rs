//! Request and response bodies for the REST API.

use report_core::{BattleOutcome, UnitStats};
use serde::{Deserialize, Serialize};

/// One uploaded screenshot.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageData {
    /// Base64-encoded image bytes.
    pub image_data: String,
}

fn default_ocr_engine() -> String {
    "rapidocr".to_string()
}

fn default_stats_only() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReadBonusOverviewRequest {
    pub images: Vec<ImageData>,
    /// OCR engine selector; only "rapidocr" is currently wired up.
    #[serde(default = "default_ocr_engine")]
    pub ocr_engine: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReadBattleReportRequest {
    pub images: Vec<ImageData>,
    #[serde(default = "default_ocr_engine")]
    pub ocr_engine: String,
    /// When true, only the stats table is read and the battle-overview
    /// outcome table is skipped.
    #[serde(default = "default_stats_only")]
    pub stats_only: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct BonusOverviewResponse {
    pub stats: UnitStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct BattleReportResponse {
    pub troops_outcome: Option<BattleOutcome>,
    pub left_stats: UnitStats,
    pub right_stats: UnitStats,
}
