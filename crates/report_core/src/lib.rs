//! Core engine for reconstructing structured records from OCR detections.
//!
//! This crate turns the unordered, sometimes fragmented text tokens an OCR
//! engine reports for two game screens ("bonus overview" and "battle
//! report") into structured numeric records: per-troop-class bonus vectors
//! and battle outcome counts.
//!
//! The engine is a pure, synchronous transformation over already-captured
//! token lists. Invoking the OCR engine, decoding images, and the HTTP
//! surface all live in the surrounding crates.

pub mod error;
pub mod merge;
pub mod overview;
pub mod page;
pub mod pipeline;
pub mod report;
pub mod rowmerge;
pub mod stats;
pub mod token;

pub use error::Error;
pub use pipeline::{parse_battle_report, parse_bonus_overview, ReportOptions};
pub use stats::{
    BattleOutcome, BattleReport, OverviewStats, SideStats, Stat, StatVector, TroopOutcome, Unit,
    UnitStats,
};
pub use token::{Point, Quad, RawDetection, Token};
