//! Cross-image merging of overview records.
//!
//! Governors typically upload several screenshots of the same overview
//! panel; any single capture may have lost fields to OCR noise. Merging
//! takes the element-wise maximum per slot, trusting whichever image read
//! a field successfully over a zero/missed read, then folds the shared
//! troops bonus additively into each specific class.

use crate::error::Error;
use crate::stats::{OverviewStats, Unit, UnitStats};

/// Combines one record per uploaded image into the final single-side
/// record. Requires at least one record.
pub fn merge_overview(records: &[OverviewStats]) -> Result<UnitStats, Error> {
    let first = records.first().ok_or(Error::NoRecords)?;

    let mut combined = first.clone();
    for record in &records[1..] {
        for unit in Unit::ALL {
            let max = combined.vector(unit).max(*record.vector(unit));
            *combined.vector_mut(unit) = max;
        }
    }

    // Fold the shared bucket into each class, then drop it.
    let troops = combined.troops;
    Ok(UnitStats {
        infantry: combined.infantry.add(troops).round2(),
        lancer: combined.lancer.add(troops).round2(),
        marksman: combined.marksman.add(troops).round2(),
    })
}
