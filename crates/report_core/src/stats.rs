//! Structured numeric records assembled from extracted fields.

use serde::{Deserialize, Serialize};

/// Slot order within a [`StatVector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stat {
    Attack = 0,
    Defense = 1,
    Lethality = 2,
    Health = 3,
}

/// Troop classes appearing on the game screens. `Troops` is the shared
/// bucket listed on the bonus overview; merging folds it into the other
/// three and drops it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Troops,
    Infantry,
    Lancer,
    Marksman,
}

impl Unit {
    pub const ALL: [Unit; 4] = [Unit::Troops, Unit::Infantry, Unit::Lancer, Unit::Marksman];
}

/// `[attack, defense, lethality, health]` bonus values for one troop class.
/// Serializes as a bare 4-element array.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatVector(pub [f64; 4]);

impl StatVector {
    pub fn get(&self, stat: Stat) -> f64 {
        self.0[stat as usize]
    }

    pub fn set(&mut self, stat: Stat, value: f64) {
        self.0[stat as usize] = value;
    }

    /// Element-wise maximum.
    pub(crate) fn max(self, other: StatVector) -> StatVector {
        StatVector([
            self.0[0].max(other.0[0]),
            self.0[1].max(other.0[1]),
            self.0[2].max(other.0[2]),
            self.0[3].max(other.0[3]),
        ])
    }

    /// Element-wise sum.
    pub(crate) fn add(self, other: StatVector) -> StatVector {
        StatVector([
            self.0[0] + other.0[0],
            self.0[1] + other.0[1],
            self.0[2] + other.0[2],
            self.0[3] + other.0[3],
        ])
    }

    /// Rounds every slot to 2 decimal places.
    pub(crate) fn round2(self) -> StatVector {
        StatVector(self.0.map(|v| (v * 100.0).round() / 100.0))
    }
}

/// Per-image bonus-overview record, with the shared troops bucket still
/// present. Transient: never escapes the merge step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverviewStats {
    pub troops: StatVector,
    pub infantry: StatVector,
    pub lancer: StatVector,
    pub marksman: StatVector,
}

impl OverviewStats {
    pub fn vector(&self, unit: Unit) -> &StatVector {
        match unit {
            Unit::Troops => &self.troops,
            Unit::Infantry => &self.infantry,
            Unit::Lancer => &self.lancer,
            Unit::Marksman => &self.marksman,
        }
    }

    pub fn vector_mut(&mut self, unit: Unit) -> &mut StatVector {
        match unit {
            Unit::Troops => &mut self.troops,
            Unit::Infantry => &mut self.infantry,
            Unit::Lancer => &mut self.lancer,
            Unit::Marksman => &mut self.marksman,
        }
    }
}

/// One side's final record. Always carries exactly these three classes;
/// fields that were never extracted stay zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitStats {
    pub infantry: StatVector,
    pub lancer: StatVector,
    pub marksman: StatVector,
}

impl UnitStats {
    /// `None` for [`Unit::Troops`], which has no slot once folded in.
    pub fn vector_mut(&mut self, unit: Unit) -> Option<&mut StatVector> {
        match unit {
            Unit::Troops => None,
            Unit::Infantry => Some(&mut self.infantry),
            Unit::Lancer => Some(&mut self.lancer),
            Unit::Marksman => Some(&mut self.marksman),
        }
    }
}

/// Opposing sides' stats read from the battle-report stats table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SideStats {
    pub left: UnitStats,
    pub right: UnitStats,
}

/// Troop counts for one side of the battle-overview table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TroopOutcome {
    pub initial_troops: u64,
    pub losses: u64,
    pub injured: u64,
    pub lightly_injured: u64,
    pub survivors: u64,
}

/// Both sides' troop counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleOutcome {
    pub left: TroopOutcome,
    pub right: TroopOutcome,
}

/// Everything read from one battle report. `outcome` is present only when
/// outcome extraction was requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleReport {
    pub left: UnitStats,
    pub right: UnitStats,
    pub outcome: Option<BattleOutcome>,
}
