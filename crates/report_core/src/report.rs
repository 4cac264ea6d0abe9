//! Battle-report field extraction.
//!
//! On the battle-report tables every label token sits between the left
//! army's value and the right army's value. Extraction walks the tokens in
//! the OCR-native order the row merger produced (not re-sorted by
//! geometry) and reads each recognized label's immediate neighbors.
//!
//! Unlike the overview path, a neighbor that is missing or unparseable
//! propagates as an error: index-adjacent mismatches almost always mean a
//! structurally wrong page was matched.

use crate::error::Error;
use crate::stats::{BattleOutcome, SideStats, Stat, TroopOutcome, Unit};
use crate::token::Token;

/// Stats-table label substrings and their destination slots.
const STAT_LABELS: [(&str, Unit, Stat); 12] = [
    ("infantry attack", Unit::Infantry, Stat::Attack),
    ("infantry defense", Unit::Infantry, Stat::Defense),
    ("infantry lethality", Unit::Infantry, Stat::Lethality),
    ("infantry health", Unit::Infantry, Stat::Health),
    ("lancer attack", Unit::Lancer, Stat::Attack),
    ("lancer defense", Unit::Lancer, Stat::Defense),
    ("lancer lethality", Unit::Lancer, Stat::Lethality),
    ("lancer health", Unit::Lancer, Stat::Health),
    ("marksman attack", Unit::Marksman, Stat::Attack),
    ("marksman defense", Unit::Marksman, Stat::Defense),
    ("marksman lethality", Unit::Marksman, Stat::Lethality),
    ("marksman health", Unit::Marksman, Stat::Health),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutcomeField {
    InitialTroops,
    Losses,
    Injured,
    LightlyInjured,
    Survivors,
}

/// Outcome-table labels in priority order. The bare "injured" entry vetoes
/// tokens that also mention "lightly", so both rows populate independently.
const OUTCOME_LABELS: [(&str, Option<&str>, OutcomeField); 5] = [
    ("troops", None, OutcomeField::InitialTroops),
    ("losses", None, OutcomeField::Losses),
    ("injured", Some("lightly"), OutcomeField::Injured),
    ("lightly injured", None, OutcomeField::LightlyInjured),
    ("survivors", None, OutcomeField::Survivors),
];

/// Reads both sides' stat vectors from the stats table. Labels that never
/// appear leave their slots at zero.
pub fn extract_report_stats(tokens: &[Token]) -> Result<SideStats, Error> {
    let mut stats = SideStats::default();
    for (index, token) in tokens.iter().enumerate() {
        let text = token.text.trim().to_lowercase();
        let Some((label, unit, stat)) = STAT_LABELS
            .iter()
            .copied()
            .find(|&(needle, _, _)| text.contains(needle))
        else {
            continue;
        };

        let (left, right) = neighbors(tokens, index, label)?;
        let left_value = parse_stat(&left.text, label)?;
        let right_value = parse_stat(&right.text, label)?;
        if let Some(vector) = stats.left.vector_mut(unit) {
            vector.set(stat, left_value);
        }
        if let Some(vector) = stats.right.vector_mut(unit) {
            vector.set(stat, right_value);
        }
    }
    Ok(stats)
}

/// Reads both sides' troop counts from the battle-overview table.
pub fn extract_outcome(tokens: &[Token]) -> Result<BattleOutcome, Error> {
    let mut outcome = BattleOutcome::default();
    for (index, token) in tokens.iter().enumerate() {
        let text = token.text.trim().to_lowercase();
        let Some((label, _, field)) = OUTCOME_LABELS.iter().copied().find(|&(needle, veto, _)| {
            text.contains(needle) && veto.map_or(true, |v| !text.contains(v))
        }) else {
            continue;
        };

        let (left, right) = neighbors(tokens, index, label)?;
        *field_mut(&mut outcome.left, field) = parse_count(&left.text, label)?;
        *field_mut(&mut outcome.right, field) = parse_count(&right.text, label)?;
    }
    Ok(outcome)
}

fn field_mut(outcome: &mut TroopOutcome, field: OutcomeField) -> &mut u64 {
    match field {
        OutcomeField::InitialTroops => &mut outcome.initial_troops,
        OutcomeField::Losses => &mut outcome.losses,
        OutcomeField::Injured => &mut outcome.injured,
        OutcomeField::LightlyInjured => &mut outcome.lightly_injured,
        OutcomeField::Survivors => &mut outcome.survivors,
    }
}

fn neighbors<'a>(tokens: &'a [Token], index: usize, label: &str) -> Result<(&'a Token, &'a Token), Error> {
    let left = index.checked_sub(1).map(|i| &tokens[i]);
    let right = tokens.get(index + 1);
    match (left, right) {
        (Some(left), Some(right)) => Ok((left, right)),
        _ => Err(Error::MissingNeighbor {
            label: label.to_string(),
        }),
    }
}

/// Replaces the digit lookalikes `o`/`O` with `0`.
fn normalize_digits(text: &str) -> String {
    text.trim()
        .chars()
        .map(|c| if c == 'o' || c == 'O' { '0' } else { c })
        .collect()
}

fn parse_stat(text: &str, label: &str) -> Result<f64, Error> {
    let cleaned: String = normalize_digits(text)
        .chars()
        .filter(|&c| c != '%' && c != '+')
        .collect();
    cleaned.trim().parse().map_err(|_| Error::ValueParse {
        label: label.to_string(),
        value: text.to_string(),
    })
}

fn parse_count(text: &str, label: &str) -> Result<u64, Error> {
    let cleaned: String = normalize_digits(text)
        .chars()
        .filter(|&c| !matches!(c, '%' | '+' | ','))
        .collect();
    cleaned.trim().parse().map_err(|_| Error::ValueParse {
        label: label.to_string(),
        value: text.to_string(),
    })
}
