//! Bonus-overview field extraction.
//!
//! The overview screen lists each bonus label with its percentage value on
//! the same line, but the OCR engine returns them as separate tokens in no
//! particular order. Each known label is therefore paired with the token
//! whose vertical center lies nearest to the label's own.
//!
//! Known heuristic limitation: when the OCR engine missed a label's true
//! value, the nearest remaining token can be another label's text. That
//! pairing then fails the numeric parse and the slot defaults to zero, so
//! no guard is attempted here.

use crate::stats::{OverviewStats, Stat, Unit};
use crate::token::Token;

/// Canonical overview labels and the slot each one populates.
const LABELS: [(&str, Unit, Stat); 16] = [
    ("Troops Attack", Unit::Troops, Stat::Attack),
    ("Troops Defense", Unit::Troops, Stat::Defense),
    ("Troops Lethality", Unit::Troops, Stat::Lethality),
    ("Troops Health", Unit::Troops, Stat::Health),
    ("Infantry Attack", Unit::Infantry, Stat::Attack),
    ("Infantry Defense", Unit::Infantry, Stat::Defense),
    ("Infantry Lethality", Unit::Infantry, Stat::Lethality),
    ("Infantry Health", Unit::Infantry, Stat::Health),
    ("Lancer Attack", Unit::Lancer, Stat::Attack),
    ("Lancer Defense", Unit::Lancer, Stat::Defense),
    ("Lancer Lethality", Unit::Lancer, Stat::Lethality),
    ("Lancer Health", Unit::Lancer, Stat::Health),
    ("Marksman Attack", Unit::Marksman, Stat::Attack),
    ("Marksman Defense", Unit::Marksman, Stat::Defense),
    ("Marksman Lethality", Unit::Marksman, Stat::Lethality),
    ("Marksman Health", Unit::Marksman, Stat::Health),
];

/// Extracts every known bonus field from one image's row-merged tokens.
/// Missing labels and unparseable values yield zero; a record always comes
/// back with all sixteen slots populated.
pub fn extract_overview(tokens: &[Token]) -> OverviewStats {
    let mut stats = OverviewStats::default();
    for (label, unit, stat) in LABELS {
        let Some(label_token) = tokens
            .iter()
            .find(|t| t.text.trim().eq_ignore_ascii_case(label))
        else {
            continue;
        };
        let label_y = label_token.bounds.mean_y();

        // Nearest other token by vertical center. Candidates are excluded
        // by text equality, not position, mirroring how duplicate texts
        // collapse on this screen.
        let mut nearest: Option<(&Token, f64)> = None;
        for candidate in tokens.iter().filter(|t| t.text != label_token.text) {
            let distance = (candidate.bounds.mean_y() - label_y).abs();
            if nearest.map_or(true, |(_, best)| distance < best) {
                nearest = Some((candidate, distance));
            }
        }

        if let Some((value_token, _)) = nearest {
            stats.vector_mut(unit).set(stat, parse_percent(&value_token.text));
        }
    }
    stats
}

/// Parses an optionally `%`-suffixed non-negative decimal number.
/// Anything else, including signs and stray characters, yields 0.0.
fn parse_percent(text: &str) -> f64 {
    let trimmed = text.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed);
    let well_formed = !number.is_empty()
        && number.chars().all(|c| c.is_ascii_digit() || c == '.')
        && number.chars().filter(|&c| c == '.').count() <= 1
        && number != ".";
    if well_formed {
        number.parse().unwrap_or(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(y: f64, text: &str) -> Token {
        Token::new(
            [[0.0, y], [100.0, y], [100.0, y + 20.0], [0.0, y + 20.0]],
            text,
            0.9,
        )
    }

    fn value_tok(y: f64, text: &str) -> Token {
        Token::new(
            [[300.0, y], [360.0, y], [360.0, y + 20.0], [300.0, y + 20.0]],
            text,
            0.9,
        )
    }

    #[test]
    fn pairs_each_label_with_nearest_row() {
        let tokens = vec![
            tok(0.0, "Troops Attack"),
            value_tok(1.0, "12.5%"),
            tok(40.0, "Infantry Health"),
            value_tok(41.0, "30%"),
        ];
        let stats = extract_overview(&tokens);
        assert_eq!(stats.troops.get(Stat::Attack), 12.5);
        assert_eq!(stats.infantry.get(Stat::Health), 30.0);
        assert_eq!(stats.lancer.get(Stat::Attack), 0.0);
    }

    #[test]
    fn label_matching_is_exact_and_case_insensitive() {
        let tokens = vec![tok(0.0, "  troops attack "), value_tok(1.0, "8%")];
        let stats = extract_overview(&tokens);
        assert_eq!(stats.troops.get(Stat::Attack), 8.0);
    }

    #[test]
    fn no_known_labels_yields_all_zero_record() {
        let tokens = vec![tok(0.0, "Governor Profile"), value_tok(1.0, "42%")];
        assert_eq!(extract_overview(&tokens), OverviewStats::default());
    }

    #[test]
    fn unparseable_value_defaults_to_zero() {
        let tokens = vec![tok(0.0, "Lancer Defense"), value_tok(1.0, "1z.3%")];
        let stats = extract_overview(&tokens);
        assert_eq!(stats.lancer.get(Stat::Defense), 0.0);
    }

    #[test]
    fn duplicate_labels_take_the_first_by_scan_order() {
        let tokens = vec![
            tok(0.0, "Marksman Attack"),
            value_tok(1.0, "5%"),
            tok(200.0, "Marksman Attack"),
            value_tok(201.0, "9%"),
        ];
        let stats = extract_overview(&tokens);
        assert_eq!(stats.marksman.get(Stat::Attack), 5.0);
    }

    #[test]
    fn nearest_token_may_be_another_label() {
        // The value row was missed entirely; the next label wins the
        // proximity search, fails to parse, and the slot stays zero.
        let tokens = vec![tok(0.0, "Troops Attack"), tok(30.0, "Troops Defense")];
        let stats = extract_overview(&tokens);
        assert_eq!(stats.troops.get(Stat::Attack), 0.0);
    }

    #[test]
    fn percent_parse_accepts_plain_and_suffixed_decimals() {
        assert_eq!(parse_percent("12%"), 12.0);
        assert_eq!(parse_percent("12.75%"), 12.75);
        assert_eq!(parse_percent(" 7 "), 7.0);
        assert_eq!(parse_percent("+12%"), 0.0);
        assert_eq!(parse_percent("-3"), 0.0);
        assert_eq!(parse_percent("1.2.3"), 0.0);
        assert_eq!(parse_percent("%"), 0.0);
        assert_eq!(parse_percent(""), 0.0);
    }
}
