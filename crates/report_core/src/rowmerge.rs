//! Split-token repair.
//!
//! OCR engines routinely report one visual line as several adjacent
//! fragments ("Infantry" next to "Attack", or a number split from its "%"
//! sign). [`merge_rows`] repairs this by repeatedly merging tokens that
//! occupy the same visual row and touch horizontally, until a full pass
//! produces no merge. Merged tokens re-enter the pool, so a three-way
//! split collapses over two passes.

use crate::token::{Point, Quad, Token};

/// Tolerance on the vertical-center difference, as a fraction of the taller
/// of the two boxes.
const ROW_TOLERANCE: f64 = 0.2;

/// Maximum horizontal gap that still counts as "touching". Overlapping
/// boxes have a gap of zero and always qualify.
const TOUCH_TOLERANCE: f64 = 20.0;

/// Merges tokens that the OCR engine incorrectly split within one visual
/// row. Deterministic for a given input order: the scan takes the first
/// mergeable partner it finds, with no global-optimum search.
pub fn merge_rows(tokens: Vec<Token>) -> Vec<Token> {
    let mut current = tokens;
    loop {
        let mut merged_any = false;
        let mut consumed = vec![false; current.len()];
        let mut next = Vec::with_capacity(current.len());

        for i in 0..current.len() {
            if consumed[i] {
                continue;
            }
            let partner = (0..current.len()).find(|&j| {
                j != i
                    && !consumed[j]
                    && same_row(&current[i], &current[j])
                    && touching(&current[i], &current[j])
            });
            match partner {
                Some(j) => {
                    consumed[i] = true;
                    consumed[j] = true;
                    next.push(merge_pair(&current[i], &current[j]));
                    merged_any = true;
                }
                None => next.push(current[i].clone()),
            }
        }

        current = next;
        if !merged_any {
            return current;
        }
    }
}

fn same_row(a: &Token, b: &Token) -> bool {
    let tolerance = a.bounds.height().max(b.bounds.height()) * ROW_TOLERANCE;
    (a.bounds.center_y() - b.bounds.center_y()).abs() < tolerance
}

fn touching(a: &Token, b: &Token) -> bool {
    let overlap = (a.bounds.right().min(b.bounds.right()) - a.bounds.left().max(b.bounds.left()))
        .max(0.0);
    let gap = if a.bounds.right() < b.bounds.left() {
        b.bounds.left() - a.bounds.right()
    } else if b.bounds.right() < a.bounds.left() {
        a.bounds.left() - b.bounds.right()
    } else {
        0.0
    };
    gap < TOUCH_TOLERANCE || (overlap > 0.0 && overlap < TOUCH_TOLERANCE)
}

fn merge_pair(a: &Token, b: &Token) -> Token {
    let left = a.bounds.left().min(b.bounds.left());
    let right = a.bounds.right().max(b.bounds.right());
    let top = a.bounds.top().min(b.bounds.top());
    let bottom = a.bounds.bottom().max(b.bounds.bottom());

    // Left-to-right reading order for the concatenated text.
    let text = if a.bounds.left() < b.bounds.left() {
        format!("{} {}", a.text, b.text)
    } else {
        format!("{} {}", b.text, a.text)
    };

    Token {
        bounds: Quad([
            Point { x: left, y: top },
            Point { x: right, y: top },
            Point { x: right, y: bottom },
            Point { x: left, y: bottom },
        ]),
        text,
        confidence: a.confidence.min(b.confidence),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(x: f64, y: f64, w: f64, h: f64, text: &str, conf: f64) -> Token {
        Token::new([[x, y], [x + w, y], [x + w, y + h], [x, y + h]], text, conf)
    }

    #[test]
    fn merges_adjacent_fragments_in_one_row() {
        let tokens = vec![
            tok(10.0, 100.0, 80.0, 20.0, "Infantry", 0.9),
            tok(95.0, 101.0, 60.0, 20.0, "Attack", 0.8),
        ];
        let merged = merge_rows(tokens);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].text, "Infantry Attack");
        assert_eq!(merged[0].confidence, 0.8);
    }

    #[test]
    fn merged_box_is_union_bounding_box() {
        let merged = merge_rows(vec![
            tok(10.0, 100.0, 80.0, 20.0, "Infantry", 0.9),
            tok(95.0, 98.0, 60.0, 24.0, "Attack", 0.8),
        ]);
        assert_eq!(merged.len(), 1);
        let bounds = &merged[0].bounds;
        assert_eq!(bounds.left(), 10.0);
        assert_eq!(bounds.right(), 155.0);
        assert_eq!(bounds.top(), 98.0);
        assert_eq!(bounds.bottom(), 122.0);
    }

    #[test]
    fn concatenation_follows_reading_order_regardless_of_input_order() {
        let merged = merge_rows(vec![
            tok(95.0, 100.0, 60.0, 20.0, "Attack", 0.8),
            tok(10.0, 100.0, 80.0, 20.0, "Infantry", 0.9),
        ]);
        assert_eq!(merged[0].text, "Infantry Attack");
    }

    #[test]
    fn distant_rows_are_left_alone() {
        let tokens = vec![
            tok(10.0, 100.0, 80.0, 20.0, "Infantry Attack", 0.9),
            tok(10.0, 160.0, 80.0, 20.0, "Lancer Attack", 0.9),
        ];
        assert_eq!(merge_rows(tokens).len(), 2);
    }

    #[test]
    fn same_row_but_far_apart_is_not_merged() {
        let tokens = vec![
            tok(10.0, 100.0, 80.0, 20.0, "Infantry Attack", 0.9),
            tok(400.0, 100.0, 50.0, 20.0, "12%", 0.9),
        ];
        assert_eq!(merge_rows(tokens).len(), 2);
    }

    #[test]
    fn overlapping_boxes_in_a_row_still_merge() {
        // Overlap means a zero gap, which counts as touching.
        let tokens = vec![
            tok(10.0, 100.0, 80.0, 20.0, "Infantry", 0.9),
            tok(85.0, 100.0, 60.0, 20.0, "Attack", 0.8),
        ];
        let merged = merge_rows(tokens);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].text, "Infantry Attack");
    }

    #[test]
    fn three_fragments_collapse_over_two_passes() {
        let tokens = vec![
            tok(10.0, 100.0, 80.0, 20.0, "Infantry", 0.9),
            tok(95.0, 100.0, 60.0, 20.0, "Attack", 0.8),
            tok(160.0, 100.0, 50.0, 20.0, "Bonus", 0.7),
        ];
        let merged = merge_rows(tokens);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].text, "Infantry Attack Bonus");
        assert_eq!(merged[0].confidence, 0.7);
    }

    #[test]
    fn merge_is_idempotent() {
        let tokens = vec![
            tok(10.0, 100.0, 80.0, 20.0, "Infantry", 0.9),
            tok(95.0, 100.0, 60.0, 20.0, "Attack", 0.8),
            tok(10.0, 160.0, 80.0, 20.0, "Lancer", 0.9),
            tok(95.0, 161.0, 60.0, 20.0, "Defense", 0.8),
            tok(400.0, 300.0, 40.0, 20.0, "12%", 0.95),
        ];
        let once = merge_rows(tokens);
        let twice = merge_rows(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn lone_token_passes_through() {
        let tokens = vec![tok(10.0, 10.0, 50.0, 20.0, "Stats", 0.99)];
        assert_eq!(merge_rows(tokens.clone()), tokens);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(merge_rows(Vec::new()).is_empty());
    }
}
