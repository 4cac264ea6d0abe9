//! Token model for OCR detections.
//!
//! A token is one OCR-reported text detection: a quadrilateral region, the
//! recognized text, and a confidence score. The OCR engine reports each
//! detection as a bare `[box, text, confidence]` tuple; [`RawDetection`]
//! deserializes that wire shape and is converted into a [`Token`] at the
//! ingestion boundary, so no tuple/object ambiguity reaches the engine.

use serde::{Deserialize, Serialize};

/// A single (x, y) coordinate in image space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Quadrilateral region of one detection: four corners in top-left,
/// top-right, bottom-right, bottom-left order.
///
/// Corners are not guaranteed to be axis-aligned; all derived measures
/// treat them as approximately so.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quad(pub [Point; 4]);

impl Quad {
    pub fn from_points(points: [[f64; 2]; 4]) -> Self {
        Self(points.map(|[x, y]| Point { x, y }))
    }

    /// Leftmost x-coordinate over all corners.
    pub fn left(&self) -> f64 {
        self.0.iter().map(|p| p.x).fold(f64::INFINITY, f64::min)
    }

    /// Rightmost x-coordinate over all corners.
    pub fn right(&self) -> f64 {
        self.0.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn top(&self) -> f64 {
        self.0.iter().map(|p| p.y).fold(f64::INFINITY, f64::min)
    }

    pub fn bottom(&self) -> f64 {
        self.0.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max)
    }

    /// Vertical extent of the region.
    pub fn height(&self) -> f64 {
        self.bottom() - self.top()
    }

    /// Vertical midpoint, used for row grouping.
    pub fn center_y(&self) -> f64 {
        (self.top() + self.bottom()) / 2.0
    }

    /// Average y over all four corners, used for label/value pairing.
    pub fn mean_y(&self) -> f64 {
        self.0.iter().map(|p| p.y).sum::<f64>() / 4.0
    }
}

/// One OCR text detection. Immutable once built; every downstream stage
/// consumes tokens by reference or replaces them wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub bounds: Quad,
    pub text: String,
    pub confidence: f64,
}

impl Token {
    pub fn new(points: [[f64; 2]; 4], text: impl Into<String>, confidence: f64) -> Self {
        Self {
            bounds: Quad::from_points(points),
            text: text.into(),
            confidence,
        }
    }
}

/// Wire shape of one detection exactly as the OCR engine reports it:
/// `[[[x, y]; 4], text, confidence]`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDetection(pub [[f64; 2]; 4], pub String, pub f64);

impl From<RawDetection> for Token {
    fn from(raw: RawDetection) -> Self {
        Token::new(raw.0, raw.1, raw.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_measures() {
        let quad = Quad::from_points([[10.0, 20.0], [50.0, 20.0], [50.0, 40.0], [10.0, 40.0]]);
        assert_eq!(quad.left(), 10.0);
        assert_eq!(quad.right(), 50.0);
        assert_eq!(quad.height(), 20.0);
        assert_eq!(quad.center_y(), 30.0);
        assert_eq!(quad.mean_y(), 30.0);
    }

    #[test]
    fn mean_y_differs_from_center_for_skewed_quads() {
        // Bottom edge sags on the right; the corner average shifts with it.
        let quad = Quad::from_points([[0.0, 0.0], [10.0, 0.0], [10.0, 12.0], [0.0, 8.0]]);
        assert_eq!(quad.center_y(), 6.0);
        assert_eq!(quad.mean_y(), 5.0);
    }

    #[test]
    fn raw_detection_deserializes_wire_tuple() {
        let json = r#"[[[1.0, 2.0], [3.0, 2.0], [3.0, 4.0], [1.0, 4.0]], "Infantry", 0.97]"#;
        let raw: RawDetection = serde_json::from_str(json).unwrap();
        let token = Token::from(raw);
        assert_eq!(token.text, "Infantry");
        assert_eq!(token.confidence, 0.97);
        assert_eq!(token.bounds.left(), 1.0);
        assert_eq!(token.bounds.bottom(), 4.0);
    }
}
