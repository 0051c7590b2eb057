//! Composite scores for a single source/target pair.
//!
//! `composite = (lexical + statistical) / 2 + heuristic_boost`
//!
//! The composite is not clamped; two or more hint matches on a close name
//! push it above 1.0.

use serde::Serialize;

/// The three signals for one pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PairScore {
    /// Gestalt character ratio (0.0 to 1.0).
    pub lexical: f64,
    /// TF-IDF cosine similarity (0.0 to 1.0).
    pub statistical: f64,
    /// Sum of hint boosts (multiple of 0.3, never negative).
    pub heuristic_boost: f64,
}

impl PairScore {
    /// Final, unclamped score for the pair.
    #[must_use]
    pub fn composite(&self) -> f64 {
        (self.lexical + self.statistical) / 2.0 + self.heuristic_boost
    }
}

/// Score for a single pair with its breakdown.
#[derive(Debug, Clone)]
pub struct ColumnScore {
    /// Final composite score.
    pub score: f64,
    /// Breakdown of score components for explainability.
    pub explanation: Vec<ScoreComponent>,
}

impl ColumnScore {
    /// Human-readable explanation of the score.
    pub fn explain(&self) -> String {
        self.explanation
            .iter()
            .map(|c| format!("{}: {:.0}%", c.name, c.value * 100.0))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// A component contributing to the final score.
#[derive(Debug, Clone)]
pub struct ScoreComponent {
    /// Component name (e.g., "Lexical similarity").
    pub name: &'static str,
    /// Contribution to the composite score.
    pub value: f64,
    /// Human-readable description.
    pub description: String,
}
