//! Column mapping records produced by the matcher.
//!
//! A [`MappingResult`] holds exactly one [`Mapping`] per source column, in
//! source order. Confidence values are raw composite scores rounded to two
//! decimals and are never clamped to 1.0.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::column::ColumnName;

/// Rounds a raw score to the two-decimal precision used for confidences.
///
/// Halves round to the even digit, so 0.125 becomes 0.12 and 0.135 becomes 0.14.
#[must_use]
pub fn round_confidence(score: f64) -> f64 {
    (score * 100.0).round_ties_even() / 100.0
}

/// Confidence level categories for mapping quality assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    /// At or above the low threshold, below medium. Needs manual verification.
    Low,
    /// At or above the medium threshold, below high. Should be reviewed.
    Medium,
    /// At or above the high threshold.
    High,
}

impl ConfidenceLevel {
    /// Returns a human-readable description of the confidence level.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::High => "high confidence - likely correct",
            Self::Medium => "medium confidence - should review",
            Self::Low => "low confidence - needs verification",
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Configurable thresholds for categorizing mapping confidence.
///
/// - Below `low`: uncategorized
/// - `low` to `medium`: [`ConfidenceLevel::Low`]
/// - `medium` to `high`: [`ConfidenceLevel::Medium`]
/// - At or above `high`: [`ConfidenceLevel::High`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceThresholds {
    /// Minimum confidence for high-quality matches (default: 0.95).
    pub high: f64,
    /// Minimum confidence for medium-quality matches (default: 0.80).
    pub medium: f64,
    /// Minimum confidence to be categorized at all (default: 0.60).
    pub low: f64,
}

impl Default for ConfidenceThresholds {
    fn default() -> Self {
        Self {
            high: 0.95,
            medium: 0.80,
            low: 0.60,
        }
    }
}

impl ConfidenceThresholds {
    /// Returns `None` if the score is below the low threshold.
    #[must_use]
    pub fn categorize(&self, confidence: f64) -> Option<ConfidenceLevel> {
        if confidence >= self.high {
            Some(ConfidenceLevel::High)
        } else if confidence >= self.medium {
            Some(ConfidenceLevel::Medium)
        } else if confidence >= self.low {
            Some(ConfidenceLevel::Low)
        } else {
            None
        }
    }
}

/// Proposed mapping for a single source column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mapping {
    /// Source column name.
    pub source_column: ColumnName,
    /// Best-scoring target column; `None` only when there were no targets.
    pub target_column: Option<ColumnName>,
    /// Composite score rounded to two decimals. May exceed 1.0.
    pub confidence: f64,
}

impl Mapping {
    pub fn unmatched(source_column: ColumnName) -> Self {
        Self {
            source_column,
            target_column: None,
            confidence: 0.0,
        }
    }

    pub fn is_matched(&self) -> bool {
        self.target_column.is_some()
    }
}

/// Ordered mapping records, one per source column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MappingResult {
    pub mappings: Vec<Mapping>,
}

impl MappingResult {
    pub fn new(mappings: Vec<Mapping>) -> Self {
        Self { mappings }
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Mapping> {
        self.mappings.iter()
    }

    /// Looks up the record for a source column.
    pub fn get(&self, source_column: &str) -> Option<&Mapping> {
        self.mappings
            .iter()
            .find(|m| m.source_column.as_str() == source_column)
    }

    /// Matched records whose confidence is at or above `threshold`, in source order.
    #[must_use]
    pub fn filter_min_confidence(&self, threshold: f64) -> Vec<&Mapping> {
        self.mappings
            .iter()
            .filter(|m| m.is_matched() && m.confidence >= threshold)
            .collect()
    }

    /// Returns the count of matched records at each confidence level.
    #[must_use]
    pub fn count_by_level(
        &self,
        thresholds: &ConfidenceThresholds,
    ) -> BTreeMap<ConfidenceLevel, usize> {
        let mut counts = BTreeMap::new();
        for mapping in self.mappings.iter().filter(|m| m.is_matched()) {
            if let Some(level) = thresholds.categorize(mapping.confidence) {
                *counts.entry(level).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Target columns chosen as the best match by more than one source column.
    ///
    /// Matching is greedy per source column, so this is an expected outcome;
    /// it is surfaced so a reviewer can decide which source keeps the target.
    #[must_use]
    pub fn repeated_targets(&self) -> BTreeMap<&ColumnName, Vec<&ColumnName>> {
        let mut by_target: BTreeMap<&ColumnName, Vec<&ColumnName>> = BTreeMap::new();
        for mapping in &self.mappings {
            if let Some(target) = &mapping.target_column {
                by_target
                    .entry(target)
                    .or_default()
                    .push(&mapping.source_column);
            }
        }
        by_target.retain(|_, sources| sources.len() > 1);
        by_target
    }

    #[must_use]
    pub fn min_confidence(&self) -> Option<f64> {
        self.matched_confidences()
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
    }

    #[must_use]
    pub fn max_confidence(&self) -> Option<f64> {
        self.matched_confidences()
            .max_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
    }

    #[must_use]
    pub fn mean_confidence(&self) -> Option<f64> {
        let (count, sum) = self
            .matched_confidences()
            .fold((0usize, 0.0f64), |(count, sum), c| (count + 1, sum + c));
        if count == 0 {
            return None;
        }
        Some(sum / count as f64)
    }

    fn matched_confidences(&self) -> impl Iterator<Item = f64> + '_ {
        self.mappings
            .iter()
            .filter(|m| m.is_matched())
            .map(|m| m.confidence)
    }
}

impl<'a> IntoIterator for &'a MappingResult {
    type Item = &'a Mapping;
    type IntoIter = std::slice::Iter<'a, Mapping>;

    fn into_iter(self) -> Self::IntoIter {
        self.mappings.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round_confidence(1.0727), 1.07);
        assert_eq!(round_confidence(0.4111), 0.41);
        assert_eq!(round_confidence(0.0), 0.0);
        assert_eq!(round_confidence(1.6), 1.6);
    }

    #[test]
    fn rounding_ties_go_to_even() {
        assert_eq!(round_confidence(0.125), 0.12);
        assert_eq!(round_confidence(0.375), 0.38);
        assert_eq!(round_confidence(0.625), 0.62);
    }

    #[test]
    fn categorizes_with_default_thresholds() {
        let thresholds = ConfidenceThresholds::default();
        assert_eq!(thresholds.categorize(1.4), Some(ConfidenceLevel::High));
        assert_eq!(thresholds.categorize(0.95), Some(ConfidenceLevel::High));
        assert_eq!(thresholds.categorize(0.85), Some(ConfidenceLevel::Medium));
        assert_eq!(thresholds.categorize(0.6), Some(ConfidenceLevel::Low));
        assert_eq!(thresholds.categorize(0.59), None);
    }
}
