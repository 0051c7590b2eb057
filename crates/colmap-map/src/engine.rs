//! Column matcher implementation.

use colmap_model::{ColumnName, ColumnSide, Mapping, MappingResult, round_confidence};
use tracing::{debug, trace};

use crate::error::MapError;
use crate::heuristics::DomainHintTable;
use crate::lexical;
use crate::score::{ColumnScore, PairScore, ScoreComponent};
use crate::statistical;

/// Proposes a target column for every source column.
///
/// Each source column is scored against every target column and keeps the
/// best one. Selection is greedy per source column: the same target may be
/// proposed for several sources. Callers that need a one-to-one assignment
/// can run their own optimisation over [`ColumnMatcher::score_matrix`].
///
/// # Example
///
/// ```
/// use colmap_map::{ColumnMatcher, DomainHintTable};
///
/// let matcher = ColumnMatcher::new(DomainHintTable::builtin());
/// let result = matcher
///     .match_columns(&["gender"], &["sex", "age"])
///     .unwrap();
/// let best = result.mappings[0].target_column.as_ref().unwrap();
/// assert_eq!(best.as_str(), "sex");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ColumnMatcher {
    hints: DomainHintTable,
}

impl ColumnMatcher {
    pub fn new(hints: DomainHintTable) -> Self {
        Self { hints }
    }

    pub fn hints(&self) -> &DomainHintTable {
        &self.hints
    }

    /// Scores one source/target pair.
    pub fn score_pair(&self, source: &str, target: &str) -> PairScore {
        PairScore {
            lexical: lexical::similarity(source, target),
            statistical: statistical::similarity(source, target),
            heuristic_boost: self.hints.boost(source, target),
        }
    }

    /// Scores one pair and records how each signal contributed.
    pub fn explain_pair(&self, source: &str, target: &str) -> ColumnScore {
        let pair = self.score_pair(source, target);
        let mut explanation = vec![
            ScoreComponent {
                name: "Lexical similarity",
                value: pair.lexical / 2.0,
                description: format!("character ratio {:.2}", pair.lexical),
            },
            ScoreComponent {
                name: "Statistical similarity",
                value: pair.statistical / 2.0,
                description: format!("TF-IDF cosine {:.2}", pair.statistical),
            },
        ];
        for fired in self.hints.matches(source, target) {
            explanation.push(ScoreComponent {
                name: "Domain hint",
                value: crate::heuristics::HINT_BOOST,
                description: format!("'{}' in source, '{}' in target", fired.key, fired.hint),
            });
        }
        ColumnScore {
            score: pair.composite(),
            explanation,
        }
    }

    /// Raw composite scores for every source/target pair.
    pub fn score_matrix(&self, sources: &[ColumnName], targets: &[ColumnName]) -> ScoreMatrix {
        let mut scores = Vec::with_capacity(sources.len() * targets.len());
        for source in sources {
            for target in targets {
                scores.push(self.score_pair(source.as_str(), target.as_str()).composite());
            }
        }
        ScoreMatrix {
            sources: sources.to_vec(),
            targets: targets.to_vec(),
            scores,
        }
    }

    /// Validates both column lists and matches them.
    ///
    /// Fails on the first empty or blank name instead of skipping it, so the
    /// result always has one record per source column.
    pub fn match_columns<S, T>(
        &self,
        sources: &[S],
        targets: &[T],
    ) -> Result<MappingResult, MapError>
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let sources = validate_columns(sources, ColumnSide::Source)?;
        let targets = validate_columns(targets, ColumnSide::Target)?;
        Ok(self.match_validated(&sources, &targets))
    }

    /// Matches already validated column lists.
    pub fn match_validated(
        &self,
        sources: &[ColumnName],
        targets: &[ColumnName],
    ) -> MappingResult {
        let mut mappings = Vec::with_capacity(sources.len());
        for source in sources {
            mappings.push(self.best_match(source, targets));
        }
        MappingResult::new(mappings)
    }

    fn best_match(&self, source: &ColumnName, targets: &[ColumnName]) -> Mapping {
        let scores = targets.iter().map(|target| {
            let score = self.score_pair(source.as_str(), target.as_str());
            trace!(
                source = %source,
                target = %target,
                lexical = score.lexical,
                statistical = score.statistical,
                boost = score.heuristic_boost,
                "scored pair"
            );
            score.composite()
        });
        let Some((index, score)) = select_best(scores) else {
            debug!(source = %source, "no target columns, leaving unmatched");
            return Mapping::unmatched(source.clone());
        };
        let target = &targets[index];
        debug!(source = %source, target = %target, score, "selected target");
        Mapping {
            source_column: source.clone(),
            target_column: Some(target.clone()),
            confidence: round_confidence(score),
        }
    }
}

/// Composite scores laid out row-major: one row per source, one column per target.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMatrix {
    sources: Vec<ColumnName>,
    targets: Vec<ColumnName>,
    scores: Vec<f64>,
}

impl ScoreMatrix {
    pub fn sources(&self) -> &[ColumnName] {
        &self.sources
    }

    pub fn targets(&self) -> &[ColumnName] {
        &self.targets
    }

    /// Score of `sources[row]` against `targets[col]`.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.sources.len() || col >= self.targets.len() {
            return None;
        }
        self.scores.get(row * self.targets.len() + col).copied()
    }

    /// Scores of one source against every target.
    pub fn row(&self, row: usize) -> &[f64] {
        let width = self.targets.len();
        if row >= self.sources.len() {
            return &[];
        }
        &self.scores[row * width..(row + 1) * width]
    }

    /// Index and score of the best target for a source, earliest target on ties.
    pub fn best_in_row(&self, row: usize) -> Option<(usize, f64)> {
        select_best(self.row(row).iter().copied())
    }
}

/// Picks the highest score; strict comparison keeps the earliest on ties.
///
/// The first score is always accepted, so any non-empty input yields a winner.
fn select_best(scores: impl Iterator<Item = f64>) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (index, score) in scores.enumerate() {
        let better = match best {
            Some((_, best_score)) => score > best_score,
            None => true,
        };
        if better {
            best = Some((index, score));
        }
    }
    best
}

/// Validates raw names into [`ColumnName`]s, reporting the first bad position.
pub fn validate_columns<S: AsRef<str>>(
    names: &[S],
    side: ColumnSide,
) -> Result<Vec<ColumnName>, MapError> {
    names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            ColumnName::new(name.as_ref()).map_err(|source| MapError::InvalidInput {
                side,
                index,
                source,
            })
        })
        .collect()
}
