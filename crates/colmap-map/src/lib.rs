//! Column-name matching for schema migration.
//!
//! [`ColumnMatcher`] scores every source/target column pair with three
//! signals and proposes, per source column, the best-scoring target:
//!
//! - [`lexical`]: gestalt character ratio
//! - [`statistical`]: TF-IDF cosine over the two names
//! - [`heuristics`]: additive boosts from a [`DomainHintTable`]
//!
//! The composite score is `(lexical + statistical) / 2 + boost` and is never
//! clamped.

#![deny(unsafe_code)]

pub mod config;
pub mod engine;
pub mod error;
pub mod flow;
pub mod heuristics;
pub mod lexical;
pub mod score;
pub mod statistical;

pub use config::{ConfigError, load_hint_table, parse_hint_table};
pub use engine::{ColumnMatcher, ScoreMatrix, validate_columns};
pub use error::MapError;
pub use flow::{FlowDiagram, FlowLink, FlowNode, FlowOptions};
pub use heuristics::{DomainHintTable, HINT_BOOST, HintEntry, HintMatch};
pub use score::{ColumnScore, PairScore, ScoreComponent};
