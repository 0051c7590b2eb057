//! Error types for matching operations.

use colmap_model::{ColumnSide, ModelError};

/// Errors from matching operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    /// A supplied column name is empty or blank.
    #[error("invalid {side} column at position {index}: {source}")]
    InvalidInput {
        side: ColumnSide,
        index: usize,
        #[source]
        source: ModelError,
    },
}
