#![deny(unsafe_code)]

pub mod column;
pub mod error;
pub mod mapping;

pub use column::{ColumnName, ColumnSide};
pub use error::{ModelError, Result};
pub use mapping::{
    ConfidenceLevel, ConfidenceThresholds, Mapping, MappingResult, round_confidence,
};
