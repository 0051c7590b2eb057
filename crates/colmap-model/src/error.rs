use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("column name is empty")]
    EmptyColumnName,
    #[error("column name {0:?} contains only whitespace")]
    BlankColumnName(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
