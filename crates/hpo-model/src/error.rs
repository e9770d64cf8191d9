use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid term id: {0:?}")]
    InvalidTermId(String),
    #[error("duplicate term id: {0}")]
    DuplicateTerm(String),
    #[error("concept code must not be empty")]
    EmptyCode,
    #[error("property code must not be empty")]
    EmptyPropertyCode,
}

pub type Result<T> = std::result::Result<T, ModelError>;
