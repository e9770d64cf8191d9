use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("ontology metadata has no data-version")]
    MissingVersion,
    #[error(transparent)]
    Model(#[from] hpo_model::ModelError),
}

pub type Result<T> = std::result::Result<T, TransformError>;
