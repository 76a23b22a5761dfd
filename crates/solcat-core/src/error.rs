use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("not a catalog repository: run 'solcat init'")]
    NotInitialized,

    #[error("provider not found: {0}")]
    ProviderNotFound(String),

    #[error("solution not found: {0}")]
    SolutionNotFound(String),

    #[error("solution already exists: {0}")]
    SolutionExists(String),

    #[error("invalid slug '{0}': must be lowercase alphanumeric with hyphens")]
    InvalidSlug(String),

    #[error("invalid status: {0}")]
    InvalidStatus(String),

    #[error("invalid complexity: {0}")]
    InvalidComplexity(String),

    #[error("master catalog not found at {0}: run 'solcat generate'")]
    CatalogNotFound(String),

    #[error("schema file not found: {0}")]
    SchemaNotFound(String),

    #[error("schema did not compile: {0}")]
    SchemaCompile(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
