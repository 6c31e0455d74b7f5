use sea_orm::DbErr;
use thiserror::Error;

/// Failures raised by the entity layer: input rejected before it
/// reaches the database, or an error from the database itself.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation failed: {0}")]
    Validation(&'static str),
    #[error(transparent)]
    Db(#[from] DbErr),
}
