use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// A referenced row is missing, e.g. adding a topping that does not exist.
    #[error("not found: {0}")]
    NotFound(String),
    /// Storage returned something the schema should make impossible.
    #[error("integrity violation: {0}")]
    Integrity(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn missing(what: &str) -> Self { Self::NotFound(format!("{} does not exist", what)) }
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self { Self::Db(e.to_string()) }
}
