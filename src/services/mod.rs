//! Service layer: use-case functions between the HTTP routes and the
//! repository.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod browse;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
