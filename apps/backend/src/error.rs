use thiserror::Error;

use crate::errors::domain::{DomainError, InfraErrorKind};

/// Application-level error returned from service entry points and the
/// binary. Input rejections inside a game session are *not* errors and
/// never surface here; see [`crate::domain::session::Rejection`].
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { detail: String },
    #[error("Database error: {detail}")]
    Db { detail: String },
    #[error("Not found: {detail}")]
    NotFound { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn invalid(detail: impl Into<String>) -> Self {
        Self::Validation {
            detail: detail.into(),
        }
    }

    pub fn db(detail: impl Into<String>) -> Self {
        Self::Db {
            detail: detail.into(),
        }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(detail) => AppError::invalid(detail),
            DomainError::NotFound(kind, detail) => {
                AppError::not_found(format!("{kind:?}: {detail}"))
            }
            DomainError::Infra(InfraErrorKind::DbUnavailable, detail) => AppError::db(detail),
            DomainError::Infra(kind, detail) => AppError::internal(format!("{kind:?}: {detail}")),
        }
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        AppError::db(err.to_string())
    }
}
