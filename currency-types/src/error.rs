//! Error types for the currency exchange service.

use crate::domain::{CurrencyCode, CurrencyPair};

/// Domain-level errors (validation of codes, pairs and numbers).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid currency code: {0}")]
    InvalidCurrencyCode(String),

    #[error("Invalid currency pair: {0}")]
    InvalidCurrencyPair(String),

    #[error("Rate must be a positive number, got {0}")]
    InvalidRate(f64),

    #[error("Amount must be a positive number, got {0}")]
    InvalidAmount(f64),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Repository-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Currency not found: {0}")]
    CurrencyNotFound(CurrencyCode),

    #[error("Exchange rate not found: {0}")]
    RateNotFound(CurrencyPair),

    #[error("Currency already exists: {0}")]
    DuplicateCurrency(CurrencyCode),

    #[error("Exchange rate already exists: {0}")]
    ExchangeRateAlreadyExists(CurrencyPair),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Domain(e) => e.into(),
            e @ (RepoError::CurrencyNotFound(_) | RepoError::RateNotFound(_)) => {
                AppError::NotFound(e.to_string())
            }
            e @ (RepoError::DuplicateCurrency(_) | RepoError::ExchangeRateAlreadyExists(_)) => {
                AppError::Conflict(e.to_string())
            }
            RepoError::Conflict(e) => AppError::Conflict(e),
            RepoError::Database(e) => AppError::Internal(e),
        }
    }
}
