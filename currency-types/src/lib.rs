//! # Currency Types
//!
//! Domain types and port traits for the currency exchange service.
//! This crate has ZERO external IO dependencies - only data structures,
//! validation rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (CurrencyCode, Currency, ExchangeRate, Conversion)
//! - `ports/` - Trait definitions that storage adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Domain, repository and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Conversion, Currency, CurrencyCode, CurrencyId, CurrencyPair, ExchangeRate,
    ExchangeRateDetails, ExchangeRateId, NewCurrency, validate_amount, validate_rate,
};
pub use dto::*;
pub use error::{AppError, DomainError, RepoError};
pub use ports::{CurrencyRepository, ExchangeRateRepository, ExchangeRepository};
