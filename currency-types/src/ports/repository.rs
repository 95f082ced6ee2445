//! Repository port traits.
//!
//! These are the primary ports in our hexagonal architecture.
//! Adapters (SQLite, Postgres, in-memory) implement them.

use crate::domain::{Currency, CurrencyCode, CurrencyPair, ExchangeRate, NewCurrency};
use crate::error::RepoError;

/// Durable mapping from currency code to currency metadata.
#[async_trait::async_trait]
pub trait CurrencyRepository: Send + Sync + 'static {
    /// Inserts a new currency and returns it with its assigned id.
    ///
    /// Fails with `RepoError::DuplicateCurrency` when the code is taken.
    async fn create_currency(&self, currency: NewCurrency) -> Result<Currency, RepoError>;

    /// Looks a currency up by code.
    ///
    /// Fails with `RepoError::CurrencyNotFound` when absent.
    async fn get_currency_by_code(&self, code: &CurrencyCode) -> Result<Currency, RepoError>;

    /// Lists all currencies ordered by id. An empty store yields an empty list.
    async fn list_currencies(&self) -> Result<Vec<Currency>, RepoError>;
}

/// Durable mapping from an ordered code pair to its rate.
///
/// Implementations MUST enforce pair uniqueness at the storage level.
#[async_trait::async_trait]
pub trait ExchangeRateRepository: Send + Sync + 'static {
    /// Inserts a rate for a pair in a single atomic statement.
    ///
    /// Fails with `RepoError::ExchangeRateAlreadyExists` if the pair is present.
    async fn create_rate(&self, pair: &CurrencyPair, rate: f64) -> Result<ExchangeRate, RepoError>;

    /// Exact ordered-pair lookup. Fails with `RepoError::RateNotFound`.
    async fn get_rate_by_pair(&self, pair: &CurrencyPair) -> Result<ExchangeRate, RepoError>;

    /// Changes the rate of an existing pair. Never creates a row.
    ///
    /// Fails with `RepoError::RateNotFound` when the pair does not exist.
    async fn update_rate(&self, pair: &CurrencyPair, rate: f64) -> Result<ExchangeRate, RepoError>;

    /// Lists all rates ordered by id.
    async fn list_rates(&self) -> Result<Vec<ExchangeRate>, RepoError>;
}

/// Both stores behind one bound, as consumed by the application service.
pub trait ExchangeRepository: CurrencyRepository + ExchangeRateRepository {}

impl<T> ExchangeRepository for T where T: CurrencyRepository + ExchangeRateRepository {}
