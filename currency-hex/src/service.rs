//! Exchange Application Service
//!
//! Orchestrates the currency and exchange rate stores through the repository ports.
//! Contains NO infrastructure logic - pure business orchestration.

use std::collections::HashMap;

use currency_types::{
    AppError, Conversion, Currency, CurrencyCode, CurrencyPair, ExchangeRate, ExchangeRateDetails,
    ExchangeRepository, NewCurrency, RepoError, validate_amount, validate_rate,
};

/// Application service for currencies, exchange rates and conversions.
///
/// Generic over `R: ExchangeRepository` - the adapter is injected at compile time.
/// Holds no state of its own beyond the repository handle.
pub struct ExchangeService<R: ExchangeRepository> {
    repo: R,
}

impl<R: ExchangeRepository> ExchangeService<R> {
    /// Creates a new exchange service with the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Currency Operations
    // ─────────────────────────────────────────────────────────────────────────────

    /// Creates a new currency.
    #[tracing::instrument(skip_all, fields(code = %currency.code))]
    pub async fn create_currency(&self, currency: NewCurrency) -> Result<Currency, AppError> {
        let created = self.repo.create_currency(currency).await?;
        tracing::info!(id = %created.id, "Currency created");
        Ok(created)
    }

    /// Gets a currency by code.
    #[tracing::instrument(skip(self), fields(code = %code))]
    pub async fn get_currency(&self, code: &CurrencyCode) -> Result<Currency, AppError> {
        self.repo.get_currency_by_code(code).await.map_err(Into::into)
    }

    /// Lists all currencies.
    #[tracing::instrument(skip(self))]
    pub async fn list_currencies(&self) -> Result<Vec<Currency>, AppError> {
        self.repo.list_currencies().await.map_err(Into::into)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Exchange Rate Operations
    // ─────────────────────────────────────────────────────────────────────────────

    /// Creates the rate for a pair that has none yet.
    ///
    /// Both currencies are resolved before the pair is checked, so a missing
    /// currency is reported ahead of an existing rate. The storage constraint
    /// still rejects a duplicate that races past the pre-check.
    #[tracing::instrument(skip(self), fields(pair = %pair))]
    pub async fn create_exchange_rate(
        &self,
        pair: CurrencyPair,
        rate: f64,
    ) -> Result<ExchangeRate, AppError> {
        let rate = validate_rate(rate)?;

        self.repo.get_currency_by_code(&pair.base).await?;
        self.repo.get_currency_by_code(&pair.target).await?;

        match self.repo.get_rate_by_pair(&pair).await {
            Ok(_) => return Err(RepoError::ExchangeRateAlreadyExists(pair).into()),
            Err(RepoError::RateNotFound(_)) => {}
            Err(e) => return Err(e.into()),
        }

        let created = self.repo.create_rate(&pair, rate).await?;
        tracing::info!(id = %created.id, "Exchange rate created");
        Ok(created)
    }

    /// Gets the rate for a pair along with both currency records.
    #[tracing::instrument(skip(self), fields(pair = %pair))]
    pub async fn get_exchange_rate(
        &self,
        pair: &CurrencyPair,
    ) -> Result<ExchangeRateDetails, AppError> {
        let rate = self.repo.get_rate_by_pair(pair).await?;
        let base_currency = self.repo.get_currency_by_code(&rate.base_code).await?;
        let target_currency = self.repo.get_currency_by_code(&rate.target_code).await?;

        Ok(ExchangeRateDetails {
            id: rate.id,
            base_currency,
            target_currency,
            rate: rate.rate,
        })
    }

    /// Lists all rates, each with both currency records.
    #[tracing::instrument(skip(self))]
    pub async fn list_exchange_rates(&self) -> Result<Vec<ExchangeRateDetails>, AppError> {
        let rates = self.repo.list_rates().await?;
        if rates.is_empty() {
            return Ok(Vec::new());
        }

        let currencies: HashMap<CurrencyCode, Currency> = self
            .repo
            .list_currencies()
            .await?
            .into_iter()
            .map(|c| (c.code.clone(), c))
            .collect();

        let lookup = |code: &CurrencyCode, rate: &ExchangeRate| {
            currencies.get(code).cloned().ok_or_else(|| {
                AppError::Internal(format!(
                    "Exchange rate {} references missing currency {}",
                    rate.pair(),
                    code
                ))
            })
        };

        rates
            .iter()
            .map(|rate| {
                Ok(ExchangeRateDetails {
                    id: rate.id,
                    base_currency: lookup(&rate.base_code, rate)?,
                    target_currency: lookup(&rate.target_code, rate)?,
                    rate: rate.rate,
                })
            })
            .collect()
    }

    /// Changes the rate of an existing pair.
    #[tracing::instrument(skip(self), fields(pair = %pair))]
    pub async fn update_exchange_rate(
        &self,
        pair: &CurrencyPair,
        new_rate: f64,
    ) -> Result<ExchangeRate, AppError> {
        let new_rate = validate_rate(new_rate)?;
        let updated = self.repo.update_rate(pair, new_rate).await?;
        tracing::info!(id = %updated.id, rate = updated.rate, "Exchange rate updated");
        Ok(updated)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversion
    // ─────────────────────────────────────────────────────────────────────────────

    /// Converts `amount` of the base currency using the stored rate for the pair.
    ///
    /// Only the exact ordered pair is consulted; an inverse rate is never used.
    #[tracing::instrument(skip(self), fields(pair = %pair))]
    pub async fn convert(&self, pair: &CurrencyPair, amount: f64) -> Result<Conversion, AppError> {
        let amount = validate_amount(amount)?;

        let base_currency = self.repo.get_currency_by_code(&pair.base).await?;
        let target_currency = self.repo.get_currency_by_code(&pair.target).await?;
        let rate = self.repo.get_rate_by_pair(pair).await?;

        Ok(Conversion::compute(
            base_currency,
            target_currency,
            rate.rate,
            amount,
        ))
    }
}
