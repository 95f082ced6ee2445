//! Exchange rate domain model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::code::{CurrencyCode, CurrencyPair};
use super::currency::Currency;
use crate::error::DomainError;

/// Store-assigned identifier for an ExchangeRate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct ExchangeRateId(i64);

impl ExchangeRateId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ExchangeRateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rate for one ordered currency pair.
///
/// At most one exists per `(base_code, target_code)`. Only `rate` changes after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    pub id: ExchangeRateId,
    #[schema(value_type = String, example = "USD")]
    pub base_code: CurrencyCode,
    #[schema(value_type = String, example = "EUR")]
    pub target_code: CurrencyCode,
    /// Units of target currency for one unit of base currency
    #[schema(example = 0.9)]
    pub rate: f64,
}

impl ExchangeRate {
    pub fn from_parts(
        id: ExchangeRateId,
        base_code: CurrencyCode,
        target_code: CurrencyCode,
        rate: f64,
    ) -> Self {
        Self {
            id,
            base_code,
            target_code,
            rate,
        }
    }

    /// Returns the ordered pair this rate belongs to.
    pub fn pair(&self) -> CurrencyPair {
        CurrencyPair::new(self.base_code.clone(), self.target_code.clone())
    }
}

/// A rate together with the full records of both currencies.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeRateDetails {
    pub id: ExchangeRateId,
    pub base_currency: Currency,
    pub target_currency: Currency,
    pub rate: f64,
}

/// Checks that a rate is a positive finite number.
pub fn validate_rate(rate: f64) -> Result<f64, DomainError> {
    if !rate.is_finite() || rate <= 0.0 {
        return Err(DomainError::InvalidRate(rate));
    }
    Ok(rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rate() {
        assert_eq!(validate_rate(0.9).unwrap(), 0.9);
        assert!(matches!(validate_rate(0.0), Err(DomainError::InvalidRate(_))));
        assert!(validate_rate(-1.5).is_err());
        assert!(validate_rate(f64::NAN).is_err());
        assert!(validate_rate(f64::INFINITY).is_err());
    }

    #[test]
    fn test_pair_accessor() {
        let rate = ExchangeRate::from_parts(
            ExchangeRateId::new(7),
            CurrencyCode::new("USD").unwrap(),
            CurrencyCode::new("EUR").unwrap(),
            0.9,
        );
        assert_eq!(rate.pair().to_string(), "USD/EUR");
    }
}
