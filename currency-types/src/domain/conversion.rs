//! Conversion of an amount through a stored rate.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::currency::Currency;
use crate::error::DomainError;

/// Result of converting an amount from a base currency into a target currency.
///
/// Computed on every request and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
    pub base_currency: Currency,
    pub target_currency: Currency,
    #[schema(example = 0.9)]
    pub rate: f64,
    #[schema(example = 100.0)]
    pub amount: f64,
    #[schema(example = 90.0)]
    pub converted_amount: f64,
}

impl Conversion {
    /// Multiplies `amount` by `rate`. No rounding is applied.
    pub fn compute(base_currency: Currency, target_currency: Currency, rate: f64, amount: f64) -> Self {
        Self {
            base_currency,
            target_currency,
            rate,
            amount,
            converted_amount: amount * rate,
        }
    }
}

/// Checks that an amount is a positive finite number.
pub fn validate_amount(amount: f64) -> Result<f64, DomainError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(DomainError::InvalidAmount(amount));
    }
    Ok(amount)
}
