//! Currency domain model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::code::CurrencyCode;
use crate::error::DomainError;

/// Store-assigned identifier for a Currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct CurrencyId(i64);

impl CurrencyId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw integer value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for CurrencyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A currency known to the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    /// Unique identifier
    pub id: CurrencyId,
    /// Unique currency code
    #[schema(value_type = String, example = "USD")]
    pub code: CurrencyCode,
    /// Display name
    #[schema(example = "US Dollar")]
    pub full_name: String,
    /// Display symbol
    #[schema(example = "$")]
    pub sign: String,
}

impl Currency {
    /// Reconstructs a currency from stored fields.
    pub fn from_parts(id: CurrencyId, code: CurrencyCode, full_name: String, sign: String) -> Self {
        Self {
            id,
            code,
            full_name,
            sign,
        }
    }
}

/// Validated input for creating a currency.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCurrency {
    pub code: CurrencyCode,
    pub full_name: String,
    pub sign: String,
}

impl NewCurrency {
    /// Validates raw fields.
    ///
    /// # Validation
    /// - Code must parse as a [`CurrencyCode`]
    /// - Full name and sign cannot be blank
    pub fn new(code: &str, full_name: &str, sign: &str) -> Result<Self, DomainError> {
        let code = CurrencyCode::new(code)?;

        let full_name = full_name.trim();
        if full_name.is_empty() {
            return Err(DomainError::ValidationError(
                "Currency full name cannot be empty".into(),
            ));
        }

        let sign = sign.trim();
        if sign.is_empty() {
            return Err(DomainError::ValidationError(
                "Currency sign cannot be empty".into(),
            ));
        }

        Ok(Self {
            code,
            full_name: full_name.to_string(),
            sign: sign.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_currency() {
        let currency = NewCurrency::new("usd", "US Dollar", "$").unwrap();
        assert_eq!(currency.code.as_str(), "USD");
        assert_eq!(currency.full_name, "US Dollar");
        assert_eq!(currency.sign, "$");
    }

    #[test]
    fn test_blank_fields_fail() {
        assert!(matches!(
            NewCurrency::new("USD", "  ", "$"),
            Err(DomainError::ValidationError(_))
        ));
        assert!(matches!(
            NewCurrency::new("USD", "US Dollar", ""),
            Err(DomainError::ValidationError(_))
        ));
        assert!(matches!(
            NewCurrency::new("", "US Dollar", "$"),
            Err(DomainError::InvalidCurrencyCode(_))
        ));
    }

    #[test]
    fn test_currency_serializes_camel_case() {
        let currency = Currency::from_parts(
            CurrencyId::new(1),
            CurrencyCode::new("EUR").unwrap(),
            "Euro".into(),
            "€".into(),
        );
        let json = serde_json::to_value(&currency).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 1, "code": "EUR", "fullName": "Euro", "sign": "€" })
        );
    }
}
