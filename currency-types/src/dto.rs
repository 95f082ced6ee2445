//! Data Transfer Objects (DTOs) for requests and responses.
//!
//! Request bodies arrive url-encoded, so numeric fields are carried as raw
//! strings and parsed by the HTTP adapter.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Currency, CurrencyId, ExchangeRateDetails, ExchangeRateId};

// ─────────────────────────────────────────────────────────────────────────────
// Currency DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Form fields for creating a currency.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateCurrencyForm {
    #[serde(default)]
    #[schema(example = "USD")]
    pub code: String,
    #[serde(default, alias = "fullName")]
    #[schema(example = "US Dollar")]
    pub fullname: String,
    #[serde(default)]
    #[schema(example = "$")]
    pub sign: String,
}

/// Response after creating a currency.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CurrencyCreatedResponse {
    #[schema(example = "Currency created successfully")]
    pub message: String,
    #[schema(example = "USD")]
    pub code: String,
}

/// Compact currency record embedded in exchange rate responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CurrencySummary {
    pub id: CurrencyId,
    #[schema(example = "US Dollar")]
    pub name: String,
    #[schema(example = "USD")]
    pub code: String,
    #[schema(example = "$")]
    pub sign: String,
}

impl From<Currency> for CurrencySummary {
    fn from(currency: Currency) -> Self {
        Self {
            id: currency.id,
            name: currency.full_name,
            code: currency.code.into(),
            sign: currency.sign,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Exchange rate DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Form fields for creating an exchange rate.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateExchangeRateForm {
    #[serde(default)]
    #[schema(example = "USD")]
    pub base: String,
    #[serde(default)]
    #[schema(example = "EUR")]
    pub target: String,
    #[serde(default)]
    #[schema(example = "0.9")]
    pub rate: String,
}

/// Form fields for updating an exchange rate.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExchangeRateForm {
    #[serde(default)]
    #[schema(example = "0.92")]
    pub new_rate: String,
}

/// Response after creating or updating an exchange rate.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExchangeRateChangedResponse {
    #[schema(example = "Exchange rate created successfully")]
    pub message: String,
    #[schema(example = "USD/EUR")]
    pub pair: String,
}

/// Exchange rate with both currencies resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRateResponse {
    pub id: ExchangeRateId,
    pub base_currency: CurrencySummary,
    pub target_currency: CurrencySummary,
    #[schema(example = 0.9)]
    pub rate: f64,
}

impl From<ExchangeRateDetails> for ExchangeRateResponse {
    fn from(details: ExchangeRateDetails) -> Self {
        Self {
            id: details.id,
            base_currency: details.base_currency.into(),
            target_currency: details.target_currency.into(),
            rate: details.rate,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversion DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Query parameters for a conversion.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ConvertQuery {
    /// Base currency code
    #[serde(default)]
    #[param(example = "USD")]
    pub from: String,
    /// Target currency code
    #[serde(default)]
    #[param(example = "EUR")]
    pub to: String,
    /// Amount of base currency to convert
    #[serde(default)]
    #[param(example = "100")]
    pub amount: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CurrencyCode;

    #[test]
    fn test_rate_response_shape() {
        let usd = Currency::from_parts(
            CurrencyId::new(1),
            CurrencyCode::new("USD").unwrap(),
            "US Dollar".into(),
            "$".into(),
        );
        let eur = Currency::from_parts(
            CurrencyId::new(2),
            CurrencyCode::new("EUR").unwrap(),
            "Euro".into(),
            "€".into(),
        );
        let response = ExchangeRateResponse::from(ExchangeRateDetails {
            id: ExchangeRateId::new(5),
            base_currency: usd,
            target_currency: eur,
            rate: 0.9,
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 5,
                "baseCurrency": { "id": 1, "name": "US Dollar", "code": "USD", "sign": "$" },
                "targetCurrency": { "id": 2, "name": "Euro", "code": "EUR", "sign": "€" },
                "rate": 0.9
            })
        );
    }

    #[test]
    fn test_create_currency_form_accepts_camel_case_alias() {
        let form: CreateCurrencyForm =
            serde_json::from_str(r#"{"code":"USD","fullName":"US Dollar","sign":"$"}"#).unwrap();
        assert_eq!(form.fullname, "US Dollar");
    }

    #[test]
    fn test_update_form_uses_new_rate_field() {
        let form: UpdateExchangeRateForm = serde_json::from_str(r#"{"newRate":"1.5"}"#).unwrap();
        assert_eq!(form.new_rate, "1.5");
    }
}
