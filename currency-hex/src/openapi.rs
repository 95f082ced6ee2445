//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use currency_types::domain::{Conversion, Currency, CurrencyId, ExchangeRateId};
use currency_types::dto::{
    ConvertQuery, CreateCurrencyForm, CreateExchangeRateForm, CurrencyCreatedResponse,
    CurrencySummary, ExchangeRateChangedResponse, ExchangeRateResponse, UpdateExchangeRateForm,
};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// List all currencies
#[utoipa::path(
    get,
    path = "/currencies",
    tag = "currencies",
    responses(
        (status = 200, description = "List of currencies", body = Vec<Currency>)
    )
)]
async fn list_currencies() {}

/// Create a currency
#[utoipa::path(
    post,
    path = "/currencies",
    tag = "currencies",
    request_body(content = CreateCurrencyForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Currency created", body = CurrencyCreatedResponse),
        (status = 400, description = "Missing or invalid fields"),
        (status = 409, description = "Currency code already exists")
    )
)]
async fn create_currency() {}

/// Get a currency by code
#[utoipa::path(
    get,
    path = "/currency/{code}",
    tag = "currencies",
    params(
        ("code" = String, Path, description = "Currency code, case-insensitive", example = "USD")
    ),
    responses(
        (status = 200, description = "Currency details", body = Currency),
        (status = 400, description = "Invalid currency code"),
        (status = 404, description = "Currency not found")
    )
)]
async fn get_currency() {}

/// List all exchange rates
#[utoipa::path(
    get,
    path = "/exchangeRates",
    tag = "exchange rates",
    responses(
        (status = 200, description = "Exchange rates with both currencies resolved", body = Vec<ExchangeRateResponse>)
    )
)]
async fn list_exchange_rates() {}

/// Create an exchange rate
#[utoipa::path(
    post,
    path = "/exchangeRates",
    tag = "exchange rates",
    request_body(content = CreateExchangeRateForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Exchange rate created", body = ExchangeRateChangedResponse),
        (status = 400, description = "Missing fields or invalid rate"),
        (status = 404, description = "Base or target currency not found"),
        (status = 409, description = "Exchange rate for the pair already exists")
    )
)]
async fn create_exchange_rate() {}

/// Get the exchange rate for a pair
#[utoipa::path(
    get,
    path = "/exchangeRate/{pair}",
    tag = "exchange rates",
    params(
        ("pair" = String, Path, description = "Pair token: `USDEUR` or `USD-EUR`", example = "USDEUR")
    ),
    responses(
        (status = 200, description = "Exchange rate details", body = ExchangeRateResponse),
        (status = 400, description = "Invalid pair token"),
        (status = 404, description = "Exchange rate not found")
    )
)]
async fn get_exchange_rate() {}

/// Update the exchange rate for a pair
#[utoipa::path(
    patch,
    path = "/exchangeRate/{pair}",
    tag = "exchange rates",
    params(
        ("pair" = String, Path, description = "Pair token: `USDEUR` or `USD-EUR`", example = "USDEUR")
    ),
    request_body(content = UpdateExchangeRateForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Exchange rate updated", body = ExchangeRateChangedResponse),
        (status = 400, description = "Invalid pair token or rate"),
        (status = 404, description = "Exchange rate not found")
    )
)]
async fn update_exchange_rate() {}

/// Convert an amount between two currencies
#[utoipa::path(
    get,
    path = "/exchange",
    tag = "exchange",
    params(ConvertQuery),
    responses(
        (status = 200, description = "Conversion result", body = Conversion),
        (status = 400, description = "Missing parameters or invalid amount"),
        (status = 404, description = "Currency or exchange rate not found")
    )
)]
async fn convert() {}

/// OpenAPI documentation for the Currency Exchange API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Currency Exchange Service API",
        version = "1.0.0",
        description = "Currency records, directed exchange rates between them, and conversions using the stored rate.\n\nWrite endpoints accept `application/x-www-form-urlencoded` bodies.",
        license(name = "MIT"),
    ),
    paths(
        health,
        list_currencies,
        create_currency,
        get_currency,
        list_exchange_rates,
        create_exchange_rate,
        get_exchange_rate,
        update_exchange_rate,
        convert,
    ),
    components(
        schemas(
            Currency,
            CurrencyId,
            CurrencySummary,
            CreateCurrencyForm,
            CurrencyCreatedResponse,
            ExchangeRateId,
            ExchangeRateResponse,
            CreateExchangeRateForm,
            UpdateExchangeRateForm,
            ExchangeRateChangedResponse,
            Conversion,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "currencies", description = "Currency records"),
        (name = "exchange rates", description = "Directed exchange rates between currencies"),
        (name = "exchange", description = "Amount conversion"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();

        for path in [
            "/health",
            "/currencies",
            "/currency/{code}",
            "/exchangeRates",
            "/exchangeRate/{pair}",
            "/exchange",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
