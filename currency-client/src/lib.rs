//! # Currency Client SDK
//!
//! A typed Rust client for the Currency Exchange API.

use currency_types::{
    Conversion, Currency, CurrencyCreatedResponse, ExchangeRateChangedResponse,
    ExchangeRateResponse,
};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Currency Exchange API client.
pub struct CurrencyClient {
    base_url: String,
    http: Client,
}

impl CurrencyClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Path for a pair; the dashed form works for codes of any width.
    fn pair_path(base: &str, target: &str) -> String {
        format!("/exchangeRate/{}-{}", base.trim(), target.trim())
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self.http.get(self.url("/health")).send().await?;
        Ok(resp.status().is_success())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Currencies
    // ─────────────────────────────────────────────────────────────────────────

    /// Lists all currencies.
    pub async fn list_currencies(&self) -> Result<Vec<Currency>, ClientError> {
        self.send(self.http.get(self.url("/currencies"))).await
    }

    /// Gets a currency by code.
    pub async fn get_currency(&self, code: &str) -> Result<Currency, ClientError> {
        self.send(
            self.http
                .get(self.url(&format!("/currency/{}", code.trim()))),
        )
        .await
    }

    /// Creates a currency.
    pub async fn create_currency(
        &self,
        code: &str,
        full_name: &str,
        sign: &str,
    ) -> Result<CurrencyCreatedResponse, ClientError> {
        let form = [("code", code), ("fullname", full_name), ("sign", sign)];
        self.send(self.http.post(self.url("/currencies")).form(&form))
            .await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Exchange rates
    // ─────────────────────────────────────────────────────────────────────────

    /// Lists all exchange rates.
    pub async fn list_exchange_rates(&self) -> Result<Vec<ExchangeRateResponse>, ClientError> {
        self.send(self.http.get(self.url("/exchangeRates"))).await
    }

    /// Gets the exchange rate for `base` to `target`.
    pub async fn get_exchange_rate(
        &self,
        base: &str,
        target: &str,
    ) -> Result<ExchangeRateResponse, ClientError> {
        self.send(self.http.get(self.url(&Self::pair_path(base, target))))
            .await
    }

    /// Creates the exchange rate for a pair that has none yet.
    pub async fn create_exchange_rate(
        &self,
        base: &str,
        target: &str,
        rate: f64,
    ) -> Result<ExchangeRateChangedResponse, ClientError> {
        let rate = rate.to_string();
        let form = [("base", base), ("target", target), ("rate", rate.as_str())];
        self.send(self.http.post(self.url("/exchangeRates")).form(&form))
            .await
    }

    /// Changes the rate of an existing pair.
    pub async fn update_exchange_rate(
        &self,
        base: &str,
        target: &str,
        new_rate: f64,
    ) -> Result<ExchangeRateChangedResponse, ClientError> {
        let new_rate = new_rate.to_string();
        let form = [("newRate", new_rate.as_str())];
        self.send(
            self.http
                .patch(self.url(&Self::pair_path(base, target)))
                .form(&form),
        )
        .await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Conversion
    // ─────────────────────────────────────────────────────────────────────────

    /// Converts `amount` of `from` into `to` using the stored rate.
    pub async fn convert(
        &self,
        from: &str,
        to: &str,
        amount: f64,
    ) -> Result<Conversion, ClientError> {
        let amount = amount.to_string();
        let query = [("from", from), ("to", to), ("amount", amount.as_str())];
        self.send(self.http.get(self.url("/exchange")).query(&query))
            .await
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ClientError> {
        let resp = req.send().await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(ClientError::Api {
                status: status.as_u16(),
                message: error_message(body),
            })
        }
    }
}

/// Pulls the `error` field out of an error body, falling back to the raw text.
fn error_message(body: String) -> String {
    serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
        .unwrap_or(body)
}
