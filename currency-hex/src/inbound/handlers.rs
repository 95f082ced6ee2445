//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use utoipa::OpenApi;

use currency_types::{
    AppError, ConvertQuery, CreateCurrencyForm, CreateExchangeRateForm, CurrencyCode,
    CurrencyCreatedResponse, CurrencyPair, DomainError, ExchangeRateChangedResponse,
    ExchangeRateResponse, ExchangeRepository, NewCurrency, UpdateExchangeRateForm,
};

use super::extract::{FormBody, QueryParams};
use crate::ExchangeService;
use crate::openapi::ApiDoc;

/// Application state shared across handlers.
pub struct AppState<R: ExchangeRepository> {
    pub service: ExchangeService<R>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        error_response(status, message)
    }
}

/// Builds the `{error, code}` body shared by handler errors and extractor rejections.
pub(super) fn error_response(status: StatusCode, message: String) -> Response {
    let body = serde_json::json!({
        "error": message,
        "code": status.as_u16()
    });

    (status, Json(body)).into_response()
}

/// Rejects the request unless every value is non-blank.
fn require_fields(values: &[&str], message: &str) -> Result<(), AppError> {
    if values.iter().any(|v| v.trim().is_empty()) {
        return Err(AppError::BadRequest(message.into()));
    }
    Ok(())
}

/// Parses a decimal form or query value.
fn parse_number(raw: &str, what: &str) -> Result<f64, AppError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| AppError::BadRequest(format!("Invalid {} format", what)))
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Serves the OpenAPI document.
pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

// ─────────────────────────────────────────────────────────────────────────────
// Currencies
// ─────────────────────────────────────────────────────────────────────────────

/// List all currencies.
#[tracing::instrument(skip(state))]
pub async fn list_currencies<R: ExchangeRepository>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<impl IntoResponse, ApiError> {
    let currencies = state.service.list_currencies().await?;
    Ok(Json(currencies))
}

/// Create a currency from form fields.
#[tracing::instrument(skip(state), fields(code = %form.code))]
pub async fn create_currency<R: ExchangeRepository>(
    State(state): State<Arc<AppState<R>>>,
    FormBody(form): FormBody<CreateCurrencyForm>,
) -> Result<impl IntoResponse, ApiError> {
    require_fields(
        &[form.code.as_str(), form.fullname.as_str(), form.sign.as_str()],
        "All fields (code, fullname, sign) are required",
    )?;

    let currency = NewCurrency::new(&form.code, &form.fullname, &form.sign)?;
    let created = state.service.create_currency(currency).await?;

    Ok((
        StatusCode::CREATED,
        Json(CurrencyCreatedResponse {
            message: "Currency created successfully".into(),
            code: created.code.into(),
        }),
    ))
}

/// Get a currency by code.
#[tracing::instrument(skip(state))]
pub async fn get_currency<R: ExchangeRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let code = CurrencyCode::new(&code)?;
    let currency = state.service.get_currency(&code).await?;
    Ok(Json(currency))
}

// ─────────────────────────────────────────────────────────────────────────────
// Exchange rates
// ─────────────────────────────────────────────────────────────────────────────

/// List all exchange rates with both currencies resolved.
#[tracing::instrument(skip(state))]
pub async fn list_exchange_rates<R: ExchangeRepository>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<impl IntoResponse, ApiError> {
    let rates: Vec<ExchangeRateResponse> = state
        .service
        .list_exchange_rates()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(rates))
}

/// Create an exchange rate from form fields.
#[tracing::instrument(skip(state), fields(base = %form.base, target = %form.target))]
pub async fn create_exchange_rate<R: ExchangeRepository>(
    State(state): State<Arc<AppState<R>>>,
    FormBody(form): FormBody<CreateExchangeRateForm>,
) -> Result<impl IntoResponse, ApiError> {
    require_fields(
        &[form.base.as_str(), form.target.as_str(), form.rate.as_str()],
        "All fields (base, target, rate) are required",
    )?;

    let pair = CurrencyPair::new(
        CurrencyCode::new(&form.base)?,
        CurrencyCode::new(&form.target)?,
    );
    let rate = parse_number(&form.rate, "rate")?;

    let created = state.service.create_exchange_rate(pair, rate).await?;

    Ok((
        StatusCode::CREATED,
        Json(ExchangeRateChangedResponse {
            message: "Exchange rate created successfully".into(),
            pair: created.pair().to_string(),
        }),
    ))
}

/// Get the exchange rate for a pair path token such as `USDEUR` or `USD-EUR`.
#[tracing::instrument(skip(state))]
pub async fn get_exchange_rate<R: ExchangeRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(pair): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let pair = CurrencyPair::from_path(&pair)?;
    let details = state.service.get_exchange_rate(&pair).await?;
    Ok(Json(ExchangeRateResponse::from(details)))
}

/// Change the rate of an existing pair.
#[tracing::instrument(skip(state))]
pub async fn update_exchange_rate<R: ExchangeRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(pair): Path<String>,
    FormBody(form): FormBody<UpdateExchangeRateForm>,
) -> Result<impl IntoResponse, ApiError> {
    let pair = CurrencyPair::from_path(&pair)?;
    require_fields(&[form.new_rate.as_str()], "Field newRate is required")?;
    let new_rate = parse_number(&form.new_rate, "rate")?;

    let updated = state.service.update_exchange_rate(&pair, new_rate).await?;

    Ok(Json(ExchangeRateChangedResponse {
        message: "Exchange rate updated successfully".into(),
        pair: updated.pair().to_string(),
    }))
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversion
// ─────────────────────────────────────────────────────────────────────────────

/// Convert an amount using the stored rate for `from`/`to`.
#[tracing::instrument(skip(state))]
pub async fn convert<R: ExchangeRepository>(
    State(state): State<Arc<AppState<R>>>,
    QueryParams(query): QueryParams<ConvertQuery>,
) -> Result<impl IntoResponse, ApiError> {
    require_fields(
        &[query.from.as_str(), query.to.as_str(), query.amount.as_str()],
        "All parameters (from, to, amount) are required",
    )?;

    let pair = CurrencyPair::new(
        CurrencyCode::new(&query.from)?,
        CurrencyCode::new(&query.to)?,
    );
    let amount = parse_number(&query.amount, "amount")?;

    let conversion = state.service.convert(&pair, amount).await?;
    Ok(Json(conversion))
}
