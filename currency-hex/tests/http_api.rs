//! HTTP-level tests for the currency exchange routes.
//!
//! Each test drives the full router against an in-memory SQLite repository.

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use currency_hex::{ExchangeService, inbound::HttpServer};
use currency_repo::SqliteRepo;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

async fn create_app() -> Router {
    let repo = SqliteRepo::new("sqlite::memory:").await.unwrap();
    HttpServer::new(ExchangeService::new(repo)).router()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn form(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

async fn seed(app: &Router) {
    for body in [
        "code=USD&fullname=US+Dollar&sign=%24",
        "code=EUR&fullname=Euro&sign=%E2%82%AC",
    ] {
        let (status, _) = send(app, form(Method::POST, "/currencies", body)).await;
        assert_eq!(status, StatusCode::CREATED);
    }
}

#[tokio::test]
async fn test_health() {
    let app = create_app().await;

    let (status, json) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_create_and_fetch_currency() {
    let app = create_app().await;

    let (status, json) = send(
        &app,
        form(Method::POST, "/currencies", "code=usd&fullName=US+Dollar&sign=%24"),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["message"], "Currency created successfully");
    assert_eq!(json["code"], "USD");

    let (status, json) = send(&app, get("/currency/usd")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["code"], "USD");
    assert_eq!(json["fullName"], "US Dollar");
    assert_eq!(json["sign"], "$");
    assert!(json["id"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_create_currency_missing_field() {
    let app = create_app().await;

    let (status, json) = send(&app, form(Method::POST, "/currencies", "code=USD&sign=%24")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "All fields (code, fullname, sign) are required");
    assert_eq!(json["code"], 400);
}

#[tokio::test]
async fn test_create_currency_without_content_type_returns_json_error() {
    let app = create_app().await;
    let req = Request::builder()
        .method(Method::POST)
        .uri("/currencies")
        .body(Body::from("code=USD&fullname=US+Dollar&sign=%24"))
        .unwrap();

    let (status, json) = send(&app, req).await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(json["code"], 415);
    assert!(json["error"].is_string());

    let (_, currencies) = send(&app, get("/currencies")).await;
    assert_eq!(currencies, serde_json::json!([]));
}

#[tokio::test]
async fn test_duplicate_currency_conflicts() {
    let app = create_app().await;
    seed(&app).await;

    let (status, json) = send(
        &app,
        form(Method::POST, "/currencies", "code=USD&fullname=Dollar&sign=%24"),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], 409);
}

#[tokio::test]
async fn test_unknown_currency_not_found() {
    let app = create_app().await;

    let (status, json) = send(&app, get("/currency/JPY")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], 404);
}

#[tokio::test]
async fn test_invalid_currency_code_rejected() {
    let app = create_app().await;

    let (status, _) = send(&app, get("/currency/US$")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_empty_lists_are_arrays() {
    let app = create_app().await;

    let (_, currencies) = send(&app, get("/currencies")).await;
    let (_, rates) = send(&app, get("/exchangeRates")).await;

    assert_eq!(currencies, serde_json::json!([]));
    assert_eq!(rates, serde_json::json!([]));
}

#[tokio::test]
async fn test_rate_lifecycle() {
    let app = create_app().await;
    seed(&app).await;

    let (status, json) = send(
        &app,
        form(Method::POST, "/exchangeRates", "base=USD&target=EUR&rate=0.9"),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["message"], "Exchange rate created successfully");
    assert_eq!(json["pair"], "USD/EUR");

    let (status, json) = send(&app, get("/exchangeRate/USDEUR")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["rate"], 0.9);
    assert_eq!(json["baseCurrency"]["code"], "USD");
    assert_eq!(json["baseCurrency"]["name"], "US Dollar");
    assert_eq!(json["targetCurrency"]["sign"], "€");

    let (status, json) = send(
        &app,
        form(Method::PATCH, "/exchangeRate/USD-EUR", "newRate=0.95"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Exchange rate updated successfully");

    let (_, json) = send(&app, get("/exchangeRates")).await;
    let rates = json.as_array().unwrap();
    assert_eq!(rates.len(), 1);
    assert_eq!(rates[0]["rate"], 0.95);
    assert_eq!(rates[0]["targetCurrency"]["name"], "Euro");
}

#[tokio::test]
async fn test_duplicate_rate_conflicts() {
    let app = create_app().await;
    seed(&app).await;

    let body = "base=USD&target=EUR&rate=0.9";
    let (first, _) = send(&app, form(Method::POST, "/exchangeRates", body)).await;
    let (second, json) = send(&app, form(Method::POST, "/exchangeRates", body)).await;

    assert_eq!(first, StatusCode::CREATED);
    assert_eq!(second, StatusCode::CONFLICT);
    assert_eq!(json["code"], 409);
}

#[tokio::test]
async fn test_rate_for_unknown_currency_not_found() {
    let app = create_app().await;
    seed(&app).await;

    let (status, _) = send(
        &app,
        form(Method::POST, "/exchangeRates", "base=USD&target=JPY&rate=150"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, rates) = send(&app, get("/exchangeRates")).await;
    assert_eq!(rates, serde_json::json!([]));
}

#[tokio::test]
async fn test_invalid_rate_values_rejected() {
    let app = create_app().await;
    seed(&app).await;

    for rate in ["abc", "0", "-1", ""] {
        let body = format!("base=USD&target=EUR&rate={rate}");
        let (status, _) = send(&app, form(Method::POST, "/exchangeRates", &body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "rate {rate:?}");
    }
}

#[tokio::test]
async fn test_update_missing_rate_not_found() {
    let app = create_app().await;
    seed(&app).await;

    let (status, _) = send(
        &app,
        form(Method::PATCH, "/exchangeRate/USDEUR", "newRate=0.9"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, get("/exchangeRate/USDEUR")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_pair_token_rejected() {
    let app = create_app().await;

    let (status, _) = send(&app, get("/exchangeRate/USDEU")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_convert() {
    let app = create_app().await;
    seed(&app).await;
    send(
        &app,
        form(Method::POST, "/exchangeRates", "base=USD&target=EUR&rate=0.5"),
    )
    .await;

    let (status, json) = send(&app, get("/exchange?from=USD&to=EUR&amount=10")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["baseCurrency"]["code"], "USD");
    assert_eq!(json["targetCurrency"]["code"], "EUR");
    assert_eq!(json["rate"], 0.5);
    assert_eq!(json["amount"], 10.0);
    assert_eq!(json["convertedAmount"], 5.0);
}

#[tokio::test]
async fn test_convert_reverse_pair_not_found() {
    let app = create_app().await;
    seed(&app).await;
    send(
        &app,
        form(Method::POST, "/exchangeRates", "base=USD&target=EUR&rate=0.5"),
    )
    .await;

    let (status, _) = send(&app, get("/exchange?from=EUR&to=USD&amount=10")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_convert_missing_amount_rejected() {
    let app = create_app().await;
    seed(&app).await;

    let (status, json) = send(&app, get("/exchange?from=USD&to=EUR")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "All parameters (from, to, amount) are required");
}

#[tokio::test]
async fn test_convert_repeated_parameter_returns_json_error() {
    let app = create_app().await;
    seed(&app).await;

    let (status, json) = send(&app, get("/exchange?from=USD&from=EUR&to=EUR&amount=1")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], 400);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_openapi_document_served() {
    let app = create_app().await;

    let (status, json) = send(&app, get("/api-docs/openapi.json")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["paths"]["/exchangeRate/{pair}"].is_object());
}
