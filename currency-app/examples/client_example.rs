//! Client example demonstrating the currency and exchange rate flow against a running server.
//!
//! Run with: cargo run -p currency-app --example client_example

use currency_client::{ClientError, CurrencyClient};
use currency_hex::{ExchangeService, inbound::HttpServer};
use currency_repo::build_repo;
use tempfile::tempdir;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    // Bind an available port
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();

    // Use a temp file-backed SQLite DB
    let tmp = tempdir()?;
    let db_path = tmp.path().join("currency.db");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

    println!("🚀 Starting server on port {port}...");
    println!("   Database: {db_url}");

    // Build repository (handles connection and migration)
    let repo = build_repo(&db_url).await?;

    // Start server in background
    let router = HttpServer::new(ExchangeService::new(repo)).router();
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router.into_make_service()).await {
            eprintln!("server error: {e}");
        }
    });

    let client = CurrencyClient::new(format!("http://127.0.0.1:{port}"));

    // ─────────────────────────────────────────────────────────────────────────
    // Demo: currencies, rates and a conversion
    // ─────────────────────────────────────────────────────────────────────────

    let healthy = client.health().await?;
    println!("✅ Server health: {healthy}");

    for (code, name, sign) in [
        ("USD", "US Dollar", "$"),
        ("EUR", "Euro", "€"),
        ("GBP", "Pound Sterling", "£"),
    ] {
        let created = client.create_currency(code, name, sign).await?;
        println!("✅ {} ({})", created.message, created.code);
    }

    let created = client.create_exchange_rate("USD", "EUR", 0.9).await?;
    println!("✅ {}: {}", created.message, created.pair);
    client.create_exchange_rate("GBP", "USD", 1.27).await?;

    // Same pair again is a conflict
    match client.create_exchange_rate("USD", "EUR", 0.95).await {
        Err(ClientError::Api { status, message }) => {
            println!("✅ Duplicate rejected ({status}): {message}")
        }
        other => anyhow::bail!("expected a conflict, got {other:?}"),
    }

    let updated = client.update_exchange_rate("USD", "EUR", 0.92).await?;
    println!("✅ {}: {}", updated.message, updated.pair);

    let conversion = client.convert("USD", "EUR", 250.0).await?;
    println!(
        "💱 {} {} = {:.2} {} (rate {})",
        conversion.amount,
        conversion.base_currency.code,
        conversion.converted_amount,
        conversion.target_currency.code,
        conversion.rate
    );

    // No inverse fallback
    if let Err(e) = client.convert("EUR", "USD", 10.0).await {
        println!("✅ EUR→USD has no stored rate: {e}");
    }

    println!("\n📋 All exchange rates:");
    for rate in client.list_exchange_rates().await? {
        println!(
            "   - {} → {}: {}",
            rate.base_currency.code, rate.target_currency.code, rate.rate
        );
    }

    println!("\n🎉 Example completed successfully!");

    Ok(())
}
