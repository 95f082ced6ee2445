//! SQLite repository adapter.
#![allow(clippy::collapsible_if)]

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::str::FromStr;

use currency_types::{
    Currency, CurrencyCode, CurrencyPair, CurrencyRepository, ExchangeRate,
    ExchangeRateRepository, NewCurrency, RepoError,
};

use crate::types::{
    DbCurrency, DbExchangeRate, currency_insert_error, db_error, migration_statements,
    rate_write_error,
};

const MIGRATIONS: &[(&str, &str)] = &[
    ("0001", include_str!("../migrations/0001_create_currencies.sql")),
    ("0002", include_str!("../migrations/0002_create_exchange_rates.sql")),
];

/// Runs all database migrations.
async fn run_migrations(pool: &SqlitePool) -> Result<(), anyhow::Error> {
    for (name, sql) in MIGRATIONS {
        for stmt in migration_statements(sql) {
            sqlx::query(stmt)
                .execute(pool)
                .await
                .map_err(|e| anyhow::anyhow!("Migration {} failed: {}", name, e))?;
        }
        tracing::debug!(migration = name, "Applied SQLite migration");
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Repository
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite repository implementation.
pub struct SqliteRepo {
    pool: SqlitePool,
}

impl SqliteRepo {
    /// Creates a new SQLite repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePool::connect_with(options).await?;

        run_migrations(&pool).await?;

        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl CurrencyRepository for SqliteRepo {
    async fn create_currency(&self, currency: NewCurrency) -> Result<Currency, RepoError> {
        let row: DbCurrency = sqlx::query_as(
            r#"INSERT INTO currencies (code, full_name, sign) VALUES (?, ?, ?)
               RETURNING id, code, full_name, sign"#,
        )
        .bind(currency.code.as_str())
        .bind(&currency.full_name)
        .bind(&currency.sign)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| currency_insert_error(e, &currency.code))?;

        row.into_domain()
    }

    async fn get_currency_by_code(&self, code: &CurrencyCode) -> Result<Currency, RepoError> {
        let row: Option<DbCurrency> =
            sqlx::query_as(r#"SELECT id, code, full_name, sign FROM currencies WHERE code = ?"#)
                .bind(code.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error)?;

        row.ok_or_else(|| RepoError::CurrencyNotFound(code.clone()))?
            .into_domain()
    }

    async fn list_currencies(&self) -> Result<Vec<Currency>, RepoError> {
        let rows: Vec<DbCurrency> =
            sqlx::query_as(r#"SELECT id, code, full_name, sign FROM currencies ORDER BY id"#)
                .fetch_all(&self.pool)
                .await
                .map_err(db_error)?;

        rows.into_iter().map(DbCurrency::into_domain).collect()
    }
}

#[async_trait]
impl ExchangeRateRepository for SqliteRepo {
    async fn create_rate(&self, pair: &CurrencyPair, rate: f64) -> Result<ExchangeRate, RepoError> {
        let row: DbExchangeRate = sqlx::query_as(
            r#"INSERT INTO exchange_rates (base_currency_code, target_currency_code, rate) VALUES (?, ?, ?)
               RETURNING id, base_currency_code, target_currency_code, rate"#,
        )
        .bind(pair.base.as_str())
        .bind(pair.target.as_str())
        .bind(rate)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| rate_write_error(e, pair, rate))?;

        row.into_domain()
    }

    async fn get_rate_by_pair(&self, pair: &CurrencyPair) -> Result<ExchangeRate, RepoError> {
        let row: Option<DbExchangeRate> = sqlx::query_as(
            r#"SELECT id, base_currency_code, target_currency_code, rate FROM exchange_rates
               WHERE base_currency_code = ? AND target_currency_code = ?"#,
        )
        .bind(pair.base.as_str())
        .bind(pair.target.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        row.ok_or_else(|| RepoError::RateNotFound(pair.clone()))?
            .into_domain()
    }

    async fn update_rate(&self, pair: &CurrencyPair, rate: f64) -> Result<ExchangeRate, RepoError> {
        let row: Option<DbExchangeRate> = sqlx::query_as(
            r#"UPDATE exchange_rates SET rate = ?
               WHERE base_currency_code = ? AND target_currency_code = ?
               RETURNING id, base_currency_code, target_currency_code, rate"#,
        )
        .bind(rate)
        .bind(pair.base.as_str())
        .bind(pair.target.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| rate_write_error(e, pair, rate))?;

        row.ok_or_else(|| RepoError::RateNotFound(pair.clone()))?
            .into_domain()
    }

    async fn list_rates(&self) -> Result<Vec<ExchangeRate>, RepoError> {
        let rows: Vec<DbExchangeRate> = sqlx::query_as(
            r#"SELECT id, base_currency_code, target_currency_code, rate FROM exchange_rates ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        rows.into_iter().map(DbExchangeRate::into_domain).collect()
    }
}
