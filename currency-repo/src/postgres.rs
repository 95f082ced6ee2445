//! PostgreSQL repository adapter.

use async_trait::async_trait;
use sqlx::PgPool;

use currency_types::{
    Currency, CurrencyCode, CurrencyPair, CurrencyRepository, ExchangeRate,
    ExchangeRateRepository, NewCurrency, RepoError,
};

use crate::types::{
    DbCurrency, DbExchangeRate, currency_insert_error, db_error, migration_statements,
    rate_write_error,
};

// ─────────────────────────────────────────────────────────────────────────────
// PostgreSQL Repository
// ─────────────────────────────────────────────────────────────────────────────

/// PostgreSQL repository. Pair uniqueness is enforced by `exchange_rates_pair_key`.
pub struct PostgresRepo {
    pool: PgPool,
}

/// Executes SQL statements from a migration file, splitting by semicolons.
async fn execute_migration(pool: &PgPool, sql: &str, name: &str) -> Result<(), anyhow::Error> {
    for stmt in migration_statements(sql) {
        sqlx::query(stmt)
            .execute(pool)
            .await
            .map_err(|e| anyhow::anyhow!("Migration {} failed: {}", name, e))?;
    }
    tracing::debug!(migration = name, "Applied Postgres migration");
    Ok(())
}

/// Runs all database migrations.
async fn run_migrations(pool: &PgPool) -> Result<(), anyhow::Error> {
    execute_migration(
        pool,
        include_str!("../migrations/0001_create_currencies_pg.sql"),
        "0001",
    )
    .await?;

    execute_migration(
        pool,
        include_str!("../migrations/0002_create_exchange_rates_pg.sql"),
        "0002",
    )
    .await?;

    Ok(())
}

impl PostgresRepo {
    /// Creates a new PostgreSQL repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl CurrencyRepository for PostgresRepo {
    async fn create_currency(&self, currency: NewCurrency) -> Result<Currency, RepoError> {
        let row: DbCurrency = sqlx::query_as(
            r#"INSERT INTO currencies (code, full_name, sign) VALUES ($1, $2, $3)
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
            sqlx::query_as(r#"SELECT id, code, full_name, sign FROM currencies WHERE code = $1"#)
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
impl ExchangeRateRepository for PostgresRepo {
    async fn create_rate(&self, pair: &CurrencyPair, rate: f64) -> Result<ExchangeRate, RepoError> {
        let row: DbExchangeRate = sqlx::query_as(
            r#"INSERT INTO exchange_rates (base_currency_code, target_currency_code, rate) VALUES ($1, $2, $3)
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
               WHERE base_currency_code = $1 AND target_currency_code = $2"#,
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
            r#"UPDATE exchange_rates SET rate = $1
               WHERE base_currency_code = $2 AND target_currency_code = $3
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
