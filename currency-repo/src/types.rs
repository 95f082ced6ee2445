//! Shared database row types and error mapping for SQLite and PostgreSQL.

use sqlx::FromRow;

use currency_types::{
    Currency, CurrencyCode, CurrencyId, CurrencyPair, DomainError, ExchangeRate, ExchangeRateId,
    RepoError,
};

// ─────────────────────────────────────────────────────────────────────────────
// Database row structs (derive FromRow for automatic mapping)
// ─────────────────────────────────────────────────────────────────────────────

/// Currency row from database.
#[derive(FromRow)]
pub struct DbCurrency {
    pub id: i64,
    pub code: String,
    pub full_name: String,
    pub sign: String,
}

impl DbCurrency {
    pub fn into_domain(self) -> Result<Currency, RepoError> {
        Ok(Currency::from_parts(
            CurrencyId::new(self.id),
            parse_code(&self.code)?,
            self.full_name,
            self.sign,
        ))
    }
}

/// Exchange rate row from database.
#[derive(FromRow)]
pub struct DbExchangeRate {
    pub id: i64,
    pub base_currency_code: String,
    pub target_currency_code: String,
    pub rate: f64,
}

impl DbExchangeRate {
    pub fn into_domain(self) -> Result<ExchangeRate, RepoError> {
        Ok(ExchangeRate::from_parts(
            ExchangeRateId::new(self.id),
            parse_code(&self.base_currency_code)?,
            parse_code(&self.target_currency_code)?,
            self.rate,
        ))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Parsing helpers
// ─────────────────────────────────────────────────────────────────────────────

fn parse_code(s: &str) -> Result<CurrencyCode, RepoError> {
    CurrencyCode::new(s)
        .map_err(|e| RepoError::Database(format!("Stored currency code '{}' is invalid: {}", s, e)))
}

// ─────────────────────────────────────────────────────────────────────────────
// Error mapping
// ─────────────────────────────────────────────────────────────────────────────

pub fn db_error(e: sqlx::Error) -> RepoError {
    RepoError::Database(e.to_string())
}

/// Maps a failed `INSERT INTO currencies`.
pub fn currency_insert_error(e: sqlx::Error, code: &CurrencyCode) -> RepoError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            RepoError::DuplicateCurrency(code.clone())
        }
        _ => db_error(e),
    }
}

/// Maps a failed `INSERT` or `UPDATE` on exchange_rates.
pub fn rate_write_error(e: sqlx::Error, pair: &CurrencyPair, rate: f64) -> RepoError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            RepoError::ExchangeRateAlreadyExists(pair.clone())
        }
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => RepoError::Conflict(format!(
            "Exchange rate {} references an unknown currency",
            pair
        )),
        sqlx::Error::Database(db) if db.is_check_violation() => {
            RepoError::Domain(DomainError::InvalidRate(rate))
        }
        _ => db_error(e),
    }
}

/// Splits a migration file into individual statements.
pub fn migration_statements(sql: &str) -> impl Iterator<Item = &str> {
    sql.split(';').map(str::trim).filter(|stmt| !stmt.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migration_statements_split() {
        let sql = "CREATE TABLE a (id INT);\n\nCREATE INDEX i ON a (id);\n";
        let stmts: Vec<_> = migration_statements(sql).collect();
        assert_eq!(stmts, vec!["CREATE TABLE a (id INT)", "CREATE INDEX i ON a (id)"]);
    }

    #[test]
    fn test_corrupt_code_is_database_error() {
        let row = DbCurrency {
            id: 1,
            code: "".into(),
            full_name: "Broken".into(),
            sign: "?".into(),
        };
        assert!(matches!(row.into_domain(), Err(RepoError::Database(_))));
    }
}
