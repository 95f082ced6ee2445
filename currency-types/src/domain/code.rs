//! Currency codes and ordered code pairs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Longest code the storage schema accepts.
pub const MAX_CODE_LEN: usize = 10;

/// Width of each half of a concatenated pair token such as `USDEUR`.
const LEGACY_CODE_LEN: usize = 3;

/// Delimiter accepted between the two codes of a pair token (`USD-EUR`).
pub const PAIR_DELIMITER: char = '-';

/// Short textual identifier for a currency, e.g. `USD`.
///
/// Always upper-case ASCII alphanumeric, between 1 and [`MAX_CODE_LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Parses and normalises a currency code.
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let code = raw.trim();
        if code.is_empty() {
            return Err(DomainError::InvalidCurrencyCode(
                "currency code cannot be empty".into(),
            ));
        }
        if code.len() > MAX_CODE_LEN {
            return Err(DomainError::InvalidCurrencyCode(format!(
                "currency code '{}' is longer than {} characters",
                code, MAX_CODE_LEN
            )));
        }
        if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(DomainError::InvalidCurrencyCode(format!(
                "currency code '{}' must be ASCII letters or digits",
                code
            )));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CurrencyCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

/// Ordered combination of a base and a target currency code.
///
/// `(USD, EUR)` and `(EUR, USD)` are distinct pairs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyPair {
    pub base: CurrencyCode,
    pub target: CurrencyCode,
}

impl CurrencyPair {
    pub fn new(base: CurrencyCode, target: CurrencyCode) -> Self {
        Self { base, target }
    }

    /// Parses a pair from a single path token.
    ///
    /// Accepts `BASE-TARGET` for codes of any width, or a six character token
    /// made of two three-letter codes (`USDEUR`). Anything else is rejected
    /// rather than truncated.
    pub fn from_path(token: &str) -> Result<Self, DomainError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(DomainError::InvalidCurrencyPair(
                "currency pair is required".into(),
            ));
        }

        if let Some((base, target)) = token.split_once(PAIR_DELIMITER) {
            return Self::from_parts(token, base, target);
        }

        if token.len() == LEGACY_CODE_LEN * 2 && token.is_ascii() {
            let (base, target) = token.split_at(LEGACY_CODE_LEN);
            return Self::from_parts(token, base, target);
        }

        Err(DomainError::InvalidCurrencyPair(format!(
            "'{}' is not a currency pair; use BASE{}TARGET or two 3-letter codes",
            token, PAIR_DELIMITER
        )))
    }

    fn from_parts(token: &str, base: &str, target: &str) -> Result<Self, DomainError> {
        if base.trim().is_empty() || target.trim().is_empty() {
            return Err(DomainError::InvalidCurrencyPair(format!(
                "'{}': both base and target currency codes are required",
                token
            )));
        }
        Ok(Self::new(CurrencyCode::new(base)?, CurrencyCode::new(target)?))
    }

    /// Returns the same pair with base and target swapped.
    pub fn reversed(&self) -> Self {
        Self::new(self.target.clone(), self.base.clone())
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::new(s).unwrap()
    }

    #[test]
    fn test_code_is_uppercased() {
        assert_eq!(code("usd").as_str(), "USD");
        assert_eq!(code(" eur ").as_str(), "EUR");
    }

    #[test]
    fn test_empty_code_fails() {
        assert!(matches!(
            CurrencyCode::new("  "),
            Err(DomainError::InvalidCurrencyCode(_))
        ));
    }

    #[test]
    fn test_code_rejects_symbols_and_long_input() {
        assert!(CurrencyCode::new("US$").is_err());
        assert!(CurrencyCode::new("ABCDEFGHIJK").is_err());
        assert!(CurrencyCode::new("USDT").is_ok());
    }

    #[test]
    fn test_code_deserialize_validates() {
        let ok: CurrencyCode = serde_json::from_str("\"gbp\"").unwrap();
        assert_eq!(ok.as_str(), "GBP");
        assert!(serde_json::from_str::<CurrencyCode>("\"\"").is_err());
    }

    #[test]
    fn test_pair_from_concatenated_token() {
        let pair = CurrencyPair::from_path("USDEUR").unwrap();
        assert_eq!(pair.base, code("USD"));
        assert_eq!(pair.target, code("EUR"));
    }

    #[test]
    fn test_pair_from_delimited_token() {
        let pair = CurrencyPair::from_path("USDT-eur").unwrap();
        assert_eq!(pair.base, code("USDT"));
        assert_eq!(pair.target, code("EUR"));
    }

    #[test]
    fn test_pair_rejects_ambiguous_width() {
        assert!(matches!(
            CurrencyPair::from_path("USDTEUR"),
            Err(DomainError::InvalidCurrencyPair(_))
        ));
        assert!(CurrencyPair::from_path("USD").is_err());
        assert!(CurrencyPair::from_path("USD-").is_err());
        assert!(CurrencyPair::from_path("").is_err());
    }

    #[test]
    fn test_pair_display_and_reverse() {
        let pair = CurrencyPair::new(code("USD"), code("EUR"));
        assert_eq!(pair.to_string(), "USD/EUR");
        assert_eq!(pair.reversed().to_string(), "EUR/USD");
    }
}
