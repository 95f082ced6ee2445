//! Domain models for the currency exchange service.

pub mod code;
pub mod conversion;
pub mod currency;
pub mod exchange_rate;

pub use code::{CurrencyCode, CurrencyPair};
pub use conversion::{Conversion, validate_amount};
pub use currency::{Currency, CurrencyId, NewCurrency};
pub use exchange_rate::{ExchangeRate, ExchangeRateDetails, ExchangeRateId, validate_rate};
