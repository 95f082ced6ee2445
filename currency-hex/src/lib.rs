//! # Currency Hex
//!
//! Application service layer and HTTP adapter for the currency exchange service.
//!
//! ## Architecture
//!
//! - `service/` - Application service (orchestrates currency, rate and conversion operations)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi/` - OpenAPI document served by the HTTP adapter
//!
//! The service is generic over `R: ExchangeRepository`, allowing
//! different repository implementations to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;


pub use service::ExchangeService;
