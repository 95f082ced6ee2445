//! HTTP Inbound Adapter
//!
//! Axum-based HTTP server that drives the exchange service.

mod extract;
mod handlers;
mod server;

pub use server::HttpServer;
