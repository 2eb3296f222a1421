//! Quote fetcher library for retrieving random anime quotes from Animechan.
//!
//! This library provides a typed client for the Animechan random-quote
//! endpoint, the flattened record the binary prints, and the supporting
//! configuration and logging infrastructure.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;

pub use api::{AnimechanClient, NamedEntity, Quote, QuoteResponse, DEFAULT_BASE_URL};
pub use config::Config;
pub use error::FetchError;
pub use logging::LogConfig;
pub use models::ResultRecord;
