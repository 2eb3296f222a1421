//! Animechan API client implementation.
//!
//! This module provides a typed, single-shot client for the Animechan v1
//! random-quote endpoint.

pub mod client;
pub mod types;

pub use client::{AnimechanClient, DEFAULT_BASE_URL};
pub use types::*;
