//! Animechan API v1 response types.
//!
//! These types represent the JSON response from the random-quote endpoint.

use serde::{Deserialize, Serialize};

/// Response envelope: `{ "status": "success", "data": { ... } }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub status: String,
    pub data: Quote,
}

/// A single quote with its source anime and speaking character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub content: String,
    pub anime: NamedEntity,
    pub character: NamedEntity,
}

/// Entity with a numeric id and a display name (anime or character)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedEntity {
    pub id: u32,
    pub name: String,
}
