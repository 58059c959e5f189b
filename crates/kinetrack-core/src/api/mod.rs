//! HTTP client for the clinic management backend.
//!
//! `ApiClient` wraps a reqwest client with bearer authentication sourced
//! from a `SessionStore` and maps failed responses to `ApiError`.

pub mod client;
pub mod error;

pub use client::{ApiClient, PlayerQuery};
pub use error::ApiError;
