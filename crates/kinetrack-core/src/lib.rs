//! Core library for Kinetrack, a medical management client for a
//! football club's kinesiology department.
//!
//! Provides the authenticated API client, session and credential storage,
//! configuration, and the data models shared by every front end.

pub mod api;
pub mod auth;
pub mod config;
pub mod models;

pub use api::{ApiClient, ApiError, PlayerQuery};
pub use auth::{FileSessionStore, MemorySessionStore, SessionData, SessionStore};
pub use config::Config;
