//! Session and credential storage.
//!
//! The backend issues a bearer access token at login. The token, the refresh
//! token, and the cached user info are kept in a `SessionStore` and are
//! cleared together the moment a request comes back 401.

pub mod credentials;
pub mod session;

pub use credentials::CredentialStore;
pub use session::{FileSessionStore, MemorySessionStore, SessionData, SessionStore};
