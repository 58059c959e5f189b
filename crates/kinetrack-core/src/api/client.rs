//! API client for communicating with the clinic management REST backend.
//!
//! This module provides the `ApiClient` struct for making authenticated
//! requests against the players, attentions, injuries, and user endpoints.
//!
//! Every request goes through one send path: the stored access token is
//! attached as a bearer-authorization header when present, and a 401
//! response terminates the session - the store is cleared and a
//! session-expired notification is published so the UI can return to the
//! login screen. No request is ever retried.

use std::sync::Arc;

use reqwest::{header, Client, Method, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::auth::{SessionData, SessionStore};
use crate::models::{
    Attention, DailyState, Division, Injury, LoginResponse, NewAttention, NewInjury, NewPlayer,
    NewUser, Player, Registration, StageOption, UserAccount,
};

use super::ApiError;

/// HTTP request timeout in seconds.
/// 30s allows for slow backend responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// List endpoints answer either a bare array or a paginated wrapper,
/// depending on backend settings. Accept both.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Listing<T> {
    Plain(Vec<T>),
    Paged { results: Vec<T> },
}

impl<T> Listing<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Listing::Plain(items) => items,
            Listing::Paged { results } => results,
        }
    }
}

/// Credentials sent to the login endpoint
#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    rut: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct ChangeRoleRequest<'a> {
    role: &'a str,
}

/// Query filters for the player list
#[derive(Debug, Clone, Default)]
pub struct PlayerQuery {
    pub division: Option<i64>,
    pub active: Option<bool>,
    pub search: Option<String>,
}

impl PlayerQuery {
    fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(division) = self.division {
            params.push(("division", division.to_string()));
        }
        if let Some(active) = self.active {
            params.push(("activo", active.to_string()));
        }
        if let Some(ref search) = self.search {
            params.push(("search", search.clone()));
        }
        params
    }
}

/// Authenticated API client.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    store: Arc<dyn SessionStore>,
    expired_tx: watch::Sender<u64>,
}

impl ApiClient {
    /// Create a new API client against the given base address.
    /// The session store supplies the bearer token for every request.
    pub fn new(base_url: impl Into<String>, store: Arc<dyn SessionStore>) -> Result<Self, ApiError> {
        let mut default_headers = header::HeaderMap::new();
        default_headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .default_headers(default_headers)
            .build()?;

        let (expired_tx, _) = watch::channel(0);

        let base_url = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            store,
            expired_tx,
        })
    }

    /// Subscribe to session-expiry notifications. The value is bumped once
    /// per 401 response; the receiver side reacts by showing the login screen.
    pub fn subscribe_session_expired(&self) -> watch::Receiver<u64> {
        self.expired_tx.subscribe()
    }

    /// Whether the store currently holds a session credential
    pub fn is_authenticated(&self) -> bool {
        self.store.is_authenticated()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build a request with the bearer token attached when one is stored
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self.client.request(method, self.url(path));
        if let Some(token) = self.store.access_token() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Terminal session-invalid condition: drop the access token, refresh
    /// token, and cached user info together, then notify subscribers.
    fn invalidate_session(&self) {
        warn!("Session rejected by backend, clearing stored credentials");
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "Failed to clear session store");
        }
        self.expired_tx.send_modify(|n| *n += 1);
    }

    /// Map a response to an error unless it is successful. A 401 clears the
    /// session as a side effect; every error still propagates to the caller.
    async fn check_response(&self, response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        if status == StatusCode::UNAUTHORIZED {
            self.invalidate_session();
        }
        Err(ApiError::from_status(status, &body))
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let url = response.url().clone();
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response from {}: {}", url, e))
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!(path, "GET");
        let response = self.request(Method::GET, path).send().await?;
        let response = self.check_response(response).await?;
        Self::decode(response).await
    }

    async fn get_with_params<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        debug!(path, ?params, "GET");
        let response = self.request(Method::GET, path).query(params).send().await?;
        let response = self.check_response(response).await?;
        Self::decode(response).await
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let listing: Listing<T> = self.get(path).await?;
        Ok(listing.into_vec())
    }

    async fn get_list_with_params<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Vec<T>, ApiError> {
        let listing: Listing<T> = self.get_with_params(path, params).await?;
        Ok(listing.into_vec())
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(path, "POST");
        let response = self.request(Method::POST, path).json(body).send().await?;
        let response = self.check_response(response).await?;
        Self::decode(response).await
    }

    /// POST with an empty body, ignoring the response payload
    async fn post_action(&self, path: &str) -> Result<(), ApiError> {
        debug!(path, "POST");
        let response = self
            .request(Method::POST, path)
            .json(&serde_json::json!({}))
            .send()
            .await?;
        self.check_response(response).await?;
        Ok(())
    }

    async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(path, "PATCH");
        let response = self.request(Method::PATCH, path).json(body).send().await?;
        let response = self.check_response(response).await?;
        Self::decode(response).await
    }

    // ===== Authentication =====

    /// Persist the tokens and user info returned by an auth endpoint
    fn remember_session(&self, login: &LoginResponse) {
        let session = SessionData {
            access_token: login.access_token.clone(),
            refresh_token: login.refresh_token.clone(),
            user: login.user.clone(),
        };
        if let Err(e) = self.store.store_login(session) {
            warn!(error = %e, "Failed to persist session");
        }
    }

    /// Log in with RUT and password. On success the access token, refresh
    /// token, and user info are stored for subsequent requests.
    pub async fn login(&self, rut: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = LoginRequest { rut, password };
        let login: LoginResponse = self.post("/auth/login/", &body).await?;
        self.remember_session(&login);
        Ok(login)
    }

    /// Register a new account. The backend answers with the same token
    /// payload as login, so the new user is signed in immediately.
    pub async fn register(&self, registration: &Registration) -> Result<LoginResponse, ApiError> {
        let login: LoginResponse = self.post("/auth/register/", registration).await?;
        self.remember_session(&login);
        Ok(login)
    }

    /// Drop the stored session. Purely client-side; the backend keeps no state.
    pub fn logout(&self) {
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "Failed to clear session store");
        }
    }

    // ===== Divisions =====

    pub async fn fetch_divisions(&self) -> Result<Vec<Division>, ApiError> {
        self.get_list("/divisiones/").await
    }

    pub async fn fetch_division(&self, division_id: i64) -> Result<Division, ApiError> {
        self.get(&format!("/divisiones/{}/", division_id)).await
    }

    // ===== Players =====

    pub async fn fetch_players(&self, query: &PlayerQuery) -> Result<Vec<Player>, ApiError> {
        self.get_list_with_params("/jugadores/", &query.to_params())
            .await
    }

    pub async fn fetch_player(&self, player_id: i64) -> Result<Player, ApiError> {
        self.get(&format!("/jugadores/{}/", player_id)).await
    }

    pub async fn create_player(&self, player: &NewPlayer) -> Result<Player, ApiError> {
        self.post("/jugadores/", player).await
    }

    pub async fn update_player(
        &self,
        player_id: i64,
        changes: &serde_json::Value,
    ) -> Result<Player, ApiError> {
        self.patch(&format!("/jugadores/{}/", player_id), changes)
            .await
    }

    // ===== Attentions =====

    pub async fn fetch_attentions(&self) -> Result<Vec<Attention>, ApiError> {
        self.get_list("/atenciones/").await
    }

    pub async fn fetch_player_attentions(&self, player_id: i64) -> Result<Vec<Attention>, ApiError> {
        self.get_list_with_params("/atenciones/", &[("jugador", player_id.to_string())])
            .await
    }

    pub async fn fetch_attention(&self, attention_id: i64) -> Result<Attention, ApiError> {
        self.get(&format!("/atenciones/{}/", attention_id)).await
    }

    pub async fn create_attention(&self, attention: &NewAttention) -> Result<Attention, ApiError> {
        self.post("/atenciones/", attention).await
    }

    // ===== Injuries =====

    /// Fetch injuries currently marked active across the whole club
    pub async fn fetch_active_injuries(&self) -> Result<Vec<Injury>, ApiError> {
        self.get_list("/lesiones/activas/").await
    }

    pub async fn fetch_player_injuries(&self, player_id: i64) -> Result<Vec<Injury>, ApiError> {
        self.get_list(&format!("/jugadores/{}/lesiones/", player_id))
            .await
    }

    pub async fn create_injury(&self, injury: &NewInjury) -> Result<Injury, ApiError> {
        self.post("/lesiones/", injury).await
    }

    /// Close an injury episode; the backend records the real recovery days
    pub async fn finalize_injury(&self, injury_id: i64) -> Result<(), ApiError> {
        self.post_action(&format!("/lesiones/{}/finalizar/", injury_id))
            .await
    }

    pub async fn fetch_injury_daily_log(&self, injury_id: i64) -> Result<Vec<DailyState>, ApiError> {
        self.get_list(&format!("/lesiones/{}/historial-diario/", injury_id))
            .await
    }

    pub async fn add_daily_state(&self, state: &DailyState) -> Result<DailyState, ApiError> {
        self.post("/estados-diarios/", state).await
    }

    pub async fn fetch_stage_options(&self) -> Result<Vec<StageOption>, ApiError> {
        self.get_list("/estados-lesion-opciones/").await
    }

    // ===== User management =====

    pub async fn fetch_users(&self) -> Result<Vec<UserAccount>, ApiError> {
        self.get_list("/usuarios/").await
    }

    pub async fn fetch_roles(&self) -> Result<Vec<String>, ApiError> {
        self.get("/usuarios/roles/").await
    }

    pub async fn create_user(&self, user: &NewUser) -> Result<UserAccount, ApiError> {
        self.post("/usuarios/", user).await
    }

    pub async fn toggle_user_active(&self, user_id: i64) -> Result<(), ApiError> {
        self.post_action(&format!("/usuarios/{}/toggle_active/", user_id))
            .await
    }

    pub async fn change_user_role(&self, user_id: i64, role: &str) -> Result<(), ApiError> {
        debug!(user_id, role, "POST change_role");
        let path = format!("/usuarios/{}/change_role/", user_id);
        let response = self
            .request(Method::POST, &path)
            .json(&ChangeRoleRequest { role })
            .send()
            .await?;
        self.check_response(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemorySessionStore;
    use httpmock::prelude::*;

    fn client_with_token(server: &MockServer, token: Option<&str>) -> (ApiClient, Arc<MemorySessionStore>) {
        let store = Arc::new(match token {
            Some(t) => MemorySessionStore::with_token(t),
            None => MemorySessionStore::new(),
        });
        let client = ApiClient::new(server.base_url(), store.clone()).unwrap();
        (client, store)
    }

    #[tokio::test]
    async fn test_bearer_header_attached_when_token_present() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/usuarios/")
                .header("authorization", "Bearer tok123");
            then.status(200).json_body(serde_json::json!([]));
        });

        let (client, _) = client_with_token(&server, Some("tok123"));
        let users = client.fetch_users().await.unwrap();
        assert!(users.is_empty());
        mock.assert();
    }

    #[tokio::test]
    async fn test_no_authorization_header_without_token() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/usuarios/")
                .header_missing("authorization");
            then.status(200).json_body(serde_json::json!([]));
        });

        let (client, _) = client_with_token(&server, None);
        client.fetch_users().await.unwrap();
        mock.assert();
    }

    #[tokio::test]
    async fn test_401_clears_session_and_notifies_once() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/usuarios/");
            then.status(401).json_body(serde_json::json!({"detail": "expired"}));
        });

        let (client, store) = client_with_token(&server, Some("tok123"));
        let expired_rx = client.subscribe_session_expired();
        assert_eq!(*expired_rx.borrow(), 0);

        let err = client.fetch_users().await.unwrap_err();
        assert!(err.is_unauthorized());

        // All three keys are gone together
        assert_eq!(store.access_token(), None);
        assert_eq!(store.refresh_token(), None);
        assert!(store.user().is_none());

        // Exactly one expiry notification for one 401 response
        assert_eq!(*expired_rx.borrow(), 1);
    }

    #[tokio::test]
    async fn test_non_401_error_leaves_session_untouched() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/usuarios/");
            then.status(500).body("db exploded");
        });

        let (client, store) = client_with_token(&server, Some("tok123"));
        let expired_rx = client.subscribe_session_expired();

        let user = NewUser {
            rut: "12.345.678-5".to_string(),
            password: "secret".to_string(),
            password2: "secret".to_string(),
            email: "kine@club.cl".to_string(),
            first_name: "Maria".to_string(),
            last_name: "Perez".to_string(),
            group_name: "Kinesiologo".to_string(),
            phone: None,
            position: None,
        };
        let err = client.create_user(&user).await.unwrap_err();

        match err {
            ApiError::ServerError(body) => assert_eq!(body, "db exploded"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(store.access_token().as_deref(), Some("tok123"));
        assert_eq!(*expired_rx.borrow(), 0);
    }

    #[tokio::test]
    async fn test_repeated_reads_carry_same_header() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/jugadores/")
                .header("authorization", "Bearer tok123");
            then.status(200).json_body(serde_json::json!([]));
        });

        let (client, _) = client_with_token(&server, Some("tok123"));
        client.fetch_players(&PlayerQuery::default()).await.unwrap();
        client.fetch_players(&PlayerQuery::default()).await.unwrap();
        mock.assert_hits(2);
    }

    #[tokio::test]
    async fn test_login_stores_session() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST)
                .path("/auth/login/")
                .json_body(serde_json::json!({"rut": "12.345.678-5", "password": "secret"}));
            then.status(200).json_body(serde_json::json!({
                "access_token": "tok123",
                "refresh_token": "refresh456",
                "user": {"id": 1, "username": "123456785", "full_name": "Maria Perez", "groups": []}
            }));
        });

        let (client, store) = client_with_token(&server, None);
        let login = client.login("12.345.678-5", "secret").await.unwrap();
        assert_eq!(login.access_token, "tok123");
        assert_eq!(store.access_token().as_deref(), Some("tok123"));
        assert_eq!(store.refresh_token().as_deref(), Some("refresh456"));
        assert_eq!(store.user().unwrap().id, 1);
    }

    #[tokio::test]
    async fn test_register_stores_session() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST)
                .path("/auth/register/")
                .json_body(serde_json::json!({
                    "rut": "12.345.678-5",
                    "email": "kine@club.cl",
                    "first_name": "Maria",
                    "last_name": "Perez",
                    "password": "secret",
                    "password2": "secret"
                }));
            then.status(201).json_body(serde_json::json!({
                "access_token": "tok789",
                "refresh_token": "refresh789",
                "user": {"id": 2, "username": "123456785", "full_name": "Maria Perez", "groups": []}
            }));
        });

        let (client, store) = client_with_token(&server, None);
        let registration = Registration {
            rut: "12.345.678-5".to_string(),
            email: "kine@club.cl".to_string(),
            first_name: "Maria".to_string(),
            last_name: "Perez".to_string(),
            password: "secret".to_string(),
            password2: "secret".to_string(),
        };
        let login = client.register(&registration).await.unwrap();
        assert_eq!(login.access_token, "tok789");

        // The new account is signed in right away
        assert_eq!(store.access_token().as_deref(), Some("tok789"));
        assert_eq!(store.user().unwrap().id, 2);
    }

    #[tokio::test]
    async fn test_listing_accepts_paginated_wrapper() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/usuarios/");
            then.status(200).json_body(serde_json::json!({
                "count": 1,
                "results": [{"id": 3, "username": "123456785", "is_active": true}]
            }));
        });

        let (client, _) = client_with_token(&server, Some("tok123"));
        let users = client.fetch_users().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, 3);
    }

    #[tokio::test]
    async fn test_player_query_params() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/jugadores/")
                .query_param("division", "2")
                .query_param("activo", "true");
            then.status(200).json_body(serde_json::json!([]));
        });

        let (client, _) = client_with_token(&server, Some("tok123"));
        let query = PlayerQuery {
            division: Some(2),
            active: Some(true),
            search: None,
        };
        client.fetch_players(&query).await.unwrap();
        mock.assert();
    }

    #[tokio::test]
    async fn test_validation_error_preserves_body() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/auth/login/");
            then.status(400).body(r#"{"rut": ["El RUT ingresado no es valido"]}"#);
        });

        let (client, store) = client_with_token(&server, None);
        let err = client.login("bad", "creds").await.unwrap_err();
        match err {
            ApiError::Validation(body) => assert!(body.contains("RUT")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(store.access_token().is_none());
    }
}
