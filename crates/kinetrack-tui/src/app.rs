//! Application state management for the Kinetrack TUI.
//!
//! The `App` struct owns the API client, the session store, all fetched data,
//! and the UI state. Background fetches run in spawned tokio tasks and report
//! back through an MPSC channel drained once per event-loop tick; session
//! expiry is observed through the client's watch channel.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info, warn};

use kinetrack_core::api::{ApiClient, ApiError, PlayerQuery};
use kinetrack_core::auth::{CredentialStore, FileSessionStore, SessionStore};
use kinetrack_core::config::Config;
use kinetrack_core::models::{
    Attention, AttentionStatus, Division, Injury, NewAttention, Player, UserAccount,
};

use crate::util::contains_ignore_case;

// ============================================================================
// Constants
// ============================================================================

/// Buffer size for the background task message channel.
/// A full refresh is six fetches; 32 leaves headroom for per-player loads.
const CHANNEL_BUFFER_SIZE: usize = 32;

/// Maximum length for RUT input (formatted RUTs are 12 chars)
const MAX_RUT_LENGTH: usize = 12;

/// Maximum length for password input
const MAX_PASSWORD_LENGTH: usize = 128;

/// Maximum length for free-text form fields
const MAX_TEXT_FIELD_LENGTH: usize = 200;

/// Number of items to scroll on page up/down
pub const PAGE_SCROLL_SIZE: usize = 10;

// ============================================================================
// UI State Types
// ============================================================================

/// Main navigation tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Players,
    Attentions,
    Injuries,
    Users,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Players => "Players",
            Tab::Attentions => "Attentions",
            Tab::Injuries => "Injuries",
            Tab::Users => "Users",
        }
    }

    /// Get the next tab (wrapping around)
    pub fn next(&self) -> Self {
        match self {
            Tab::Players => Tab::Attentions,
            Tab::Attentions => Tab::Injuries,
            Tab::Injuries => Tab::Users,
            Tab::Users => Tab::Players,
        }
    }

    /// Get the previous tab (wrapping around)
    pub fn prev(&self) -> Self {
        match self {
            Tab::Players => Tab::Users,
            Tab::Attentions => Tab::Players,
            Tab::Injuries => Tab::Attentions,
            Tab::Users => Tab::Injuries,
        }
    }
}

/// Sub-view for the player detail panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerDetailView {
    Details,
    Attentions,
    Injuries,
}

/// Current UI focus area (list panel or detail panel)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Detail,
}

/// Overall application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Normal,
    Searching,
    ShowingHelp,
    LoggingIn,
    AddingAttention,
    ConfirmingQuit,
    Quitting,
}

/// Login form focus state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoginFocus {
    Rut,
    Password,
    Button,
}

/// Add-attention form focus state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttentionFormFocus {
    Reason,
    Treatment,
    Status,
    Button,
}

/// State of the add-attention overlay
pub struct AttentionForm {
    pub player_id: i64,
    pub player_name: String,
    pub reason: String,
    pub treatment: String,
    pub status: AttentionStatus,
    pub focus: AttentionFormFocus,
    pub error: Option<String>,
}

impl AttentionForm {
    fn new(player_id: i64, player_name: String) -> Self {
        Self {
            player_id,
            player_name,
            reason: String::new(),
            treatment: String::new(),
            status: AttentionStatus::InTreatment,
            focus: AttentionFormFocus::Reason,
            error: None,
        }
    }

    pub fn cycle_status(&mut self) {
        let all = AttentionStatus::all();
        let pos = all.iter().position(|s| *s == self.status).unwrap_or(0);
        self.status = all[(pos + 1) % all.len()];
    }
}

// ============================================================================
// Background Task Results
// ============================================================================

/// Result types sent from background fetch tasks back to the main loop
enum RefreshResult {
    Divisions(Vec<Division>),
    Players(Vec<Player>),
    Attentions(Vec<Attention>),
    ActiveInjuries(Vec<Injury>),
    Users(Vec<UserAccount>),
    Roles(Vec<String>),
    /// Attentions for a single player (player_id, attentions)
    PlayerAttentions(i64, Vec<Attention>),
    /// Injury history for a single player (player_id, injuries)
    PlayerInjuries(i64, Vec<Injury>),
    /// A write action (finalize, toggle, role change, new attention) finished
    ActionDone(String),
    RefreshComplete,
    Error(String),
}

// ============================================================================
// Main Application Struct
// ============================================================================

/// Main application state container
pub struct App {
    // Core services
    pub config: Config,
    pub store: Arc<FileSessionStore>,
    pub api: ApiClient,

    // Session expiry observation
    expired_rx: watch::Receiver<u64>,
    seen_expirations: u64,

    // UI state
    pub state: AppState,
    pub current_tab: Tab,
    pub focus: Focus,
    pub search_query: String,
    pub player_detail_view: PlayerDetailView,
    /// Active division filter for the Players tab (None shows all squads)
    pub division_filter: Option<i64>,

    // Login form state
    pub login_rut: String,
    pub login_password: String,
    pub login_focus: LoginFocus,
    pub login_error: Option<String>,

    // Add-attention form
    pub attention_form: Option<AttentionForm>,

    // Selection indices
    pub player_selection: usize,
    pub attention_selection: usize,
    pub injury_selection: usize,
    pub user_selection: usize,

    // Fetched data
    pub divisions: Vec<Division>,
    pub players: Vec<Player>,
    pub attentions: Vec<Attention>,
    pub active_injuries: Vec<Injury>,
    pub users: Vec<UserAccount>,
    pub roles: Vec<String>,

    // Per-player detail data (for the currently selected player)
    pub selected_player_attentions: Vec<Attention>,
    pub selected_player_injuries: Vec<Injury>,
    detail_player_id: Option<i64>,

    // Background task channel
    refresh_rx: mpsc::Receiver<RefreshResult>,
    refresh_tx: mpsc::Sender<RefreshResult>,

    // Status message
    pub status_message: Option<String>,
}

impl App {
    /// Create a new application instance
    pub fn new() -> Result<Self> {
        debug!("App::new() starting");
        let config = match Config::load() {
            Ok(c) => c,
            Err(e) => {
                warn!(error = %e, "Failed to load config, using defaults");
                Config::default()
            }
        };

        let cache_dir = config
            .cache_dir()
            .unwrap_or_else(|_| PathBuf::from("./cache"));
        debug!(?cache_dir, "Cache directory configured");

        let store = Arc::new(FileSessionStore::open(cache_dir)?);
        debug!(authenticated = store.is_authenticated(), "Session loaded");

        let api = ApiClient::new(config.api_base_url(), store.clone())?;
        let expired_rx = api.subscribe_session_expired();

        let (tx, rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);

        // Pre-fill the login RUT from env var or the last successful login
        let login_rut = std::env::var("KINETRACK_RUT")
            .ok()
            .or_else(|| config.last_rut.clone())
            .unwrap_or_default();
        let login_password = std::env::var("KINETRACK_PASSWORD").unwrap_or_default();

        Ok(Self {
            config,
            store,
            api,

            expired_rx,
            seen_expirations: 0,

            state: AppState::Normal,
            current_tab: Tab::Players,
            focus: Focus::List,
            search_query: String::new(),
            player_detail_view: PlayerDetailView::Details,
            division_filter: None,

            login_rut,
            login_password,
            login_focus: LoginFocus::Rut,
            login_error: None,

            attention_form: None,

            player_selection: 0,
            attention_selection: 0,
            injury_selection: 0,
            user_selection: 0,

            divisions: Vec::new(),
            players: Vec::new(),
            attentions: Vec::new(),
            active_injuries: Vec::new(),
            users: Vec::new(),
            roles: Vec::new(),

            selected_player_attentions: Vec::new(),
            selected_player_injuries: Vec::new(),
            detail_player_id: None,

            refresh_rx: rx,
            refresh_tx: tx,

            status_message: None,
        })
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Check if the store currently holds a session credential
    pub fn is_authenticated(&self) -> bool {
        self.api.is_authenticated()
    }

    /// Start the login process (show login overlay)
    pub fn start_login(&mut self) {
        self.state = AppState::LoggingIn;
        self.login_focus = if self.login_rut.is_empty() {
            LoginFocus::Rut
        } else {
            LoginFocus::Password
        };
        self.login_error = None;

        // Pre-fill the password from the OS keychain when one is stored
        if self.login_password.is_empty() && !self.login_rut.is_empty() {
            if let Ok(password) = CredentialStore::get_password(&self.login_rut) {
                self.login_password = password;
            }
        }
    }

    /// Attempt login with the credentials from the login form
    pub async fn attempt_login(&mut self) -> Result<()> {
        let rut = self.login_rut.clone();
        let password = self.login_password.clone();

        if rut.is_empty() || password.is_empty() {
            self.login_error = Some("RUT and password required".to_string());
            return Err(anyhow::anyhow!("RUT and password required"));
        }

        self.login_error = None;

        match self.api.login(&rut, &password).await {
            Ok(_) => {
                if let Err(e) = CredentialStore::store(&rut, &password) {
                    warn!(error = %e, "Failed to store credentials");
                }

                self.config.last_rut = Some(rut);
                if let Err(e) = self.config.save() {
                    warn!(error = %e, "Failed to save config");
                }

                self.login_password.clear();
                self.state = AppState::Normal;
                info!("Login successful");
                self.refresh_all_background();
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Login failed");
                let user_message = match &e {
                    ApiError::Unauthorized | ApiError::Validation(_) => {
                        "Invalid RUT or password".to_string()
                    }
                    ApiError::NetworkError(_) => {
                        "Unable to connect to server. Check your connection.".to_string()
                    }
                    other => format!("Login failed: {}", other),
                };
                self.login_error = Some(user_message);
                Err(e.into())
            }
        }
    }

    /// Drop the session and return to the login overlay
    pub fn logout(&mut self) {
        self.api.logout();
        self.start_login();
    }

    /// React to session-expiry notifications published by the API client.
    /// A 401 anywhere (foreground or background) forces the login overlay.
    pub fn check_session_expired(&mut self) {
        let current = *self.expired_rx.borrow();
        if current != self.seen_expirations {
            self.seen_expirations = current;
            warn!("Session expired, returning to login");
            self.status_message = Some("Session expired. Please log in again.".to_string());
            self.attention_form = None;
            self.start_login();
        }
    }

    // =========================================================================
    // Background Data Refresh
    // =========================================================================

    /// Spawn a background task to refresh all tab data
    pub fn refresh_all_background(&mut self) {
        info!("Starting background refresh of all data");

        let api = self.api.clone();
        let tx = self.refresh_tx.clone();

        tokio::spawn(async move {
            let player_query = PlayerQuery::default();
            let (divisions, players, attentions, injuries, users, roles) = tokio::join!(
                api.fetch_divisions(),
                api.fetch_players(&player_query),
                api.fetch_attentions(),
                api.fetch_active_injuries(),
                api.fetch_users(),
                api.fetch_roles(),
            );

            Self::send_fetch_result(&tx, "Divisions", divisions, RefreshResult::Divisions).await;
            Self::send_fetch_result(&tx, "Players", players, RefreshResult::Players).await;
            Self::send_fetch_result(&tx, "Attentions", attentions, RefreshResult::Attentions).await;
            Self::send_fetch_result(&tx, "Injuries", injuries, RefreshResult::ActiveInjuries).await;
            Self::send_fetch_result(&tx, "Users", users, RefreshResult::Users).await;
            Self::send_fetch_result(&tx, "Roles", roles, RefreshResult::Roles).await;

            Self::send_result(&tx, RefreshResult::RefreshComplete).await;
        });

        self.status_message = Some("Refreshing data...".to_string());
    }

    /// Fetch attentions and injury history for the selected player
    pub fn fetch_player_details(&mut self, player_id: i64) {
        if self.detail_player_id == Some(player_id) {
            return;
        }
        self.detail_player_id = Some(player_id);
        self.selected_player_attentions.clear();
        self.selected_player_injuries.clear();

        let api = self.api.clone();
        let tx = self.refresh_tx.clone();

        tokio::spawn(async move {
            let (attentions, injuries) = tokio::join!(
                api.fetch_player_attentions(player_id),
                api.fetch_player_injuries(player_id),
            );

            match attentions {
                Ok(data) => {
                    Self::send_result(&tx, RefreshResult::PlayerAttentions(player_id, data)).await;
                }
                Err(e) => debug!(error = %e, player_id, "Player attentions fetch failed"),
            }
            match injuries {
                Ok(data) => {
                    Self::send_result(&tx, RefreshResult::PlayerInjuries(player_id, data)).await;
                }
                Err(e) => debug!(error = %e, player_id, "Player injuries fetch failed"),
            }
        });
    }

    /// Helper to send refresh results, logging any channel errors
    async fn send_result(tx: &mpsc::Sender<RefreshResult>, result: RefreshResult) {
        if let Err(e) = tx.send(result).await {
            error!(error = %e, "Failed to send refresh result, channel closed");
        }
    }

    /// Helper to send a successful fetch result or an error
    async fn send_fetch_result<T, F>(
        tx: &mpsc::Sender<RefreshResult>,
        name: &str,
        result: std::result::Result<T, ApiError>,
        wrapper: F,
    ) where
        F: FnOnce(T) -> RefreshResult,
    {
        match result {
            Ok(data) => {
                debug!("{} fetched successfully", name);
                Self::send_result(tx, wrapper(data)).await;
            }
            Err(e) => {
                error!(error = %e, "{} fetch failed", name);
                Self::send_result(tx, RefreshResult::Error(format!("{}: {}", name, e))).await;
            }
        }
    }

    /// Check for completed background tasks and process results
    pub fn check_background_tasks(&mut self) {
        let mut results = Vec::new();
        while let Ok(result) = self.refresh_rx.try_recv() {
            results.push(result);
        }
        for result in results {
            self.process_refresh_result(result);
        }
    }

    /// Process a single refresh result from a background task
    fn process_refresh_result(&mut self, result: RefreshResult) {
        match result {
            RefreshResult::Divisions(data) => {
                self.divisions = data;
            }
            RefreshResult::Players(data) => {
                self.players = data;
                self.player_selection = self
                    .player_selection
                    .min(self.players.len().saturating_sub(1));
            }
            RefreshResult::Attentions(data) => {
                self.attentions = data;
                self.attention_selection = self
                    .attention_selection
                    .min(self.attentions.len().saturating_sub(1));
            }
            RefreshResult::ActiveInjuries(data) => {
                self.active_injuries = data;
                self.injury_selection = self
                    .injury_selection
                    .min(self.active_injuries.len().saturating_sub(1));
            }
            RefreshResult::Users(data) => {
                self.users = data;
                self.user_selection = self.user_selection.min(self.users.len().saturating_sub(1));
            }
            RefreshResult::Roles(data) => {
                self.roles = data;
            }
            RefreshResult::PlayerAttentions(player_id, data) => {
                if self.detail_player_id == Some(player_id) {
                    self.selected_player_attentions = data;
                }
            }
            RefreshResult::PlayerInjuries(player_id, data) => {
                if self.detail_player_id == Some(player_id) {
                    self.selected_player_injuries = data;
                }
            }
            RefreshResult::ActionDone(msg) => {
                self.status_message = Some(msg);
                // Actions change backend state; reload everything
                self.detail_player_id = None;
                self.refresh_all_background();
            }
            RefreshResult::RefreshComplete => {
                // Preserve errors in the status bar, clear progress messages
                if let Some(ref msg) = self.status_message {
                    if !msg.contains("failed") && !msg.contains("error") {
                        self.status_message = None;
                    }
                }
            }
            RefreshResult::Error(msg) => {
                error!(error = %msg, "Background task error");
                self.status_message = Some(format!("Error: {}", msg));
            }
        }
    }

    // =========================================================================
    // Write Actions
    // =========================================================================

    /// Open the add-attention overlay for the selected player
    pub fn start_add_attention(&mut self) {
        let selected = self
            .filtered_players()
            .get(self.player_selection)
            .map(|p| (p.id, p.display_name()));
        if let Some((id, name)) = selected {
            self.attention_form = Some(AttentionForm::new(id, name));
            self.state = AppState::AddingAttention;
        } else {
            self.status_message = Some("No player selected".to_string());
        }
    }

    /// Submit the add-attention form
    pub fn submit_attention(&mut self) {
        let Some(form) = self.attention_form.as_mut() else {
            return;
        };
        if form.reason.trim().is_empty() {
            form.error = Some("Reason is required".to_string());
            return;
        }

        let new_attention = NewAttention {
            player_id: form.player_id,
            reason: form.reason.trim().to_string(),
            treatment: form.treatment.trim().to_string(),
            status: form.status,
            notes: None,
        };

        let api = self.api.clone();
        let tx = self.refresh_tx.clone();
        tokio::spawn(async move {
            match api.create_attention(&new_attention).await {
                Ok(_) => {
                    Self::send_result(&tx, RefreshResult::ActionDone("Attention recorded".to_string()))
                        .await;
                }
                Err(e) => {
                    Self::send_result(&tx, RefreshResult::Error(format!("Save failed: {}", e)))
                        .await;
                }
            }
        });

        self.attention_form = None;
        self.state = AppState::Normal;
        self.status_message = Some("Saving attention...".to_string());
    }

    /// Close the injury episode selected on the Injuries tab
    pub fn finalize_selected_injury(&mut self) {
        let Some(injury) = self
            .filtered_injuries()
            .get(self.injury_selection)
            .map(|i| (*i).clone())
        else {
            return;
        };

        let api = self.api.clone();
        let tx = self.refresh_tx.clone();
        tokio::spawn(async move {
            match api.finalize_injury(injury.id).await {
                Ok(()) => {
                    let msg = format!("Injury closed for {}", injury.player_str());
                    Self::send_result(&tx, RefreshResult::ActionDone(msg)).await;
                }
                Err(e) => {
                    Self::send_result(&tx, RefreshResult::Error(format!("Finalize failed: {}", e)))
                        .await;
                }
            }
        });
        self.status_message = Some("Closing injury...".to_string());
    }

    /// Toggle the active flag of the selected user account
    pub fn toggle_selected_user_active(&mut self) {
        let Some(user) = self
            .filtered_users()
            .get(self.user_selection)
            .map(|u| (*u).clone())
        else {
            return;
        };

        let api = self.api.clone();
        let tx = self.refresh_tx.clone();
        tokio::spawn(async move {
            match api.toggle_user_active(user.id).await {
                Ok(()) => {
                    let msg = format!("Toggled {}", user.display_name());
                    Self::send_result(&tx, RefreshResult::ActionDone(msg)).await;
                }
                Err(e) => {
                    Self::send_result(&tx, RefreshResult::Error(format!("Toggle failed: {}", e)))
                        .await;
                }
            }
        });
        self.status_message = Some("Updating user...".to_string());
    }

    /// Assign the next role in the role list to the selected user
    pub fn cycle_selected_user_role(&mut self) {
        if self.roles.is_empty() {
            self.status_message = Some("No roles loaded".to_string());
            return;
        }
        let Some(user) = self
            .filtered_users()
            .get(self.user_selection)
            .map(|u| (*u).clone())
        else {
            return;
        };

        let pos = user
            .role
            .as_ref()
            .and_then(|r| self.roles.iter().position(|candidate| candidate == r));
        let next_role = match pos {
            Some(i) => self.roles[(i + 1) % self.roles.len()].clone(),
            None => self.roles[0].clone(),
        };

        let api = self.api.clone();
        let tx = self.refresh_tx.clone();
        tokio::spawn(async move {
            match api.change_user_role(user.id, &next_role).await {
                Ok(()) => {
                    let msg = format!("{} is now {}", user.display_name(), next_role);
                    Self::send_result(&tx, RefreshResult::ActionDone(msg)).await;
                }
                Err(e) => {
                    Self::send_result(&tx, RefreshResult::Error(format!("Role change failed: {}", e)))
                        .await;
                }
            }
        });
        self.status_message = Some("Changing role...".to_string());
    }

    // =========================================================================
    // Filtered Views
    // =========================================================================

    /// Players matching the division filter and the current search query
    pub fn filtered_players(&self) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| match self.division_filter {
                Some(id) => p.division_id == Some(id),
                None => true,
            })
            .filter(|p| {
                self.search_query.is_empty()
                    || contains_ignore_case(&p.display_name(), &self.search_query)
                    || contains_ignore_case(&p.rut, &self.search_query)
            })
            .collect()
    }

    /// Cycle the division filter through all squads, then back to all
    pub fn cycle_division_filter(&mut self) {
        if self.divisions.is_empty() {
            return;
        }
        self.division_filter = match self.division_filter {
            None => Some(self.divisions[0].id),
            Some(current) => {
                let pos = self.divisions.iter().position(|d| d.id == current);
                match pos {
                    Some(i) if i + 1 < self.divisions.len() => Some(self.divisions[i + 1].id),
                    _ => None,
                }
            }
        };
        self.player_selection = 0;
    }

    /// Display name of the active division filter
    pub fn division_filter_str(&self) -> Option<&str> {
        let id = self.division_filter?;
        self.divisions
            .iter()
            .find(|d| d.id == id)
            .map(|d| d.name.as_str())
    }

    /// Attentions matching the current search query (player name or reason)
    pub fn filtered_attentions(&self) -> Vec<&Attention> {
        self.attentions
            .iter()
            .filter(|a| {
                self.search_query.is_empty()
                    || contains_ignore_case(&a.player_str(), &self.search_query)
                    || contains_ignore_case(&a.reason, &self.search_query)
            })
            .collect()
    }

    /// Active injuries matching the current search query
    pub fn filtered_injuries(&self) -> Vec<&Injury> {
        self.active_injuries
            .iter()
            .filter(|i| {
                self.search_query.is_empty()
                    || contains_ignore_case(&i.player_str(), &self.search_query)
                    || contains_ignore_case(&i.diagnosis, &self.search_query)
            })
            .collect()
    }

    /// User accounts matching the current search query
    pub fn filtered_users(&self) -> Vec<&UserAccount> {
        self.users
            .iter()
            .filter(|u| {
                self.search_query.is_empty()
                    || contains_ignore_case(&u.display_name(), &self.search_query)
                    || contains_ignore_case(&u.username, &self.search_query)
            })
            .collect()
    }

    /// Length of the list shown on the current tab
    pub fn current_list_len(&self) -> usize {
        match self.current_tab {
            Tab::Players => self.filtered_players().len(),
            Tab::Attentions => self.filtered_attentions().len(),
            Tab::Injuries => self.filtered_injuries().len(),
            Tab::Users => self.filtered_users().len(),
        }
    }

    /// Selection index for the current tab
    pub fn current_selection(&self) -> usize {
        match self.current_tab {
            Tab::Players => self.player_selection,
            Tab::Attentions => self.attention_selection,
            Tab::Injuries => self.injury_selection,
            Tab::Users => self.user_selection,
        }
    }

    /// Move the current tab's selection by a signed offset, clamped
    pub fn move_selection(&mut self, delta: isize) {
        let len = self.current_list_len();
        if len == 0 {
            return;
        }
        let current = self.current_selection() as isize;
        let new = (current + delta).clamp(0, len as isize - 1) as usize;
        match self.current_tab {
            Tab::Players => self.player_selection = new,
            Tab::Attentions => self.attention_selection = new,
            Tab::Injuries => self.injury_selection = new,
            Tab::Users => self.user_selection = new,
        }
        if self.current_tab == Tab::Players {
            let id = self
                .filtered_players()
                .get(self.player_selection)
                .map(|p| p.id);
            if let Some(id) = id {
                self.fetch_player_details(id);
            }
        }
    }
}

// ============================================================================
// Input length guards
// ============================================================================

pub fn can_add_rut_char(current: &str) -> bool {
    current.len() < MAX_RUT_LENGTH
}

pub fn can_add_password_char(current: &str) -> bool {
    current.len() < MAX_PASSWORD_LENGTH
}

pub fn can_add_text_char(current: &str) -> bool {
    current.len() < MAX_TEXT_FIELD_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycle_wraps() {
        assert_eq!(Tab::Players.next(), Tab::Attentions);
        assert_eq!(Tab::Users.next(), Tab::Players);
        assert_eq!(Tab::Players.prev(), Tab::Users);
    }

    #[test]
    fn test_attention_form_cycles_status() {
        let mut form = AttentionForm::new(1, "Soto, Juan".to_string());
        assert_eq!(form.status, AttentionStatus::InTreatment);
        form.cycle_status();
        assert_ne!(form.status, AttentionStatus::InTreatment);
        for _ in 0..AttentionStatus::all().len() - 1 {
            form.cycle_status();
        }
        assert_eq!(form.status, AttentionStatus::InTreatment);
    }

    #[test]
    fn test_input_length_guards() {
        assert!(can_add_rut_char("12.345.678-"));
        assert!(!can_add_rut_char("12.345.678-5x"));
        assert!(can_add_password_char("short"));
        assert!(can_add_text_char("free text"));
    }
}
