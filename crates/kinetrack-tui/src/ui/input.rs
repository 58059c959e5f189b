//! Keyboard input handling for the TUI.
//!
//! Translates keyboard events into application state changes.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{
    can_add_password_char, can_add_rut_char, can_add_text_char, App, AppState,
    AttentionFormFocus, Focus, LoginFocus, PlayerDetailView, Tab, PAGE_SCROLL_SIZE,
};

/// Handle keyboard input. Returns true if the app should quit.
pub async fn handle_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    // Overlays capture all input while open
    if matches!(app.state, AppState::LoggingIn) {
        return handle_login_input(app, key).await;
    }

    if matches!(app.state, AppState::AddingAttention) {
        handle_attention_form_input(app, key);
        return Ok(false);
    }

    if matches!(app.state, AppState::ShowingHelp) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.state = AppState::Normal;
        }
        return Ok(false);
    }

    if matches!(app.state, AppState::ConfirmingQuit) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.state = AppState::Quitting;
                return Ok(true);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.state = AppState::Normal;
            }
            _ => {}
        }
        return Ok(false);
    }

    if matches!(app.state, AppState::Searching) {
        handle_search_input(app, key);
        return Ok(false);
    }

    // Global keys
    match key.code {
        KeyCode::Char('q') => {
            app.state = AppState::ConfirmingQuit;
        }
        KeyCode::Char('?') => {
            app.state = AppState::ShowingHelp;
        }
        KeyCode::Char('/') => {
            app.state = AppState::Searching;
        }
        KeyCode::Char('u') => {
            app.refresh_all_background();
        }
        KeyCode::Char('L') => {
            app.logout();
        }
        KeyCode::Char('1') => {
            app.current_tab = Tab::Players;
            app.focus = Focus::List;
        }
        KeyCode::Char('2') => {
            app.current_tab = Tab::Attentions;
            app.focus = Focus::List;
        }
        KeyCode::Char('3') => {
            app.current_tab = Tab::Injuries;
            app.focus = Focus::List;
        }
        KeyCode::Char('4') => {
            app.current_tab = Tab::Users;
            app.focus = Focus::List;
        }
        KeyCode::Left => {
            app.current_tab = app.current_tab.prev();
            app.focus = Focus::List;
        }
        KeyCode::Right => {
            app.current_tab = app.current_tab.next();
            app.focus = Focus::List;
        }
        KeyCode::Tab => {
            app.focus = match app.focus {
                Focus::List => Focus::Detail,
                Focus::Detail => Focus::List,
            };
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_selection(-1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_selection(1);
        }
        KeyCode::PageUp => {
            app.move_selection(-(PAGE_SCROLL_SIZE as isize));
        }
        KeyCode::PageDown => {
            app.move_selection(PAGE_SCROLL_SIZE as isize);
        }
        KeyCode::Home => {
            app.move_selection(isize::MIN / 2);
        }
        KeyCode::End => {
            app.move_selection(isize::MAX / 2);
        }
        KeyCode::Esc => {
            if !app.search_query.is_empty() {
                app.search_query.clear();
            }
        }
        _ => handle_tab_keys(app, key),
    }

    Ok(false)
}

/// Tab-specific action keys
fn handle_tab_keys(app: &mut App, key: KeyEvent) {
    match app.current_tab {
        Tab::Players => match key.code {
            KeyCode::Char('d') => app.player_detail_view = PlayerDetailView::Details,
            KeyCode::Char('v') => app.player_detail_view = PlayerDetailView::Attentions,
            KeyCode::Char('h') => app.player_detail_view = PlayerDetailView::Injuries,
            KeyCode::Char('a') => app.start_add_attention(),
            KeyCode::Char('c') => app.cycle_division_filter(),
            _ => {}
        },
        Tab::Injuries => {
            if key.code == KeyCode::Char('f') {
                app.finalize_selected_injury();
            }
        }
        Tab::Users => match key.code {
            KeyCode::Char('t') => app.toggle_selected_user_active(),
            KeyCode::Char('r') => app.cycle_selected_user_role(),
            _ => {}
        },
        Tab::Attentions => {}
    }
}

fn handle_search_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.search_query.clear();
            app.state = AppState::Normal;
        }
        KeyCode::Enter => {
            app.state = AppState::Normal;
        }
        KeyCode::Backspace => {
            app.search_query.pop();
        }
        KeyCode::Char(c) => {
            if can_add_text_char(&app.search_query) {
                app.search_query.push(c);
            }
        }
        _ => {}
    }
}

async fn handle_login_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => {
            // Stay on the login overlay when there is no session to fall back to
            if app.is_authenticated() {
                app.state = AppState::Normal;
            }
        }
        KeyCode::Tab | KeyCode::Down => {
            app.login_focus = match app.login_focus {
                LoginFocus::Rut => LoginFocus::Password,
                LoginFocus::Password => LoginFocus::Button,
                LoginFocus::Button => LoginFocus::Rut,
            };
        }
        KeyCode::Up => {
            app.login_focus = match app.login_focus {
                LoginFocus::Rut => LoginFocus::Button,
                LoginFocus::Password => LoginFocus::Rut,
                LoginFocus::Button => LoginFocus::Password,
            };
        }
        KeyCode::Enter => match app.login_focus {
            LoginFocus::Rut => app.login_focus = LoginFocus::Password,
            LoginFocus::Password | LoginFocus::Button => {
                // Errors surface through login_error on the overlay
                let _ = app.attempt_login().await;
            }
        },
        KeyCode::Backspace => match app.login_focus {
            LoginFocus::Rut => {
                app.login_rut.pop();
            }
            LoginFocus::Password => {
                app.login_password.pop();
            }
            LoginFocus::Button => {}
        },
        KeyCode::Char(c) => match app.login_focus {
            LoginFocus::Rut => {
                if can_add_rut_char(&app.login_rut) {
                    app.login_rut.push(c);
                }
            }
            LoginFocus::Password => {
                if can_add_password_char(&app.login_password) {
                    app.login_password.push(c);
                }
            }
            LoginFocus::Button => {}
        },
        _ => {}
    }

    Ok(false)
}

fn handle_attention_form_input(app: &mut App, key: KeyEvent) {
    // Esc cancels regardless of field focus
    if key.code == KeyCode::Esc {
        app.attention_form = None;
        app.state = AppState::Normal;
        return;
    }

    if key.code == KeyCode::Tab || key.code == KeyCode::Down {
        if let Some(form) = app.attention_form.as_mut() {
            form.focus = match form.focus {
                AttentionFormFocus::Reason => AttentionFormFocus::Treatment,
                AttentionFormFocus::Treatment => AttentionFormFocus::Status,
                AttentionFormFocus::Status => AttentionFormFocus::Button,
                AttentionFormFocus::Button => AttentionFormFocus::Reason,
            };
        }
        return;
    }

    if key.code == KeyCode::Up {
        if let Some(form) = app.attention_form.as_mut() {
            form.focus = match form.focus {
                AttentionFormFocus::Reason => AttentionFormFocus::Button,
                AttentionFormFocus::Treatment => AttentionFormFocus::Reason,
                AttentionFormFocus::Status => AttentionFormFocus::Treatment,
                AttentionFormFocus::Button => AttentionFormFocus::Status,
            };
        }
        return;
    }

    let focus = match app.attention_form.as_ref() {
        Some(form) => form.focus,
        None => return,
    };

    match (focus, key.code) {
        (AttentionFormFocus::Button, KeyCode::Enter) => {
            app.submit_attention();
        }
        (AttentionFormFocus::Status, KeyCode::Enter)
        | (AttentionFormFocus::Status, KeyCode::Left)
        | (AttentionFormFocus::Status, KeyCode::Right)
        | (AttentionFormFocus::Status, KeyCode::Char(' ')) => {
            if let Some(form) = app.attention_form.as_mut() {
                form.cycle_status();
            }
        }
        (AttentionFormFocus::Reason, KeyCode::Backspace) => {
            if let Some(form) = app.attention_form.as_mut() {
                form.reason.pop();
            }
        }
        (AttentionFormFocus::Treatment, KeyCode::Backspace) => {
            if let Some(form) = app.attention_form.as_mut() {
                form.treatment.pop();
            }
        }
        (AttentionFormFocus::Reason, KeyCode::Char(c)) => {
            if let Some(form) = app.attention_form.as_mut() {
                if can_add_text_char(&form.reason) {
                    form.reason.push(c);
                }
            }
        }
        (AttentionFormFocus::Treatment, KeyCode::Char(c)) => {
            if let Some(form) = app.attention_form.as_mut() {
                if can_add_text_char(&form.treatment) {
                    form.treatment.push(c);
                }
            }
        }
        (AttentionFormFocus::Reason, KeyCode::Enter)
        | (AttentionFormFocus::Treatment, KeyCode::Enter) => {
            if let Some(form) = app.attention_form.as_mut() {
                form.focus = match form.focus {
                    AttentionFormFocus::Reason => AttentionFormFocus::Treatment,
                    _ => AttentionFormFocus::Status,
                };
            }
        }
        _ => {}
    }
}
