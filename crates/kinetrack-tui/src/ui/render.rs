use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use kinetrack_core::auth::SessionStore;

use crate::app::{App, AppState, AttentionFormFocus, LoginFocus, PlayerDetailView, Tab};

use super::styles;
use super::tabs::{attentions, injuries, players, users};

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(3), // Tabs
            Constraint::Min(10),   // Main content
            Constraint::Length(2), // Status bar
        ])
        .split(frame.area());

    render_title_bar(frame, app, chunks[0]);
    render_tabs(frame, app, chunks[1]);
    render_main_content(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);

    // Render overlays
    if matches!(app.state, AppState::ShowingHelp) {
        render_help_overlay(frame);
    }

    if matches!(app.state, AppState::LoggingIn) {
        render_login_overlay(frame, app);
    }

    if matches!(app.state, AppState::AddingAttention) {
        render_attention_overlay(frame, app);
    }

    if matches!(app.state, AppState::ConfirmingQuit) {
        render_quit_overlay(frame);
    }
}

fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let title = "  Kinetrack";
    let help_hint = "[?] Help";

    let user_info = app
        .store
        .user()
        .map(|u| format!("{} ", u.display_name()))
        .unwrap_or_default();

    let padding = area
        .width
        .saturating_sub((title.len() + user_info.len() + help_hint.len() + 4) as u16)
        as usize;

    let title_line = Line::from(vec![
        Span::styled(title, styles::title_style()),
        Span::raw(" ".repeat(padding)),
        Span::styled(user_info, styles::muted_style()),
        Span::styled(help_hint, styles::muted_style()),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    frame.render_widget(Paragraph::new(title_line).block(block), area);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let main_tabs = vec![
        ("[1] Players", app.current_tab == Tab::Players),
        ("[2] Attentions", app.current_tab == Tab::Attentions),
        ("[3] Injuries", app.current_tab == Tab::Injuries),
        ("[4] Users", app.current_tab == Tab::Users),
    ];

    let mut spans = vec![Span::raw(" ")];
    for (i, (label, selected)) in main_tabs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", styles::muted_style()));
        }
        if *selected {
            spans.push(Span::styled(*label, styles::tab_style(true)));
        } else {
            spans.push(Span::styled(*label, styles::muted_style()));
        }
    }

    // Detail view toggle on the right when on the Players tab
    if app.current_tab == Tab::Players {
        let detail_tabs = vec![
            ("[d]etails", app.player_detail_view == PlayerDetailView::Details),
            ("[v]isits", app.player_detail_view == PlayerDetailView::Attentions),
            ("[h]istory", app.player_detail_view == PlayerDetailView::Injuries),
        ];

        let main_width: usize = spans.iter().map(|s| s.content.len()).sum();
        let detail_width: usize =
            detail_tabs.iter().map(|(l, _)| l.len()).sum::<usize>() + (detail_tabs.len() - 1) * 3;
        let padding = (area.width as usize).saturating_sub(main_width + detail_width + 2);

        spans.push(Span::raw(" ".repeat(padding)));

        for (i, (label, selected)) in detail_tabs.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", styles::muted_style()));
            }
            if *selected {
                spans.push(Span::styled(*label, styles::tab_style(true)));
            } else {
                spans.push(Span::styled(*label, styles::muted_style()));
            }
        }
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_main_content(frame: &mut Frame, app: &App, area: Rect) {
    match app.current_tab {
        Tab::Players => players::render(frame, app, area),
        Tab::Attentions => attentions::render(frame, app, area),
        Tab::Injuries => injuries::render(frame, app, area),
        Tab::Users => users::render(frame, app, area),
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = match app.current_tab {
        Tab::Players => "[a]ttention | [u]pdate | [q]uit",
        Tab::Injuries => "[f]inalize | [u]pdate | [q]uit",
        Tab::Users => "[t]oggle | [r]ole | [u]pdate | [q]uit",
        _ => "[u]pdate | [q]uit",
    };

    let left_text = if matches!(app.state, AppState::Searching) {
        format!(" /{}▌", app.search_query)
    } else if let Some(ref msg) = app.status_message {
        format!(" {} ", msg)
    } else if !app.search_query.is_empty() {
        format!(" Filter: {} (Esc to clear) ", app.search_query)
    } else {
        String::from(" Ready ")
    };

    let right_text = format!(" {} ", shortcuts);
    let width = area.width as usize;
    let padding_len = width
        .saturating_sub(left_text.len())
        .saturating_sub(right_text.len());

    let left_style = if matches!(app.state, AppState::Searching) {
        styles::search_style()
    } else {
        styles::muted_style()
    };

    let status_line = Line::from(vec![
        Span::styled(left_text, left_style),
        Span::raw(" ".repeat(padding_len)),
        Span::styled(right_text, styles::muted_style()),
    ]);

    frame.render_widget(
        Paragraph::new(status_line).style(styles::status_bar_style()),
        area,
    );
}

fn render_help_overlay(frame: &mut Frame) {
    let area = centered_rect_fixed(52, 24, frame.area());
    frame.render_widget(Clear, area);

    let version = env!("CARGO_PKG_VERSION");

    let help_text = vec![
        Line::from(Span::styled("   ╦╔═╦╔╗╔╔═╗╔╦╗╦═╗╔═╗╔═╗╦╔═", styles::title_style())),
        Line::from(Span::styled("   ╠╩╗║║║║║╣  ║ ╠╦╝╠═╣║  ╠╩╗", styles::title_style())),
        Line::from(Span::styled("   ╩ ╩╩╝╚╝╚═╝ ╩ ╩╚═╩ ╩╚═╝╩ ╩", styles::title_style())),
        Line::from(Span::styled(
            format!("              version {}", version),
            styles::muted_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(" Navigation", styles::highlight_style())),
        Line::from(vec![
            Span::styled("  1-4       ", styles::help_key_style()),
            Span::styled("Switch tabs", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  ←/→       ", styles::help_key_style()),
            Span::styled("Prev/next tab", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  ↑/↓       ", styles::help_key_style()),
            Span::styled("Navigate list", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  d/v/h     ", styles::help_key_style()),
            Span::styled("Player detail / visits / history", styles::help_desc_style()),
        ]),
        Line::from(""),
        Line::from(Span::styled(" Actions", styles::highlight_style())),
        Line::from(vec![
            Span::styled("  /         ", styles::help_key_style()),
            Span::styled("Search", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  a         ", styles::help_key_style()),
            Span::styled("Record attention (Players tab)", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  c         ", styles::help_key_style()),
            Span::styled("Cycle division filter (Players)", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  f         ", styles::help_key_style()),
            Span::styled("Finalize injury (Injuries tab)", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  t / r     ", styles::help_key_style()),
            Span::styled("Toggle active / cycle role (Users)", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  u         ", styles::help_key_style()),
            Span::styled("Update data from server", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  L         ", styles::help_key_style()),
            Span::styled("Log out", styles::help_desc_style()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("       Press ", styles::muted_style()),
            Span::styled("?", styles::help_key_style()),
            Span::styled(" or ", styles::muted_style()),
            Span::styled("Esc", styles::help_key_style()),
            Span::styled(" to close", styles::muted_style()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    frame.render_widget(Paragraph::new(help_text).block(block), area);
}

fn render_login_overlay(frame: &mut Frame, app: &App) {
    let height = if app.login_error.is_some() { 13 } else { 11 };
    let area = centered_rect_fixed(46, height, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = vec![];

    lines.push(Line::from(Span::styled(
        "       ╦╔═╦╔╗╔╔═╗╔╦╗╦═╗╔═╗╔═╗╦╔═",
        styles::title_style(),
    )));
    lines.push(Line::from(Span::styled(
        "       ╠╩╗║║║║║╣  ║ ╠╦╝╠═╣║  ╠╩╗",
        styles::title_style(),
    )));
    lines.push(Line::from(Span::styled(
        "       ╩ ╩╩╝╚╝╚═╝ ╩ ╩╚═╩ ╩╚═╝╩ ╩",
        styles::title_style(),
    )));
    lines.push(Line::from(""));

    let rut_focused = app.login_focus == LoginFocus::Rut;
    let rut_style = if rut_focused {
        styles::selected_style()
    } else {
        styles::list_item_style()
    };
    let rut_display = format!("{:<16}", app.login_rut);
    let cursor = if rut_focused { "▌" } else { "" };
    lines.push(Line::from(vec![
        Span::raw("      "),
        Span::styled("RUT:      [", styles::muted_style()),
        Span::styled(format!("{}{}", rut_display, cursor), rut_style),
        Span::styled("]", styles::muted_style()),
    ]));

    let password_focused = app.login_focus == LoginFocus::Password;
    let password_style = if password_focused {
        styles::selected_style()
    } else {
        styles::list_item_style()
    };
    let password_masked: String = "*".repeat(app.login_password.len().min(16));
    let password_display = format!("{:<16}", password_masked);
    let cursor = if password_focused { "▌" } else { "" };
    lines.push(Line::from(vec![
        Span::raw("      "),
        Span::styled("Password: [", styles::muted_style()),
        Span::styled(format!("{}{}", password_display, cursor), password_style),
        Span::styled("]", styles::muted_style()),
    ]));

    let button_focused = app.login_focus == LoginFocus::Button;
    let button_style = if button_focused {
        styles::selected_style()
    } else {
        styles::list_item_style()
    };
    lines.push(Line::from(""));
    let button_label = if button_focused { " ▶ Login ◀ " } else { "   Login   " };
    lines.push(Line::from(vec![
        Span::raw("            ["),
        Span::styled(button_label, button_style),
        Span::raw("]"),
    ]));

    if let Some(ref error) = app.login_error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(" {}", error),
            styles::error_style(),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_attention_overlay(frame: &mut Frame, app: &App) {
    let Some(ref form) = app.attention_form else {
        return;
    };

    let height = if form.error.is_some() { 15 } else { 13 };
    let area = centered_rect_fixed(56, height, frame.area());
    frame.render_widget(Clear, area);

    let field = |label: &str, value: &str, focused: bool| {
        let style = if focused {
            styles::selected_style()
        } else {
            styles::list_item_style()
        };
        let cursor = if focused { "▌" } else { "" };
        Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{:<11}[", label), styles::muted_style()),
            Span::styled(format!("{:<36}{}", value, cursor), style),
            Span::styled("]", styles::muted_style()),
        ])
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("  New attention for {}", form.player_name),
            styles::title_style(),
        )),
        Line::from(""),
        field("Reason:", &form.reason, form.focus == AttentionFormFocus::Reason),
        Line::from(""),
        field(
            "Treatment:",
            &form.treatment,
            form.focus == AttentionFormFocus::Treatment,
        ),
        Line::from(""),
    ];

    let status_focused = form.focus == AttentionFormFocus::Status;
    let status_style = if status_focused {
        styles::selected_style()
    } else {
        styles::list_item_style()
    };
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled("Status:    ", styles::muted_style()),
        Span::styled(format!("◀ {} ▶", form.status.label()), status_style),
    ]));

    lines.push(Line::from(""));
    let button_focused = form.focus == AttentionFormFocus::Button;
    let button_style = if button_focused {
        styles::selected_style()
    } else {
        styles::list_item_style()
    };
    let button_label = if button_focused { " ▶ Save ◀ " } else { "   Save   " };
    lines.push(Line::from(vec![
        Span::raw("                 ["),
        Span::styled(button_label, button_style),
        Span::raw("]"),
    ]));

    if let Some(ref error) = form.error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {}", error),
            styles::error_style(),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Tab: next field | Esc: cancel",
        styles::muted_style(),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_quit_overlay(frame: &mut Frame) {
    let area = centered_rect_fixed(46, 9, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            "       ╦╔═╦╔╗╔╔═╗╔╦╗╦═╗╔═╗╔═╗╦╔═",
            styles::title_style(),
        )),
        Line::from(Span::styled(
            "       ╠╩╗║║║║║╣  ║ ╠╦╝╠═╣║  ╠╩╗",
            styles::title_style(),
        )),
        Line::from(Span::styled(
            "       ╩ ╩╩╝╚╝╚═╝ ╩ ╩╚═╩ ╩╚═╝╩ ╩",
            styles::title_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "   Are you sure you want to quit?",
            styles::highlight_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("   Press ", styles::muted_style()),
            Span::styled("[Y]", styles::help_key_style()),
            Span::styled(" to quit, ", styles::muted_style()),
            Span::styled("[N]", styles::help_key_style()),
            Span::styled(" to cancel", styles::muted_style()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Create a centered rectangle with fixed dimensions
fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
