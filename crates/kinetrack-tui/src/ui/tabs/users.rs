use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::app::{App, Focus};
use crate::ui::styles;
use crate::util::truncate;

/// Render the Users tab: account list plus detail panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_user_table(frame, app, chunks[0]);
    render_user_detail(frame, app, chunks[1]);
}

fn render_user_table(frame: &mut Frame, app: &App, area: Rect) {
    let users = app.filtered_users();
    let focused = matches!(app.focus, Focus::List);

    let header = Row::new([
        Cell::from("Name"),
        Cell::from("Username"),
        Cell::from("Role"),
        Cell::from("Status"),
    ])
    .style(styles::title_style())
    .height(1);

    let rows: Vec<Row> = users
        .iter()
        .enumerate()
        .map(|(i, user)| {
            let style = if i == app.user_selection {
                styles::selected_style()
            } else {
                styles::list_item_style()
            };

            Row::new(vec![
                Cell::from(truncate(&user.display_name(), 26)),
                Cell::from(user.username.clone()),
                Cell::from(user.role_str()),
                Cell::from(user.status_str()),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Percentage(34),
        Constraint::Fill(2),
        Constraint::Fill(2),
        Constraint::Length(10),
    ];

    let title = format!(" Users ({}) ", users.len());

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(title)
                .title_style(styles::muted_style())
                .borders(Borders::ALL)
                .border_style(styles::border_style(focused)),
        )
        .row_highlight_style(styles::selected_style());

    let mut state = TableState::default();
    state.select(Some(app.user_selection));

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_user_detail(frame: &mut Frame, app: &App, area: Rect) {
    let users = app.filtered_users();
    let selected = users.get(app.user_selection);
    let focused = matches!(app.focus, Focus::Detail);

    let placeholder = "-";

    let content = match selected {
        Some(user) => {
            let mut lines = vec![];

            lines.push(Line::from(Span::styled(
                user.display_name(),
                styles::title_style(),
            )));
            lines.push(Line::from(""));

            lines.push(Line::from(vec![
                Span::styled("Username: ", styles::muted_style()),
                Span::raw(user.username.clone()),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Email:    ", styles::muted_style()),
                Span::raw(user.email.clone().unwrap_or_else(|| placeholder.to_string())),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Role:     ", styles::muted_style()),
                Span::raw(user.role_str()),
            ]));

            let status_style = if user.is_active {
                styles::success_style()
            } else {
                styles::error_style()
            };
            lines.push(Line::from(vec![
                Span::styled("Status:   ", styles::muted_style()),
                Span::styled(user.status_str(), status_style),
            ]));

            if let Some(ref profile) = user.profile {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled("Profile", styles::highlight_style())));
                lines.push(Line::from(vec![
                    Span::styled("RUT:      ", styles::muted_style()),
                    Span::raw(profile.rut.clone().unwrap_or_else(|| placeholder.to_string())),
                ]));
                lines.push(Line::from(vec![
                    Span::styled("Phone:    ", styles::muted_style()),
                    Span::raw(profile.phone.clone().unwrap_or_else(|| placeholder.to_string())),
                ]));
                lines.push(Line::from(vec![
                    Span::styled("Position: ", styles::muted_style()),
                    Span::raw(profile.position.clone().unwrap_or_else(|| placeholder.to_string())),
                ]));
            }

            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "[t] toggle active  [r] cycle role",
                styles::muted_style(),
            )));

            lines
        }
        None => vec![Line::from(Span::styled(
            "No user selected",
            styles::muted_style(),
        ))],
    };

    let block = Block::default()
        .title(" Detail ")
        .title_style(styles::muted_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(focused));

    frame.render_widget(Paragraph::new(content).block(block), area);
}
