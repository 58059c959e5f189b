use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use kinetrack_core::models::Player;

use crate::app::{App, Focus, PlayerDetailView};
use crate::ui::styles;
use crate::util::{date_part, format_date, truncate};

/// Render the Players tab: roster table plus detail panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_player_table(frame, app, chunks[0]);
    render_player_detail(frame, app, chunks[1]);
}

fn render_player_table(frame: &mut Frame, app: &App, area: Rect) {
    let players = app.filtered_players();
    let focused = matches!(app.focus, Focus::List);

    let header = Row::new([
        Cell::from("Name"),
        Cell::from("Division"),
        Cell::from("Age"),
        Cell::from("Foot"),
        Cell::from("Status"),
    ])
    .style(styles::title_style())
    .height(1);

    let rows: Vec<Row> = players
        .iter()
        .enumerate()
        .map(|(i, player)| {
            let style = if i == app.player_selection {
                styles::selected_style()
            } else {
                styles::list_item_style()
            };

            let status = if player.active { "Active" } else { "Inactive" };

            Row::new(vec![
                Cell::from(player.display_name()),
                Cell::from(player.division_str()),
                Cell::from(format!("{:>3}", player.age_str())),
                Cell::from(player.laterality.label()),
                Cell::from(status),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Percentage(38),
        Constraint::Fill(2),
        Constraint::Length(4),
        Constraint::Fill(2),
        Constraint::Length(8),
    ];

    let title = match app.division_filter_str() {
        Some(name) => format!(" Players ({}) - {} [c] ", players.len(), name),
        None => format!(" Players ({}) - all squads [c] ", players.len()),
    };

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
    state.select(Some(app.player_selection));

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_player_detail(frame: &mut Frame, app: &App, area: Rect) {
    let players = app.filtered_players();
    let selected = players.get(app.player_selection).copied();
    let focused = matches!(app.focus, Focus::Detail);

    match app.player_detail_view {
        PlayerDetailView::Details => render_details_view(frame, selected, area, focused),
        PlayerDetailView::Attentions => render_visits_view(frame, app, selected, area, focused),
        PlayerDetailView::Injuries => render_history_view(frame, app, selected, area, focused),
    }
}

fn render_details_view(frame: &mut Frame, selected: Option<&Player>, area: Rect, focused: bool) {
    let content = match selected {
        Some(player) => {
            let mut lines = vec![];

            lines.push(Line::from(Span::styled(
                player.full_name(),
                styles::title_style(),
            )));
            lines.push(Line::from(""));

            lines.push(Line::from(Span::styled("Record", styles::highlight_style())));
            lines.push(detail_line("RUT:       ", player.rut.clone()));
            lines.push(detail_line(
                "Record #:  ",
                player.record_number.clone().unwrap_or_else(|| "-".to_string()),
            ));
            lines.push(detail_line("Division:  ", player.division_str()));

            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("Profile", styles::highlight_style())));
            lines.push(detail_line(
                "Born:      ",
                format!("{} ({})", format_date(&player.birth_date), player.age_str()),
            ));
            lines.push(detail_line("Country:   ", player.nationality.clone()));
            lines.push(detail_line("Foot:      ", player.laterality.label().to_string()));
            lines.push(detail_line("Height:    ", player.height_str()));
            lines.push(detail_line("Weight:    ", player.weight_str()));
            lines.push(detail_line(
                "Insurance: ",
                player.health_insurance.label().to_string(),
            ));

            lines
        }
        None => vec![Line::from(Span::styled(
            "No player selected",
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

fn render_visits_view(
    frame: &mut Frame,
    app: &App,
    selected: Option<&Player>,
    area: Rect,
    focused: bool,
) {
    let mut lines = vec![];

    match selected {
        Some(player) => {
            lines.push(Line::from(Span::styled(
                format!("Visits for {}", player.display_name()),
                styles::title_style(),
            )));
            lines.push(Line::from(""));

            if app.selected_player_attentions.is_empty() {
                lines.push(Line::from(Span::styled(
                    "No attentions recorded",
                    styles::muted_style(),
                )));
            }

            for attention in &app.selected_player_attentions {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{:<12}", format_date(date_part(&attention.attended_at))),
                        styles::highlight_style(),
                    ),
                    Span::raw(truncate(&attention.reason, 28)),
                ]));
                lines.push(Line::from(vec![
                    Span::raw("            "),
                    Span::styled(attention.status.label(), styles::muted_style()),
                ]));
            }
        }
        None => {
            lines.push(Line::from(Span::styled(
                "No player selected",
                styles::muted_style(),
            )));
        }
    }

    let block = Block::default()
        .title(" Attentions ")
        .title_style(styles::muted_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(focused));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_history_view(
    frame: &mut Frame,
    app: &App,
    selected: Option<&Player>,
    area: Rect,
    focused: bool,
) {
    let mut lines = vec![];

    match selected {
        Some(player) => {
            lines.push(Line::from(Span::styled(
                format!("Injury history for {}", player.display_name()),
                styles::title_style(),
            )));
            lines.push(Line::from(""));

            if app.selected_player_injuries.is_empty() {
                lines.push(Line::from(Span::styled(
                    "No injuries recorded",
                    styles::muted_style(),
                )));
            }

            for injury in &app.selected_player_injuries {
                let status_style = if injury.is_active() {
                    styles::error_style()
                } else {
                    styles::success_style()
                };
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{:<12}", format_date(&injury.injured_on)),
                        styles::highlight_style(),
                    ),
                    Span::raw(truncate(&injury.diagnosis, 26)),
                ]));
                lines.push(Line::from(vec![
                    Span::raw("            "),
                    Span::styled(
                        format!("{} / {}", injury.injury_type.label(), injury.severity.label()),
                        styles::muted_style(),
                    ),
                ]));
                lines.push(Line::from(vec![
                    Span::raw("            "),
                    Span::styled(
                        if injury.is_active() {
                            format!("Active, {} remaining", injury.days_remaining_str())
                        } else {
                            "Recovered".to_string()
                        },
                        status_style,
                    ),
                ]));
            }
        }
        None => {
            lines.push(Line::from(Span::styled(
                "No player selected",
                styles::muted_style(),
            )));
        }
    }

    let block = Block::default()
        .title(" Injuries ")
        .title_style(styles::muted_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(focused));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn detail_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(label.to_string(), styles::muted_style()),
        Span::raw(value),
    ])
}
