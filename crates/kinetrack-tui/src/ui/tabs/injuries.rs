use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::app::{App, Focus};
use crate::ui::styles;
use crate::util::{format_date, truncate};

/// Render the Injuries tab: active injuries across the club
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_injury_table(frame, app, chunks[0]);
    render_injury_detail(frame, app, chunks[1]);
}

fn render_injury_table(frame: &mut Frame, app: &App, area: Rect) {
    let injuries = app.filtered_injuries();
    let focused = matches!(app.focus, Focus::List);

    let header = Row::new([
        Cell::from("Player"),
        Cell::from("Diagnosis"),
        Cell::from("Severity"),
        Cell::from("Remaining"),
    ])
    .style(styles::title_style())
    .height(1);

    let rows: Vec<Row> = injuries
        .iter()
        .enumerate()
        .map(|(i, injury)| {
            let style = if i == app.injury_selection {
                styles::selected_style()
            } else {
                styles::list_item_style()
            };

            Row::new(vec![
                Cell::from(truncate(&injury.player_str(), 24)),
                Cell::from(truncate(&injury.diagnosis, 30)),
                Cell::from(injury.severity.label()),
                Cell::from(injury.days_remaining_str()),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Percentage(28),
        Constraint::Fill(3),
        Constraint::Length(20),
        Constraint::Length(12),
    ];

    let title = format!(" Active injuries ({}) ", injuries.len());

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
    state.select(Some(app.injury_selection));

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_injury_detail(frame: &mut Frame, app: &App, area: Rect) {
    let injuries = app.filtered_injuries();
    let selected = injuries.get(app.injury_selection);
    let focused = matches!(app.focus, Focus::Detail);

    let content = match selected {
        Some(injury) => {
            let mut lines = vec![];

            lines.push(Line::from(Span::styled(
                injury.player_str(),
                styles::title_style(),
            )));
            lines.push(Line::from(""));

            lines.push(detail_line("Injured:   ", format_date(&injury.injured_on)));
            lines.push(detail_line("Type:      ", injury.injury_type.label().to_string()));
            lines.push(detail_line("Region:    ", injury.body_region.clone()));
            lines.push(detail_line("Mechanism: ", injury.mechanism.label().to_string()));
            lines.push(detail_line("Condition: ", injury.condition.label().to_string()));
            lines.push(detail_line("Phase:     ", injury.sport_phase.label().to_string()));
            lines.push(detail_line("Severity:  ", injury.severity.label().to_string()));

            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("Recovery", styles::highlight_style())));
            let estimated = injury
                .estimated_recovery_days
                .map(|d| format!("{} days", d))
                .unwrap_or_else(|| "-".to_string());
            lines.push(detail_line("Estimated: ", estimated));
            lines.push(detail_line("Remaining: ", injury.days_remaining_str()));
            let matches_out = injury
                .estimated_matches_out
                .map(|m| m.to_string())
                .unwrap_or_else(|| "-".to_string());
            lines.push(detail_line("Matches:   ", matches_out));

            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Diagnosis",
                styles::highlight_style(),
            )));
            lines.push(Line::from(injury.diagnosis.clone()));

            if let Some(ref notes) = injury.notes {
                if !notes.trim().is_empty() {
                    lines.push(Line::from(""));
                    lines.push(Line::from(Span::styled("Notes", styles::highlight_style())));
                    lines.push(Line::from(notes.clone()));
                }
            }

            lines
        }
        None => vec![Line::from(Span::styled(
            "No injury selected",
            styles::muted_style(),
        ))],
    };

    let block = Block::default()
        .title(" Detail ")
        .title_style(styles::muted_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(focused));

    frame.render_widget(
        Paragraph::new(content)
            .block(block)
            .wrap(ratatui::widgets::Wrap { trim: true }),
        area,
    );
}

fn detail_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(label.to_string(), styles::muted_style()),
        Span::raw(value),
    ])
}
