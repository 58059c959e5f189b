use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::app::{App, Focus};
use crate::ui::styles;
use crate::util::{date_part, format_date, truncate};

/// Render the Attentions tab: club-wide visit list plus detail panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_attention_table(frame, app, chunks[0]);
    render_attention_detail(frame, app, chunks[1]);
}

fn render_attention_table(frame: &mut Frame, app: &App, area: Rect) {
    let attentions = app.filtered_attentions();
    let focused = matches!(app.focus, Focus::List);

    let header = Row::new([
        Cell::from("Date"),
        Cell::from("Player"),
        Cell::from("Reason"),
        Cell::from("Status"),
    ])
    .style(styles::title_style())
    .height(1);

    let rows: Vec<Row> = attentions
        .iter()
        .enumerate()
        .map(|(i, attention)| {
            let style = if i == app.attention_selection {
                styles::selected_style()
            } else {
                styles::list_item_style()
            };

            Row::new(vec![
                Cell::from(format_date(date_part(&attention.attended_at))),
                Cell::from(truncate(&attention.player_str(), 24)),
                Cell::from(truncate(&attention.reason, 30)),
                Cell::from(attention.status.label()),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Percentage(30),
        Constraint::Fill(3),
        Constraint::Length(18),
    ];

    let title = format!(" Attentions ({}) ", attentions.len());

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
    state.select(Some(app.attention_selection));

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_attention_detail(frame: &mut Frame, app: &App, area: Rect) {
    let attentions = app.filtered_attentions();
    let selected = attentions.get(app.attention_selection);
    let focused = matches!(app.focus, Focus::Detail);

    let content = match selected {
        Some(attention) => {
            let mut lines = vec![];

            lines.push(Line::from(Span::styled(
                attention.player_str(),
                styles::title_style(),
            )));
            lines.push(Line::from(""));

            lines.push(Line::from(vec![
                Span::styled("Date:         ", styles::muted_style()),
                Span::raw(format_date(date_part(&attention.attended_at))),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Professional: ", styles::muted_style()),
                Span::raw(attention.professional_str()),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Status:       ", styles::muted_style()),
                Span::raw(attention.status.label()),
            ]));

            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("Reason", styles::highlight_style())));
            lines.push(Line::from(attention.reason.clone()));

            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Treatment",
                styles::highlight_style(),
            )));
            lines.push(Line::from(attention.treatment.clone()));

            if let Some(ref notes) = attention.notes {
                if !notes.trim().is_empty() {
                    lines.push(Line::from(""));
                    lines.push(Line::from(Span::styled("Notes", styles::highlight_style())));
                    lines.push(Line::from(notes.clone()));
                }
            }

            lines
        }
        None => vec![Line::from(Span::styled(
            "No attention selected",
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
