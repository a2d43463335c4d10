/*
[INPUT]:  Cleaning task records and generator messages
[OUTPUT]: Cleaning panel (messages + log table) rendered into Ratatui frame
[POS]:    TUI UI cleaning panel rendering
[UPDATE]: When cleaning record columns change
*/

use housekeeping_dashboard::format::{format_timestamp, or_missing};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use super::task_table::fit;
use crate::tui::app::AppState;
use crate::tui::runtime::{border_style, error_style, header_style, success_style};

pub(in crate::tui) fn draw_cleaning_panel(
    frame: &mut ratatui::Frame,
    area: Rect,
    app: &mut AppState,
) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(5)])
        .split(area);

    let state = &app.dashboard;
    let mut lines = Vec::new();
    if state.cleaning_loading() {
        lines.push(Line::from("Generando tarea de limpieza..."));
    }
    if let Some(error) = state.cleaning_error() {
        lines.push(Line::from(Span::styled(error.to_string(), error_style())));
    }
    if let Some(message) = state.cleaning_message() {
        lines.push(Line::from(Span::styled(message.to_string(), success_style())));
    }
    let messages = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title("Mensajes"),
    );
    frame.render_widget(messages, layout[0]);

    let header = Row::new(vec![
        "ID",
        "Hotel",
        "Habitación",
        "Descripción",
        "Asignada a",
        "Estimado",
        "Estado",
        "Creada",
        "Mensaje",
    ])
    .style(header_style());

    let rows: Vec<Row> = if state.cleaning_tasks().is_empty() {
        vec![Row::new(vec![
            Cell::from(""),
            Cell::from("Sin tareas de limpieza. Pulsa [g] para generar una."),
        ])]
    } else {
        state
            .cleaning_tasks()
            .iter()
            .map(|record| {
                let task_id = record
                    .task_id
                    .map_or_else(|| or_missing(None), |id| id.to_string());
                let minutes = record
                    .estimated_minutes
                    .map_or_else(|| or_missing(None), |minutes| format!("{minutes} min"));
                Row::new(vec![
                    Cell::from(task_id),
                    Cell::from(or_missing(record.hotel_name.as_deref())),
                    Cell::from(or_missing(record.room_code.as_deref())),
                    Cell::from(fit(&or_missing(record.description.as_deref()), 28)),
                    Cell::from(or_missing(record.assigned_to.as_deref())),
                    Cell::from(minutes),
                    Cell::from(or_missing(record.status.as_deref())),
                    Cell::from(format_timestamp(record.created_at.as_deref())),
                    Cell::from(or_missing(record.message.as_deref())),
                ])
            })
            .collect()
    };

    let widths = [
        Constraint::Length(6),
        Constraint::Length(16),
        Constraint::Length(10),
        Constraint::Length(28),
        Constraint::Length(16),
        Constraint::Length(9),
        Constraint::Length(12),
        Constraint::Length(15),
        Constraint::Min(12),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title("Tareas de limpieza"),
        )
        .row_highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    frame.render_stateful_widget(table, layout[1], &mut app.cleaning_table);
}
