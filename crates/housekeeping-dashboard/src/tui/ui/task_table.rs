/*
[INPUT]:  Dashboard task collection, pending selections, inline messages
[OUTPUT]: Tasks panel (messages + table) rendered into Ratatui frame
[POS]:    TUI UI tasks panel rendering
[UPDATE]: When task columns or inline messages change
*/

use housekeeping_dashboard::format::format_timestamp;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::app::AppState;
use crate::tui::runtime::{border_style, error_style, header_style, success_style};

const DESCRIPTION_WIDTH: usize = 32;

pub(in crate::tui) fn draw_task_panel(frame: &mut ratatui::Frame, area: Rect, app: &mut AppState) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(5)])
        .split(area);

    draw_task_messages(frame, layout[0], app);
    draw_task_table(frame, layout[1], app);
}

fn draw_task_messages(frame: &mut ratatui::Frame, area: Rect, app: &AppState) {
    let state = &app.dashboard;
    let mut lines = Vec::new();

    if state.task_loading() {
        lines.push(Line::from("Cargando tareas..."));
    }
    if state.task_creation_loading() {
        lines.push(Line::from("Creando tarea..."));
    }
    if state.any_update_in_flight() {
        lines.push(Line::from("Actualizando estado..."));
    }
    for error in [
        state.token_error(),
        state.task_error(),
        state.task_creation_error(),
        state.task_update_error(),
    ]
    .into_iter()
    .flatten()
    {
        lines.push(Line::from(Span::styled(error.to_string(), error_style())));
    }
    for message in [state.task_creation_message(), state.task_update_message()]
        .into_iter()
        .flatten()
    {
        lines.push(Line::from(Span::styled(message.to_string(), success_style())));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title("Mensajes"),
    );
    frame.render_widget(widget, area);
}

fn draw_task_table(frame: &mut ratatui::Frame, area: Rect, app: &mut AppState) {
    let state = &app.dashboard;
    let header = Row::new(vec![
        "ID",
        "Descripción",
        "Empleado",
        "Estado",
        "Inicio",
        "Fin",
        "Nuevo estado",
    ])
    .style(header_style());

    let rows: Vec<Row> = if state.tasks().is_empty() {
        let empty = if state.task_loading() {
            "Cargando..."
        } else {
            "No hay tareas registradas."
        };
        vec![Row::new(vec![Cell::from(""), Cell::from(empty)])]
    } else {
        state
            .tasks()
            .iter()
            .map(|task| {
                let selected = state.selected_status(task);
                let pending = if state.is_updating(&task.task_id) {
                    format!("{selected} …")
                } else if selected != task.status {
                    format!("{selected} *")
                } else {
                    selected.to_string()
                };
                let pending_style = if selected != task.status {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Row::new(vec![
                    Cell::from(task.task_id.clone()),
                    Cell::from(fit(&task.description, DESCRIPTION_WIDTH)),
                    Cell::from(task.assigned_employee.clone()),
                    Cell::from(task.status.to_string()),
                    Cell::from(format_timestamp(task.start_time.as_deref())),
                    Cell::from(format_timestamp(task.end_time.as_deref())),
                    Cell::from(pending).style(pending_style),
                ])
            })
            .collect()
    };

    let widths = [
        Constraint::Length(8),
        Constraint::Length(DESCRIPTION_WIDTH as u16),
        Constraint::Length(18),
        Constraint::Length(12),
        Constraint::Length(15),
        Constraint::Length(15),
        Constraint::Min(14),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title("Tareas"),
        )
        .row_highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    frame.render_stateful_widget(table, area, &mut app.task_table);
}

/// Truncate to a display width, ending in an ellipsis when cut
pub(super) fn fit(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width + 1 > width {
            break;
        }
        used += ch_width;
        out.push(ch);
    }
    out.push('…');
    out
}
