/*
[INPUT]:  Frame layout regions and current tab
[OUTPUT]: Tab bar, hotkey footer and modal placement helpers
[POS]:    TUI UI layout module
[UPDATE]: When adding tabs or hotkeys
*/

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};

use crate::tui::app::{AppState, Tab};
use crate::tui::runtime::{border_style, header_style};

pub(in crate::tui) fn draw_tabs(frame: &mut ratatui::Frame, area: Rect, current_tab: Tab) {
    let titles = vec![
        Line::from("1 Tareas"),
        Line::from("2 Limpieza"),
        Line::from("3 Logs"),
    ];
    let selected = match current_tab {
        Tab::Tasks => 0,
        Tab::Cleaning => 1,
        Tab::Logs => 2,
    };

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title("Panel"),
        )
        .highlight_style(header_style())
        .select(selected);

    frame.render_widget(tabs, area);
}

pub(in crate::tui) fn draw_footer(frame: &mut ratatui::Frame, area: Rect, app: &AppState) {
    let key_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let line1 = Line::from(vec![
        Span::styled("[Up/Down]", key_style),
        Span::raw(" Seleccionar  "),
        Span::styled("[Left/Right]", key_style),
        Span::raw(" Estado  "),
        Span::styled("[u]", key_style),
        Span::raw(" Actualizar  "),
        Span::styled("[r]", key_style),
        Span::raw(" Recargar  "),
        Span::styled("[n]", key_style),
        Span::raw(" Nueva tarea  "),
        Span::styled("[g]", key_style),
        Span::raw(" Limpieza"),
    ]);

    let mut line2 = vec![
        Span::styled("[Tab/1-3]", key_style),
        Span::raw(" Paneles  "),
    ];
    if app.dashboard.require_token() {
        line2.push(Span::styled("[k]", key_style));
        let token_state = if app.dashboard.has_token() {
            " Token (aplicado)  "
        } else {
            " Token (pendiente)  "
        };
        line2.push(Span::raw(token_state));
    }
    line2.push(Span::styled("[q]", key_style));
    line2.push(Span::raw(" Salir  "));
    line2.push(Span::raw(format!("Estado: {}", app.status_message)));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title("Teclas");
    let text = Text::from(vec![line1, Line::from(line2)]);
    let widget = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

pub(in crate::tui) fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
