/*
[INPUT]:  Modal state, fields, and key events
[OUTPUT]: Modal rendering output and modal action results
[POS]:    TUI UI modal module root
[UPDATE]: When adding modals or field kinds
*/

mod create_task;
mod generate_cleaning;
mod token;

pub(in crate::tui) use create_task::CreateTaskModal;
pub(in crate::tui) use generate_cleaning::GenerateCleaningModal;
pub(in crate::tui) use token::TokenModal;

use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::runtime::border_style;

pub(in crate::tui) struct Modal {
    pub(super) title: String,
    pub(super) focus_index: usize,
    pub(super) fields: Vec<Field>,
    /// Message shown under the fields (e.g. token required)
    pub(super) notice: Option<String>,
}

pub(in crate::tui) enum Field {
    TextInput {
        label: String,
        value: String,
        masked: bool,
        error: Option<String>,
    },
    Select {
        label: String,
        options: Vec<String>,
        selected: usize,
    },
    /// Shown but never focused or edited
    ReadOnly {
        label: String,
        value: String,
    },
    Button {
        label: String,
        action: ModalAction,
    },
}

impl Field {
    pub(super) fn text(label: &str, value: &str, error: Option<&str>) -> Self {
        Field::TextInput {
            label: label.to_string(),
            value: value.to_string(),
            masked: false,
            error: error.map(str::to_string),
        }
    }

    pub(super) fn button(label: &str, action: ModalAction) -> Self {
        Field::Button {
            label: label.to_string(),
            action,
        }
    }

    fn focusable(&self) -> bool {
        !matches!(self, Field::ReadOnly { .. })
    }

    pub(super) fn text_value(&self) -> Option<&str> {
        match self {
            Field::TextInput { value, .. } => Some(value.as_str()),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui) enum ModalAction {
    Submit,
    Cancel,
    None,
}

pub(in crate::tui) fn draw_modal(frame: &mut ratatui::Frame, area: Rect, modal: &Modal) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(modal.title.as_str());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let error_style = Style::default().fg(Color::LightRed);
    let mut lines: Vec<Line> = Vec::new();
    for (index, field) in modal.fields.iter().enumerate() {
        let content = match field {
            Field::TextInput {
                label,
                value,
                masked,
                ..
            } => {
                let shown = if *masked {
                    "*".repeat(value.chars().count())
                } else {
                    value.clone()
                };
                format!("{label}: {shown}")
            }
            Field::Select {
                label,
                options,
                selected,
            } => {
                let selected_value = options.get(*selected).map(String::as_str).unwrap_or("-");
                format!("{label}: < {selected_value} >")
            }
            Field::ReadOnly { label, value } => format!("{label}: {value}"),
            Field::Button { label, .. } => format!("[{label}]"),
        };
        let style = if index == modal.focus_index {
            Style::default().add_modifier(Modifier::REVERSED)
        } else if !field.focusable() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(content, style)));

        if let Field::TextInput {
            error: Some(error), ..
        } = field
        {
            lines.push(Line::from(Span::styled(format!("  {error}"), error_style)));
        }
    }

    if let Some(notice) = &modal.notice {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(notice.clone(), error_style)));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

/// Apply a key to the focused field.
///
/// Tab / BackTab move focus, Up/Down change selects, Enter on a button
/// returns its action and Esc cancels.
pub(in crate::tui) fn handle_modal_key(modal: &mut Modal, key: KeyCode) -> ModalAction {
    match key {
        KeyCode::Esc => ModalAction::Cancel,
        KeyCode::Tab => {
            move_focus(modal, 1);
            ModalAction::None
        }
        KeyCode::BackTab => {
            move_focus(modal, modal.fields.len().saturating_sub(1));
            ModalAction::None
        }
        KeyCode::Up | KeyCode::Left => {
            if let Some(Field::Select {
                selected, options, ..
            }) = modal.fields.get_mut(modal.focus_index)
            {
                if !options.is_empty() {
                    *selected = selected.saturating_sub(1);
                }
            }
            ModalAction::None
        }
        KeyCode::Down | KeyCode::Right => {
            if let Some(Field::Select {
                selected, options, ..
            }) = modal.fields.get_mut(modal.focus_index)
            {
                if *selected + 1 < options.len() {
                    *selected += 1;
                }
            }
            ModalAction::None
        }
        KeyCode::Backspace => {
            if let Some(Field::TextInput { value, .. }) = modal.fields.get_mut(modal.focus_index) {
                value.pop();
            }
            ModalAction::None
        }
        KeyCode::Char(ch) => {
            if let Some(Field::TextInput { value, .. }) = modal.fields.get_mut(modal.focus_index) {
                value.push(ch);
            }
            ModalAction::None
        }
        KeyCode::Enter => match modal.fields.get(modal.focus_index) {
            Some(Field::Button { action, .. }) => *action,
            // Enter on an input submits the form
            Some(_) => ModalAction::Submit,
            None => ModalAction::None,
        },
        _ => ModalAction::None,
    }
}

/// Step focus by `step` (mod len), skipping read-only fields
fn move_focus(modal: &mut Modal, step: usize) {
    let len = modal.fields.len();
    if len == 0 {
        return;
    }
    let mut index = modal.focus_index;
    for _ in 0..len {
        index = (index + step) % len;
        if modal.fields[index].focusable() {
            modal.focus_index = index;
            return;
        }
    }
}
