/*
[INPUT]:  Raw access token typed by the user
[OUTPUT]: Token modal rendering and key handling
[POS]:    TUI UI modal - access token entry
[UPDATE]: When token entry changes
*/

use crossterm::event::KeyCode;

use super::{Field, Modal, ModalAction, handle_modal_key};

pub(in crate::tui) struct TokenModal {
    value: String,
    focus_index: usize,
    pub(in crate::tui) notice: Option<String>,
}

impl TokenModal {
    pub(in crate::tui) fn new() -> Self {
        Self {
            value: String::new(),
            focus_index: 0,
            notice: None,
        }
    }

    pub(in crate::tui) fn to_modal(&self) -> Modal {
        Modal {
            title: String::from("Token de acceso"),
            focus_index: self.focus_index,
            fields: vec![
                Field::TextInput {
                    label: String::from("Token"),
                    value: self.value.clone(),
                    masked: true,
                    error: None,
                },
                Field::button("Aplicar", ModalAction::Submit),
                Field::button("Cancelar", ModalAction::Cancel),
            ],
            notice: self.notice.clone(),
        }
    }

    pub(in crate::tui) fn handle_key(&mut self, key: KeyCode) -> ModalAction {
        let mut modal = self.to_modal();
        let action = handle_modal_key(&mut modal, key);
        self.focus_index = modal.focus_index;
        if let Some(value) = modal.fields[0].text_value() {
            self.value = value.to_string();
        }
        action
    }

    pub(in crate::tui) fn value(&self) -> &str {
        &self.value
    }
}
