/*
[INPUT]:  Cleaning generator form held by the dashboard state
[OUTPUT]: Generate-cleaning modal rendering and key handling
[POS]:    TUI UI modal - automatic cleaning task
[UPDATE]: When the generator form gains fields
*/

use crossterm::event::KeyCode;
use housekeeping_dashboard::controller::{CleaningField, CleaningForm};

use super::{Field, Modal, ModalAction, handle_modal_key};

const HOTEL_INDEX: usize = 0;
const ROOM_INDEX: usize = 1;

pub(in crate::tui) struct GenerateCleaningModal {
    focus_index: usize,
}

impl GenerateCleaningModal {
    pub(in crate::tui) fn new() -> Self {
        Self { focus_index: 0 }
    }

    pub(in crate::tui) fn to_modal(&self, form: &CleaningForm) -> Modal {
        let error =
            |field: CleaningField| form.field_invalid(field).then(|| field.error_message());
        Modal {
            title: String::from("Tarea de limpieza automática"),
            focus_index: self.focus_index,
            fields: vec![
                Field::text(
                    CleaningField::HotelName.label(),
                    &form.hotel_name,
                    error(CleaningField::HotelName),
                ),
                Field::text(
                    CleaningField::RoomCode.label(),
                    &form.room_code,
                    error(CleaningField::RoomCode),
                ),
                Field::ReadOnly {
                    label: String::from("Nuevo estado de la habitación"),
                    value: form.new_status.clone(),
                },
                Field::button("Generar", ModalAction::Submit),
                Field::button("Cancelar", ModalAction::Cancel),
            ],
            notice: None,
        }
    }

    pub(in crate::tui) fn handle_key(
        &mut self,
        key: KeyCode,
        form: &mut CleaningForm,
    ) -> ModalAction {
        let mut modal = self.to_modal(form);
        let action = handle_modal_key(&mut modal, key);

        if modal.focus_index != self.focus_index {
            match self.focus_index {
                HOTEL_INDEX => form.touch(CleaningField::HotelName),
                ROOM_INDEX => form.touch(CleaningField::RoomCode),
                _ => {}
            }
        }
        self.focus_index = modal.focus_index;

        if let Some(value) = modal.fields[HOTEL_INDEX].text_value() {
            form.hotel_name = value.to_string();
        }
        if let Some(value) = modal.fields[ROOM_INDEX].text_value() {
            form.room_code = value.to_string();
        }
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_status_cannot_be_edited() {
        let mut form = CleaningForm::new();
        let mut modal = GenerateCleaningModal::new();
        for key in [KeyCode::Tab, KeyCode::Tab, KeyCode::Backspace, KeyCode::Char('X')] {
            modal.handle_key(key, &mut form);
        }

        assert_eq!(form.new_status, "Disponible");
        assert_eq!(form.to_request().new_status, "Disponible");
        assert!(form.is_touched(CleaningField::HotelName));
        assert!(form.is_touched(CleaningField::RoomCode));
    }
}
