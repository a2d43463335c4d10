/*
[INPUT]:  Task creation form held by the dashboard state
[OUTPUT]: Create-task modal rendering and key handling
[POS]:    TUI UI modal - create task
[UPDATE]: When the create form gains fields
*/

use crossterm::event::KeyCode;
use housekeeping_adapter::TaskStatus;
use housekeeping_dashboard::controller::{TaskField, TaskForm};

use super::{Field, Modal, ModalAction, handle_modal_key};

const DESCRIPTION_INDEX: usize = 0;
const EMPLOYEE_INDEX: usize = 1;
const STATUS_INDEX: usize = 2;

/// Edits the dashboard's [`TaskForm`] in place; only focus lives here
pub(in crate::tui) struct CreateTaskModal {
    focus_index: usize,
}

impl CreateTaskModal {
    pub(in crate::tui) fn new() -> Self {
        Self { focus_index: 0 }
    }

    pub(in crate::tui) fn to_modal(&self, form: &TaskForm) -> Modal {
        let error = |field: TaskField| form.field_invalid(field).then(|| field.error_message());
        let status_index = TaskStatus::ALL
            .iter()
            .position(|status| *status == form.status)
            .unwrap_or(0);

        Modal {
            title: String::from("Nueva tarea"),
            focus_index: self.focus_index,
            fields: vec![
                Field::text(
                    TaskField::Description.label(),
                    &form.description,
                    error(TaskField::Description),
                ),
                Field::text(
                    TaskField::AssignedEmployee.label(),
                    &form.assigned_employee,
                    error(TaskField::AssignedEmployee),
                ),
                Field::Select {
                    label: String::from("Estado"),
                    options: TaskStatus::ALL.iter().map(|s| s.label().to_string()).collect(),
                    selected: status_index,
                },
                Field::button("Crear", ModalAction::Submit),
                Field::button("Cancelar", ModalAction::Cancel),
            ],
            notice: None,
        }
    }

    pub(in crate::tui) fn handle_key(&mut self, key: KeyCode, form: &mut TaskForm) -> ModalAction {
        let mut modal = self.to_modal(form);
        let action = handle_modal_key(&mut modal, key);

        if modal.focus_index != self.focus_index {
            match self.focus_index {
                DESCRIPTION_INDEX => form.touch(TaskField::Description),
                EMPLOYEE_INDEX => form.touch(TaskField::AssignedEmployee),
                _ => {}
            }
        }
        self.focus_index = modal.focus_index;

        if let Some(value) = modal.fields[DESCRIPTION_INDEX].text_value() {
            form.description = value.to_string();
        }
        if let Some(value) = modal.fields[EMPLOYEE_INDEX].text_value() {
            form.assigned_employee = value.to_string();
        }
        if let Field::Select { selected, .. } = &modal.fields[STATUS_INDEX] {
            form.status = TaskStatus::ALL
                .get(*selected)
                .copied()
                .unwrap_or_default();
        }
        action
    }
}
