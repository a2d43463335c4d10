/*
[INPUT]:  Crossterm key events and request completions
[OUTPUT]: TUI event routing into AppState actions
[POS]:    TUI event handling
[UPDATE]: When changing keybindings or modal submission
*/

use crossterm::event::{Event as CrosstermEvent, KeyCode};
use housekeeping_dashboard::controller::Completion;

use super::app::{ActiveModal, AppState, Tab};
use super::ui::modal::ModalAction;

pub(super) enum UiEvent {
    Input(CrosstermEvent),
    Completion(Completion),
}

/// Handles key events for the TUI.
///
/// Returns `true` if quit is requested, `false` otherwise.
pub(super) fn handle_key_event(app: &mut AppState, key: KeyCode) -> bool {
    if app.active_modal.is_some() {
        handle_modal_key_event(app, key);
        return false;
    }

    match key {
        KeyCode::Char('q') => return true,
        KeyCode::Char('r') => app.load_tasks(),
        KeyCode::Char('u') => app.update_selected_task(),
        KeyCode::Char('n') => app.open_create_task(),
        KeyCode::Char('g') => app.open_generate_cleaning(),
        KeyCode::Char('k') => app.open_token(),
        KeyCode::Tab => app.next_tab(),
        KeyCode::Char('1') => app.set_tab(Tab::Tasks),
        KeyCode::Char('2') => app.set_tab(Tab::Cleaning),
        KeyCode::Char('3') => app.set_tab(Tab::Logs),
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::Left if app.current_tab == Tab::Tasks => app.cycle_selected_status(false),
        KeyCode::Right if app.current_tab == Tab::Tasks => app.cycle_selected_status(true),
        _ => {}
    }
    false
}

fn handle_modal_key_event(app: &mut AppState, key: KeyCode) {
    let Some(modal) = app.active_modal.as_mut() else {
        return;
    };

    let action = match modal {
        ActiveModal::CreateTask(modal) => {
            modal.handle_key(key, app.dashboard.task_form_mut())
        }
        ActiveModal::GenerateCleaning(modal) => {
            modal.handle_key(key, app.dashboard.cleaning_form_mut())
        }
        ActiveModal::Token(modal) => modal.handle_key(key),
    };

    match action {
        ModalAction::Cancel => app.close_modal(),
        ModalAction::Submit => submit_modal(app),
        ModalAction::None => {}
    }
}

fn submit_modal(app: &mut AppState) {
    let submitted = match app.active_modal.as_ref() {
        Some(ActiveModal::CreateTask(_)) => app.submit_create_task(),
        Some(ActiveModal::GenerateCleaning(_)) => app.submit_generate_cleaning(),
        Some(ActiveModal::Token(modal)) => {
            let raw = modal.value().to_string();
            app.submit_token(&raw)
        }
        None => return,
    };

    if submitted {
        app.close_modal();
        return;
    }

    // form modals show their field errors inline
    let token_error = app.dashboard.token_error().map(str::to_string);
    if let Some(ActiveModal::Token(modal)) = app.active_modal.as_mut() {
        modal.notice = token_error;
    }
}
