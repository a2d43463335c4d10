/*
[INPUT]:  Dashboard state snapshot, dispatcher, log buffer, UI event sender
[OUTPUT]: AppState helpers for TUI rendering and user actions
[POS]:    TUI app state - sole writer of the dashboard state while the TUI runs
[UPDATE]: When adding tabs, modals, or actions
*/

use housekeeping_adapter::Task;
use housekeeping_dashboard::controller::{
    CleaningField, Completion, DashboardState, Dispatcher, Request, TOKEN_REQUIRED_MESSAGE,
    TaskField,
};
use housekeeping_dashboard::logging::LogBufferHandle;
use ratatui::widgets::TableState;
use tokio::sync::mpsc;
use tracing::debug;

use super::events::UiEvent;
use crate::tui::ui::modal::{CreateTaskModal, GenerateCleaningModal, TokenModal};

pub(super) enum ActiveModal {
    CreateTask(CreateTaskModal),
    GenerateCleaning(GenerateCleaningModal),
    Token(TokenModal),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Tab {
    Tasks,
    Cleaning,
    Logs,
}

pub(super) struct AppState {
    pub(super) dashboard: DashboardState,
    dispatcher: Dispatcher,
    events: mpsc::UnboundedSender<UiEvent>,
    pub(super) log_buffer: LogBufferHandle,
    pub(super) task_table: TableState,
    pub(super) cleaning_table: TableState,
    pub(super) current_tab: Tab,
    pub(super) status_message: String,
    pub(super) active_modal: Option<ActiveModal>,
}

impl AppState {
    pub(super) fn new(
        dashboard: DashboardState,
        dispatcher: Dispatcher,
        events: mpsc::UnboundedSender<UiEvent>,
        log_buffer: LogBufferHandle,
    ) -> Self {
        Self {
            dashboard,
            dispatcher,
            events,
            log_buffer,
            task_table: TableState::default(),
            cleaning_table: TableState::default(),
            current_tab: Tab::Tasks,
            status_message: "Listo".to_string(),
            active_modal: None,
        }
    }

    /// Run a request off the UI loop; its completion comes back as a UI event
    fn dispatch(&self, request: Option<Request>) {
        let Some(request) = request else {
            return;
        };
        debug!(operation = request.operation(), "spawning request");
        let dispatcher = self.dispatcher.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let completion = dispatcher.execute(request).await;
            let _ = events.send(UiEvent::Completion(completion));
        });
    }

    pub(super) fn apply_completion(&mut self, completion: Completion) {
        self.dashboard.apply(completion);
        clamp_selection(&mut self.task_table, self.dashboard.tasks().len());
        clamp_selection(&mut self.cleaning_table, self.dashboard.cleaning_tasks().len());
    }

    pub(super) fn load_tasks(&mut self) {
        let request = self.dashboard.load_tasks();
        if request.is_none() {
            self.status_message = TOKEN_REQUIRED_MESSAGE.to_string();
        }
        self.dispatch(request);
    }

    pub(super) fn selected_task(&self) -> Option<&Task> {
        let idx = self.task_table.selected()?;
        self.dashboard.tasks().get(idx)
    }

    /// Move the pending status of the selected row one step
    pub(super) fn cycle_selected_status(&mut self, forward: bool) {
        let Some(task) = self.selected_task() else {
            return;
        };
        let current = self.dashboard.selected_status(task);
        let next = if forward {
            current.next()
        } else {
            current.previous()
        };
        let task_id = task.task_id.clone();
        self.dashboard.select_pending_status(&task_id, next);
    }

    pub(super) fn update_selected_task(&mut self) {
        let Some(task) = self.selected_task() else {
            self.status_message = "Selecciona una tarea".to_string();
            return;
        };
        let task_id = task.task_id.clone();
        if !self.dashboard.should_enable_update(&task_id, task.status) {
            self.status_message = format!("Sin cambios para la tarea {task_id}");
            return;
        }
        let request = self.dashboard.update_task_status(&task_id);
        self.dispatch(request);
    }

    pub(super) fn open_create_task(&mut self) {
        self.active_modal = Some(ActiveModal::CreateTask(CreateTaskModal::new()));
    }

    pub(super) fn open_generate_cleaning(&mut self) {
        self.active_modal = Some(ActiveModal::GenerateCleaning(GenerateCleaningModal::new()));
    }

    pub(super) fn open_token(&mut self) {
        self.active_modal = Some(ActiveModal::Token(TokenModal::new()));
    }

    pub(super) fn close_modal(&mut self) {
        self.active_modal = None;
    }

    /// Submit the create form; the modal stays open while fields are missing
    pub(super) fn submit_create_task(&mut self) -> bool {
        let request = self.dashboard.create_task();
        if request.is_none() {
            let form = self.dashboard.task_form();
            let missing: Vec<&str> = TaskField::REQUIRED
                .into_iter()
                .filter(|field| form.field_invalid(*field))
                .map(TaskField::error_message)
                .collect();
            self.status_message = missing.join(" ");
            return false;
        }
        self.dispatch(request);
        self.status_message = "Creando tarea...".to_string();
        true
    }

    pub(super) fn submit_generate_cleaning(&mut self) -> bool {
        let request = self.dashboard.generate_cleaning_task();
        if request.is_none() {
            let form = self.dashboard.cleaning_form();
            let missing: Vec<&str> = CleaningField::REQUIRED
                .into_iter()
                .filter(|field| form.field_invalid(*field))
                .map(CleaningField::error_message)
                .collect();
            self.status_message = missing.join(" ");
            return false;
        }
        self.dispatch(request);
        self.current_tab = Tab::Cleaning;
        self.status_message = "Generando tarea de limpieza...".to_string();
        true
    }

    pub(super) fn submit_token(&mut self, raw: &str) -> bool {
        let request = self.dashboard.apply_auth_token(raw);
        if request.is_none() {
            return false;
        }
        self.dispatch(request);
        self.status_message = "Token aplicado".to_string();
        true
    }

    pub(super) fn next_tab(&mut self) {
        self.current_tab = match self.current_tab {
            Tab::Tasks => Tab::Cleaning,
            Tab::Cleaning => Tab::Logs,
            Tab::Logs => Tab::Tasks,
        };
    }

    pub(super) fn set_tab(&mut self, tab: Tab) {
        self.current_tab = tab;
    }

    pub(super) fn move_selection(&mut self, delta: isize) {
        let (state, len) = match self.current_tab {
            Tab::Tasks => (&mut self.task_table, self.dashboard.tasks().len()),
            Tab::Cleaning => (
                &mut self.cleaning_table,
                self.dashboard.cleaning_tasks().len(),
            ),
            Tab::Logs => return,
        };
        if len == 0 {
            state.select(None);
            return;
        }
        let current = state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, (len - 1) as isize) as usize;
        state.select(Some(next));
    }
}

fn clamp_selection(state: &mut TableState, len: usize) {
    match (state.selected(), len) {
        (_, 0) => state.select(None),
        (None, _) => state.select(Some(0)),
        (Some(idx), len) if idx >= len => state.select(Some(len - 1)),
        _ => {}
    }
}
