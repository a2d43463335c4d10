/*
[INPUT]:  User actions (load, create, select status, update, generate, token) and call completions
[OUTPUT]: Dashboard state plus the network requests each action needs
[POS]:    Controller layer - single-writer state container for both panels
[UPDATE]: When adding operations or changing how responses merge into state
*/

pub mod dispatch;
pub mod errors;
pub mod forms;
pub mod records;

use std::collections::{HashMap, HashSet};

use housekeeping_adapter::{
    AccessToken, AutomaticCleaningTaskRequest, AutomaticCleaningTaskResponse, CreateTaskRequest,
    Task, TaskStatus,
};
use tracing::{debug, info, warn};

pub use dispatch::{Dispatcher, TaskDashboard};
pub use errors::{
    GENERIC_ERROR_MESSAGE, ServiceFailure, TOKEN_REQUIRED_MESSAGE, UNAUTHORIZED_MESSAGE,
    resolve_error_message, service_unavailable_message,
};
pub use forms::{CleaningField, CleaningForm, DEFAULT_NEW_ROOM_STATUS, TaskField, TaskForm};
pub use records::CleaningTaskRecord;

pub const TASK_CREATED_MESSAGE: &str = "Tarea creada correctamente.";
pub const STATUS_UPDATED_MESSAGE: &str = "Estado actualizado correctamente.";
pub const CLEANING_DEFAULT_MESSAGE: &str = "Tarea de limpieza obtenida correctamente.";
pub const CLEANING_FAILED_MESSAGE: &str = "No fue posible generar la tarea automática.";

/// Network call requested by a dispatched operation
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    LoadTasks { token: Option<AccessToken> },
    CreateTask(CreateTaskRequest),
    UpdateTask { task_id: String, payload: Task },
    GenerateCleaningTask(AutomaticCleaningTaskRequest),
}

impl Request {
    pub fn operation(&self) -> &'static str {
        match self {
            Request::LoadTasks { .. } => "load_tasks",
            Request::CreateTask(_) => "create_task",
            Request::UpdateTask { .. } => "update_task",
            Request::GenerateCleaningTask(_) => "generate_cleaning_task",
        }
    }
}

/// Outcome of a request, fed back through [`DashboardState::apply`]
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    TasksLoaded(Result<Vec<Task>, ServiceFailure>),
    TaskCreated(Result<Task, ServiceFailure>),
    TaskUpdated {
        task_id: String,
        result: Result<Task, ServiceFailure>,
    },
    CleaningTaskGenerated(Result<AutomaticCleaningTaskResponse, ServiceFailure>),
}

/// Construction options for [`DashboardState`]
#[derive(Debug, Clone, Default)]
pub struct DashboardOptions {
    /// Token-gated mode: listing is blocked until a token is applied
    pub require_token: bool,
    /// Port quoted in the "service unavailable" message
    pub service_port: Option<u16>,
    pub initial_token: Option<AccessToken>,
}

/// State of both panels.
///
/// Dispatch methods validate input, raise loading flags and return the
/// [`Request`] to execute; [`DashboardState::apply`] is the only place server
/// data enters the state.
#[derive(Debug, Clone)]
pub struct DashboardState {
    require_token: bool,
    service_port: Option<u16>,
    auth_token: Option<AccessToken>,
    token_error: Option<String>,

    tasks: Vec<Task>,
    status_selections: HashMap<String, TaskStatus>,
    task_loading: bool,
    task_error: Option<String>,

    task_form: TaskForm,
    task_creation_loading: bool,
    task_creation_error: Option<String>,
    task_creation_message: Option<String>,

    task_update_loading: HashSet<String>,
    task_update_error: Option<String>,
    task_update_message: Option<String>,

    cleaning_form: CleaningForm,
    cleaning_tasks: Vec<CleaningTaskRecord>,
    cleaning_loading: bool,
    cleaning_error: Option<String>,
    cleaning_message: Option<String>,

    revision: u64,
}

impl DashboardState {
    pub fn new(options: DashboardOptions) -> Self {
        Self {
            require_token: options.require_token,
            service_port: options.service_port,
            auth_token: options.initial_token,
            token_error: None,
            tasks: Vec::new(),
            status_selections: HashMap::new(),
            task_loading: false,
            task_error: None,
            task_form: TaskForm::new(),
            task_creation_loading: false,
            task_creation_error: None,
            task_creation_message: None,
            task_update_loading: HashSet::new(),
            task_update_error: None,
            task_update_message: None,
            cleaning_form: CleaningForm::new(),
            cleaning_tasks: Vec::new(),
            cleaning_loading: false,
            cleaning_error: None,
            cleaning_message: None,
            revision: 0,
        }
    }

    // ### Read access

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.task_id == task_id)
    }

    pub fn status_selections(&self) -> &HashMap<String, TaskStatus> {
        &self.status_selections
    }

    /// Status shown in a row's selector: the pending choice, else the current status
    pub fn selected_status(&self, task: &Task) -> TaskStatus {
        self.status_selections
            .get(&task.task_id)
            .copied()
            .unwrap_or(task.status)
    }

    pub fn task_loading(&self) -> bool {
        self.task_loading
    }

    pub fn task_error(&self) -> Option<&str> {
        self.task_error.as_deref()
    }

    pub fn task_form(&self) -> &TaskForm {
        &self.task_form
    }

    pub fn task_form_mut(&mut self) -> &mut TaskForm {
        self.bump_revision();
        &mut self.task_form
    }

    pub fn task_creation_loading(&self) -> bool {
        self.task_creation_loading
    }

    pub fn task_creation_error(&self) -> Option<&str> {
        self.task_creation_error.as_deref()
    }

    pub fn task_creation_message(&self) -> Option<&str> {
        self.task_creation_message.as_deref()
    }

    pub fn is_updating(&self, task_id: &str) -> bool {
        self.task_update_loading.contains(task_id)
    }

    pub fn any_update_in_flight(&self) -> bool {
        !self.task_update_loading.is_empty()
    }

    pub fn task_update_error(&self) -> Option<&str> {
        self.task_update_error.as_deref()
    }

    pub fn task_update_message(&self) -> Option<&str> {
        self.task_update_message.as_deref()
    }

    pub fn cleaning_form(&self) -> &CleaningForm {
        &self.cleaning_form
    }

    pub fn cleaning_form_mut(&mut self) -> &mut CleaningForm {
        self.bump_revision();
        &mut self.cleaning_form
    }

    pub fn cleaning_tasks(&self) -> &[CleaningTaskRecord] {
        &self.cleaning_tasks
    }

    pub fn cleaning_loading(&self) -> bool {
        self.cleaning_loading
    }

    pub fn cleaning_error(&self) -> Option<&str> {
        self.cleaning_error.as_deref()
    }

    pub fn cleaning_message(&self) -> Option<&str> {
        self.cleaning_message.as_deref()
    }

    pub fn require_token(&self) -> bool {
        self.require_token
    }

    pub fn has_token(&self) -> bool {
        self.auth_token.is_some()
    }

    pub fn token_error(&self) -> Option<&str> {
        self.token_error.as_deref()
    }

    /// Incremented on every mutation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether the update action for a row should be offered
    pub fn should_enable_update(&self, task_id: &str, current_status: TaskStatus) -> bool {
        if self.is_updating(task_id) {
            return false;
        }
        let selected = self
            .status_selections
            .get(task_id)
            .copied()
            .unwrap_or(current_status);
        selected != current_status
    }

    // ### Dispatch

    /// Start a full reload of the task collection
    pub fn load_tasks(&mut self) -> Option<Request> {
        if self.require_token && self.auth_token.is_none() {
            self.token_error = Some(TOKEN_REQUIRED_MESSAGE.to_string());
            self.bump_revision();
            debug!("task load blocked: no access token");
            return None;
        }

        self.task_loading = true;
        self.task_error = None;
        self.task_update_message = None;
        self.task_update_error = None;
        self.bump_revision();

        Some(Request::LoadTasks {
            token: self.auth_token.clone(),
        })
    }

    /// Store a trimmed token and reload; a blank token blocks loading
    pub fn apply_auth_token(&mut self, raw: &str) -> Option<Request> {
        match AccessToken::parse(raw) {
            Some(token) => {
                self.auth_token = Some(token);
                self.token_error = None;
                info!("access token applied");
                self.load_tasks()
            }
            None => {
                self.auth_token = None;
                self.token_error = Some(TOKEN_REQUIRED_MESSAGE.to_string());
                self.bump_revision();
                None
            }
        }
    }

    /// Submit the create-task form
    pub fn create_task(&mut self) -> Option<Request> {
        if !self.task_form.is_valid() {
            self.task_form.mark_all_touched();
            self.bump_revision();
            return None;
        }

        let request = self.task_form.to_request();
        self.task_creation_loading = true;
        self.task_creation_error = None;
        self.task_creation_message = None;
        self.task_update_message = None;
        self.task_update_error = None;
        self.bump_revision();

        Some(Request::CreateTask(request))
    }

    /// Record a provisional status for a row; no network call
    pub fn select_pending_status(&mut self, task_id: &str, status: TaskStatus) {
        self.status_selections.insert(task_id.to_string(), status);
        self.task_update_message = None;
        self.task_update_error = None;
        self.bump_revision();
    }

    /// Send the pending status of a row; no request when nothing changed
    pub fn update_task_status(&mut self, task_id: &str) -> Option<Request> {
        let task = self.task(task_id)?;
        let target = self.status_selections.get(task_id).copied()?;
        if target == task.status || self.is_updating(task_id) {
            return None;
        }

        let payload = task.with_status(target);
        self.task_update_loading.insert(task_id.to_string());
        self.task_update_error = None;
        self.task_update_message = None;
        self.bump_revision();

        Some(Request::UpdateTask {
            task_id: task_id.to_string(),
            payload,
        })
    }

    /// Submit the cleaning generator form
    pub fn generate_cleaning_task(&mut self) -> Option<Request> {
        if !self.cleaning_form.is_valid() {
            self.cleaning_form.mark_all_touched();
            self.bump_revision();
            return None;
        }

        let request = self.cleaning_form.to_request();
        self.cleaning_loading = true;
        self.cleaning_error = None;
        self.cleaning_message = None;
        self.bump_revision();

        Some(Request::GenerateCleaningTask(request))
    }

    // ### Completion

    pub fn apply(&mut self, completion: Completion) {
        match completion {
            Completion::TasksLoaded(result) => self.finish_load(result),
            Completion::TaskCreated(result) => self.finish_create(result),
            Completion::TaskUpdated { task_id, result } => self.finish_update(&task_id, result),
            Completion::CleaningTaskGenerated(result) => self.finish_generate(result),
        }
        self.bump_revision();
    }

    fn finish_load(&mut self, result: Result<Vec<Task>, ServiceFailure>) {
        self.task_loading = false;
        match result {
            Ok(tasks) => {
                info!(count = tasks.len(), "tasks loaded");
                self.tasks = tasks;
                self.rebuild_status_selections();
            }
            Err(failure) => {
                warn!(?failure, "task load failed");
                self.task_error = Some(self.resolve(&failure));
                self.tasks.clear();
                self.status_selections.clear();
            }
        }
    }

    fn finish_create(&mut self, result: Result<Task, ServiceFailure>) {
        self.task_creation_loading = false;
        match result {
            Ok(task) => {
                info!(task_id = %task.task_id, "task created");
                self.task_creation_message = Some(TASK_CREATED_MESSAGE.to_string());
                self.task_form.reset();
                self.tasks.insert(0, task);
                self.rebuild_status_selections();
            }
            Err(failure) => {
                warn!(?failure, "task creation failed");
                self.task_creation_error = Some(self.resolve(&failure));
            }
        }
    }

    fn finish_update(&mut self, task_id: &str, result: Result<Task, ServiceFailure>) {
        self.task_update_loading.remove(task_id);
        match result {
            Ok(updated) => {
                info!(task_id = %updated.task_id, status = %updated.status, "task status updated");
                self.task_update_message = Some(STATUS_UPDATED_MESSAGE.to_string());
                if let Some(entry) = self
                    .tasks
                    .iter_mut()
                    .find(|task| task.task_id == updated.task_id)
                {
                    entry.merge_from(&updated);
                }
                self.rebuild_status_selections();
            }
            Err(failure) => {
                warn!(task_id, ?failure, "task status update failed");
                self.task_update_error = Some(self.resolve(&failure));
            }
        }
    }

    fn finish_generate(&mut self, result: Result<AutomaticCleaningTaskResponse, ServiceFailure>) {
        self.cleaning_loading = false;
        match result {
            Ok(response) if response.success => {
                self.cleaning_message = Some(
                    response
                        .message
                        .clone()
                        .unwrap_or_else(|| CLEANING_DEFAULT_MESSAGE.to_string()),
                );
                let record = CleaningTaskRecord::from(response);
                info!(key = %record.display_key(), "cleaning task recorded");
                self.cleaning_tasks.insert(0, record);
            }
            Ok(response) => {
                warn!(error = ?response.error, "cleaning task rejected by service");
                self.cleaning_error = Some(
                    response
                        .error
                        .unwrap_or_else(|| CLEANING_FAILED_MESSAGE.to_string()),
                );
            }
            Err(failure) => {
                warn!(?failure, "cleaning task request failed");
                self.cleaning_error = Some(self.resolve(&failure));
            }
        }
    }

    fn rebuild_status_selections(&mut self) {
        self.status_selections = self
            .tasks
            .iter()
            .map(|task| (task.task_id.clone(), task.status))
            .collect();
    }

    fn resolve(&self, failure: &ServiceFailure) -> String {
        resolve_error_message(failure, self.service_port)
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(DashboardOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, status: TaskStatus) -> Task {
        Task {
            task_id: id.to_string(),
            description: format!("Inspeccionar {id}"),
            assigned_employee: "Ana Torres".to_string(),
            status,
            start_time: None,
            end_time: None,
        }
    }

    fn loaded_state(tasks: Vec<Task>) -> DashboardState {
        let mut state = DashboardState::new(DashboardOptions {
            service_port: Some(8081),
            ..Default::default()
        });
        assert!(state.load_tasks().is_some());
        state.apply(Completion::TasksLoaded(Ok(tasks)));
        state
    }

    #[test]
    fn test_load_mirrors_statuses_into_selections() {
        let state = loaded_state(vec![
            task("T1", TaskStatus::Pending),
            task("T2", TaskStatus::Completed),
            task("T3", TaskStatus::InProgress),
        ]);
        assert!(!state.task_loading());
        assert_eq!(state.status_selections().len(), 3);
        for task in state.tasks() {
            assert_eq!(state.status_selections()[&task.task_id], task.status);
        }
    }

    #[test]
    fn test_load_failure_clears_collection() {
        let mut state = loaded_state(vec![task("T1", TaskStatus::Pending)]);
        state.load_tasks();
        assert!(state.task_loading());
        state.apply(Completion::TasksLoaded(Err(ServiceFailure::Unreachable)));

        assert!(!state.task_loading());
        assert!(state.tasks().is_empty());
        assert!(state.status_selections().is_empty());
        assert_eq!(
            state.task_error(),
            Some("No fue posible conectar con el servicio. Asegúrate de que esté disponible en el puerto 8081.")
        );
    }

    #[test]
    fn test_create_with_missing_field_issues_no_request() {
        let mut state = DashboardState::default();
        state.task_form_mut().description = "Inspeccionar 205".to_string();

        assert!(state.create_task().is_none());
        assert!(!state.task_creation_loading());
        assert!(state.task_form().field_invalid(TaskField::AssignedEmployee));
        assert!(!state.task_form().field_invalid(TaskField::Description));
    }

    #[test]
    fn test_create_success_prepends_and_resets_form() {
        let mut state = loaded_state(vec![task("T0", TaskStatus::Completed)]);
        {
            let form = state.task_form_mut();
            form.description = "Inspeccionar 205".to_string();
            form.assigned_employee = "Ana Torres".to_string();
        }
        let request = state.create_task().expect("request");
        assert_eq!(
            request,
            Request::CreateTask(CreateTaskRequest {
                description: "Inspeccionar 205".to_string(),
                assigned_employee: "Ana Torres".to_string(),
                status: TaskStatus::Pending,
            })
        );
        assert!(state.task_creation_loading());

        state.apply(Completion::TaskCreated(Ok(task("T1", TaskStatus::Pending))));

        let ids: Vec<&str> = state.tasks().iter().map(|t| t.task_id.as_str()).collect();
        assert_eq!(ids, vec!["T1", "T0"]);
        assert_eq!(state.task_form(), &TaskForm::new());
        assert_eq!(state.task_creation_message(), Some(TASK_CREATED_MESSAGE));
        assert_eq!(state.status_selections().len(), 2);
        assert!(!state.task_creation_loading());
    }

    #[test]
    fn test_create_failure_keeps_collection_and_form() {
        let mut state = loaded_state(vec![task("T0", TaskStatus::Pending)]);
        {
            let form = state.task_form_mut();
            form.description = "Inspeccionar 205".to_string();
            form.assigned_employee = "Ana Torres".to_string();
        }
        state.create_task().expect("request");
        state.apply(Completion::TaskCreated(Err(ServiceFailure::Rejected {
            status: 400,
            message: Some("Empleado desconocido".to_string()),
        })));

        assert_eq!(state.tasks().len(), 1);
        assert_eq!(state.task_creation_error(), Some("Empleado desconocido"));
        assert_eq!(state.task_form().description, "Inspeccionar 205");
        assert!(!state.task_creation_loading());
    }

    #[test]
    fn test_update_is_noop_when_selection_matches() {
        let mut state = loaded_state(vec![task("T1", TaskStatus::Pending)]);
        assert!(!state.should_enable_update("T1", TaskStatus::Pending));
        assert!(state.update_task_status("T1").is_none());

        state.select_pending_status("T1", TaskStatus::Pending);
        assert!(state.update_task_status("T1").is_none());
        assert!(!state.is_updating("T1"));
    }

    #[test]
    fn test_update_merges_only_matching_row() {
        let mut state = loaded_state(vec![
            task("T1", TaskStatus::Pending),
            task("T2", TaskStatus::Pending),
        ]);
        let untouched = state.tasks()[1].clone();

        state.select_pending_status("T1", TaskStatus::InProgress);
        assert!(state.should_enable_update("T1", TaskStatus::Pending));
        let request = state.update_task_status("T1").expect("request");
        match &request {
            Request::UpdateTask { task_id, payload } => {
                assert_eq!(task_id, "T1");
                assert_eq!(payload.status, TaskStatus::InProgress);
                assert_eq!(payload.description, "Inspeccionar T1");
            }
            other => panic!("unexpected request {other:?}"),
        }
        assert!(state.is_updating("T1"));
        assert!(!state.should_enable_update("T1", TaskStatus::Pending));

        let mut returned = task("T1", TaskStatus::InProgress);
        returned.start_time = Some("2025-03-01T08:00:00".to_string());
        state.apply(Completion::TaskUpdated {
            task_id: "T1".to_string(),
            result: Ok(returned),
        });

        assert_eq!(state.tasks()[0].status, TaskStatus::InProgress);
        assert_eq!(state.tasks()[0].start_time.as_deref(), Some("2025-03-01T08:00:00"));
        assert_eq!(state.tasks()[1], untouched);
        assert_eq!(state.status_selections()["T1"], TaskStatus::InProgress);
        assert!(!state.is_updating("T1"));
        assert_eq!(state.task_update_message(), Some(STATUS_UPDATED_MESSAGE));
    }

    #[test]
    fn test_reopened_task_takes_null_end_time() {
        let mut finished = task("T1", TaskStatus::Completed);
        finished.end_time = Some("2025-03-01T09:00:00".to_string());
        let mut state = loaded_state(vec![finished]);

        state.select_pending_status("T1", TaskStatus::Pending);
        state.update_task_status("T1").expect("request");
        state.apply(Completion::TaskUpdated {
            task_id: "T1".to_string(),
            result: Ok(task("T1", TaskStatus::Pending)),
        });

        assert_eq!(state.tasks()[0].status, TaskStatus::Pending);
        assert_eq!(state.tasks()[0].end_time, None);
    }

    #[test]
    fn test_update_failure_leaves_collection() {
        let mut state = loaded_state(vec![task("T1", TaskStatus::Pending)]);
        state.select_pending_status("T1", TaskStatus::Completed);
        state.update_task_status("T1").expect("request");
        state.apply(Completion::TaskUpdated {
            task_id: "T1".to_string(),
            result: Err(ServiceFailure::Rejected {
                status: 500,
                message: None,
            }),
        });

        assert_eq!(state.tasks()[0].status, TaskStatus::Pending);
        assert_eq!(state.task_update_error(), Some(GENERIC_ERROR_MESSAGE));
        assert!(!state.is_updating("T1"));
        // the pending choice survives so the user can retry
        assert!(state.should_enable_update("T1", TaskStatus::Pending));
    }

    #[test]
    fn test_concurrent_updates_track_rows_separately() {
        let mut state = loaded_state(vec![
            task("T1", TaskStatus::Pending),
            task("T2", TaskStatus::Pending),
        ]);
        state.select_pending_status("T1", TaskStatus::Completed);
        state.select_pending_status("T2", TaskStatus::InProgress);
        state.update_task_status("T1").expect("T1 request");
        state.update_task_status("T2").expect("T2 request");
        assert!(state.is_updating("T1") && state.is_updating("T2"));

        state.apply(Completion::TaskUpdated {
            task_id: "T2".to_string(),
            result: Ok(task("T2", TaskStatus::InProgress)),
        });
        assert!(state.is_updating("T1"));
        assert!(!state.is_updating("T2"));
    }

    #[test]
    fn test_cleaning_success_prepends_one_record() {
        let mut state = DashboardState::default();
        {
            let form = state.cleaning_form_mut();
            form.hotel_name = "Hotel Central".to_string();
            form.room_code = "305".to_string();
        }
        state.generate_cleaning_task().expect("request");
        state.apply(Completion::CleaningTaskGenerated(Ok(AutomaticCleaningTaskResponse {
            success: true,
            message: Some("Tarea existente".to_string()),
            task_id: Some(3),
            ..Default::default()
        })));

        assert_eq!(state.cleaning_tasks().len(), 1);
        assert_eq!(state.cleaning_tasks()[0].message.as_deref(), Some("Tarea existente"));
        assert_eq!(state.cleaning_message(), Some("Tarea existente"));
        assert!(!state.cleaning_loading());
        // generator form is kept for repeated lookups
        assert_eq!(state.cleaning_form().hotel_name, "Hotel Central");
    }

    #[test]
    fn test_cleaning_success_without_message_uses_default() {
        let mut state = DashboardState::default();
        state.apply(Completion::CleaningTaskGenerated(Ok(AutomaticCleaningTaskResponse {
            success: true,
            ..Default::default()
        })));
        assert_eq!(state.cleaning_message(), Some(CLEANING_DEFAULT_MESSAGE));
    }

    #[test]
    fn test_cleaning_business_failure_keeps_log() {
        let mut state = DashboardState::default();
        state.apply(Completion::CleaningTaskGenerated(Ok(AutomaticCleaningTaskResponse {
            success: false,
            error: Some("Habitación ocupada".to_string()),
            ..Default::default()
        })));
        assert!(state.cleaning_tasks().is_empty());
        assert_eq!(state.cleaning_error(), Some("Habitación ocupada"));

        state.apply(Completion::CleaningTaskGenerated(Ok(AutomaticCleaningTaskResponse::default())));
        assert_eq!(state.cleaning_error(), Some(CLEANING_FAILED_MESSAGE));
    }

    #[test]
    fn test_cleaning_with_missing_fields_issues_no_request() {
        let mut state = DashboardState::default();
        state.cleaning_form_mut().hotel_name = "Hotel Central".to_string();
        assert!(state.generate_cleaning_task().is_none());
        assert!(state.cleaning_form().field_invalid(CleaningField::RoomCode));
        assert!(!state.cleaning_loading());
    }

    #[test]
    fn test_token_gate() {
        let mut state = DashboardState::new(DashboardOptions {
            require_token: true,
            ..Default::default()
        });
        assert!(state.load_tasks().is_none());
        assert_eq!(state.token_error(), Some(TOKEN_REQUIRED_MESSAGE));
        assert!(!state.task_loading());

        assert!(state.apply_auth_token("   ").is_none());
        assert!(!state.has_token());

        let request = state.apply_auth_token("  abc  ").expect("request");
        assert_eq!(
            request,
            Request::LoadTasks {
                token: AccessToken::parse("abc"),
            }
        );
        assert!(state.token_error().is_none());
        assert!(state.task_loading());
    }

    #[test]
    fn test_unauthorized_load() {
        let mut state = DashboardState::new(DashboardOptions {
            require_token: true,
            initial_token: AccessToken::parse("stale"),
            ..Default::default()
        });
        state.load_tasks().expect("request");
        state.apply(Completion::TasksLoaded(Err(ServiceFailure::Unauthorized)));
        assert_eq!(state.task_error(), Some(UNAUTHORIZED_MESSAGE));
    }

    #[test]
    fn test_revision_advances_on_mutation() {
        let mut state = DashboardState::default();
        let before = state.revision();
        state.select_pending_status("T1", TaskStatus::Completed);
        assert!(state.revision() > before);
    }
}
