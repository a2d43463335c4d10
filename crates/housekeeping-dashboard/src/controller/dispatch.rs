/*
[INPUT]:  Requests produced by DashboardState and a TaskService implementation
[OUTPUT]: Completions for DashboardState::apply, plus an async facade over both
[POS]:    Controller layer - executes Task Service calls outside the state lock
[UPDATE]: When adding requests or changing how results are reported
*/

use std::sync::Arc;

use housekeeping_adapter::{AccessToken, TaskService, TaskStatus};
use tokio::sync::{Mutex, watch};
use tracing::{debug, warn};

use super::{Completion, DashboardOptions, DashboardState, Request, ServiceFailure};

/// Executes requests against a [`TaskService`]
#[derive(Clone)]
pub struct Dispatcher {
    service: Arc<dyn TaskService>,
}

impl Dispatcher {
    pub fn new(service: Arc<dyn TaskService>) -> Self {
        Self { service }
    }

    /// Port named in the "service unavailable" message
    pub fn service_port(&self) -> Option<u16> {
        self.service.base_url().port_or_known_default()
    }

    pub async fn execute(&self, request: Request) -> Completion {
        let operation = request.operation();
        debug!(operation, "dispatching request");

        let completion = match request {
            Request::LoadTasks { token } => Completion::TasksLoaded(
                self.service
                    .list_tasks(token.as_ref())
                    .await
                    .map_err(ServiceFailure::from),
            ),
            Request::CreateTask(req) => Completion::TaskCreated(
                self.service
                    .create_task(&req)
                    .await
                    .map_err(ServiceFailure::from),
            ),
            Request::UpdateTask { task_id, payload } => {
                let result = self
                    .service
                    .update_task(&task_id, &payload)
                    .await
                    .map_err(ServiceFailure::from);
                Completion::TaskUpdated { task_id, result }
            }
            Request::GenerateCleaningTask(req) => Completion::CleaningTaskGenerated(
                self.service
                    .generate_cleaning_task(&req)
                    .await
                    .map_err(ServiceFailure::from),
            ),
        };

        if let Some(failure) = completion.failure() {
            warn!(operation, ?failure, "request failed");
        }
        completion
    }
}

impl Completion {
    pub fn failure(&self) -> Option<&ServiceFailure> {
        match self {
            Completion::TasksLoaded(Err(failure))
            | Completion::TaskCreated(Err(failure))
            | Completion::TaskUpdated {
                result: Err(failure),
                ..
            }
            | Completion::CleaningTaskGenerated(Err(failure)) => Some(failure),
            _ => None,
        }
    }
}

/// Async controller: owns the state and awaits each call to completion.
///
/// The state lock is never held across a network call, so overlapping
/// operations (e.g. updates on two rows) interleave the way the UI does.
/// Subscribers are notified with the new revision after every mutation.
pub struct TaskDashboard {
    state: Mutex<DashboardState>,
    dispatcher: Dispatcher,
    revisions: watch::Sender<u64>,
}

impl TaskDashboard {
    pub fn new(service: Arc<dyn TaskService>, require_token: bool) -> Self {
        Self::with_token(service, require_token, None)
    }

    pub fn with_token(
        service: Arc<dyn TaskService>,
        require_token: bool,
        initial_token: Option<AccessToken>,
    ) -> Self {
        let dispatcher = Dispatcher::new(service);
        let state = DashboardState::new(DashboardOptions {
            require_token,
            service_port: dispatcher.service_port(),
            initial_token,
        });
        let (revisions, _) = watch::channel(state.revision());
        Self {
            state: Mutex::new(state),
            dispatcher,
            revisions,
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revisions.subscribe()
    }

    /// Clone of the current state
    pub async fn snapshot(&self) -> DashboardState {
        self.state.lock().await.clone()
    }

    /// Mutate the state in place (form editing) and notify subscribers
    pub async fn update<R>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> R {
        let mut state = self.state.lock().await;
        let out = f(&mut state);
        self.revisions.send_replace(state.revision());
        out
    }

    pub async fn load_tasks(&self) {
        let request = self.update(DashboardState::load_tasks).await;
        self.run(request).await;
    }

    pub async fn apply_auth_token(&self, raw: &str) {
        let request = self.update(|state| state.apply_auth_token(raw)).await;
        self.run(request).await;
    }

    /// Fill the create form and submit it
    pub async fn create_task(&self, description: &str, assigned_employee: &str, status: TaskStatus) {
        let request = self
            .update(|state| {
                let form = state.task_form_mut();
                form.description = description.to_string();
                form.assigned_employee = assigned_employee.to_string();
                form.status = status;
                state.create_task()
            })
            .await;
        self.run(request).await;
    }

    pub async fn select_pending_status(&self, task_id: &str, status: TaskStatus) {
        self.update(|state| state.select_pending_status(task_id, status))
            .await;
    }

    pub async fn update_task_status(&self, task_id: &str) {
        let request = self.update(|state| state.update_task_status(task_id)).await;
        self.run(request).await;
    }

    /// Fill the cleaning form and submit it
    pub async fn generate_cleaning_task(&self, hotel_name: &str, room_code: &str) {
        let request = self
            .update(|state| {
                let form = state.cleaning_form_mut();
                form.hotel_name = hotel_name.to_string();
                form.room_code = room_code.to_string();
                state.generate_cleaning_task()
            })
            .await;
        self.run(request).await;
    }

    async fn run(&self, request: Option<Request>) {
        let Some(request) = request else {
            return;
        };
        let completion = self.dispatcher.execute(request).await;
        self.update(|state| state.apply(completion)).await;
    }
}
