/*
[INPUT]:  Task Service operations used by dashboard controllers
[OUTPUT]: Object-safe async trait plus the HTTP implementation
[POS]:    Service seam - lets callers swap the HTTP client for a stub
[UPDATE]: When adding Task Service operations
*/

use async_trait::async_trait;
use reqwest::Url;

use crate::auth::AccessToken;
use crate::http::{HousekeepingClient, Result};
use crate::types::{
    AutomaticCleaningTaskRequest, AutomaticCleaningTaskResponse, CreateTaskRequest, Task,
};

/// Operations offered by the Task Service API
#[async_trait]
pub trait TaskService: Send + Sync {
    /// Base URL the service is reached at; used to word connectivity errors
    fn base_url(&self) -> &Url;

    async fn list_tasks(&self, token: Option<&AccessToken>) -> Result<Vec<Task>>;

    async fn create_task(&self, req: &CreateTaskRequest) -> Result<Task>;

    async fn update_task(&self, task_id: &str, task: &Task) -> Result<Task>;

    async fn generate_cleaning_task(
        &self,
        req: &AutomaticCleaningTaskRequest,
    ) -> Result<AutomaticCleaningTaskResponse>;
}

#[async_trait]
impl TaskService for HousekeepingClient {
    fn base_url(&self) -> &Url {
        HousekeepingClient::base_url(self)
    }

    async fn list_tasks(&self, token: Option<&AccessToken>) -> Result<Vec<Task>> {
        HousekeepingClient::list_tasks(self, token).await
    }

    async fn create_task(&self, req: &CreateTaskRequest) -> Result<Task> {
        HousekeepingClient::create_task(self, req).await
    }

    async fn update_task(&self, task_id: &str, task: &Task) -> Result<Task> {
        HousekeepingClient::update_task(self, task_id, task).await
    }

    async fn generate_cleaning_task(
        &self,
        req: &AutomaticCleaningTaskRequest,
    ) -> Result<AutomaticCleaningTaskResponse> {
        HousekeepingClient::generate_cleaning_task(self, req).await
    }
}
