/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for housekeeping-adapter tests

use housekeeping_adapter::{ClientConfig, HousekeepingClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server
pub fn client_for(server: &MockServer) -> HousekeepingClient {
    HousekeepingClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client init")
}

/// Task body as the service returns it
#[allow(dead_code)]
pub fn task_json(task_id: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "taskId": task_id,
        "description": format!("Inspeccionar {task_id}"),
        "assignedEmployee": "Ana Torres",
        "status": status,
        "startTime": null,
        "endTime": null,
    })
}

/// Mock access token for testing
#[allow(dead_code)]
pub fn mock_access_token() -> String {
    "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.test.signature".to_string()
}
