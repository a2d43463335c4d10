/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for HTTP client
[POS]:    Integration tests - HTTP endpoints
[UPDATE]: When HTTP endpoints change
*/

mod common;

use common::{client_for, setup_mock_server, task_json};
use housekeeping_adapter::{
    AutomaticCleaningTaskRequest, ClientConfig, CreateTaskRequest, HousekeepingClient,
    HousekeepingError, TaskStatus,
};
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_client_creation() {
    let _client = assert_ok!(HousekeepingClient::new());
}

#[test]
fn test_client_with_config() {
    let config = ClientConfig::default();
    let _client = assert_ok!(HousekeepingClient::with_config(config));
}

#[tokio::test]
async fn test_list_tasks() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/tasks/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            task_json("T1", "Pendiente"),
            task_json("T2", "En progreso"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let tasks = assert_ok!(client_for(&server).list_tasks(None).await);
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].task_id, "T1");
    assert_eq!(tasks[1].status, TaskStatus::InProgress);
}

#[tokio::test]
async fn test_create_task() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/tasks/create"))
        .and(body_json(serde_json::json!({
            "description": "Inspeccionar 205",
            "assignedEmployee": "Ana Torres",
            "status": "Pendiente",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "taskId": "T1",
            "description": "Inspeccionar 205",
            "assignedEmployee": "Ana Torres",
            "status": "Pendiente",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = CreateTaskRequest {
        description: "Inspeccionar 205".to_string(),
        assigned_employee: "Ana Torres".to_string(),
        status: TaskStatus::Pending,
    };
    let task = assert_ok!(client_for(&server).create_task(&request).await);
    assert_eq!(task.task_id, "T1");
    assert_eq!(task.assigned_employee, "Ana Torres");
    assert!(task.start_time.is_none());
}

#[tokio::test]
async fn test_generate_cleaning_task() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/automatic-cleaning-tasks"))
        .and(body_json(serde_json::json!({
            "hotelName": "Hotel Central",
            "roomCode": "305",
            "newStatus": "Disponible",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "success": true,
            "message": "Tarea generada",
            "taskId": 7,
            "hotelName": "Hotel Central",
            "roomCode": "305",
            "estimatedMinutes": 30,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = AutomaticCleaningTaskRequest {
        hotel_name: "Hotel Central".to_string(),
        room_code: "305".to_string(),
        new_status: "Disponible".to_string(),
    };
    let response = assert_ok!(client_for(&server).generate_cleaning_task(&request).await);
    assert!(response.success);
    assert_eq!(response.task_id, Some(7));
    assert_eq!(response.message.as_deref(), Some("Tarea generada"));
}

#[tokio::test]
async fn test_error_status_carries_body_message() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/tasks/create"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "status": 400,
            "error": "Bad Request",
            "message": "La descripción es obligatoria",
        })))
        .mount(&server)
        .await;

    let request = CreateTaskRequest {
        description: String::new(),
        assigned_employee: "Ana Torres".to_string(),
        status: TaskStatus::Pending,
    };
    let err = client_for(&server)
        .create_task(&request)
        .await
        .expect_err("400 should fail");
    assert_eq!(err.status_code(), Some(400));
    assert_eq!(err.body_message(), Some("La descripción es obligatoria"));
}

#[tokio::test]
async fn test_malformed_success_body_is_serialization_error() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/tasks/all"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{not json", "application/json"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .list_tasks(None)
        .await
        .expect_err("malformed body should fail");
    assert!(matches!(err, HousekeepingError::Serialization(_)));
}

#[tokio::test]
async fn test_unreachable_service() {
    // Bind then drop a listener so its port refuses connections
    let uri = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        format!("http://{}", listener.local_addr().expect("local addr"))
    };
    let client = assert_ok!(HousekeepingClient::with_config_and_base_url(
        ClientConfig::default(),
        &uri
    ));

    let err = client.list_tasks(None).await.expect_err("closed port should fail");
    assert!(err.is_unreachable());
    assert_eq!(err.status_code(), None);
}
