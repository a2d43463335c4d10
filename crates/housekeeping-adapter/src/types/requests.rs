/*
[INPUT]:  Task Service API schema and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::enums::TaskStatus;

/// Body of POST /tasks/create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub description: String,
    pub assigned_employee: String,
    pub status: TaskStatus,
}

/// Body of POST /api/v1/automatic-cleaning-tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomaticCleaningTaskRequest {
    pub hotel_name: String,
    pub room_code: String,
    /// Room status after checkout
    pub new_status: String,
}
