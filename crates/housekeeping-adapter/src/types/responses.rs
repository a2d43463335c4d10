/*
[INPUT]:  Task Service API schema and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Answer of the automatic cleaning endpoint; every field but `success` may be missing or null
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AutomaticCleaningTaskResponse {
    pub success: bool,
    pub message: Option<String>,
    pub task_id: Option<i64>,
    pub hotel_name: Option<String>,
    pub room_code: Option<String>,
    pub description: Option<String>,
    pub assigned_to: Option<String>,
    pub estimated_minutes: Option<i64>,
    pub status: Option<String>,
    pub created_at: Option<String>,
    pub error: Option<String>,
}
