/*
[INPUT]:  Task Service API schema and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::enums::TaskStatus;

/// Housekeeping task as stored by the Task Service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub task_id: String,
    pub description: String,
    pub assigned_employee: String,
    pub status: TaskStatus,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
}

impl Task {
    /// Copy of this task carrying a different status; the update payload
    pub fn with_status(&self, status: TaskStatus) -> Task {
        Task {
            status,
            ..self.clone()
        }
    }

    /// Overlay fields returned by the service onto this entry.
    ///
    /// A null timestamp in the response clears the local one.
    pub fn merge_from(&mut self, update: &Task) {
        self.description = update.description.clone();
        self.assigned_employee = update.assigned_employee.clone();
        self.status = update.status;
        self.start_time = update.start_time.clone();
        self.end_time = update.end_time.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task() -> Task {
        Task {
            task_id: "T1".to_string(),
            description: "Inspeccionar 205".to_string(),
            assigned_employee: "Ana Torres".to_string(),
            status: TaskStatus::Pending,
            start_time: Some("2025-03-01T08:00:00".to_string()),
            end_time: None,
        }
    }

    #[test]
    fn test_task_deserializes_camel_case_with_nulls() {
        let json = r#"{
            "taskId": "T1",
            "description": "Inspeccionar 205",
            "assignedEmployee": "Ana Torres",
            "status": "Pendiente",
            "startTime": null
        }"#;
        let parsed: Task = serde_json::from_str(json).expect("deserialize");
        assert_eq!(parsed.task_id, "T1");
        assert_eq!(parsed.status, TaskStatus::Pending);
        assert!(parsed.start_time.is_none());
        assert!(parsed.end_time.is_none());
    }

    #[test]
    fn test_merge_takes_response_timestamps() {
        let mut local = task();
        let update = Task {
            status: TaskStatus::Completed,
            end_time: Some("2025-03-01T09:30:00".to_string()),
            ..task()
        };
        local.merge_from(&update);
        assert_eq!(local.status, TaskStatus::Completed);
        assert_eq!(local.start_time.as_deref(), Some("2025-03-01T08:00:00"));
        assert_eq!(local.end_time.as_deref(), Some("2025-03-01T09:30:00"));
    }

    #[test]
    fn test_merge_null_end_time_clears_reopened_task() {
        let mut local = Task {
            status: TaskStatus::Completed,
            end_time: Some("2025-03-01T09:00:00".to_string()),
            ..task()
        };
        let update = Task {
            status: TaskStatus::Pending,
            end_time: None,
            ..task()
        };
        local.merge_from(&update);
        assert_eq!(local.status, TaskStatus::Pending);
        assert_eq!(local.end_time, None);
    }

    #[test]
    fn test_unknown_status_row_still_decodes() {
        let json = r#"[
            {"taskId": "T1", "description": "a", "assignedEmployee": "b", "status": "Pendiente"},
            {"taskId": "T2", "description": "c", "assignedEmployee": "d", "status": "Archivada"}
        ]"#;
        let parsed: Vec<Task> = serde_json::from_str(json).expect("deserialize");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].status, TaskStatus::Unknown);
    }

    #[test]
    fn test_with_status_keeps_other_fields() {
        let payload = task().with_status(TaskStatus::InProgress);
        assert_eq!(payload.status, TaskStatus::InProgress);
        assert_eq!(payload.assigned_employee, "Ana Torres");
        let json = serde_json::to_value(&payload).expect("serialize");
        assert_eq!(json["status"], "En progreso");
        assert_eq!(json["taskId"], "T1");
    }
}
