/*
[INPUT]:  Task Service API schema and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle status of a housekeeping task, serialized with the service's labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "Pendiente")]
    Pending,
    #[serde(rename = "En progreso")]
    InProgress,
    #[serde(rename = "Completada")]
    Completed,
    /// Any label this client does not know; keeps one odd row from failing a list
    #[serde(other, rename = "Desconocido")]
    Unknown,
}

impl TaskStatus {
    /// Options in the order they are offered to the user
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pendiente",
            TaskStatus::InProgress => "En progreso",
            TaskStatus::Completed => "Completada",
            TaskStatus::Unknown => "Desconocido",
        }
    }

    /// Next option, wrapping around
    pub fn next(self) -> Self {
        match self {
            TaskStatus::Pending => TaskStatus::InProgress,
            TaskStatus::InProgress => TaskStatus::Completed,
            TaskStatus::Completed | TaskStatus::Unknown => TaskStatus::Pending,
        }
    }

    /// Previous option, wrapping around
    pub fn previous(self) -> Self {
        match self {
            TaskStatus::Pending | TaskStatus::Unknown => TaskStatus::Completed,
            TaskStatus::InProgress => TaskStatus::Pending,
            TaskStatus::Completed => TaskStatus::InProgress,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTaskStatusError(pub String);

impl fmt::Display for ParseTaskStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown task status '{}' (expected Pendiente, En progreso or Completada)",
            self.0
        )
    }
}

impl std::error::Error for ParseTaskStatusError {}

impl FromStr for TaskStatus {
    type Err = ParseTaskStatusError;

    /// Accepts the service labels (case-insensitive) and ASCII aliases for shells.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "pendiente" | "pending" => Ok(TaskStatus::Pending),
            "en progreso" | "in progress" => Ok(TaskStatus::InProgress),
            "completada" | "completed" | "done" => Ok(TaskStatus::Completed),
            _ => Err(ParseTaskStatusError(value.to_string())),
        }
    }
}
