/*
[INPUT]:  Successful automatic cleaning responses
[OUTPUT]: Immutable log entries shown in the cleaning panel
[POS]:    Controller layer - cleaning log view type
[UPDATE]: When the cleaning response gains displayed fields
*/

use housekeeping_adapter::AutomaticCleaningTaskResponse;

/// One successful call to the automatic cleaning endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleaningTaskRecord {
    pub task_id: Option<i64>,
    pub hotel_name: Option<String>,
    pub room_code: Option<String>,
    pub description: Option<String>,
    pub assigned_to: Option<String>,
    pub estimated_minutes: Option<i64>,
    pub status: Option<String>,
    pub created_at: Option<String>,
    pub message: Option<String>,
}

impl CleaningTaskRecord {
    /// Stable identity for rendering: the task id, else hotel-room-creation
    pub fn display_key(&self) -> String {
        match self.task_id {
            Some(task_id) => task_id.to_string(),
            None => format!(
                "{}-{}-{}",
                self.hotel_name.as_deref().unwrap_or_default(),
                self.room_code.as_deref().unwrap_or_default(),
                self.created_at.as_deref().unwrap_or_default()
            ),
        }
    }
}

impl From<AutomaticCleaningTaskResponse> for CleaningTaskRecord {
    fn from(response: AutomaticCleaningTaskResponse) -> Self {
        Self {
            task_id: response.task_id,
            hotel_name: response.hotel_name,
            room_code: response.room_code,
            description: response.description,
            assigned_to: response.assigned_to,
            estimated_minutes: response.estimated_minutes,
            status: response.status,
            created_at: response.created_at,
            message: response.message,
        }
    }
}
