/*
[INPUT]:  Raw field values typed by the user
[OUTPUT]: Field-level validity, touched tracking and request payloads
[POS]:    Controller layer - form state for task creation and cleaning generation
[UPDATE]: When adding form fields or validation rules
*/

use std::collections::HashSet;

use housekeeping_adapter::{AutomaticCleaningTaskRequest, CreateTaskRequest, TaskStatus};

/// Room status sent after checkout; read-only in the generator form
pub const DEFAULT_NEW_ROOM_STATUS: &str = "Disponible";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskField {
    Description,
    AssignedEmployee,
}

impl TaskField {
    pub const REQUIRED: [TaskField; 2] = [TaskField::Description, TaskField::AssignedEmployee];

    pub fn label(self) -> &'static str {
        match self {
            TaskField::Description => "Descripción",
            TaskField::AssignedEmployee => "Empleado asignado",
        }
    }

    pub fn error_message(self) -> &'static str {
        match self {
            TaskField::Description => "La descripción es obligatoria.",
            TaskField::AssignedEmployee => "Debes especificar a quién asignas la tarea.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CleaningField {
    HotelName,
    RoomCode,
}

impl CleaningField {
    pub const REQUIRED: [CleaningField; 2] = [CleaningField::HotelName, CleaningField::RoomCode];

    pub fn label(self) -> &'static str {
        match self {
            CleaningField::HotelName => "Hotel",
            CleaningField::RoomCode => "Habitación",
        }
    }

    pub fn error_message(self) -> &'static str {
        match self {
            CleaningField::HotelName => "El nombre del hotel es obligatorio.",
            CleaningField::RoomCode => "El código de habitación es obligatorio.",
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Create-task form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub description: String,
    pub assigned_employee: String,
    pub status: TaskStatus,
    touched: HashSet<TaskField>,
}

impl TaskForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: TaskField) -> &str {
        match field {
            TaskField::Description => &self.description,
            TaskField::AssignedEmployee => &self.assigned_employee,
        }
    }

    /// Fields whose current value is invalid
    pub fn validate(&self) -> HashSet<TaskField> {
        TaskField::REQUIRED
            .into_iter()
            .filter(|field| is_blank(self.value(*field)))
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Mark a field as visited (blur)
    pub fn touch(&mut self, field: TaskField) {
        self.touched.insert(field);
    }

    pub fn mark_all_touched(&mut self) {
        self.touched.extend(TaskField::REQUIRED);
    }

    pub fn is_touched(&self, field: TaskField) -> bool {
        self.touched.contains(&field)
    }

    /// Invalid fields are only reported once the user visited them
    pub fn field_invalid(&self, field: TaskField) -> bool {
        self.is_touched(field) && is_blank(self.value(field))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_request(&self) -> CreateTaskRequest {
        CreateTaskRequest {
            description: self.description.trim().to_string(),
            assigned_employee: self.assigned_employee.trim().to_string(),
            status: self.status,
        }
    }
}

/// Automatic cleaning generator form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleaningForm {
    pub hotel_name: String,
    pub room_code: String,
    pub new_status: String,
    touched: HashSet<CleaningField>,
}

impl Default for CleaningForm {
    fn default() -> Self {
        Self {
            hotel_name: String::new(),
            room_code: String::new(),
            new_status: DEFAULT_NEW_ROOM_STATUS.to_string(),
            touched: HashSet::new(),
        }
    }
}

impl CleaningForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: CleaningField) -> &str {
        match field {
            CleaningField::HotelName => &self.hotel_name,
            CleaningField::RoomCode => &self.room_code,
        }
    }

    pub fn validate(&self) -> HashSet<CleaningField> {
        CleaningField::REQUIRED
            .into_iter()
            .filter(|field| is_blank(self.value(*field)))
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    pub fn touch(&mut self, field: CleaningField) {
        self.touched.insert(field);
    }

    pub fn mark_all_touched(&mut self) {
        self.touched.extend(CleaningField::REQUIRED);
    }

    pub fn is_touched(&self, field: CleaningField) -> bool {
        self.touched.contains(&field)
    }

    pub fn field_invalid(&self, field: CleaningField) -> bool {
        self.is_touched(field) && is_blank(self.value(field))
    }

    pub fn to_request(&self) -> AutomaticCleaningTaskRequest {
        let new_status = if is_blank(&self.new_status) {
            DEFAULT_NEW_ROOM_STATUS.to_string()
        } else {
            self.new_status.trim().to_string()
        };
        AutomaticCleaningTaskRequest {
            hotel_name: self.hotel_name.trim().to_string(),
            room_code: self.room_code.trim().to_string(),
            new_status,
        }
    }
}
