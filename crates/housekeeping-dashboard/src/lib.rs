/*
[INPUT]:  Public API exports for housekeeping-dashboard crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod controller;
pub mod format;
pub mod logging;

// Re-export main types for convenience
pub use config::DashboardConfig;
pub use controller::{
    Completion, DashboardOptions, DashboardState, Dispatcher, Request, ServiceFailure,
    TaskDashboard,
};
pub use logging::{LogBuffer, LogBufferHandle, LogTarget, init_tracing};
