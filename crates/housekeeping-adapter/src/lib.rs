/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Task Service adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod service;
pub mod types;

pub use auth::AccessToken;

// Re-export commonly used types from http
pub use http::{
    ApiErrorBody,
    ClientConfig,
    DEFAULT_BASE_URL,
    HousekeepingClient,
    HousekeepingError,
    Result,
};

pub use service::TaskService;

// Re-export all types
pub use types::*;
