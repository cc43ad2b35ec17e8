pub mod dto;
pub mod handlers;
pub mod models;
pub mod service;

// Re-export commonly used types
pub use models::{ApplicationForm, ApplicationUpload, NewApplication};
pub use service::{ApplicationService, ServiceError, WriteStep};
