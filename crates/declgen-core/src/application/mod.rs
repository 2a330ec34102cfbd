//! Application layer for declgen.
//!
//! This layer contains:
//! - **Services**: use case orchestration (Generator)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{Generator, MAX_INTERFACE_COUNT, MIN_INTERFACE_COUNT};

// Re-export port traits (for adapter implementation)
pub use ports::TemplateRenderer;

pub use error::ApplicationError;
