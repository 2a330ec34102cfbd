//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "render this declaration".

pub mod generator;

pub use generator::{Generator, MAX_INTERFACE_COUNT, MIN_INTERFACE_COUNT};
