//! Infrastructure adapters for declgen.
//!
//! This crate implements the ports defined in `declgen-core::application::ports`.
//! It owns the template engine, the built-in templates and filesystem access.

pub mod builtin_templates;
pub mod renderer;
pub mod template_loader;
pub mod template_set;

// Re-export commonly used adapters
pub use builtin_templates::{builtin_set, resolve};
pub use renderer::TeraRenderer;
pub use template_loader::FilesystemTemplateLoader;
pub use template_set::TemplateSet;
