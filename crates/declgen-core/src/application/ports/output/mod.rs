//! Driven (output) ports - implemented by infrastructure.
//!
//! The `declgen-adapters` crate provides the implementations.

use std::io::Write;

use serde_json::Value;

use crate::error::DeclgenResult;

/// Port for template rendering.
///
/// Implemented by:
/// - `declgen_adapters::renderer::TeraRenderer` (embedded or on-disk template set)
///
/// ## Design Notes
///
/// - The render root arrives already serialized; adapters never see domain types
/// - Output streams straight into `sink`; a failure mid-render leaves the
///   bytes written so far in place
pub trait TemplateRenderer: Send + Sync {
    /// Whether `name` is one of the loaded templates.
    fn has_template(&self, name: &str) -> bool;

    /// Render template `name` against `context`, writing into `sink`.
    fn render(&self, name: &str, context: &Value, sink: &mut dyn Write) -> DeclgenResult<()>;
}
