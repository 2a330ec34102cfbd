//! Template rendering adapters.

pub mod helpers;
mod tera_renderer;

pub use tera_renderer::{INCLUDE_FUNCTION, TeraRenderer};
