//! Core domain layer for declgen.
//!
//! Interfaces, declaration contexts and validation grammars. Pure logic: no
//! I/O, no template engine, no subscriber installation.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: everything is synchronous
//! - **No I/O**: rendering and output happen behind application ports
//! - **One-shot contexts**: a context is prepared once, then only read

pub mod contexts;
pub mod error;
pub mod header;
pub mod interface;
pub mod validation;

pub use contexts::{
    AppContext, As3Context, CfeContext, CloudConfigContext, ContextPreparer, Declaration,
    DoContext, FailoverRoute, LicenseMode, Licensing, RuntimeInitContext, TsContext,
    declaration_id,
};
pub use error::{DomainError, DomainResult, ErrorCategory};
pub use header::Header;
pub use interface::{
    Addressing, Interface, InterfaceBuilder, placeholder_interface, static_interface,
};
pub use validation::{
    matches_id, matches_label, matches_name, matches_remark, validate_id, validate_label,
    validate_remark, validate_tenant,
};
