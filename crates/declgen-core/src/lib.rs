//! declgen core - hexagonal architecture implementation
//!
//! This crate provides the domain and application layers of the BIG-IP
//! declaration generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           declgen-cli (CLI)             │
//! │   builds contexts from flags/config     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │              (Generator)                │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │          (TemplateRenderer)             │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    declgen-adapters (Infrastructure)    │
//! │   (TeraRenderer, embedded templates)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Interface, contexts, AS3 grammars)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use declgen_core::prelude::*;
//!
//! # fn run(renderer: Box<dyn TemplateRenderer>) -> DeclgenResult<()> {
//! let mut context = DoContext::default();
//! context.with_reg_key_licensing("AAAAA-BBBBB-CCCCC-DDDDD-EEEEEEE")?;
//!
//! let generator = Generator::new(renderer);
//! generator.generate(context, 3, &mut std::io::stdout())?;
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{Generator, ports::TemplateRenderer};
    pub use crate::domain::{
        AppContext, As3Context, CfeContext, CloudConfigContext, ContextPreparer, Declaration,
        DoContext, FailoverRoute, Header, Interface, RuntimeInitContext, TsContext,
        placeholder_interface, static_interface,
    };
    pub use crate::error::{DeclgenError, DeclgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
