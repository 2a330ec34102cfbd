//! Command handlers.
//!
//! Each handler translates parsed arguments into core calls and reports the
//! outcome.  No rendering logic lives here.

pub mod bigip;
pub mod completions;
pub mod config;
pub mod init;
