//! Declaration contexts.
//!
//! One context per extension. Each is built with versioned defaults, mutated
//! by the caller, then consumed exactly once by its [`ContextPreparer`], which
//! attaches the synthesized interfaces and hands the finished tree to the
//! renderer. Composite contexts own their children outright; interfaces flow
//! parent to child only.

pub mod app;
pub mod as3;
pub mod cfe;
pub mod cloud_config;
pub mod onboarding;
pub mod runtime_init;
pub mod telemetry;

use serde::Serialize;
use uuid::Uuid;

use super::error::DomainResult;
use super::interface::Interface;

pub use app::AppContext;
pub use as3::As3Context;
pub use cfe::{CfeContext, FailoverRoute};
pub use cloud_config::CloudConfigContext;
pub use onboarding::{DoContext, LicenseMode, Licensing};
pub use runtime_init::RuntimeInitContext;
pub use telemetry::TsContext;

/// Label written into AS3 and DO declarations unless overridden.
pub const DEFAULT_LABEL: &str = "f5-google-declaration-generator";

/// Finalizes a context with the interface sequence and returns the render root.
///
/// `FnOnce`: a context is prepared exactly once and then only read.
pub type ContextPreparer<C> = Box<dyn FnOnce(Vec<Interface>) -> DomainResult<C> + Send>;

/// A context that can be rendered by one of the main templates.
pub trait Declaration: Serialize + Sized + Send + 'static {
    /// Main template name within the template set.
    const TEMPLATE: &'static str;

    /// Interfaces attached by the last preparation (empty before).
    fn interfaces(&self) -> &[Interface];

    /// Attach `interfaces` to this context and every owned child.
    fn attach_interfaces(&mut self, interfaces: &[Interface]);

    fn context_preparer(self) -> ContextPreparer<Self> {
        Box::new(move |interfaces| {
            let mut context = self;
            context.attach_interfaces(&interfaces);
            Ok(context)
        })
    }
}

/// Deterministic declaration id: UUID v5 of `url` in the URL namespace.
pub fn declaration_id(url: &str) -> String {
    Uuid::new_v5(&Uuid::NAMESPACE_URL, url.as_bytes()).to_string()
}
