//! Generator - the declaration rendering orchestrator.
//!
//! This service coordinates one generation run:
//! 1. Validate the interface count
//! 2. Synthesize interfaces with the injected builder
//! 3. Prepare the context tree
//! 4. Render the named template into the sink
//!
//! It implements the driving port (incoming) and uses the driven
//! `TemplateRenderer` port (outgoing).

use std::io::Write;

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::ports::TemplateRenderer,
    domain::{ContextPreparer, Declaration, DomainError, Interface, InterfaceBuilder},
    error::DeclgenResult,
};

/// Smallest interface count a BIG-IP VM can have.
pub const MIN_INTERFACE_COUNT: i32 = 1;
/// Largest interface count Google Compute Engine allows.
pub const MAX_INTERFACE_COUNT: i32 = 8;

/// Renders declarations from contexts.
pub struct Generator {
    renderer: Box<dyn TemplateRenderer>,
    interface_builder: InterfaceBuilder,
}

impl Generator {
    /// Create a generator using static (literal) interfaces.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use declgen_core::application::{Generator, ports::TemplateRenderer};
    /// use declgen_core::domain::As3Context;
    ///
    /// # fn run(renderer: Box<dyn TemplateRenderer>) -> declgen_core::error::DeclgenResult<()> {
    /// let generator = Generator::new(renderer);
    /// generator.generate(As3Context::default(), 3, &mut std::io::stdout())?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(renderer: Box<dyn TemplateRenderer>) -> Self {
        Self {
            renderer,
            interface_builder: Box::new(crate::domain::static_interface),
        }
    }

    /// Replace the interface builder, e.g. with placeholder interfaces.
    pub fn with_interface_builder(mut self, builder: InterfaceBuilder) -> Self {
        self.interface_builder = builder;
        self
    }

    /// Synthesize interfaces for NICs `0..count`, skipping the management NIC.
    ///
    /// Fails fast: the first builder error is returned and nothing else is built.
    pub fn build_interfaces(&self, count: i32) -> DeclgenResult<Vec<Interface>> {
        if !(MIN_INTERFACE_COUNT..=MAX_INTERFACE_COUNT).contains(&count) {
            return Err(DomainError::InvalidInterfaceCount { count }.into());
        }

        let mut interfaces = Vec::with_capacity(count as usize);
        for index in (0..count).filter(|i| *i != 1) {
            let interface = (self.interface_builder)(index)?;
            debug!(index, name = %interface.name(), "Synthesized interface");
            interfaces.push(interface);
        }
        Ok(interfaces)
    }

    /// Render `template` with the context produced by `preparer`.
    #[instrument(skip(self, preparer, sink))]
    pub fn execute<C: Serialize>(
        &self,
        template: &str,
        preparer: ContextPreparer<C>,
        interface_count: i32,
        sink: &mut dyn Write,
    ) -> DeclgenResult<()> {
        let interfaces = self.build_interfaces(interface_count)?;
        let context = preparer(interfaces)?;
        let root = serde_json::to_value(&context).map_err(|e| DomainError::Serialization {
            reason: e.to_string(),
        })?;

        self.renderer.render(template, &root, sink)?;
        info!("Declaration rendered");
        Ok(())
    }

    /// Render a declaration with its own main template.
    pub fn generate<D: Declaration>(
        &self,
        declaration: D,
        interface_count: i32,
        sink: &mut dyn Write,
    ) -> DeclgenResult<()> {
        self.execute(
            D::TEMPLATE,
            declaration.context_preparer(),
            interface_count,
            sink,
        )
    }

    /// Access the configured renderer.
    pub fn renderer(&self) -> &dyn TemplateRenderer {
        self.renderer.as_ref()
    }
}
