//! Tera-backed template renderer.

use std::collections::HashMap;
use std::error::Error as StdError;
use std::io::Write;
use std::sync::{Arc, Weak};

use declgen_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    error::DeclgenResult,
};
use serde_json::Value;
use tera::{Context, Tera};
use tracing::{debug, instrument};

use super::helpers;
use crate::template_set::TemplateSet;

/// Name of the template function that renders a nested template with its
/// own data, e.g. `include_partial(name="partials/do.yaml", data=declarative_onboarding)`.
pub const INCLUDE_FUNCTION: &str = "include_partial";

/// Renders declarations from a parsed [`TemplateSet`].
///
/// The template set is parsed once; the renderer is cheap to clone and
/// safe to share between threads.
#[derive(Clone)]
pub struct TeraRenderer {
    tera: Arc<Tera>,
}

impl TeraRenderer {
    /// Parse every template in `set` and register the helper library.
    #[instrument(skip_all, fields(templates = set.len()))]
    pub fn new(set: &TemplateSet) -> DeclgenResult<Self> {
        let mut tera = Tera::default();
        // output is YAML, never HTML
        tera.autoescape_on(vec![]);
        helpers::register(&mut tera);

        for (name, content) in set.iter() {
            tera.add_raw_template(name, content)
                .map_err(|e| ApplicationError::TemplateParse {
                    name: name.to_string(),
                    reason: error_chain(&e),
                })?;
            debug!(template = name, "Parsed template");
        }

        let tera = Arc::new_cyclic(|weak: &Weak<Tera>| {
            tera.register_function(INCLUDE_FUNCTION, IncludePartial { tera: weak.clone() });
            tera
        });
        Ok(Self { tera })
    }

    /// Renderer over the templates compiled into the binary.
    pub fn builtin() -> DeclgenResult<Self> {
        Self::new(&crate::builtin_templates::builtin_set())
    }

    /// Names of all loaded templates, partials included.
    pub fn template_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .tera
            .get_template_names()
            .map(str::to_string)
            .collect();
        names.sort();
        names
    }
}

impl TemplateRenderer for TeraRenderer {
    fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    #[instrument(skip(self, context, sink))]
    fn render(&self, name: &str, context: &Value, sink: &mut dyn Write) -> DeclgenResult<()> {
        if !self.has_template(name) {
            return Err(ApplicationError::TemplateNotFound {
                name: name.to_string(),
            }
            .into());
        }

        let context = context_for(context.clone()).map_err(|e| {
            ApplicationError::RenderingFailed {
                name: name.to_string(),
                reason: error_chain(&e),
            }
        })?;

        self.tera.render_to(name, &context, sink).map_err(|e| {
            if is_io_error(&e) {
                ApplicationError::Sink {
                    reason: error_chain(&e),
                }
            } else {
                ApplicationError::RenderingFailed {
                    name: name.to_string(),
                    reason: error_chain(&e),
                }
            }
        })?;
        Ok(())
    }
}

/// Build a Tera context from arbitrary data.
///
/// Objects become the context directly, null gives an empty context and
/// anything else is reachable as `value`.
fn context_for(data: Value) -> tera::Result<Context> {
    match data {
        Value::Object(_) => Context::from_value(data),
        Value::Null => Ok(Context::new()),
        other => {
            let mut context = Context::new();
            context.insert("value", &other);
            Ok(context)
        }
    }
}

/// `include_partial(name=..., data=...)` renders another template from the
/// same set, returning its output as a string.
struct IncludePartial {
    tera: Weak<Tera>,
}

impl tera::Function for IncludePartial {
    fn call(&self, args: &HashMap<String, Value>) -> tera::Result<Value> {
        let name = args.get("name").and_then(Value::as_str).ok_or_else(|| {
            tera::Error::msg(format!(
                "`{}` requires a string `name` argument",
                INCLUDE_FUNCTION
            ))
        })?;
        let tera = self
            .tera
            .upgrade()
            .ok_or_else(|| tera::Error::msg("template set is no longer available"))?;

        let data = args.get("data").cloned().unwrap_or(Value::Null);
        let context = context_for(data)?;
        tera.render(name, &context)
            .map(Value::String)
            .map_err(|e| tera::Error::chain(format!("failed to include '{}'", name), e))
    }

    fn is_safe(&self) -> bool {
        true
    }
}

/// Flatten an error and all of its sources into one line.
fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut reason = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        reason.push_str(": ");
        reason.push_str(&cause.to_string());
        source = cause.source();
    }
    reason
}

fn is_io_error(err: &(dyn StdError + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(e) = current {
        if e.downcast_ref::<std::io::Error>().is_some() {
            return true;
        }
        current = e.source();
    }
    false
}
