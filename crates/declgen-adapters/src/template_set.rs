//! A named collection of template sources.

use std::collections::BTreeMap;
use std::path::PathBuf;

use declgen_core::error::DeclgenResult;

use crate::template_loader::FilesystemTemplateLoader;

/// Template sources keyed by their slash-separated relative name,
/// e.g. `do.yaml` or `partials/do.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateSet {
    templates: BTreeMap<String, String>,
}

impl TemplateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every template file under `dir`.
    ///
    /// # Errors
    ///
    /// See [`FilesystemTemplateLoader::load`].
    pub fn from_dir(dir: impl Into<PathBuf>) -> DeclgenResult<Self> {
        FilesystemTemplateLoader::new(dir).load()
    }

    /// Add or replace a template.
    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.templates.insert(name.into(), content.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.templates.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.templates
            .iter()
            .map(|(name, content)| (name.as_str(), content.as_str()))
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Layer `other` on top of this set; same-named templates are replaced.
    pub fn overlay(&mut self, other: TemplateSet) {
        self.templates.extend(other.templates);
    }
}
