//! Filesystem template loader.
//!
//! Reads a directory tree of template sources into a [`TemplateSet`]. Every
//! `*.yaml`, `*.yml` and `*.sh` file becomes one template, named by its path
//! relative to the root with `/` separators (`partials/do.yaml`).

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};
use walkdir::WalkDir;

use declgen_core::error::{DeclgenError, DeclgenResult};

use crate::template_set::TemplateSet;

const TEMPLATE_EXTENSIONS: [&str; 3] = ["yaml", "yml", "sh"];

// ── Loader ────────────────────────────────────────────────────────────────────

/// Loads every template file found under a directory.
///
/// # Example
///
/// ```no_run
/// use declgen_adapters::template_loader::FilesystemTemplateLoader;
///
/// let set = FilesystemTemplateLoader::new("./templates").load()?;
/// println!("Loaded {} templates", set.len());
/// # Ok::<(), declgen_core::error::DeclgenError>(())
/// ```
pub struct FilesystemTemplateLoader {
    templates_dir: PathBuf,
}

impl FilesystemTemplateLoader {
    /// Create a loader pointed at `templates_dir`.
    pub fn new(templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            templates_dir: templates_dir.into(),
        }
    }

    pub fn templates_dir(&self) -> &Path {
        &self.templates_dir
    }

    /// Read all template files under the directory.
    ///
    /// # Errors
    ///
    /// Returns [`DeclgenError::Configuration`] if the directory is missing,
    /// cannot be walked, or a template file cannot be read as UTF-8.
    #[instrument(skip(self), fields(dir = %self.templates_dir.display()))]
    pub fn load(&self) -> DeclgenResult<TemplateSet> {
        if !self.templates_dir.is_dir() {
            return Err(configuration(format!(
                "templates directory not found: {}",
                self.templates_dir.display()
            )));
        }

        let mut set = TemplateSet::new();
        for entry in WalkDir::new(&self.templates_dir).min_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| configuration(format!("directory walk error: {e}")))?;
            if !entry.file_type().is_file() || !is_template_file(entry.path()) {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(&self.templates_dir)
                .map_err(|_| {
                    configuration(format!(
                        "failed to relativise '{}' against '{}'",
                        entry.path().display(),
                        self.templates_dir.display()
                    ))
                })?;
            let name = normalize_path(&relative.to_string_lossy());

            let content = fs::read_to_string(entry.path()).map_err(|e| {
                configuration(format!("failed to read '{}': {e}", entry.path().display()))
            })?;

            debug!(template = %name, bytes = content.len(), "loaded template file");
            set.insert(name, content);
        }

        debug!(count = set.len(), "finished loading templates");
        Ok(set)
    }
}

fn is_template_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| TEMPLATE_EXTENSIONS.contains(&ext))
}

/// Convert OS separators to `/` so names match on every platform.
fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

fn configuration(message: String) -> DeclgenError {
    DeclgenError::Configuration { message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn loads_nested_templates_by_relative_name() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("partials")).unwrap();
        fs::write(dir.path().join("as3.yaml"), "class: AS3\n").unwrap();
        fs::write(dir.path().join("partials/as3.yaml"), "body\n").unwrap();
        fs::write(dir.path().join("partials/onboard.sh"), "#!/bin/bash\n").unwrap();
        fs::write(dir.path().join("README.md"), "ignored").unwrap();

        let set = FilesystemTemplateLoader::new(dir.path()).load().unwrap();

        assert_eq!(
            set.names().collect::<Vec<_>>(),
            vec!["as3.yaml", "partials/as3.yaml", "partials/onboard.sh"]
        );
        assert_eq!(set.get("as3.yaml"), Some("class: AS3\n"));
    }

    #[test]
    fn missing_directory_is_a_configuration_error() {
        let dir = TempDir::new().unwrap();
        let err = FilesystemTemplateLoader::new(dir.path().join("nope"))
            .load()
            .unwrap_err();
        assert!(matches!(err, DeclgenError::Configuration { .. }));
    }

    #[test]
    fn empty_directory_yields_empty_set() {
        let dir = TempDir::new().unwrap();
        let set = FilesystemTemplateLoader::new(dir.path()).load().unwrap();
        assert!(set.is_empty());
    }
}
