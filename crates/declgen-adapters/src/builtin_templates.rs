//! Built-in templates and template resolution.
//!
//! The templates under `templates/` are compiled into the binary, so a
//! plain `declgen` install renders without any files on disk.
//!
//! # Template resolution order
//!
//! 1. **Built-in set**: always loaded first.
//! 2. **Local directory**: when `templates.local_path` is configured (or the
//!    `DECLGEN_TEMPLATES_DIR` environment variable is set), every template
//!    file found there replaces the built-in template of the same name.
//!    Partial overrides are fine; anything not overridden stays built-in.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use declgen_core::error::DeclgenResult;

use crate::template_loader::FilesystemTemplateLoader;
use crate::template_set::TemplateSet;

/// Environment variable naming a local template directory.
pub const TEMPLATES_DIR_ENV: &str = "DECLGEN_TEMPLATES_DIR";

const BUILTIN: &[(&str, &str)] = &[
    ("as3.yaml", include_str!("../templates/as3.yaml")),
    ("do.yaml", include_str!("../templates/do.yaml")),
    ("cfe.yaml", include_str!("../templates/cfe.yaml")),
    ("ts.yaml", include_str!("../templates/ts.yaml")),
    ("app_as3.yaml", include_str!("../templates/app_as3.yaml")),
    ("runtime-init.yaml", include_str!("../templates/runtime-init.yaml")),
    ("cloud-config.yaml", include_str!("../templates/cloud-config.yaml")),
    ("partials/header.yaml", include_str!("../templates/partials/header.yaml")),
    ("partials/as3.yaml", include_str!("../templates/partials/as3.yaml")),
    ("partials/do.yaml", include_str!("../templates/partials/do.yaml")),
    ("partials/cfe.yaml", include_str!("../templates/partials/cfe.yaml")),
    ("partials/ts.yaml", include_str!("../templates/partials/ts.yaml")),
    ("partials/app_as3.yaml", include_str!("../templates/partials/app_as3.yaml")),
    (
        "partials/runtime-init.yaml",
        include_str!("../templates/partials/runtime-init.yaml"),
    ),
    ("partials/onboard.sh", include_str!("../templates/partials/onboard.sh")),
];

// ── Public API ────────────────────────────────────────────────────────────────

/// The templates compiled into this build.
pub fn builtin_set() -> TemplateSet {
    let mut set = TemplateSet::new();
    for (name, content) in BUILTIN {
        set.insert(*name, *content);
    }
    set
}

/// Resolve the effective template set.
///
/// `local_path` takes precedence over `$DECLGEN_TEMPLATES_DIR`.
///
/// # Errors
///
/// A configured local directory that does not exist or cannot be read is an
/// error; it is never silently ignored.
#[instrument]
pub fn resolve(local_path: Option<&Path>) -> DeclgenResult<TemplateSet> {
    let mut set = builtin_set();

    let Some(dir) = local_dir(local_path) else {
        debug!(count = set.len(), "using built-in templates");
        return Ok(set);
    };

    let local = FilesystemTemplateLoader::new(&dir).load()?;
    info!(
        path = %dir.display(),
        count = local.len(),
        "overriding built-in templates from local directory"
    );
    set.overlay(local);
    Ok(set)
}

// ── Resolution helpers ────────────────────────────────────────────────────────

fn local_dir(local_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = local_path {
        return Some(path.to_path_buf());
    }
    std::env::var_os(TEMPLATES_DIR_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn builtin_set_has_every_main_template() {
        let set = builtin_set();
        for name in [
            "as3.yaml",
            "do.yaml",
            "cfe.yaml",
            "ts.yaml",
            "app_as3.yaml",
            "runtime-init.yaml",
            "cloud-config.yaml",
        ] {
            assert!(set.contains(name), "{name}");
            assert!(!set.get(name).unwrap().is_empty(), "{name}");
        }
    }

    #[test]
    fn local_directory_overrides_by_name() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("as3.yaml"), "custom: true\n").unwrap();

        let set = resolve(Some(dir.path())).unwrap();

        assert_eq!(set.get("as3.yaml"), Some("custom: true\n"));
        assert_eq!(set.get("do.yaml"), builtin_set().get("do.yaml"));
        assert_eq!(set.len(), builtin_set().len());
    }

    #[test]
    fn missing_local_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(resolve(Some(&dir.path().join("missing"))).is_err());
    }
}
