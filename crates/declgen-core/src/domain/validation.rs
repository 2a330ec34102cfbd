//! AS3 identifier grammars.
//!
//! Pure predicates. Nothing in the context model calls these implicitly; the
//! caller decides when a value must conform.

use std::sync::LazyLock;

use regex::Regex;

use super::error::{DomainError, DomainResult};

/// Declaration ids: no whitespace, quotes, markup or shell-hostile characters, up to 255.
pub static ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^[^\x00-\x20"'<>\\^`|\x7f]{0,255}$"#).expect("id pattern is valid")
});

/// Labels: printable text without `"#&*<>?[\]` or backtick, up to 64.
pub static LABEL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r##"^[^\x00-\x1f"#&*<>?\[\\\]`\x7f]{0,64}$"##).expect("label pattern is valid")
});

/// Remarks: printable text without `"` or `\`, up to 64.
pub static REMARK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^[^\x00-\x1f"\\\x7f]{0,64}$"#).expect("remark pattern is valid")
});

/// Tenant and application names: a letter, then word characters, dots or dashes, up to 48.
pub static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][0-9A-Za-z_.-]{0,47}$").expect("name pattern is valid")
});

pub fn matches_id(value: &str) -> bool {
    ID_PATTERN.is_match(value)
}

pub fn matches_label(value: &str) -> bool {
    LABEL_PATTERN.is_match(value)
}

pub fn matches_remark(value: &str) -> bool {
    REMARK_PATTERN.is_match(value)
}

pub fn matches_name(value: &str) -> bool {
    NAME_PATTERN.is_match(value)
}

pub fn validate_id(value: &str) -> DomainResult<()> {
    check("id", value, matches_id)
}

pub fn validate_label(value: &str) -> DomainResult<()> {
    check("label", value, matches_label)
}

pub fn validate_remark(value: &str) -> DomainResult<()> {
    check("remark", value, matches_remark)
}

pub fn validate_tenant(value: &str) -> DomainResult<()> {
    check("tenant", value, matches_name)
}

fn check(field: &'static str, value: &str, predicate: fn(&str) -> bool) -> DomainResult<()> {
    if predicate(value) {
        Ok(())
    } else {
        Err(DomainError::PatternMismatch {
            field,
            value: value.to_string(),
        })
    }
}
