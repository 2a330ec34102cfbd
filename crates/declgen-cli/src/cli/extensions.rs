//! Per-extension flag groups.
//!
//! Each group is flattened into every command that renders that extension,
//! so `bigip as3` and `bigip runtime-init` accept the same `--as3-*` flags.
//! Field names carry the extension prefix because clap keys flattened
//! arguments by field name.

use clap::{ArgAction, Args};

use declgen_core::domain::contexts::{
    app, as3, cfe, onboarding, runtime_init, telemetry,
};

// ── AS3 ───────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Args)]
pub struct As3Flags {
    #[arg(
        long = "as3-package-url",
        value_name = "URL",
        default_value = as3::DEFAULT_PACKAGE_URL,
        help = "The URL to download the AS3 package"
    )]
    pub as3_package_url: String,

    #[arg(
        long = "as3-package-checksum",
        value_name = "SHA256",
        default_value = as3::DEFAULT_PACKAGE_SHA,
        help = "The checksum of the AS3 package to verify the download"
    )]
    pub as3_package_checksum: String,

    #[arg(
        long = "as3-livez-health-check",
        value_name = "BOOL",
        default_value_t = true,
        action = ArgAction::Set,
        help = "Add a liveness health check responder to the declaration"
    )]
    pub as3_livez_health_check: bool,

    #[arg(
        long = "as3-livez-health-check-port",
        value_name = "PORT",
        default_value_t = as3::DEFAULT_LIVENESS_HEALTH_CHECK_PORT,
        help = "The port used by the liveness health check responder"
    )]
    pub as3_livez_health_check_port: u16,
}

// ── Declarative Onboarding ────────────────────────────────────────────────────

#[derive(Debug, Clone, Args)]
pub struct DoFlags {
    #[arg(
        long = "do-package-url",
        value_name = "URL",
        default_value = onboarding::DEFAULT_PACKAGE_URL,
        help = "The URL to download the DO package"
    )]
    pub do_package_url: String,

    #[arg(
        long = "do-package-checksum",
        value_name = "SHA256",
        default_value = onboarding::DEFAULT_PACKAGE_SHA,
        help = "The checksum of the DO package to verify the download"
    )]
    pub do_package_checksum: String,

    /// An empty key leaves the declaration unlicensed.
    #[arg(
        long = "license-regkey",
        value_name = "KEY",
        default_value = onboarding::DEFAULT_REG_KEY,
        help = "The registration key to license BIG-IP"
    )]
    pub license_regkey: String,

    /// Takes precedence over `--license-regkey`.
    #[arg(
        long = "license-pool-name",
        value_name = "POOL",
        requires = "bigiq_host",
        help = "License BIG-IP from this BIG-IQ license pool"
    )]
    pub license_pool_name: Option<String>,

    #[arg(
        long = "bigiq-host",
        value_name = "HOST",
        help = "The BIG-IQ host that owns the license pool"
    )]
    pub bigiq_host: Option<String>,

    #[arg(
        long = "bigiq-username",
        value_name = "USER",
        default_value = onboarding::DEFAULT_BIGIP_USERNAME,
        help = "The BIG-IQ user for license pool requests"
    )]
    pub bigiq_username: String,

    #[arg(
        long = "bigiq-password",
        value_name = "PASSWORD",
        default_value = "",
        hide_default_value = true,
        help = "The BIG-IQ password for license pool requests"
    )]
    pub bigiq_password: String,
}

// ── Cloud Failover ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Args)]
pub struct CfeFlags {
    #[arg(
        long = "cfe-package-url",
        value_name = "URL",
        default_value = cfe::DEFAULT_PACKAGE_URL,
        help = "The URL to download the CFE package"
    )]
    pub cfe_package_url: String,

    #[arg(
        long = "cfe-package-checksum",
        value_name = "SHA256",
        default_value = cfe::DEFAULT_PACKAGE_SHA,
        help = "The checksum of the CFE package to verify the download"
    )]
    pub cfe_package_checksum: String,

    #[arg(
        long = "cfe-scoping-tags",
        value_name = "KEY=VALUE",
        value_delimiter = ',',
        value_parser = parse_key_value,
        help = "The scoping tags (labels) CFE uses to find its resources"
    )]
    pub cfe_scoping_tags: Vec<(String, String)>,
}

// ── Telemetry Streaming ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Args)]
pub struct TsFlags {
    #[arg(
        long = "ts-package-url",
        value_name = "URL",
        default_value = telemetry::DEFAULT_PACKAGE_URL,
        help = "The URL to download the TS package"
    )]
    pub ts_package_url: String,

    #[arg(
        long = "ts-package-checksum",
        value_name = "SHA256",
        default_value = telemetry::DEFAULT_PACKAGE_SHA,
        help = "The checksum of the TS package to verify the download"
    )]
    pub ts_package_checksum: String,
}

// ── Application ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Args)]
pub struct AppFlags {
    /// Repeatable. Without any, the external interface address is used.
    #[arg(
        long = "vip",
        value_name = "ADDR",
        action = ArgAction::Append,
        help = "Virtual server address or CIDR (repeatable)"
    )]
    pub vips: Vec<String>,

    #[arg(
        long = "tenant",
        value_name = "NAME",
        default_value = app::DEFAULT_TENANT,
        help = "The AS3 tenant holding the application"
    )]
    pub tenant: String,
}

// ── runtime-init ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Args)]
pub struct RuntimeInitFlags {
    #[arg(
        long = "runtime-init-package-url",
        value_name = "URL",
        default_value = runtime_init::DEFAULT_PACKAGE_URL,
        help = "The URL to download the runtime-init installer"
    )]
    pub runtime_init_package_url: String,

    #[arg(
        long = "runtime-init-package-checksum",
        value_name = "SHA256",
        default_value = runtime_init::DEFAULT_PACKAGE_SHA,
        help = "The checksum of the runtime-init installer"
    )]
    pub runtime_init_package_checksum: String,

    #[arg(long = "as3-enable", value_name = "BOOL", default_value_t = true, action = ArgAction::Set,
          help = "Install and apply AS3")]
    pub as3_enable: bool,

    #[arg(long = "do-enable", value_name = "BOOL", default_value_t = true, action = ArgAction::Set,
          help = "Install and apply Declarative Onboarding")]
    pub do_enable: bool,

    #[arg(long = "cfe-enable", value_name = "BOOL", default_value_t = true, action = ArgAction::Set,
          help = "Install and apply Cloud Failover")]
    pub cfe_enable: bool,

    #[arg(long = "ts-enable", value_name = "BOOL", default_value_t = true, action = ArgAction::Set,
          help = "Install and apply Telemetry Streaming")]
    pub ts_enable: bool,

    #[arg(long = "app-enable", value_name = "BOOL", default_value_t = false, action = ArgAction::Set,
          help = "Apply the sample application declaration")]
    pub app_enable: bool,
}

/// Every flag group; used by the commands that assemble a runtime-init tree.
#[derive(Debug, Clone, Args)]
pub struct ExtensionFlags {
    #[command(flatten)]
    pub runtime_init: RuntimeInitFlags,

    #[command(flatten)]
    pub as3: As3Flags,

    #[command(flatten)]
    pub onboarding: DoFlags,

    #[command(flatten)]
    pub cfe: CfeFlags,

    #[command(flatten)]
    pub ts: TsFlags,

    #[command(flatten)]
    pub app: AppFlags,
}

/// Parse `key=value`; the value may itself contain `=`.
pub fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_value_splits_on_first_equals() {
        assert_eq!(
            parse_key_value("label=a=b").unwrap(),
            ("label".to_string(), "a=b".to_string())
        );
        assert_eq!(
            parse_key_value("empty=").unwrap(),
            ("empty".to_string(), String::new())
        );
    }

    #[test]
    fn key_value_requires_a_key() {
        assert!(parse_key_value("novalue").is_err());
        assert!(parse_key_value("=value").is_err());
    }
}
