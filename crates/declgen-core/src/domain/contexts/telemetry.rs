//! Telemetry Streaming (TS) context.
//!
//! TS ships metrics to Cloud Monitoring and does not use the interface
//! sequence, but it still records it so composite contexts can hand the same
//! sequence to every child.

use serde::Serialize;

use super::Declaration;
use crate::domain::header::Header;
use crate::domain::interface::Interface;

pub const TEMPLATE: &str = "ts.yaml";
pub const DEFAULT_VERSION: &str = "1.32.0";
pub const DEFAULT_PACKAGE_VERSION: &str = "1.32.0-2";
pub const DEFAULT_PACKAGE_SHA: &str =
    "a6bf242728a5ba1b8b8f26b59897765567db7e0f0267ba9973f822be3ab387b6";
pub const DEFAULT_PACKAGE_URL: &str = "https://github.com/F5Networks/f5-telemetry-streaming/releases/download/v1.32.0/f5-telemetry-1.32.0-2.noarch.rpm";
pub const DEFAULT_SCHEMA_URL: &str = "https://raw.githubusercontent.com/F5Networks/f5-telemetry-streaming/v1.32.0/src/schema/1.32.0/base_schema.json";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_PROJECT_ID: &str = "my-project-id";
pub const DEFAULT_SERVICE_ACCOUNT: &str =
    "serviceAccount:bigip@my-project-id.iam.gserviceaccount.com";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TsContext {
    pub header: Option<Header>,
    pub interfaces: Vec<Interface>,
    pub version: String,
    pub package_sha: String,
    pub package_url: String,
    pub schema_url: String,
    pub log_level: String,
    pub project_id: String,
    pub service_account: String,
}

impl Default for TsContext {
    fn default() -> Self {
        Self {
            header: None,
            interfaces: Vec::new(),
            version: DEFAULT_VERSION.into(),
            package_sha: DEFAULT_PACKAGE_SHA.into(),
            package_url: DEFAULT_PACKAGE_URL.into(),
            schema_url: DEFAULT_SCHEMA_URL.into(),
            log_level: DEFAULT_LOG_LEVEL.into(),
            project_id: DEFAULT_PROJECT_ID.into(),
            service_account: DEFAULT_SERVICE_ACCOUNT.into(),
        }
    }
}

impl Declaration for TsContext {
    const TEMPLATE: &'static str = TEMPLATE;

    fn interfaces(&self) -> &[Interface] {
        &self.interfaces
    }

    fn attach_interfaces(&mut self, interfaces: &[Interface]) {
        self.interfaces = interfaces.to_vec();
    }
}
