//! Sample application AS3 context: one HTTP virtual server per VIP plus a
//! readiness endpoint.

use serde::Serialize;

use super::as3::{DEFAULT_REMARK, DEFAULT_SCHEMA_URL, DEFAULT_VERSION};
use super::{DEFAULT_LABEL, Declaration, declaration_id};
use crate::domain::header::Header;
use crate::domain::interface::Interface;

pub const TEMPLATE: &str = "app_as3.yaml";
pub const DEFAULT_LOG_LEVEL: &str = "warning";
pub const DEFAULT_ID_URL: &str = "https://raw.githubusercontent.com/memes/f5-google-declaration-generator/main/pkg/generators/templates/app_as3.yaml";
pub const DEFAULT_TENANT: &str = "app";
pub const DEFAULT_READINESS_HEALTH_CHECK_PORT: u16 = 26000;
pub const DEFAULT_NAME: &str = "app1";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppContext {
    pub header: Option<Header>,
    pub interfaces: Vec<Interface>,
    pub version: String,
    pub schema_url: String,
    pub log_level: String,
    pub id: String,
    pub label: String,
    pub remark: String,
    pub tenant: String,
    /// Addresses or CIDR blocks; empty means "the external interface address".
    pub vips: Vec<String>,
    pub readiness_health_check_port: u16,
    pub name: String,
}

impl Default for AppContext {
    fn default() -> Self {
        Self {
            header: None,
            interfaces: Vec::new(),
            version: DEFAULT_VERSION.into(),
            schema_url: DEFAULT_SCHEMA_URL.into(),
            log_level: DEFAULT_LOG_LEVEL.into(),
            id: declaration_id(DEFAULT_ID_URL),
            label: DEFAULT_LABEL.into(),
            remark: DEFAULT_REMARK.into(),
            tenant: DEFAULT_TENANT.into(),
            vips: Vec::new(),
            readiness_health_check_port: DEFAULT_READINESS_HEALTH_CHECK_PORT,
            name: DEFAULT_NAME.into(),
        }
    }
}

impl Declaration for AppContext {
    const TEMPLATE: &'static str = TEMPLATE;

    fn interfaces(&self) -> &[Interface] {
        &self.interfaces
    }

    fn attach_interfaces(&mut self, interfaces: &[Interface]) {
        self.interfaces = interfaces.to_vec();
    }
}
