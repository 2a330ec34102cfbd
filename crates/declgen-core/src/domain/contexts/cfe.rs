//! Cloud Failover Extension (CFE) context.

use std::collections::BTreeMap;

use serde::Serialize;

use super::Declaration;
use crate::domain::header::Header;
use crate::domain::interface::Interface;

pub const TEMPLATE: &str = "cfe.yaml";
pub const DEFAULT_VERSION: &str = "1.13.0";
pub const DEFAULT_PACKAGE_VERSION: &str = "1.13.0-0";
pub const DEFAULT_PACKAGE_SHA: &str =
    "93be496d250838697d8a9aca8bd0e6fe7480549ecd43280279f0a63fc741ab50";
pub const DEFAULT_PACKAGE_URL: &str = "https://github.com/F5Networks/f5-cloud-failover-extension/releases/download/v1.13.0/f5-cloud-failover-1.13.0-0.noarch.rpm";
pub const DEFAULT_SCHEMA_URL: &str = "https://raw.githubusercontent.com/F5Networks/f5-cloud-failover-extension/v1.13.0/src/nodejs/schema/base_schema.json";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_SCOPING_TAG_KEY: &str = "f5_cloud_failover_label";
pub const DEFAULT_SCOPING_TAG_VALUE: &str = "my_deployment";

/// A route CFE moves to the active instance on failover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailoverRoute {
    /// A named route whose next hop is rewritten to the active instance.
    Static {
        name: String,
        next_hop_addresses: Vec<String>,
    },
    /// Routes discovered by label, restricted to `address_ranges`.
    Tagged {
        scoping_tags: BTreeMap<String, String>,
        address_ranges: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CfeContext {
    pub header: Option<Header>,
    pub interfaces: Vec<Interface>,
    pub version: String,
    pub package_sha: String,
    pub package_url: String,
    pub schema_url: String,
    pub log_level: String,
    pub scoping_tags: BTreeMap<String, String>,
    pub failover_routes: Vec<FailoverRoute>,
}

impl Default for CfeContext {
    fn default() -> Self {
        Self {
            header: None,
            interfaces: Vec::new(),
            version: DEFAULT_VERSION.into(),
            package_sha: DEFAULT_PACKAGE_SHA.into(),
            package_url: DEFAULT_PACKAGE_URL.into(),
            schema_url: DEFAULT_SCHEMA_URL.into(),
            log_level: DEFAULT_LOG_LEVEL.into(),
            scoping_tags: BTreeMap::from([(
                DEFAULT_SCOPING_TAG_KEY.to_string(),
                DEFAULT_SCOPING_TAG_VALUE.to_string(),
            )]),
            failover_routes: Vec::new(),
        }
    }
}

impl Declaration for CfeContext {
    const TEMPLATE: &'static str = TEMPLATE;

    fn interfaces(&self) -> &[Interface] {
        &self.interfaces
    }

    fn attach_interfaces(&mut self, interfaces: &[Interface]) {
        self.interfaces = interfaces.to_vec();
    }
}
