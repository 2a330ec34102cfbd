//! cloud-init `#cloud-config` context: writes the runtime-init configuration
//! and an onboarding script onto the instance, then runs the script.

use serde::Serialize;

use super::{Declaration, RuntimeInitContext};
use crate::domain::header::Header;
use crate::domain::interface::Interface;

pub const TEMPLATE: &str = "cloud-config.yaml";
pub const DEFAULT_SCHEMA_URL: &str = "https://raw.githubusercontent.com/canonical/cloud-init/main/cloudinit/config/schemas/versions.schema.cloud-config.json";

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CloudConfigContext {
    pub header: Option<Header>,
    pub schema_url: String,
    /// Optional HTTP(S) proxy used when downloading runtime-init.
    pub proxy_url: String,
    pub runtime_init: Option<RuntimeInitContext>,
}

impl CloudConfigContext {
    pub fn new() -> Self {
        Self {
            schema_url: DEFAULT_SCHEMA_URL.into(),
            ..Self::default()
        }
    }
}

impl Declaration for CloudConfigContext {
    const TEMPLATE: &'static str = TEMPLATE;

    fn interfaces(&self) -> &[Interface] {
        self.runtime_init
            .as_ref()
            .map(|ri| ri.interfaces())
            .unwrap_or_default()
    }

    fn attach_interfaces(&mut self, interfaces: &[Interface]) {
        if let Some(runtime_init) = self.runtime_init.as_mut() {
            runtime_init.attach_interfaces(interfaces);
        }
    }
}
