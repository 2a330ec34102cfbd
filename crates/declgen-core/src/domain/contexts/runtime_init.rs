//! BIG-IP runtime-init context.
//!
//! runtime-init installs the extension packages and posts their declarations
//! at first boot, resolving `{{{ TOKEN }}}` markers from instance metadata and
//! Secret Manager. Each enabled extension is an owned child context.

use serde::Serialize;

use super::{AppContext, As3Context, CfeContext, Declaration, DoContext, TsContext};
use crate::domain::header::Header;
use crate::domain::interface::Interface;

pub const TEMPLATE: &str = "runtime-init.yaml";
pub const DEFAULT_VERSION: &str = "1.5.2";
pub const DEFAULT_PACKAGE_VERSION: &str = "1.5.2-1";
pub const DEFAULT_PACKAGE_SHA: &str =
    "b9eea6a7b2627343553f47d18f4ebbb2604cec38a6e761ce4b79d518ac24b2d4";
pub const DEFAULT_PACKAGE_URL: &str = "https://github.com/F5Networks/f5-bigip-runtime-init/releases/download/1.5.2/f5-bigip-runtime-init-1.5.2-1.gz.run";
pub const DEFAULT_SCHEMA_URL: &str =
    "https://raw.githubusercontent.com/F5Networks/f5-bigip-runtime-init/1.5.2/src/schema/base_schema.json";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_ADMIN_PASSWORD: &str = "{{{ ADMIN_PASSWORD }}}";
pub const DEFAULT_ADMIN_PASSWORD_SECRET_ID: &str = "bigip-admin-password";
pub const DEFAULT_PROJECT_ID: &str = "{{{ PROJECT_ID }}}";
pub const DEFAULT_SERVICE_ACCOUNT: &str = "{{{ SERVICE_ACCOUNT }}}";
pub const DEFAULT_INSTANCE_NAME: &str = "{{{ INSTANCE_NAME }}}";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuntimeInitContext {
    pub header: Option<Header>,
    pub interfaces: Vec<Interface>,
    pub version: String,
    pub package_sha: String,
    pub package_url: String,
    pub schema_url: String,
    pub log_level: String,
    pub admin_password: String,
    pub admin_password_secret_id: String,
    pub project_id: String,
    pub service_account: String,
    pub instance_name: String,
    pub application_services: Option<As3Context>,
    pub cloud_failover: Option<CfeContext>,
    pub declarative_onboarding: Option<DoContext>,
    pub telemetry_streaming: Option<TsContext>,
    pub application: Option<AppContext>,
}

impl Default for RuntimeInitContext {
    fn default() -> Self {
        Self {
            header: None,
            interfaces: Vec::new(),
            version: DEFAULT_VERSION.into(),
            package_sha: DEFAULT_PACKAGE_SHA.into(),
            package_url: DEFAULT_PACKAGE_URL.into(),
            schema_url: DEFAULT_SCHEMA_URL.into(),
            log_level: DEFAULT_LOG_LEVEL.into(),
            admin_password: DEFAULT_ADMIN_PASSWORD.into(),
            admin_password_secret_id: DEFAULT_ADMIN_PASSWORD_SECRET_ID.into(),
            project_id: DEFAULT_PROJECT_ID.into(),
            service_account: DEFAULT_SERVICE_ACCOUNT.into(),
            instance_name: DEFAULT_INSTANCE_NAME.into(),
            application_services: None,
            cloud_failover: None,
            declarative_onboarding: None,
            telemetry_streaming: None,
            application: None,
        }
    }
}

impl RuntimeInitContext {
    /// Copy the instance-wide settings held here into the DO and TS children.
    ///
    /// Call after the children are attached and before preparing.
    pub fn share_with_children(&mut self) {
        if let Some(onboarding) = self.declarative_onboarding.as_mut() {
            onboarding.set_admin_password(self.admin_password.clone());
            onboarding.instance_name.clone_from(&self.instance_name);
        }
        if let Some(telemetry) = self.telemetry_streaming.as_mut() {
            telemetry.project_id.clone_from(&self.project_id);
            telemetry.service_account.clone_from(&self.service_account);
        }
    }
}

impl Declaration for RuntimeInitContext {
    const TEMPLATE: &'static str = TEMPLATE;

    fn interfaces(&self) -> &[Interface] {
        &self.interfaces
    }

    fn attach_interfaces(&mut self, interfaces: &[Interface]) {
        self.interfaces = interfaces.to_vec();
        if let Some(child) = self.application_services.as_mut() {
            child.attach_interfaces(interfaces);
        }
        if let Some(child) = self.cloud_failover.as_mut() {
            child.attach_interfaces(interfaces);
        }
        if let Some(child) = self.declarative_onboarding.as_mut() {
            child.attach_interfaces(interfaces);
        }
        if let Some(child) = self.telemetry_streaming.as_mut() {
            child.attach_interfaces(interfaces);
        }
        if let Some(child) = self.application.as_mut() {
            child.attach_interfaces(interfaces);
        }
    }
}
