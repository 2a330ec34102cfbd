use serde::Serialize;

use super::{DEFAULT_LABEL, Declaration, declaration_id};
use crate::domain::header::Header;
use crate::domain::interface::Interface;

pub const TEMPLATE: &str = "as3.yaml";
pub const DEFAULT_VERSION: &str = "3.41.0";
pub const DEFAULT_PACKAGE_VERSION: &str = "3.41.0-1";
pub const DEFAULT_PACKAGE_SHA: &str =
    "ced0948208f4dc29af7c0ea3a925a28bf8b8690a263588374e3c3d2689999490";
pub const DEFAULT_PACKAGE_URL: &str = "https://github.com/F5Networks/f5-appsvcs-extension/releases/download/v3.41.0/f5-appsvcs-3.41.0-1.noarch.rpm";
pub const DEFAULT_SCHEMA_URL: &str = "https://raw.githubusercontent.com/F5Networks/f5-appsvcs-extension/v3.41.0/schema/3.41.0/as3-schema.json";
pub const DEFAULT_LOG_LEVEL: &str = "warning";
pub const DEFAULT_LIVENESS_HEALTH_CHECK_PORT: u16 = 26000;
pub const DEFAULT_ID_URL: &str = "https://raw.githubusercontent.com/memes/f5-google-declaration-generator/main/pkg/generators/templates/as3.yaml";
pub const DEFAULT_REMARK: &str = "Sample generated AS3";

/// Base AS3 declaration: the shared liveness endpoint for Google health checks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct As3Context {
    pub header: Option<Header>,
    pub interfaces: Vec<Interface>,
    pub version: String,
    pub package_sha: String,
    pub package_url: String,
    pub schema_url: String,
    pub log_level: String,
    pub liveness_health_check: bool,
    pub liveness_health_check_port: u16,
    pub id: String,
    pub label: String,
    pub remark: String,
}

impl Default for As3Context {
    fn default() -> Self {
        Self {
            header: None,
            interfaces: Vec::new(),
            version: DEFAULT_VERSION.into(),
            package_sha: DEFAULT_PACKAGE_SHA.into(),
            package_url: DEFAULT_PACKAGE_URL.into(),
            schema_url: DEFAULT_SCHEMA_URL.into(),
            log_level: DEFAULT_LOG_LEVEL.into(),
            liveness_health_check: true,
            liveness_health_check_port: DEFAULT_LIVENESS_HEALTH_CHECK_PORT,
            id: declaration_id(DEFAULT_ID_URL),
            label: DEFAULT_LABEL.into(),
            remark: DEFAULT_REMARK.into(),
        }
    }
}

impl Declaration for As3Context {
    const TEMPLATE: &'static str = TEMPLATE;

    fn interfaces(&self) -> &[Interface] {
        &self.interfaces
    }

    fn attach_interfaces(&mut self, interfaces: &[Interface]) {
        self.interfaces = interfaces.to_vec();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::interface::static_interface;
    use crate::domain::validation::{matches_id, matches_label, matches_remark};

    #[test]
    fn defaults_pass_as3_grammars() {
        let ctx = As3Context::default();
        assert!(matches_id(&ctx.id));
        assert!(matches_label(&ctx.label));
        assert!(matches_remark(&ctx.remark));
        assert!(ctx.liveness_health_check);
        assert_eq!(ctx.liveness_health_check_port, 26000);
        assert!(ctx.package_url.ends_with("f5-appsvcs-3.41.0-1.noarch.rpm"));
    }

    #[test]
    fn preparer_attaches_interfaces() {
        let interfaces = vec![static_interface(0).unwrap(), static_interface(2).unwrap()];
        let prepared = (As3Context::default().context_preparer())(interfaces.clone()).unwrap();
        assert_eq!(prepared.interfaces(), interfaces.as_slice());
    }
}
