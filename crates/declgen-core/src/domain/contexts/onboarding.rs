//! Declarative Onboarding (DO) context.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{DEFAULT_LABEL, Declaration};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::header::Header;
use crate::domain::interface::Interface;

pub const TEMPLATE: &str = "do.yaml";
pub const DEFAULT_VERSION: &str = "1.34.0";
pub const DEFAULT_PACKAGE_VERSION: &str = "1.34.0-5";
pub const DEFAULT_PACKAGE_SHA: &str =
    "5e58bc15a4c436494599dfc509c87f02400339e6c0ce8275df259d5f1585146b";
pub const DEFAULT_PACKAGE_URL: &str = "https://github.com/F5Networks/f5-declarative-onboarding/releases/download/v1.34.0/f5-declarative-onboarding-1.34.0-5.noarch.rpm";
pub const DEFAULT_SCHEMA_URL: &str = "https://raw.githubusercontent.com/F5Networks/f5-declarative-onboarding/v1.34.0/src/schema/1.34.0/base.schema.json";
pub const DEFAULT_INSTANCE_NAME: &str = "bigip";
pub const DEFAULT_DOMAIN_NAME: &str = "example.com";
/// GCE metadata server; answers DNS and NTP inside every VPC.
pub const GOOGLE_METADATA_SERVICE: &str = "169.254.169.254";
pub const DEFAULT_TIMEZONE: &str = "UTC";
pub const DEFAULT_ADMIN_PASSWORD: &str = "Foob@r1234!";
pub const DEFAULT_REG_KEY: &str = "AAAAA-BBBBB-CCCCC-DDDDD-EEEEEEE";
pub const DEFAULT_BIGIP_USERNAME: &str = "admin";

const LICENSE_CLASS: &str = "License";
const POOL_HYPERVISOR: &str = "gce";

/// DO `License` class body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Licensing {
    pub class: String,
    #[serde(flatten)]
    pub mode: LicenseMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "licenseType")]
pub enum LicenseMode {
    #[serde(rename = "regKey", rename_all = "camelCase")]
    RegKey { reg_key: String },

    /// Unreachable BIG-IQ pool assignment; BIG-IQ never contacts the instance.
    #[serde(rename = "licensePool", rename_all = "camelCase")]
    LicensePool {
        big_iq_host: String,
        big_iq_username: String,
        big_iq_password: String,
        license_pool: String,
        big_ip_username: String,
        big_ip_password: String,
        reachable: bool,
        hypervisor: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoContext {
    pub header: Option<Header>,
    pub interfaces: Vec<Interface>,
    pub version: String,
    pub package_sha: String,
    pub package_url: String,
    pub schema_url: String,
    pub label: String,
    pub instance_name: String,
    pub domain_name: String,
    pub dns_servers: Vec<String>,
    pub timezone: String,
    pub ntp_servers: Vec<String>,
    pub admin_password: String,
    pub ssh_keys: Vec<String>,
    pub provision: BTreeMap<String, String>,
    pub licensing: Option<Licensing>,
}

impl Default for DoContext {
    fn default() -> Self {
        Self {
            header: None,
            interfaces: Vec::new(),
            version: DEFAULT_VERSION.into(),
            package_sha: DEFAULT_PACKAGE_SHA.into(),
            package_url: DEFAULT_PACKAGE_URL.into(),
            schema_url: DEFAULT_SCHEMA_URL.into(),
            label: DEFAULT_LABEL.into(),
            instance_name: DEFAULT_INSTANCE_NAME.into(),
            domain_name: DEFAULT_DOMAIN_NAME.into(),
            dns_servers: vec![GOOGLE_METADATA_SERVICE.into()],
            timezone: DEFAULT_TIMEZONE.into(),
            ntp_servers: vec![GOOGLE_METADATA_SERVICE.into()],
            admin_password: DEFAULT_ADMIN_PASSWORD.into(),
            ssh_keys: Vec::new(),
            provision: BTreeMap::from([("ltm".to_string(), "nominal".to_string())]),
            licensing: None,
        }
    }
}

impl DoContext {
    /// License the instance with a registration key.
    pub fn with_reg_key_licensing(&mut self, reg_key: impl Into<String>) -> DomainResult<()> {
        let reg_key = reg_key.into();
        if reg_key.is_empty() {
            return Err(DomainError::InvalidLicensingParameter {
                field: "registration key",
            });
        }
        self.licensing = Some(Licensing {
            class: LICENSE_CLASS.into(),
            mode: LicenseMode::RegKey { reg_key },
        });
        Ok(())
    }

    /// License the instance from a BIG-IQ pool.
    ///
    /// The BIG-IP credentials default to `admin` and the current admin
    /// password; [`DoContext::set_admin_password`] keeps them in step.
    pub fn with_license_pool(
        &mut self,
        pool_name: impl Into<String>,
        big_iq_host: impl Into<String>,
        big_iq_username: impl Into<String>,
        big_iq_password: impl Into<String>,
    ) -> DomainResult<()> {
        let license_pool = pool_name.into();
        let big_iq_host = big_iq_host.into();
        if license_pool.is_empty() {
            return Err(DomainError::InvalidLicensingParameter {
                field: "license pool name",
            });
        }
        if big_iq_host.is_empty() {
            return Err(DomainError::InvalidLicensingParameter {
                field: "BIG-IQ host",
            });
        }
        self.licensing = Some(Licensing {
            class: LICENSE_CLASS.into(),
            mode: LicenseMode::LicensePool {
                big_iq_host,
                big_iq_username: big_iq_username.into(),
                big_iq_password: big_iq_password.into(),
                license_pool,
                big_ip_username: DEFAULT_BIGIP_USERNAME.into(),
                big_ip_password: self.admin_password.clone(),
                reachable: false,
                hypervisor: POOL_HYPERVISOR.into(),
            },
        });
        Ok(())
    }

    /// Set the admin password, including the copy held by pool licensing.
    pub fn set_admin_password(&mut self, password: impl Into<String>) {
        self.admin_password = password.into();
        if let Some(Licensing {
            mode: LicenseMode::LicensePool {
                big_ip_password, ..
            },
            ..
        }) = self.licensing.as_mut()
        {
            big_ip_password.clone_from(&self.admin_password);
        }
    }
}

impl Declaration for DoContext {
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
    use serde_json::json;

    #[test]
    fn defaults() {
        let ctx = DoContext::default();
        assert_eq!(ctx.dns_servers, vec!["169.254.169.254"]);
        assert_eq!(ctx.ntp_servers, vec!["169.254.169.254"]);
        assert_eq!(ctx.provision.get("ltm").map(String::as_str), Some("nominal"));
        assert!(ctx.licensing.is_none());
        assert!(ctx.ssh_keys.is_empty());
    }

    #[test]
    fn empty_reg_key_is_rejected() {
        let mut ctx = DoContext::default();
        assert_eq!(
            ctx.with_reg_key_licensing(""),
            Err(DomainError::InvalidLicensingParameter {
                field: "registration key"
            })
        );
        assert!(ctx.licensing.is_none());
    }

    #[test]
    fn reg_key_licensing_serializes_inline() {
        let mut ctx = DoContext::default();
        ctx.with_reg_key_licensing(DEFAULT_REG_KEY).unwrap();
        let value = serde_json::to_value(&ctx.licensing).unwrap();
        assert_eq!(
            value,
            json!({
                "class": "License",
                "licenseType": "regKey",
                "regKey": "AAAAA-BBBBB-CCCCC-DDDDD-EEEEEEE",
            })
        );
    }

    #[test]
    fn license_pool_requires_pool_and_host() {
        let mut ctx = DoContext::default();
        assert!(ctx.with_license_pool("", "bigiq", "admin", "pw").is_err());
        assert!(ctx.with_license_pool("pool", "", "admin", "pw").is_err());
        assert!(ctx.licensing.is_none());
    }

    #[test]
    fn license_pool_tracks_admin_password() {
        let mut ctx = DoContext::default();
        ctx.with_license_pool("pool", "10.0.0.5", "iq-admin", "iq-pw")
            .unwrap();
        ctx.set_admin_password("{{{ ADMIN_PASSWORD }}}");

        let value = serde_json::to_value(&ctx.licensing).unwrap();
        assert_eq!(value["licenseType"], "licensePool");
        assert_eq!(value["bigIqHost"], "10.0.0.5");
        assert_eq!(value["licensePool"], "pool");
        assert_eq!(value["bigIpUsername"], "admin");
        assert_eq!(value["bigIpPassword"], "{{{ ADMIN_PASSWORD }}}");
        assert_eq!(value["reachable"], false);
        assert_eq!(value["hypervisor"], "gce");
    }
}
