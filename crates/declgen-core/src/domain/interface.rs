//! Interface Synthesizer.
//!
//! A BIG-IP on Google Cloud has up to eight NICs. NIC 1 is the management
//! interface and never carries data-plane configuration, so the synthesizer
//! only accepts indices 0 and 2..=7. Every derived value is a pure function of
//! the index; the two addressing flavors differ only in the address-bearing
//! fields.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::error::{DomainError, DomainResult};

/// The index reserved for the management interface.
pub const MANAGEMENT_INTERFACE_INDEX: i32 = 1;

/// Highest NIC index a declaration may describe.
pub const MAX_INTERFACE_INDEX: i32 = 7;

/// Services permitted on the external self-IP.
pub const EXTERNAL_ALLOW_SERVICE: [&str; 4] = ["tcp:80", "tcp:443", "tcp:4353", "udp:1026"];

const STATIC_MTU: &str = "1460";
const STATIC_BITMASK: &str = "24";

/// Function that synthesizes the interface for one NIC index.
///
/// Injected into the generator so callers pick the addressing flavor.
pub type InterfaceBuilder = Box<dyn Fn(i32) -> DomainResult<Interface> + Send + Sync>;

/// How the address-bearing fields of an interface are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Addressing {
    /// Literal IPv4 values in `10.<index>.0.0/24`.
    Static,
    /// `{{{ NAME_FIELD }}}` tokens substituted later by runtime-init.
    Placeholder,
}

/// A data-plane network interface descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interface {
    index: i32,
    addressing: Addressing,
}

impl Interface {
    /// Build an interface for `index` using the given addressing flavor.
    pub fn new(index: i32, addressing: Addressing) -> DomainResult<Self> {
        if !(0..=MAX_INTERFACE_INDEX).contains(&index) || index == MANAGEMENT_INTERFACE_INDEX {
            return Err(DomainError::InvalidInterfaceIndex { index });
        }
        Ok(Self { index, addressing })
    }

    pub fn index(&self) -> i32 {
        self.index
    }

    pub fn addressing(&self) -> Addressing {
        self.addressing
    }

    /// `external` for NIC 0, `internal` for NIC 2, `internal{n-1}` after that.
    pub fn name(&self) -> String {
        match self.index {
            0 => "external".to_string(),
            2 => "internal".to_string(),
            n => format!("internal{}", n - 1),
        }
    }

    pub fn self_ip_identifier(&self) -> String {
        format!("{}_self_ip", self.name())
    }

    pub fn address(&self) -> String {
        match self.addressing {
            Addressing::Static => format!("10.{}.0.10", self.index),
            Addressing::Placeholder => self.placeholder("ADDRESS"),
        }
    }

    pub fn vlan_tag(&self) -> u16 {
        // index is bounded to 0..=7 by the constructor
        4094 - self.index as u16
    }

    pub fn mtu(&self) -> String {
        match self.addressing {
            Addressing::Static => STATIC_MTU.to_string(),
            Addressing::Placeholder => self.placeholder("MTU"),
        }
    }

    pub fn tmm_name(&self) -> String {
        format!("1.{}", self.index)
    }

    /// Only the external interface carries an allow-list.
    pub fn allow_service(&self) -> &'static [&'static str] {
        if self.index == 0 {
            &EXTERNAL_ALLOW_SERVICE
        } else {
            &[]
        }
    }

    pub fn gateway_address(&self) -> String {
        match self.addressing {
            Addressing::Static => format!("10.{}.0.1", self.index),
            Addressing::Placeholder => self.placeholder("GATEWAY_ADDRESS"),
        }
    }

    pub fn gateway_route_name(&self) -> String {
        format!("{}_gw_rt", self.name())
    }

    pub fn network_address(&self) -> String {
        match self.addressing {
            Addressing::Static => format!("10.{}.0.0", self.index),
            Addressing::Placeholder => self.placeholder("NETWORK_ADDRESS"),
        }
    }

    pub fn network_bitmask(&self) -> String {
        match self.addressing {
            Addressing::Static => STATIC_BITMASK.to_string(),
            Addressing::Placeholder => self.placeholder("NETWORK_BITMASK"),
        }
    }

    pub fn network_route_name(&self) -> String {
        if self.index == 0 {
            "default".to_string()
        } else {
            format!("{}_nt_rt", self.name())
        }
    }

    fn placeholder(&self, field: &str) -> String {
        format!("{{{{{{ {}_{} }}}}}}", self.name().to_uppercase(), field)
    }
}

/// Builder producing literal addresses, for standalone declarations.
pub fn static_interface(index: i32) -> DomainResult<Interface> {
    Interface::new(index, Addressing::Static)
}

/// Builder producing runtime-init placeholder tokens.
pub fn placeholder_interface(index: i32) -> DomainResult<Interface> {
    Interface::new(index, Addressing::Placeholder)
}

// Templates see the derived values, not the (index, flavor) pair.
impl Serialize for Interface {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Interface", 13)?;
        state.serialize_field("index", &self.index)?;
        state.serialize_field("name", &self.name())?;
        state.serialize_field("self_ip_identifier", &self.self_ip_identifier())?;
        state.serialize_field("address", &self.address())?;
        state.serialize_field("vlan_tag", &self.vlan_tag())?;
        state.serialize_field("mtu", &self.mtu())?;
        state.serialize_field("tmm_name", &self.tmm_name())?;
        state.serialize_field("allow_service", self.allow_service())?;
        state.serialize_field("gateway_address", &self.gateway_address())?;
        state.serialize_field("gateway_route_name", &self.gateway_route_name())?;
        state.serialize_field("network_address", &self.network_address())?;
        state.serialize_field("network_bitmask", &self.network_bitmask())?;
        state.serialize_field("network_route_name", &self.network_route_name())?;
        state.end()
    }
}
