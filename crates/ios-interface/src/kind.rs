//! Interface type families.

use crate::catalog::{self, TypeDefinition, DEFINITIONS};
use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Family of a network interface (GigabitEthernet, Vlan, Port-channel, ...).
///
/// The declaration order is the primary sort key of [`Interface`](crate::Interface).
/// Serializes as the canonical long name and deserializes from any token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum InterfaceKind {
    AppGigabitEthernet,
    Bluetooth,
    Ethernet,
    FastEthernet,
    FortyGigabitEthernet,
    GigabitEthernet,
    HundredGigabitEthernet,
    Loopback,
    /// Out-of-band management port (`mgmt0`).
    Management,
    /// Link aggregation group (`Port-channel1`).
    PortChannel,
    Serial,
    TenGigabitEthernet,
    Tunnel,
    TwentyFiveGigabitEthernet,
    TwoGigabitEthernet,
    /// Switch virtual interface.
    Vlan,
}

impl InterfaceKind {
    /// Number of supported kinds.
    pub const COUNT: usize = 16;

    /// All kinds in declaration order.
    pub const ALL: [InterfaceKind; Self::COUNT] = [
        InterfaceKind::AppGigabitEthernet,
        InterfaceKind::Bluetooth,
        InterfaceKind::Ethernet,
        InterfaceKind::FastEthernet,
        InterfaceKind::FortyGigabitEthernet,
        InterfaceKind::GigabitEthernet,
        InterfaceKind::HundredGigabitEthernet,
        InterfaceKind::Loopback,
        InterfaceKind::Management,
        InterfaceKind::PortChannel,
        InterfaceKind::Serial,
        InterfaceKind::TenGigabitEthernet,
        InterfaceKind::Tunnel,
        InterfaceKind::TwentyFiveGigabitEthernet,
        InterfaceKind::TwoGigabitEthernet,
        InterfaceKind::Vlan,
    ];

    /// Returns the catalog entry for this kind.
    pub fn definition(self) -> &'static TypeDefinition {
        &DEFINITIONS[self as usize]
    }

    /// Canonical long name, e.g. "GigabitEthernet".
    pub fn name(self) -> &'static str {
        self.definition().name
    }

    /// Canonical abbreviation, e.g. "Gi".
    pub fn short_name(self) -> &'static str {
        self.definition().short_name()
    }

    pub fn abbreviations(self) -> &'static [&'static str] {
        self.definition().abbreviations
    }

    /// Returns true if this is a physical port type.
    pub fn is_physical(self) -> bool {
        self.definition().is_physical
    }

    /// Returns true if this is a logical interface (Vlan, Loopback, Tunnel, Port-channel).
    pub fn is_logical(self) -> bool {
        !self.is_physical()
    }

    /// Resolves an exact, case-sensitive long name or abbreviation.
    ///
    /// ```
    /// use ios_interface::InterfaceKind;
    ///
    /// assert_eq!(InterfaceKind::from_token("Te"), Some(InterfaceKind::TenGigabitEthernet));
    /// assert_eq!(InterfaceKind::from_token("Port-channel"), Some(InterfaceKind::PortChannel));
    /// assert_eq!(InterfaceKind::from_token("te"), None);
    /// ```
    pub fn from_token(token: &str) -> Option<Self> {
        catalog::lookup(token)
    }
}

impl fmt::Display for InterfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(self.short_name())
        } else {
            f.write_str(self.name())
        }
    }
}

impl FromStr for InterfaceKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| ParseError::UnknownInterfaceType(s.to_string()))
    }
}

impl TryFrom<String> for InterfaceKind {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<InterfaceKind> for String {
    fn from(kind: InterfaceKind) -> String {
        kind.name().to_string()
    }
}
