//! The structured interface value.

use crate::format::{self, FormatStyle};
use crate::parser;
use crate::{InterfaceKind, ParseError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A parsed, canonicalized interface identifier.
///
/// Values are immutable; the `with_*` methods return a modified copy.
///
/// # Examples
///
/// ```
/// use ios_interface::{FormatStyle, Interface, InterfaceKind};
///
/// let iface: Interface = "Fa0/0/1.123".parse().unwrap();
/// assert_eq!(iface.kind(), InterfaceKind::FastEthernet);
/// assert_eq!(iface.module(), Some(0));
/// assert_eq!(iface.slot(), Some(0));
/// assert_eq!(iface.port(), Some(1));
/// assert_eq!(iface.sub_interface(), Some(123));
///
/// assert_eq!(iface.to_string(), "FastEthernet0/0/1.123");
/// assert_eq!(iface.format(FormatStyle::Short), "Fa0/0/1.123");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Interface {
    kind: InterfaceKind,
    chassis: Option<u32>,
    module: Option<u32>,
    slot: Option<u32>,
    port: Option<u32>,
    sub_interface: Option<u32>,
    channel: Option<u32>,
}

impl Interface {
    /// Creates a single-number interface such as `Vlan10` or `Loopback0`.
    pub const fn new(kind: InterfaceKind, port: u32) -> Self {
        Self::from_fields(kind, None, None, None, Some(port), None, None)
    }

    /// Creates a `module/slot/port` interface such as `GigabitEthernet1/0/1`.
    pub const fn modular(
        kind: InterfaceKind,
        module: Option<u32>,
        slot: Option<u32>,
        port: Option<u32>,
    ) -> Self {
        Self::from_fields(kind, None, module, slot, port, None, None)
    }

    /// Creates a `module/slot/port.sub_interface` interface.
    pub const fn modular_with_sub_interface(
        kind: InterfaceKind,
        module: Option<u32>,
        slot: Option<u32>,
        port: Option<u32>,
        sub_interface: Option<u32>,
    ) -> Self {
        Self::from_fields(kind, None, module, slot, port, sub_interface, None)
    }

    /// Creates an interface from every field.
    #[allow(clippy::too_many_arguments)]
    pub const fn from_fields(
        kind: InterfaceKind,
        chassis: Option<u32>,
        module: Option<u32>,
        slot: Option<u32>,
        port: Option<u32>,
        sub_interface: Option<u32>,
        channel: Option<u32>,
    ) -> Self {
        Interface {
            kind,
            chassis,
            module,
            slot,
            port,
            sub_interface,
            channel,
        }
    }

    /// Parses an interface name, failing on any grammar or type mismatch.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidInterface`] if `text` is not a complete
    /// interface name with a known type.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        parser::parse(text)
    }

    /// Parses an interface name, returning `None` if it does not match.
    pub fn try_parse(text: &str) -> Option<Self> {
        parser::parse(text).ok()
    }

    pub const fn kind(&self) -> InterfaceKind {
        self.kind
    }

    pub const fn chassis(&self) -> Option<u32> {
        self.chassis
    }

    pub const fn module(&self) -> Option<u32> {
        self.module
    }

    pub const fn slot(&self) -> Option<u32> {
        self.slot
    }

    pub const fn port(&self) -> Option<u32> {
        self.port
    }

    pub const fn sub_interface(&self) -> Option<u32> {
        self.sub_interface
    }

    pub const fn channel(&self) -> Option<u32> {
        self.channel
    }

    /// Canonical long name of the interface type.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Returns true if the interface type is a physical port.
    pub fn is_physical(&self) -> bool {
        self.kind.is_physical()
    }

    /// Returns a copy with the sub-interface replaced.
    pub const fn with_sub_interface(self, sub_interface: Option<u32>) -> Self {
        Interface {
            sub_interface,
            ..self
        }
    }

    /// Returns a copy with the channel replaced.
    pub const fn with_channel(self, channel: Option<u32>) -> Self {
        Interface { channel, ..self }
    }

    /// Returns the interface this one is carved from, i.e. without
    /// sub-interface and channel. `Gi1/0/1.100` has parent `Gi1/0/1`.
    pub const fn parent(self) -> Self {
        self.with_sub_interface(None).with_channel(None)
    }

    /// Renders the interface in the requested style.
    pub fn format(&self, style: FormatStyle) -> String {
        match style {
            FormatStyle::Long => self.to_string(),
            FormatStyle::Short => format!("{:#}", self),
        }
    }

    /// Renders the interface with the canonical abbreviation.
    pub fn short_name(&self) -> String {
        self.format(FormatStyle::Short)
    }
}

/// Orders by kind, chassis, module, port, slot, sub-interface, channel.
///
/// Port is compared before slot, unlike the textual `slot/port` order, so
/// `Gi1/1/1` sorts before `Gi1/0/2`. Absent fields sort before present ones.
impl Ord for Interface {
    fn cmp(&self, other: &Self) -> Ordering {
        self.kind
            .cmp(&other.kind)
            .then_with(|| self.chassis.cmp(&other.chassis))
            .then_with(|| self.module.cmp(&other.module))
            .then_with(|| self.port.cmp(&other.port))
            .then_with(|| self.slot.cmp(&other.slot))
            .then_with(|| self.sub_interface.cmp(&other.sub_interface))
            .then_with(|| self.channel.cmp(&other.channel))
    }
}

impl PartialOrd for Interface {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Long form by default; `{:#}` renders the short form.
impl fmt::Display for Interface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = if f.alternate() {
            FormatStyle::Short
        } else {
            FormatStyle::Long
        };
        format::write_interface(f, self, style)
    }
}

impl FromStr for Interface {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Interface {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Interface> for String {
    fn from(iface: Interface) -> String {
        iface.to_string()
    }
}
