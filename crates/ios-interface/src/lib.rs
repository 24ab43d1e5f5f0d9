//! Router and switch interface names.
//!
//! This crate parses the interface identifiers used by the common
//! router/switch CLI (`GigabitEthernet1/0/1.2000`, `Fa0/0/1`, `mgmt0`,
//! `Serial0/1:22`) into a structured value, and renders them back in a
//! canonical long or short form:
//!
//! - [`Interface`]: immutable, comparable interface identifier
//! - [`InterfaceKind`]: closed set of supported interface families
//! - [`FormatStyle`]: long (`GigabitEthernet`) or short (`Gi`) rendering
//! - [`catalog`]: the fixed type table backing name resolution
//!
//! ```
//! use ios_interface::Interface;
//!
//! let mut ports: Vec<Interface> = ["Vlan100", "Gi1/0/2", "Fa1/0/1", "Vlan99"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//! ports.sort();
//!
//! let names: Vec<String> = ports.iter().map(|p| format!("{:#}", p)).collect();
//! assert_eq!(names, ["Fa1/0/1", "Gi1/0/2", "Vl99", "Vl100"]);
//! ```

pub mod catalog;
mod format;
mod interface;
mod kind;
mod parser;

pub use catalog::{CatalogError, TypeDefinition};
pub use format::FormatStyle;
pub use interface::Interface;
pub use kind::InterfaceKind;

/// Common error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid interface name: {0}")]
    InvalidInterface(String),

    #[error("unknown interface type: {0}")]
    UnknownInterfaceType(String),

    #[error("invalid format style: {0} (must be long or short)")]
    InvalidFormatStyle(String),
}
