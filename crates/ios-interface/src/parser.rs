//! Interface name grammar.
//!
//! Accepted forms, optionally prefixed with `interface `:
//!
//! ```text
//! Gi1            port
//! Gi1/0          slot/port
//! Gi1/0/1        module/slot/port
//! Gi1/0/1/2      chassis/module/slot/port
//! Gi1/0/1.100    ... with sub-interface
//! Se0/1:22       ... with channel
//! ```
//!
//! Positional groups are right-aligned: the last number is always the port,
//! and fewer groups drop chassis first, then module, then slot.

use crate::catalog;
use crate::{Interface, InterfaceKind, ParseError};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Compiled interface grammar, anchored on both ends.
static INTERFACE_RE: Lazy<Regex> = Lazy::new(|| {
    let types = catalog::tokens()
        .into_iter()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|");

    let pattern = format!(
        r"^(?:interface )?(?P<type>{types}) ?(?:(?:(?:(?P<chassis>[0-9]+)/)?(?P<module>[0-9]+)/)?(?P<slot>[0-9]+)/)?(?P<port>[0-9]+)(?:\.(?P<sub>[0-9]+))?(?::(?P<channel>[0-9]+))?$"
    );

    Regex::new(&pattern).expect("Invalid interface pattern")
});

/// Parses `text` into an [`Interface`].
pub(crate) fn parse(text: &str) -> Result<Interface, ParseError> {
    let invalid = || ParseError::InvalidInterface(text.to_string());

    let Some(caps) = INTERFACE_RE.captures(text) else {
        tracing::trace!(input = %text, "Interface name does not match grammar");
        return Err(invalid());
    };

    let token = caps.name("type").map(|m| m.as_str()).ok_or_else(invalid)?;
    let kind = InterfaceKind::from_token(token).ok_or_else(|| {
        tracing::trace!(input = %text, token = %token, "Unknown interface type");
        invalid()
    })?;

    let field = |name: &str| number(&caps, name).map_err(|_| invalid());

    Ok(Interface::from_fields(
        kind,
        field("chassis")?,
        field("module")?,
        field("slot")?,
        field("port")?,
        field("sub")?,
        field("channel")?,
    ))
}

/// Extracts an optional numeric group.
///
/// The grammar only admits ASCII digits, so the only failure is overflow.
fn number(caps: &Captures<'_>, name: &str) -> Result<Option<u32>, std::num::ParseIntError> {
    caps.name(name).map(|m| m.as_str().parse()).transpose()
}
