//! Canonical long and short renderings.

use crate::{Interface, ParseError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rendering style for an interface name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatStyle {
    /// Canonical long name, e.g. `GigabitEthernet1/0/1` (default).
    #[default]
    Long,
    /// Canonical abbreviation, e.g. `Gi1/0/1`.
    Short,
}

impl fmt::Display for FormatStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatStyle::Long => write!(f, "long"),
            FormatStyle::Short => write!(f, "short"),
        }
    }
}

impl FromStr for FormatStyle {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "long" | "default" => Ok(FormatStyle::Long),
            "short" => Ok(FormatStyle::Short),
            _ => Err(ParseError::InvalidFormatStyle(s.to_string())),
        }
    }
}

/// Writes `iface` in the given style.
pub(crate) fn write_interface(
    f: &mut impl fmt::Write,
    iface: &Interface,
    style: FormatStyle,
) -> fmt::Result {
    let kind = iface.kind();
    f.write_str(match style {
        FormatStyle::Long => kind.name(),
        FormatStyle::Short => kind.short_name(),
    })?;

    let positional = [iface.chassis(), iface.module(), iface.slot(), iface.port()];
    for (i, value) in positional.into_iter().flatten().enumerate() {
        if i > 0 {
            f.write_char('/')?;
        }
        write!(f, "{}", value)?;
    }

    if let Some(sub) = iface.sub_interface() {
        write!(f, ".{}", sub)?;
    }
    if let Some(channel) = iface.channel() {
        write!(f, ":{}", channel)?;
    }
    Ok(())
}
