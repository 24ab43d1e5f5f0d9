//! Fixed catalog of supported interface types and the token index built from it.
//!
//! Every [`InterfaceKind`] has exactly one [`TypeDefinition`] in
//! [`definitions()`], stored in the same order as the enum declaration so a
//! kind can index the table directly.

use crate::InterfaceKind;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Static description of one interface type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeDefinition {
    /// The kind this definition describes.
    pub kind: InterfaceKind,
    /// Canonical long name (e.g. "GigabitEthernet").
    pub name: &'static str,
    /// Recognized abbreviations. The first one is the canonical short form.
    pub abbreviations: &'static [&'static str],
    /// Whether the interface is a physical port rather than a logical one.
    pub is_physical: bool,
}

impl TypeDefinition {
    /// Returns the canonical short form.
    pub fn short_name(&self) -> &'static str {
        self.abbreviations.first().copied().unwrap_or(self.name)
    }

    /// Iterates over every token that resolves to this definition.
    pub fn tokens(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.name).chain(self.abbreviations.iter().copied())
    }
}

const fn def(
    kind: InterfaceKind,
    name: &'static str,
    abbreviations: &'static [&'static str],
    is_physical: bool,
) -> TypeDefinition {
    TypeDefinition {
        kind,
        name,
        abbreviations,
        is_physical,
    }
}

/// The interface type table, in [`InterfaceKind`] declaration order.
pub(crate) static DEFINITIONS: [TypeDefinition; InterfaceKind::COUNT] = [
    def(InterfaceKind::AppGigabitEthernet, "AppGigabitEthernet", &["Ap"], true),
    def(InterfaceKind::Bluetooth, "Bluetooth", &["Bl"], true),
    def(InterfaceKind::Ethernet, "Ethernet", &["Et"], true),
    def(InterfaceKind::FastEthernet, "FastEthernet", &["Fa"], true),
    def(InterfaceKind::FortyGigabitEthernet, "FortyGigabitEthernet", &["Fo"], true),
    def(InterfaceKind::GigabitEthernet, "GigabitEthernet", &["Gi"], true),
    def(InterfaceKind::HundredGigabitEthernet, "HundredGigE", &["Hu"], true),
    def(InterfaceKind::Loopback, "Loopback", &["Lo"], false),
    def(InterfaceKind::Management, "mgmt", &["mgmt"], true),
    def(InterfaceKind::PortChannel, "Port-channel", &["Po"], false),
    def(InterfaceKind::Serial, "Serial", &["Se"], true),
    def(InterfaceKind::TenGigabitEthernet, "TenGigabitEthernet", &["Te"], true),
    def(InterfaceKind::Tunnel, "Tunnel", &["Tu"], false),
    def(InterfaceKind::TwentyFiveGigabitEthernet, "TwentyFiveGigE", &["Twe"], true),
    def(InterfaceKind::TwoGigabitEthernet, "TwoGigabitEthernet", &["Tw"], true),
    def(InterfaceKind::Vlan, "Vlan", &["Vl"], false),
];

/// Returns the full interface type table.
pub fn definitions() -> &'static [TypeDefinition] {
    &DEFINITIONS
}

/// Errors detected while building the token index.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("token '{token}' is claimed by both {first:?} and {second:?}")]
    DuplicateToken {
        token: &'static str,
        first: InterfaceKind,
        second: InterfaceKind,
    },

    #[error("{kind:?} has no abbreviations")]
    MissingAbbreviation { kind: InterfaceKind },
}

/// Token to kind lookup.
pub(crate) type TokenIndex = HashMap<&'static str, InterfaceKind>;

/// Builds the token index for a set of definitions.
///
/// A definition may list its own name as an abbreviation, but no token may
/// resolve to two different kinds.
pub(crate) fn build_token_index(
    definitions: &[TypeDefinition],
) -> Result<TokenIndex, CatalogError> {
    let mut index = TokenIndex::new();

    for definition in definitions {
        if definition.abbreviations.is_empty() {
            return Err(CatalogError::MissingAbbreviation {
                kind: definition.kind,
            });
        }

        for token in definition.tokens() {
            match index.get(token) {
                Some(&existing) if existing != definition.kind => {
                    return Err(CatalogError::DuplicateToken {
                        token,
                        first: existing,
                        second: definition.kind,
                    });
                }
                Some(_) => {}
                None => {
                    index.insert(token, definition.kind);
                }
            }
        }
    }

    tracing::trace!(tokens = index.len(), "Built interface token index");
    Ok(index)
}

static TOKEN_INDEX: Lazy<TokenIndex> = Lazy::new(|| {
    build_token_index(&DEFINITIONS).unwrap_or_else(|e| panic!("invalid interface catalog: {e}"))
});

/// Resolves a type token (long name or abbreviation) to its kind.
pub(crate) fn lookup(token: &str) -> Option<InterfaceKind> {
    TOKEN_INDEX.get(token).copied()
}

/// Every known token, longest first.
pub(crate) fn tokens() -> Vec<&'static str> {
    let mut tokens: Vec<_> = TOKEN_INDEX.keys().copied().collect();
    tokens.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_table_follows_declaration_order() {
        assert_eq!(definitions().len(), InterfaceKind::COUNT);
        for (definition, kind) in DEFINITIONS.iter().zip(InterfaceKind::ALL) {
            assert_eq!(definition.kind, kind);
        }
    }

    #[test]
    fn test_shipped_catalog_is_unambiguous() {
        let index = build_token_index(&DEFINITIONS).unwrap();
        // mgmt lists its own name as abbreviation, so it contributes one token
        assert_eq!(index.len(), DEFINITIONS.len() * 2 - 1);
        assert_eq!(index.get("Twe"), Some(&InterfaceKind::TwentyFiveGigabitEthernet));
        assert_eq!(index.get("Tw"), Some(&InterfaceKind::TwoGigabitEthernet));
    }

    #[test]
    fn test_duplicate_token_rejected() {
        let definitions = [
            def(InterfaceKind::Ethernet, "Ethernet", &["Et"], true),
            def(InterfaceKind::FastEthernet, "FastEthernet", &["Et"], true),
        ];

        assert_eq!(
            build_token_index(&definitions),
            Err(CatalogError::DuplicateToken {
                token: "Et",
                first: InterfaceKind::Ethernet,
                second: InterfaceKind::FastEthernet,
            })
        );
    }

    #[test]
    fn test_missing_abbreviation_rejected() {
        let definitions = [def(InterfaceKind::Vlan, "Vlan", &[], false)];
        assert!(matches!(
            build_token_index(&definitions),
            Err(CatalogError::MissingAbbreviation { .. })
        ));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(lookup("Gi"), Some(InterfaceKind::GigabitEthernet));
        assert_eq!(lookup("gi"), None);
        assert_eq!(lookup("Port-channel"), Some(InterfaceKind::PortChannel));
    }

    #[test]
    fn test_tokens_longest_first() {
        let tokens = tokens();
        assert_eq!(tokens.first(), Some(&"FortyGigabitEthernet"));
        assert!(tokens.windows(2).all(|w| w[0].len() >= w[1].len()));
    }
}
