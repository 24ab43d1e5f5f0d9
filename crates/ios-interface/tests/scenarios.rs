//! End-to-end parsing, formatting and sorting scenarios.

use ios_interface::{FormatStyle, Interface, InterfaceKind, ParseError};
use pretty_assertions::assert_eq;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[test]
fn test_parse_fast_ethernet_sub_interface() {
    let iface = Interface::parse("Fa0/0/1.123").unwrap();

    assert_eq!(iface.kind(), InterfaceKind::FastEthernet);
    assert_eq!(iface.name(), "FastEthernet");
    assert!(iface.is_physical());
    assert_eq!(iface.chassis(), None);
    assert_eq!(iface.module(), Some(0));
    assert_eq!(iface.slot(), Some(0));
    assert_eq!(iface.port(), Some(1));
    assert_eq!(iface.sub_interface(), Some(123));
    assert_eq!(iface.channel(), None);
    assert_eq!(iface.format(FormatStyle::Long), "FastEthernet0/0/1.123");
}

#[test]
fn test_parse_management() {
    let iface = Interface::parse("mgmt0").unwrap();

    assert_eq!(iface.kind(), InterfaceKind::Management);
    assert_eq!(iface.name(), "mgmt");
    assert!(iface.is_physical());
    assert_eq!(iface.port(), Some(0));
    assert_eq!(iface.chassis(), None);
    assert_eq!(iface.module(), None);
    assert_eq!(iface.slot(), None);
    assert_eq!(iface.sub_interface(), None);
    assert_eq!(iface.channel(), None);
    assert_eq!(iface.to_string(), "mgmt0");
}

#[test]
fn test_parse_serial_channel() {
    let iface = Interface::parse("Serial0/1:22").unwrap();

    assert_eq!(iface.kind(), InterfaceKind::Serial);
    assert!(iface.is_physical());
    assert_eq!(iface.module(), None);
    assert_eq!(iface.slot(), Some(0));
    assert_eq!(iface.port(), Some(1));
    assert_eq!(iface.sub_interface(), None);
    assert_eq!(iface.channel(), Some(22));
    assert_eq!(iface.to_string(), "Serial0/1:22");
}

#[test]
fn test_parse_interface_prefix() {
    let iface = Interface::parse("interface TenGigabitEthernet1/2").unwrap();

    assert_eq!(iface.kind(), InterfaceKind::TenGigabitEthernet);
    assert_eq!(iface.name(), "TenGigabitEthernet");
    assert_eq!(iface.module(), None);
    assert_eq!(iface.slot(), Some(1));
    assert_eq!(iface.port(), Some(2));
    assert_eq!(iface.to_string(), "TenGigabitEthernet1/2");
}

#[test]
fn test_try_parse_rejects_garbage() {
    init_tracing();

    assert_eq!(Interface::try_parse("not-an-interface"), None);
    assert_eq!(
        Interface::parse("not-an-interface"),
        Err(ParseError::InvalidInterface("not-an-interface".to_string()))
    );
}

#[test]
fn test_trace_events_not_compiled_out() {
    assert_eq!(
        tracing::level_filters::STATIC_MAX_LEVEL,
        tracing::level_filters::LevelFilter::TRACE
    );
}

#[test]
fn test_sort_order() {
    let gi = InterfaceKind::GigabitEthernet;
    let fa = InterfaceKind::FastEthernet;
    let vl = InterfaceKind::Vlan;

    let mut ifaces = vec![
        Interface::modular(gi, Some(1), Some(0), Some(2)),
        Interface::new(vl, 200),
        Interface::modular(fa, Some(1), Some(0), Some(2)),
        Interface::modular(gi, Some(1), Some(0), Some(1)),
        Interface::modular(gi, Some(1), Some(1), Some(1)),
        Interface::modular(gi, Some(3), Some(0), Some(1)),
        Interface::new(vl, 100),
        Interface::modular(fa, Some(1), Some(0), Some(1)),
        Interface::new(vl, 99),
        Interface::modular(gi, Some(1), Some(0), Some(12)),
    ];
    ifaces.sort();

    let names: Vec<String> = ifaces.iter().map(Interface::to_string).collect();
    assert_eq!(
        names,
        [
            "FastEthernet1/0/1",
            "FastEthernet1/0/2",
            "GigabitEthernet1/0/1",
            "GigabitEthernet1/1/1",
            "GigabitEthernet1/0/2",
            "GigabitEthernet1/0/12",
            "GigabitEthernet3/0/1",
            "Vlan99",
            "Vlan100",
            "Vlan200",
        ]
    );
}

#[test]
fn test_short_form_canonicalizes_spelling() {
    for (input, short) in [
        ("GigabitEthernet0/0/0", "Gi0/0/0"),
        ("interface Port-channel 10", "Po10"),
        ("HundredGigE1/0/1", "Hu1/0/1"),
        ("Bl0", "Bl0"),
        ("AppGigabitEthernet1/0/1", "Ap1/0/1"),
        ("Loopback0", "Lo0"),
        ("Tunnel100", "Tu100"),
        ("mgmt0", "mgmt0"),
    ] {
        let iface: Interface = input.parse().unwrap();
        assert_eq!(iface.format(FormatStyle::Short), short, "input {:?}", input);
    }
}

#[test]
fn test_module_outranks_port() {
    let low_module: Interface = "Gi1/0/12".parse().unwrap();
    let high_module: Interface = "Gi3/0/1".parse().unwrap();
    assert!(low_module < high_module);
}

#[test]
fn test_logical_interfaces() {
    for name in ["Vlan1", "Loopback0", "Tunnel1", "Port-channel1"] {
        assert!(!Interface::parse(name).unwrap().is_physical(), "{}", name);
    }
}

#[test]
fn test_holes_in_positional_fields_format_compactly() {
    let iface = Interface::from_fields(
        InterfaceKind::Serial,
        Some(1),
        Some(0),
        Some(1),
        None,
        Some(20),
        None,
    );
    assert_eq!(iface.to_string(), "Serial1/0/1.20");
}
