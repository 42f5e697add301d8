// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

#![cfg(test)]
use ifbind_common::error::RestrictError;
use ifbind_common::interface;
use ifbind_common::system::InterfaceRepository;
use ifbind_core::restrict_addr_to_interface;
use ifbind_core::system::SystemRepo;
use pnet::datalink::NetworkInterface;

use crate::LOOPBACK;

#[test]
fn test_loopback_restricts_to_127_0_0_1() {
    let result = restrict_addr_to_interface("0.0.0.0:9000", LOOPBACK);
    assert_eq!(
        result.expect("loopback should resolve"),
        "127.0.0.1:9000",
        "Loopback did not resolve to its IPv4 address"
    );
}

#[test]
fn test_loopback_keeps_named_port() {
    let result = restrict_addr_to_interface("localhost:http", LOOPBACK).unwrap();
    assert_eq!(result, "127.0.0.1:http");
}

#[test]
fn test_repeated_calls_are_stable() {
    let first = restrict_addr_to_interface("[::]:8443", LOOPBACK).unwrap();
    let second = restrict_addr_to_interface("[::]:8443", LOOPBACK).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_unknown_interface_is_not_found() {
    let err = restrict_addr_to_interface("x:80", "ifbind-absent0").unwrap_err();
    assert!(
        matches!(&err, RestrictError::InterfaceNotFound(name) if name == "ifbind-absent0"),
        "Unexpected error: {err:?}"
    );
}

#[test]
fn test_malformed_address_on_real_interface() {
    let err = restrict_addr_to_interface("justahost", LOOPBACK).unwrap_err();
    assert!(
        matches!(err, RestrictError::MalformedAddress { .. }),
        "Unexpected error: {err:?}"
    );
}

#[test]
fn test_every_host_interface_agrees_with_its_address_list() {
    let repo = SystemRepo;
    let interfaces: Vec<NetworkInterface> = repo.interfaces().unwrap();

    // Links created by other tests may vanish mid-loop.
    for intf in interfaces.iter().filter(|i| !i.name.starts_with("ifbind-")) {
        let first = interface::find_by_name(&interfaces, &intf.name).unwrap();
        let result = restrict_addr_to_interface(":1234", &intf.name);

        match (first.ips.is_empty(), interface::first_ipv4(&first.ips)) {
            (true, _) => assert!(
                matches!(result, Err(RestrictError::InterfaceNotFound(_))),
                "{} has no addresses: {result:?}",
                intf.name
            ),
            (false, None) => assert!(
                matches!(result, Err(RestrictError::NoIpv4Address(_))),
                "{} has no IPv4 address: {result:?}",
                intf.name
            ),
            (false, Some(ip)) => assert_eq!(result.unwrap(), format!("{ip}:1234")),
        }
    }
}

#[test]
#[cfg(target_os = "linux")]
fn test_privileged_dummy_link() {
    use crate::utils::DummyLink;

    let link = match DummyLink::new("ifbind-t0", &["10.201.0.1/24"]) {
        Some(l) => l,
        None => {
            eprintln!("Skipping dummy link test: Requires root privileges or 'ip' command.");
            return;
        }
    };

    let result = restrict_addr_to_interface(":8080", &link.name);
    assert_eq!(result.unwrap(), "10.201.0.1:8080");
}
