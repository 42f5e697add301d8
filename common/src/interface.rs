// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use pnet::datalink::NetworkInterface;
use pnet::ipnetwork::IpNetwork;
use std::net::Ipv4Addr;

/// Returns the 4-byte form of an interface address, if it has one.
///
/// IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) count as IPv4.
pub fn as_ipv4(net: &IpNetwork) -> Option<Ipv4Addr> {
    match net {
        IpNetwork::V4(v4) => Some(v4.ip()),
        IpNetwork::V6(v6) => v6.ip().to_ipv4_mapped(),
    }
}

/// Every IPv4-capable address in the order the platform reported them.
pub fn ipv4_candidates(ips: &[IpNetwork]) -> impl Iterator<Item = Ipv4Addr> + '_ {
    ips.iter().filter_map(as_ipv4)
}

/// The address a listener restricted to this address list would bind to.
pub fn first_ipv4(ips: &[IpNetwork]) -> Option<Ipv4Addr> {
    ipv4_candidates(ips).next()
}

/// First interface whose name matches exactly (case-sensitive).
pub fn find_by_name<'a>(
    interfaces: &'a [NetworkInterface],
    name: &str,
) -> Option<&'a NetworkInterface> {
    interfaces.iter().find(|intf| intf.name == name)
}
