// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::net::{Ipv4Addr, Ipv6Addr};

use crate::terminal::{colors, print};
use colored::*;
use ifbind_common::interface;
use pnet::ipnetwork::IpNetwork;

const BIND_MARK: &str = "◂ bind";

fn ipv6_key(ipv6_addr: &Ipv6Addr) -> &'static str {
    if ipv6_addr.is_unicast_link_local() {
        "LLA"
    } else if ipv6_addr.is_unique_local() {
        "ULA"
    } else {
        "IPv6"
    }
}

/// One tree row per address. The address `resolve` would bind to is marked.
pub fn to_key_value_pair_net(
    ip_net: &[IpNetwork],
    selected: Option<Ipv4Addr>,
) -> Vec<(String, ColoredString)> {
    let mut marked: bool = false;

    ip_net
        .iter()
        .map(|ip_network| {
            let is_selected: bool =
                !marked && selected.is_some() && interface::as_ipv4(ip_network) == selected;
            marked |= is_selected;

            let (key, address, prefix): (&str, ColoredString, ColoredString) = match ip_network {
                IpNetwork::V4(v4) => (
                    "IPv4",
                    v4.ip().to_string().color(colors::IPV4_ADDR),
                    v4.prefix().to_string().color(colors::SEPARATOR),
                ),
                IpNetwork::V6(v6) => (
                    ipv6_key(&v6.ip()),
                    v6.ip().to_string().color(colors::IPV6_ADDR),
                    v6.prefix().to_string().color(colors::SEPARATOR),
                ),
            };

            let mut value: String = format!("{address}/{prefix}");
            if is_selected {
                value = format!("{value} {}", BIND_MARK.color(colors::SELECTED).bold());
            }
            (key.to_string(), value.color(colors::SEPARATOR))
        })
        .collect()
}

pub fn print_interface(name: &str, ips: &[IpNetwork], idx: usize) {
    print::tree_head(idx, name);
    let selected: Option<Ipv4Addr> = interface::first_ipv4(ips);
    let mut details: Vec<(String, ColoredString)> = to_key_value_pair_net(ips, selected);
    if selected.is_none() {
        details.push((
            "bind".to_string(),
            "no IPv4 address".color(colors::TEXT_DEFAULT).dimmed(),
        ));
    }
    print::as_tree(details);
}
