// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use anyhow::Context;
use pnet::datalink::NetworkInterface;
use pnet::ipnetwork::IpNetwork;

use ifbind_common::error::RestrictError;
use ifbind_common::system::InterfaceRepository;
use ifbind_common::{config::Config, info, interface};

use crate::terminal::{network_fmt, print};

/// Lists interfaces with the address `resolve` would pick for each.
///
/// In raw mode every line is `<name>\t<ipv4>`, with `-` for interfaces that
/// have no IPv4 address.
pub fn interfaces(cfg: &Config, repo: &dyn InterfaceRepository) -> anyhow::Result<()> {
    let mut interfaces: Vec<NetworkInterface> =
        repo.interfaces().context("listing network interfaces")?;

    if let Some(name) = cfg.interface.as_deref() {
        interfaces.retain(|intf| intf.name == name);
        if interfaces.is_empty() {
            return Err(RestrictError::InterfaceNotFound(name.to_string()).into());
        }
    }

    info!("Found {} network interfaces", interfaces.len());

    for (idx, intf) in interfaces.iter().enumerate() {
        let ips: Vec<IpNetwork> = repo
            .addresses(intf)
            .with_context(|| format!("reading addresses of {:?}", intf.name))?;

        if cfg.is_raw() {
            print::raw_line(raw_row(&intf.name, &ips));
            continue;
        }

        network_fmt::print_interface(&intf.name, &ips, idx);
        if idx + 1 != interfaces.len() {
            print::blank();
        }
    }
    Ok(())
}

fn raw_row(name: &str, ips: &[IpNetwork]) -> String {
    let bind: String = interface::first_ipv4(ips)
        .map(|ip| ip.to_string())
        .unwrap_or_else(|| "-".to_string());
    format!("{name}\t{bind}")
}
