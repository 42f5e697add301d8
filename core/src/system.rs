// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::io;

use pnet::datalink::{self, NetworkInterface};
use pnet::ipnetwork::IpNetwork;

use ifbind_common::debug;
use ifbind_common::system::InterfaceRepository;

/// Reads interface state straight from the operating system through `pnet`.
///
/// `pnet` folds a failed `getifaddrs` into an empty list, so on this backend an
/// enumeration failure surfaces as an unknown interface.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRepo;

impl InterfaceRepository for SystemRepo {
    fn interfaces(&self) -> io::Result<Vec<NetworkInterface>> {
        let interfaces: Vec<NetworkInterface> = datalink::interfaces();
        debug!("Enumerated {} network interfaces", interfaces.len());
        Ok(interfaces)
    }

    fn addresses(&self, interface: &NetworkInterface) -> io::Result<Vec<IpNetwork>> {
        Ok(interface.ips.clone())
    }
}
