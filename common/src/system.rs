// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::io;

use pnet::datalink::NetworkInterface;
use pnet::ipnetwork::IpNetwork;

/// Defines the contract for reading OS-level interface state.
///
/// Both operations are read-only queries. Implementations must not cache:
/// every call reflects the host as it is at that moment.
pub trait InterfaceRepository {
    /// Lists every network interface known to the host.
    fn interfaces(&self) -> io::Result<Vec<NetworkInterface>>;

    /// Lists the addresses assigned to `interface`, in the order the platform reports them.
    fn addresses(&self, interface: &NetworkInterface) -> io::Result<Vec<IpNetwork>>;
}

/// In-memory interface table.
///
/// Stands in for the OS when the host's real devices are irrelevant, and can
/// be told to fail either query.
#[derive(Debug, Clone, Default)]
pub struct StaticInterfaces {
    interfaces: Vec<NetworkInterface>,
    fail_enumeration: bool,
    fail_addresses_for: Option<String>,
}

impl StaticInterfaces {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an interface. Duplicated names are kept in insertion order.
    pub fn with_interface(mut self, name: &str, ips: Vec<IpNetwork>) -> Self {
        let index: u32 = self.interfaces.len() as u32 + 1;
        self.interfaces.push(NetworkInterface {
            name: name.to_string(),
            description: String::new(),
            index,
            mac: None,
            ips,
            flags: 0,
        });
        self
    }

    /// Makes [`InterfaceRepository::interfaces`] fail.
    pub fn failing_enumeration(mut self) -> Self {
        self.fail_enumeration = true;
        self
    }

    /// Makes [`InterfaceRepository::addresses`] fail for the named interface.
    pub fn failing_addresses(mut self, name: &str) -> Self {
        self.fail_addresses_for = Some(name.to_string());
        self
    }
}

impl InterfaceRepository for StaticInterfaces {
    fn interfaces(&self) -> io::Result<Vec<NetworkInterface>> {
        if self.fail_enumeration {
            return Err(io::Error::other("interface table unavailable"));
        }
        Ok(self.interfaces.clone())
    }

    fn addresses(&self, interface: &NetworkInterface) -> io::Result<Vec<IpNetwork>> {
        if self.fail_addresses_for.as_deref() == Some(interface.name.as_str()) {
            return Err(io::Error::other(format!(
                "address table for {} unavailable",
                interface.name
            )));
        }
        Ok(interface.ips.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_interfaces_preserve_insertion_order() {
        let repo = StaticInterfaces::new()
            .with_interface("lo0", vec!["127.0.0.1/8".parse().unwrap()])
            .with_interface("en0", vec![]);

        let names: Vec<String> = repo
            .interfaces()
            .unwrap()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["lo0", "en0"]);
    }

    #[test]
    fn static_interfaces_fail_on_request() {
        let repo = StaticInterfaces::new()
            .with_interface("wg0", vec!["10.8.0.2/24".parse().unwrap()])
            .failing_addresses("wg0");

        let wg0 = repo.interfaces().unwrap().remove(0);
        assert!(repo.addresses(&wg0).is_err());

        let repo = repo.failing_enumeration();
        assert!(repo.interfaces().is_err());
    }
}
