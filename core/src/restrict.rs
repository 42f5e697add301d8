// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Interface Address Restriction
//!
//! Rewrites a `host:port` bind address so that a listener only accepts
//! connections on one named interface, e.g. serving a service on `tailscale0`
//! instead of on every interface.
//!
//! The lookup is a single linear pass. Interface state is read fresh on every
//! call and nothing is cached, so a changed interface address is picked up by
//! the next call. Every failure is returned to the caller as a
//! [`RestrictError`]; nothing is logged or retried here.

use std::net::Ipv4Addr;

use pnet::datalink::NetworkInterface;
use pnet::ipnetwork::IpNetwork;

use ifbind_common::error::RestrictError;
use ifbind_common::interface;
use ifbind_common::system::InterfaceRepository;
use ifbind_common::utils::hostport;

use crate::system::SystemRepo;

/// Restricts bind addresses to the IPv4 address of a named interface.
pub struct RestrictService {
    repo: Box<dyn InterfaceRepository + Send + Sync>,
}

impl RestrictService {
    pub fn new(repo: Box<dyn InterfaceRepository + Send + Sync>) -> Self {
        Self { repo }
    }

    /// Service backed by the host's real interfaces.
    pub fn system() -> Self {
        Self::new(Box::new(SystemRepo))
    }

    /// Returns `host_port` with its host replaced by the first IPv4 address of
    /// `iface_name`. The port is carried over verbatim, numeric or not.
    pub fn restrict(&self, host_port: &str, iface_name: &str) -> Result<String, RestrictError> {
        let ip: Ipv4Addr = self.interface_ipv4(iface_name)?;

        let (_, port) = hostport::split_host_port(host_port).map_err(|source| {
            RestrictError::MalformedAddress {
                input: host_port.to_string(),
                source,
            }
        })?;

        Ok(hostport::join_host_port(&ip.to_string(), port))
    }

    /// Resolves the IPv4 address a listener on `iface_name` should bind to.
    pub fn interface_ipv4(&self, iface_name: &str) -> Result<Ipv4Addr, RestrictError> {
        let addrs: Vec<IpNetwork> = self.interface_addresses(iface_name)?;

        interface::first_ipv4(&addrs)
            .ok_or_else(|| RestrictError::NoIpv4Address(iface_name.to_string()))
    }

    fn interface_addresses(&self, iface_name: &str) -> Result<Vec<IpNetwork>, RestrictError> {
        let interfaces: Vec<NetworkInterface> =
            self.repo.interfaces().map_err(RestrictError::Enumeration)?;

        let Some(intf) = interface::find_by_name(&interfaces, iface_name) else {
            return Err(RestrictError::InterfaceNotFound(iface_name.to_string()));
        };

        let addrs: Vec<IpNetwork> = self.repo.addresses(intf).map_err(|source| {
            RestrictError::AddressQuery {
                interface: intf.name.clone(),
                source,
            }
        })?;

        if addrs.is_empty() {
            return Err(RestrictError::InterfaceNotFound(iface_name.to_string()));
        }
        Ok(addrs)
    }
}

/// Rewrites `host_port` so that listening on it only accepts connections on
/// the interface named `iface_name`.
///
/// ```no_run
/// let addr = ifbind_core::restrict_addr_to_interface(":8080", "tailscale0")?;
/// // e.g. "100.64.1.5:8080"
/// # Ok::<(), ifbind_common::error::RestrictError>(())
/// ```
pub fn restrict_addr_to_interface(
    host_port: &str,
    iface_name: &str,
) -> Result<String, RestrictError> {
    RestrictService::system().restrict(host_port, iface_name)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
