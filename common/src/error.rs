// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Error Taxonomy
//!
//! Every failure point of the address restriction is terminal for the call and
//! maps onto exactly one [`RestrictError`] variant. Each variant carries enough
//! context (interface name, offending input, OS cause) to be diagnosed without
//! re-querying the host.

use std::io;

use thiserror::Error;

/// Reasons a `host:port` string cannot be split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HostPortError {
    #[error("missing port in address")]
    MissingPort,
    #[error("missing ']' in address")]
    MissingBracket,
    #[error("too many colons in address")]
    TooManyColons,
    #[error("unexpected '[' in address")]
    UnexpectedOpenBracket,
    #[error("unexpected ']' in address")]
    UnexpectedCloseBracket,
}

/// Errors produced while restricting an address to a network interface.
#[derive(Debug, Error)]
pub enum RestrictError {
    /// The OS refused to list network interfaces.
    #[error("getting network interfaces: {0}")]
    Enumeration(#[source] io::Error),

    /// No interface carries the requested name, or it has no addresses at all.
    #[error("unknown or address-free network interface {0:?}")]
    InterfaceNotFound(String),

    /// The interface exists but its addresses could not be read.
    #[error("getting network addresses for interface {interface:?}: {source}")]
    AddressQuery {
        interface: String,
        #[source]
        source: io::Error,
    },

    /// The interface only has addresses that cannot be expressed as IPv4.
    #[error("network interface {0:?} does not have any IPv4 addresses")]
    NoIpv4Address(String),

    /// The `host:port` input could not be split.
    #[error("splitting {input:?}: {source}")]
    MalformedAddress {
        input: String,
        #[source]
        source: HostPortError,
    },
}

impl RestrictError {
    /// Name of the interface the error is attributed to, if any.
    pub fn interface(&self) -> Option<&str> {
        match self {
            Self::InterfaceNotFound(name) | Self::NoIpv4Address(name) => Some(name),
            Self::AddressQuery { interface, .. } => Some(interface),
            Self::Enumeration(_) | Self::MalformedAddress { .. } => None,
        }
    }
}
