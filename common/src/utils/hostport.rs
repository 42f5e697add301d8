// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! `host:port` splitting and joining.
//!
//! Unlike `SocketAddr` parsing, these helpers treat both halves as opaque
//! text: the host may be a name and the port is never checked for being
//! numeric. IPv6 literal hosts must be bracketed (`[::1]:8080`).

use crate::error::HostPortError;

/// Splits `host_port` into its host and port halves.
///
/// The host is returned without brackets. Either half may be empty.
pub fn split_host_port(host_port: &str) -> Result<(&str, &str), HostPortError> {
    let colon: usize = host_port.rfind(':').ok_or(HostPortError::MissingPort)?;

    let (host, open_from, close_from) = if host_port.starts_with('[') {
        let end: usize = host_port
            .find(']')
            .ok_or(HostPortError::MissingBracket)?;

        if end + 1 == host_port.len() {
            return Err(HostPortError::MissingPort);
        }
        if end + 1 != colon {
            return match host_port.as_bytes()[end + 1] {
                b':' => Err(HostPortError::TooManyColons),
                _ => Err(HostPortError::MissingPort),
            };
        }
        (&host_port[1..end], 1, end + 1)
    } else {
        let host: &str = &host_port[..colon];
        if host.contains(':') {
            return Err(HostPortError::TooManyColons);
        }
        (host, 0, 0)
    };

    if host_port[open_from..].contains('[') {
        return Err(HostPortError::UnexpectedOpenBracket);
    }
    if host_port[close_from..].contains(']') {
        return Err(HostPortError::UnexpectedCloseBracket);
    }

    Ok((host, &host_port[colon + 1..]))
}

/// Joins a host and port, bracketing the host when it contains a colon.
pub fn join_host_port(host: &str, port: &str) -> String {
    if host.contains(':') {
        format!("[{host}]:{port}")
    } else {
        format!("{host}:{port}")
    }
}
