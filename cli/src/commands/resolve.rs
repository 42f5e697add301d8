// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use anyhow::{Context, bail};
use ifbind_common::{config::Config, debug, success};
use ifbind_core::RestrictService;

use crate::terminal::print;

/// Resolves every address against the configured interface, stopping at the
/// first failure.
pub fn resolve(addrs: &[String], cfg: &Config, service: &RestrictService) -> anyhow::Result<()> {
    let Some(iface) = cfg.interface.as_deref() else {
        bail!("no interface given, pass --interface or set IFBIND_INTERFACE");
    };

    for addr in addrs {
        debug!("Restricting {addr} to interface {iface}");
        let restricted: String = service
            .restrict(addr, iface)
            .with_context(|| format!("restricting {addr:?} to interface {iface:?}"))?;

        success!("{addr} restricted to {restricted} on {iface}");
        if cfg.is_raw() {
            print::raw_line(&restricted);
        } else {
            print::rewrite(addr, &restricted);
        }
    }
    Ok(())
}
