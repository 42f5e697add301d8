// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

mod restrict;

/// Name of the loopback interface on the running platform.
#[cfg(target_os = "macos")]
pub const LOOPBACK: &str = "lo0";
#[cfg(not(target_os = "macos"))]
pub const LOOPBACK: &str = "lo";

#[cfg(target_os = "linux")]
pub mod utils {
    use std::process::Command;

    /// RAII wrapper for a temporary `dummy` link carrying a fixed IPv4 address.
    ///
    /// Creating the link needs root and the `ip` command; `new` returns `None`
    /// when either is missing so callers can skip.
    pub struct DummyLink {
        pub name: String,
    }

    impl DummyLink {
        pub fn new(name: &str, cidrs: &[&str]) -> Option<Self> {
            Self::cleanup(name);

            if !run_cmd("ip", &["link", "add", name, "type", "dummy"]) {
                return None;
            }

            for cidr in cidrs {
                if !run_cmd("ip", &["addr", "add", cidr, "dev", name]) {
                    Self::cleanup(name);
                    return None;
                }
            }
            run_cmd("ip", &["link", "set", name, "up"]);

            Some(Self {
                name: name.to_string(),
            })
        }

        fn cleanup(name: &str) {
            let _ = Command::new("ip").args(["link", "del", name]).output();
        }
    }

    impl Drop for DummyLink {
        fn drop(&mut self) {
            Self::cleanup(&self.name);
        }
    }

    fn run_cmd(cmd: &str, args: &[&str]) -> bool {
        match Command::new(cmd).args(args).output() {
            Ok(out) => out.status.success(),
            Err(_) => false,
        }
    }
}
