// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Command Line Interface Definitions
//!
//! The argument schema lives here; each command's execution logic lives in its
//! own submodule. `From<&CommandLine> for Config` keeps the library crates
//! unaware of how options were supplied (flag or environment variable).

pub mod interfaces;
pub mod resolve;

use clap::{ArgAction, Parser, Subcommand};
use ifbind_common::config::Config;

#[derive(Parser)]
#[command(name = "ifbind")]
#[command(about = "Restrict listen addresses to a single network interface.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Interface to restrict addresses to (e.g. tailscale0)
    #[arg(
        short = 'i',
        long = "interface",
        env = "IFBIND_INTERFACE",
        value_name = "NAME",
        global = true
    )]
    pub interface: Option<String>,

    /// Print bare results only, one per line
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Increase logging detail (-v: debug, -vv: trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rewrite host:port addresses to use the interface's IPv4 address
    #[command(alias = "r")]
    Resolve {
        #[arg(value_name = "ADDR", num_args(1..), required = true)]
        addrs: Vec<String>,
    },

    /// Show interfaces and the IPv4 address each one resolves to
    #[command(alias = "i")]
    Interfaces,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl From<&CommandLine> for Config {
    fn from(cmd: &CommandLine) -> Self {
        Self {
            interface: cmd.interface.clone(),
            quiet: cmd.quiet,
        }
    }
}
