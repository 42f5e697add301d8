// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # ifbind CLI Entry Point
//!
//! Parses the command line, installs the `tracing` subscriber, maps arguments
//! into [`Config`] and dispatches to the matching module in `commands/`.
//!
//! This is the only error boundary in the workspace: errors propagated from a
//! command are logged once here, with their full context chain, and turned
//! into a non-zero `ExitCode`.

mod commands;
mod terminal;

use std::process::ExitCode;

use ifbind_common::{config::Config, error};
use ifbind_core::{RestrictService, system::SystemRepo};

use crate::commands::{CommandLine, Commands, interfaces, resolve};

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();
    terminal::init_logging(commands.verbosity);

    let cfg = Config::from(&commands);

    let result = match &commands.command {
        Commands::Resolve { addrs } => resolve::resolve(addrs, &cfg, &RestrictService::system()),
        Commands::Interfaces => interfaces::interfaces(&cfg, &SystemRepo),
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Critical failure: {e:#}");
            ExitCode::FAILURE
        }
    }
}
