// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

pub mod colors;
pub mod logging;
pub mod network_fmt;
pub mod print;

use ifbind_common::logging::TARGET;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs the global subscriber. Log events go to stderr so stdout only
/// ever carries results.
pub fn init_logging(verbosity: u8) {
    let filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    let formatting_layer = tracing_subscriber::fmt::layer()
        .event_format(logging::IfbindFormatter)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(formatting_layer)
        .init();
}

fn default_directives(verbosity: u8) -> String {
    match verbosity {
        0 => format!("warn,{TARGET}=info"),
        1 => format!("warn,{TARGET}=debug"),
        _ => format!("warn,{TARGET}=trace"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_only_our_target() {
        assert_eq!(default_directives(0), "warn,ifbind=info");
        assert_eq!(default_directives(1), "warn,ifbind=debug");
        assert_eq!(default_directives(2), "warn,ifbind=trace");
        assert_eq!(default_directives(5), "warn,ifbind=trace");
    }
}
