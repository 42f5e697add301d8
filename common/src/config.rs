// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

/// Runtime options for the command-line front end.
///
/// Built from CLI arguments (and their environment fallbacks). The
/// restriction logic itself takes no configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Interface that addresses are restricted to.
    ///
    /// Mapped from `-i`/`--interface` or the `IFBIND_INTERFACE` environment
    /// variable. `None` means the command has to be told which interface to use;
    /// `interfaces` then lists every interface instead of a single one.
    pub interface: Option<String>,

    /// Controls the visual density of the terminal output.
    ///
    /// # Levels
    /// * **0** (Default): Styled output with colors and address annotations.
    /// * **1+**: Raw mode. Bare results only, one per line, suitable for shell substitution.
    pub quiet: u8,
}

impl Config {
    pub fn is_raw(&self) -> bool {
        self.quiet > 0
    }
}
