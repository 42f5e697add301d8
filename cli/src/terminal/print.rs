// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! Result output. Everything here goes to stdout; diagnostics go through
//! `tracing` to stderr.

use colored::*;

use crate::terminal::colors;

type Detail = (String, ColoredString);

const KEY_WIDTH: usize = "IPv4".len() + 2;

pub fn raw_line<T: AsRef<str>>(line: T) {
    println!("{}", line.as_ref());
}

/// `> from → to` line for a single rewritten address.
pub fn rewrite(from: &str, to: &str) {
    println!(
        "{} {} {} {}",
        ">".color(colors::SEPARATOR),
        from.color(colors::TEXT_DEFAULT),
        "→".color(colors::SEPARATOR),
        to.color(colors::SELECTED).bold()
    );
}

pub fn tree_head(idx: usize, name: &str) {
    println!(
        "{} {}",
        format!("[{idx}]").color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    );
}

pub fn as_tree(details: Vec<Detail>) {
    for (i, (key, value)) in details.iter().enumerate() {
        let last: bool = i + 1 == details.len();
        let branch: ColoredString = if !last { "├─" } else { "└─" }.bright_black();

        let dots_count: usize = KEY_WIDTH.saturating_sub(key.len());
        let dots: ColoredString = ".".repeat(dots_count).color(colors::SEPARATOR);

        println!(
            " {} {}{}{} {}",
            branch,
            key.color(colors::TEXT_DEFAULT),
            dots,
            ":".color(colors::SEPARATOR),
            value
        );
    }
}

pub fn blank() {
    println!();
}
