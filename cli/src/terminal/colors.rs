// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use colored::Color;

pub const TEXT_DEFAULT: Color = Color::TrueColor {
    r: 212,
    g: 212,
    b: 212,
};

// Brackets, tree branches, prefix lengths
pub const SEPARATOR: Color = Color::BrightBlack;

// Interface names
pub const PRIMARY: Color = Color::TrueColor {
    r: 255,
    g: 204,
    b: 102,
};

// The address a restricted listener binds to
pub const SELECTED: Color = Color::TrueColor {
    r: 102,
    g: 255,
    b: 204,
};

pub const IPV4_ADDR: Color = Color::TrueColor {
    r: 170,
    g: 255,
    b: 170,
};

pub const IPV6_ADDR: Color = Color::TrueColor {
    r: 255,
    g: 102,
    b: 178,
};
