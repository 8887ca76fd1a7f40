// SPDX-License-Identifier: MIT

//! Stock names and starting colors.
//!
//! Used to fill in what a config leaves out (the alias set) and to offer
//! sensible defaults when a palette is assembled interactively.

use crate::config::Appearance;

/// The stock alias set as `(alias, offset from the base color)`.
///
/// On the fine scale this is `"": 50, Dark: 30, Demote: 40, Bright: 60,
/// Section: 80`.
pub const DEFAULT_ALIAS_OFFSETS: &[(&str, f64)] = &[
    ("", 0.0),
    ("Dark", -40.0),
    ("Demote", -20.0),
    ("Bright", 20.0),
    ("Section", 60.0),
];

/// The stock accent colors, in emission order, with a starting value each.
const ACCENTS: &[(&str, &str)] = &[
    ("red", "#E5484D"),
    ("green", "#30A46C"),
    ("blue", "#0090FF"),
    ("yellow", "#FFE629"),
    ("orange", "#F76B15"),
    ("purple", "#8E4EC6"),
    ("pink", "#D6409F"),
    ("slate", "#8B8D98"),
    ("cyan", "#00A2C7"),
    ("teal", "#12A594"),
    ("grey", "#8D8D8D"),
];

/// Names of the stock themes.
pub const THEME_NAMES: &[&str] = &["dark", "light"];

/// Names of the stock accent colors, in emission order.
#[must_use]
pub fn accent_names() -> Vec<&'static str> {
    ACCENTS.iter().map(|&(name, _)| name).collect()
}

/// Starting value for a stock accent color.
#[must_use]
pub fn default_accent(name: &str) -> Option<&'static str> {
    ACCENTS
        .iter()
        .find(|&&(n, _)| n == name)
        .map(|&(_, hex)| hex)
}

/// Starting `(canvas, type)` colors for a theme of the given appearance.
#[must_use]
pub const fn default_base_colors(appearance: Appearance) -> (&'static str, &'static str) {
    match appearance {
        Appearance::Dark => ("#111111", "#EEEEEE"),
        Appearance::Light => ("#FCFCFC", "#202020"),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
