// SPDX-License-Identifier: MIT

//! The naming contract of generated code.
//!
//! | Name                 | Rule                          | Example            |
//! |----------------------|-------------------------------|--------------------|
//! | alias field          | `color + Capitalize(alias)`   | `redDemote`, `red` |
//! | color table key      | `color + step`                | `red30`            |
//! | gradient array       | `UPPER_SNAKE(color) + "S"`    | `REDS`             |
//! | entries array        | `UPPER_SNAKE(color) + "_ENTRIES"` | `RED_ENTRIES`  |
//! | theme palette        | `UPPER_SNAKE(theme) + "_PALETTE"` | `DARK_PALETTE` |
//!
//! Changing any of these breaks every consumer of the generated file.

use std::sync::LazyLock;

use regex::Regex;
use stg_theme::GradientStep;

static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("invalid IDENTIFIER regex")
});

/// Upper-case the first character, leave the rest alone.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `red` + `Demote` → `redDemote`. The empty alias yields the bare color.
#[must_use]
pub fn alias_field(color: &str, alias: &str) -> String {
    format!("{color}{}", capitalize(alias))
}

/// `red` + 30 → `red30`.
#[must_use]
pub fn table_key(color: &str, step: GradientStep) -> String {
    format!("{color}{step}")
}

/// `darkRed` / `dark-red` / `dark red` → `DARK_RED`.
#[must_use]
pub fn upper_snake(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;

    for c in name.chars() {
        if matches!(c, '-' | '_' | ' ') {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            prev = None;
            continue;
        }
        if c.is_uppercase() && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
            out.push('_');
        }
        out.extend(c.to_uppercase());
        prev = Some(c);
    }

    out
}

/// Whether `s` can be used as a bare identifier in the generated code.
#[must_use]
pub fn is_identifier(s: &str) -> bool {
    IDENTIFIER.is_match(s)
}

/// Names of the module-level items in the generated file.
///
/// The per-name rules above are fixed; this only controls the fixed names
/// and suffixes around them. [`Default`] matches what existing front-end
/// code imports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingConvention {
    /// The flat color table (`COLORS`).
    pub colors_table: String,
    /// The array of every entries array (`COLOR_ENTRIES`).
    pub all_entries: String,
    /// Appended to a color for its gradient array (`S`).
    pub gradient_suffix: String,
    /// Appended to a color for its entries array (`_ENTRIES`).
    pub entries_suffix: String,
    /// Appended to a theme for its palette object (`_PALETTE`).
    pub palette_suffix: String,
    /// The palette shape type (`Palette`).
    pub palette_type: String,
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self {
            colors_table: "COLORS".to_owned(),
            all_entries: "COLOR_ENTRIES".to_owned(),
            gradient_suffix: "S".to_owned(),
            entries_suffix: "_ENTRIES".to_owned(),
            palette_suffix: "_PALETTE".to_owned(),
            palette_type: "Palette".to_owned(),
        }
    }
}

impl NamingConvention {
    #[must_use]
    pub fn gradient_const(&self, color: &str) -> String {
        format!("{}{}", upper_snake(color), self.gradient_suffix)
    }

    #[must_use]
    pub fn entries_const(&self, color: &str) -> String {
        format!("{}{}", upper_snake(color), self.entries_suffix)
    }

    #[must_use]
    pub fn palette_const(&self, theme: &str) -> String {
        format!("{}{}", upper_snake(theme), self.palette_suffix)
    }

    /// `COLORS.red30`.
    #[must_use]
    pub fn table_ref(&self, color: &str, step: GradientStep) -> String {
        format!("{}.{}", self.colors_table, table_key(color, step))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
