// SPDX-License-Identifier: MIT

//! The composed palette: what code emission consumes.
//!
//! A [`PaletteResult`] holds one [`ColorGradient`] per accent color and one
//! [`ThemePalette`] per theme. It is built once by
//! [`compose_palette`](crate::compose_palette) and never mutated afterwards.

use indexmap::IndexMap;
use serde::Serialize;
use stg_color::HexColor;

use crate::config::Appearance;
use crate::gradient::ColorGradient;
use crate::scale::ColorAliases;

// ---------------------------------------------------------------------------
// ThemeColors
// ---------------------------------------------------------------------------

/// The semantic background and text ladders of one theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    // ── Backgrounds ───────────────────────────────────────────
    /// Page background, as configured.
    pub canvas: HexColor,
    /// One notch off the canvas (cards, panels).
    pub section: HexColor,
    /// Two notches off the canvas (hovered sections).
    pub section_highlight: HexColor,
    /// Three notches off the canvas (borders).
    pub outline: HexColor,

    // ── Foregrounds ───────────────────────────────────────────
    /// Primary text, as configured.
    #[serde(rename = "type")]
    pub type_color: HexColor,
    /// Body copy.
    pub type_body: HexColor,
    /// De-emphasized text.
    pub type_demote: HexColor,
}

impl ThemeColors {
    /// Field names of every tier, backgrounds first.
    pub const FIELD_NAMES: [&'static str; 7] = [
        "canvas",
        "section",
        "sectionHighlight",
        "outline",
        "type",
        "typeBody",
        "typeDemote",
    ];

    /// `(field name, color)` for the background tiers.
    #[must_use]
    pub fn backgrounds(&self) -> [(&'static str, &HexColor); 4] {
        [
            ("canvas", &self.canvas),
            ("section", &self.section),
            ("sectionHighlight", &self.section_highlight),
            ("outline", &self.outline),
        ]
    }

    /// `(field name, color)` for the text tiers.
    #[must_use]
    pub fn foregrounds(&self) -> [(&'static str, &HexColor); 3] {
        [
            ("type", &self.type_color),
            ("typeBody", &self.type_body),
            ("typeDemote", &self.type_demote),
        ]
    }
}

// ---------------------------------------------------------------------------
// ThemePalette
// ---------------------------------------------------------------------------

/// Everything known about one theme after composition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemePalette {
    pub appearance: Appearance,
    pub colors: ThemeColors,
    /// The alias set this theme exposes, in declaration order.
    pub aliases: ColorAliases,
    /// The accent colors this theme exposes, in emission order.
    pub accents: Vec<String>,
}

// ---------------------------------------------------------------------------
// PaletteResult
// ---------------------------------------------------------------------------

/// The fully composed palette: every theme plus every accent gradient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteResult {
    themes: IndexMap<String, ThemePalette>,
    colors: IndexMap<String, ColorGradient>,
}

impl PaletteResult {
    #[must_use]
    pub const fn new(
        themes: IndexMap<String, ThemePalette>,
        colors: IndexMap<String, ColorGradient>,
    ) -> Self {
        Self { themes, colors }
    }

    /// Themes in declaration order.
    #[must_use]
    pub const fn themes(&self) -> &IndexMap<String, ThemePalette> {
        &self.themes
    }

    /// Accent gradients in declaration order.
    #[must_use]
    pub const fn colors(&self) -> &IndexMap<String, ColorGradient> {
        &self.colors
    }

    #[must_use]
    pub fn theme(&self, name: &str) -> Option<&ThemePalette> {
        self.themes.get(name)
    }

    #[must_use]
    pub fn gradient(&self, color: &str) -> Option<&ColorGradient> {
        self.colors.get(color)
    }

    /// Resolve `color` + `alias` in `theme` to a concrete color.
    #[must_use]
    pub fn alias_color(&self, theme: &str, color: &str, alias: &str) -> Option<&HexColor> {
        let step = *self.theme(theme)?.aliases.get(alias)?;
        self.gradient(color)?.get(step)
    }
}
