// SPDX-License-Identifier: MIT

//! The input shape of a palette.
//!
//! ```json
//! {
//!   "colors": { "red": "#E5484D", "blue": "#0090FF" },
//!   "themes": {
//!     "dark":  { "canvas": "#111111", "type": "#EEEEEE",
//!                "aliases": { "": 50, "Demote": 40 } },
//!     "light": { "canvas": "#FCFCFC", "type": "#202020", "accents": ["red"] }
//!   },
//!   "scale": "fine"
//! }
//! ```
//!
//! Color values stay plain strings here. They are parsed when composition
//! first uses them, which is where a malformed one surfaces as
//! [`ColorError::InvalidColorFormat`](stg_color::ColorError).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::scale::{ColorAliases, GradientScale, ScaleStep};

/// The complete input of [`compose_palette`](crate::compose_palette).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaletteConfig {
    /// Accent color name → base hex color, in emission order.
    #[serde(default)]
    pub colors: IndexMap<String, String>,

    /// Theme name → theme base colors, in emission order.
    #[serde(default)]
    pub themes: IndexMap<String, ThemeConfig>,

    /// Gradient scale. `None` means the fine scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<ScaleConfig>,
}

impl PaletteConfig {
    /// The configured scale, validated, or the fine scale when none is set.
    ///
    /// # Errors
    ///
    /// [`ThemeError::InvalidScale`] for a malformed custom scale.
    pub fn resolve_scale(&self) -> Result<GradientScale, ThemeError> {
        self.scale
            .as_ref()
            .map_or_else(|| Ok(GradientScale::default()), ScaleConfig::resolve)
    }
}

/// One theme's base colors and the aliases it exposes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Page background.
    pub canvas: String,

    /// Primary text color.
    #[serde(rename = "type")]
    pub type_color: String,

    /// Alias name → step. Empty means the stock alias set for the scale.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub aliases: ColorAliases,

    /// Dark or light. Inferred from the theme name when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appearance: Option<Appearance>,

    /// Which accent colors this theme exposes. `None` means all of them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accents: Option<Vec<String>>,
}

impl ThemeConfig {
    #[must_use]
    pub fn new(canvas: impl Into<String>, type_color: impl Into<String>) -> Self {
        Self {
            canvas: canvas.into(),
            type_color: type_color.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = Some(appearance);
        self
    }

    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>, step: u16) -> Self {
        self.aliases.insert(alias.into(), step.into());
        self
    }

    #[must_use]
    pub fn with_accents<I, S>(mut self, accents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accents = Some(accents.into_iter().map(Into::into).collect());
        self
    }
}

// ---------------------------------------------------------------------------
// Appearance
// ---------------------------------------------------------------------------

/// Which way a theme's ladders run.
///
/// Dark themes step backgrounds lighter and text darker; light themes do the
/// opposite. The whole difference is the sign of [`Appearance::coefficient`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    Dark,
    Light,
}

impl Appearance {
    /// +1 for dark, −1 for light.
    #[must_use]
    pub const fn coefficient(self) -> f64 {
        match self {
            Self::Dark => 1.0,
            Self::Light => -1.0,
        }
    }

    /// Guess from a theme name: a name with `light` as one of its words is
    /// light (`light`, `highContrastLight`, `solarized-light`). `twilight`
    /// and `highlight` are not.
    #[must_use]
    pub fn infer(theme_name: &str) -> Self {
        if name_words(theme_name)
            .iter()
            .any(|word| word.eq_ignore_ascii_case("light"))
        {
            Self::Light
        } else {
            Self::Dark
        }
    }
}

/// Split a theme name into words at separators, digits and camelCase humps.
fn name_words(name: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start: Option<usize> = None;
    let mut prev_lower = false;

    for (i, c) in name.char_indices() {
        if !c.is_alphabetic() {
            if let Some(s) = start.take() {
                words.push(&name[s..i]);
            }
            prev_lower = false;
            continue;
        }
        match start {
            Some(s) if c.is_uppercase() && prev_lower => {
                words.push(&name[s..i]);
                start = Some(i);
            }
            Some(_) => {}
            None => start = Some(i),
        }
        prev_lower = c.is_lowercase();
    }
    if let Some(s) = start {
        words.push(&name[s..]);
    }
    words
}

// ---------------------------------------------------------------------------
// ScaleConfig
// ---------------------------------------------------------------------------

/// The `scale` field: a preset name or an explicit list of rungs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScaleConfig {
    Preset(ScalePreset),
    Custom(Vec<ScaleStep>),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalePreset {
    /// 5–95 in steps of 5.
    #[default]
    Fine,
    /// 100–900 in steps of 100.
    Tokens,
}

impl ScaleConfig {
    /// # Errors
    ///
    /// [`ThemeError::InvalidScale`] for a malformed custom scale.
    pub fn resolve(&self) -> Result<GradientScale, ThemeError> {
        match self {
            Self::Preset(ScalePreset::Fine) => Ok(GradientScale::fine()),
            Self::Preset(ScalePreset::Tokens) => Ok(GradientScale::tokens()),
            Self::Custom(steps) => GradientScale::custom(steps.clone()),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
