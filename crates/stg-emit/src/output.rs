// SPDX-License-Identifier: MIT

//! Output formats a palette can be rendered to.

use std::fmt;

use serde::{Deserialize, Serialize};
use stg_theme::PaletteResult;

use crate::error::EmitError;
use crate::naming::NamingConvention;
use crate::typescript;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    /// `palette.ts`, the generated constants module.
    Typescript,
    /// `palette.json`, the composed palette as data.
    Json,
}

impl OutputKind {
    pub const ALL: [Self; 2] = [Self::Typescript, Self::Json];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Typescript => "typescript",
            Self::Json => "json",
        }
    }

    /// Default file name for this output.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Typescript => "palette.ts",
            Self::Json => "palette.json",
        }
    }

    /// Render `palette` in this format.
    ///
    /// # Errors
    ///
    /// [`EmitError`] from the TypeScript emitter or from JSON serialization.
    pub fn render(self, palette: &PaletteResult, naming: &NamingConvention) -> Result<String, EmitError> {
        match self {
            Self::Typescript => typescript::render(palette, naming),
            Self::Json => {
                let mut text = serde_json::to_string_pretty(palette)?;
                text.push('\n');
                Ok(text)
            }
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
