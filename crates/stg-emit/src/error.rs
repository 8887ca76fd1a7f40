// SPDX-License-Identifier: MIT

use stg_theme::GradientStep;
use thiserror::Error;

/// Reasons a palette cannot be rendered.
///
/// Every check runs before the first byte is written, so an error never
/// comes with half a file.
#[derive(Debug, Error)]
pub enum EmitError {
    /// A color, alias, or theme name does not yield a usable identifier.
    #[error("{kind} name {name:?} does not form a valid identifier ({identifier:?})")]
    InvalidIdentifier {
        kind: &'static str,
        name: String,
        identifier: String,
    },

    /// Two different names collapse onto the same generated identifier.
    #[error("identifier {identifier:?} is generated twice in {scope}")]
    DuplicateIdentifier { scope: String, identifier: String },

    /// A theme exposes a color the palette has no gradient for.
    #[error("theme {theme:?} exposes color {color:?}, which has no gradient")]
    MissingGradient { theme: String, color: String },

    /// A theme alias points at a step the color's gradient does not have.
    #[error("color {color:?} has no step {step} (alias {alias:?} of theme {theme:?})")]
    MissingStep {
        theme: String,
        color: String,
        alias: String,
        step: GradientStep,
    },

    #[error(transparent)]
    Format(#[from] std::fmt::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
