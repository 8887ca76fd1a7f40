// SPDX-License-Identifier: MIT

use stg_color::ColorError;
use thiserror::Error;

use crate::scale::GradientStep;

/// Everything that can stop a palette from being composed.
///
/// All variants are terminal: composition either produces a complete
/// palette or nothing at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// A theme references an accent color that `colors` does not define.
    #[error("theme {theme:?} references color {color:?}, which is not defined in `colors`")]
    MissingColorDefinition { theme: String, color: String },

    /// A theme alias points at a step the gradient scale does not have.
    #[error("theme {theme:?} maps alias {alias:?} to step {step}, which is not on the gradient scale")]
    UnknownGradientStep {
        theme: String,
        alias: String,
        step: GradientStep,
    },

    /// A custom gradient scale is empty or out of order.
    #[error("invalid gradient scale: {reason}")]
    InvalidScale { reason: String },

    #[error(transparent)]
    Color(#[from] ColorError),
}
