// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors raised while converting color strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The string is not `#RGB`, `#RRGGBB`, or `RRGGBB`.
    #[error("invalid color format: {input:?} (expected #RGB or #RRGGBB)")]
    InvalidColorFormat { input: String },
}

impl ColorError {
    pub(crate) fn invalid(input: &str) -> Self {
        Self::InvalidColorFormat {
            input: input.to_owned(),
        }
    }
}
