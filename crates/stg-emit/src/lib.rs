// SPDX-License-Identifier: MIT

//! # stg-emit — palette code emission
//!
//! Renders a [`PaletteResult`](stg_theme::PaletteResult) as source text.
//! Rendering is pure: the caller decides where the text goes.
//!
//! The generated identifiers are the compatibility surface of the whole
//! tool. Front-end code imports `COLORS.red40`, `DARK_PALETTE.redDemote`
//! and friends, so every name is produced by one function in [`naming`]
//! and used identically in every section of the output.

pub mod error;
pub mod naming;
pub mod output;
pub mod typescript;

pub use error::EmitError;
pub use naming::NamingConvention;
pub use output::OutputKind;

use stg_theme::PaletteResult;

/// Render `palette` as a TypeScript module.
///
/// # Errors
///
/// See [`typescript::render`].
pub fn emit(palette: &PaletteResult, naming: &NamingConvention) -> Result<String, EmitError> {
    typescript::render(palette, naming)
}
