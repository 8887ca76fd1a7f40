// SPDX-License-Identifier: MIT

//! # stg-theme — palette composition
//!
//! Turns a handful of base colors into a full design-system palette: one
//! tonal gradient per accent color, plus the semantic background and text
//! ladders of every theme.
//!
//! # Architecture
//!
//! ```text
//! PaletteConfig (colors + themes + scale)
//!     │
//!     ▼
//! scale.rs:    resolve the gradient steps and their lightness offsets
//!     │
//!     ▼
//! gradient.rs: one tonal ramp per accent color
//!     │
//!     ▼
//! compose.rs:  validate references, derive dark/light theme ladders
//!     │
//!     ▼
//! palette.rs:  PaletteResult, ready for code emission
//! ```
//!
//! Composition is a pure function of the config. No I/O, no clocks, no
//! randomness: the same config always yields the same palette.

pub mod builtin;
pub mod compose;
pub mod config;
pub mod error;
pub mod gradient;
pub mod palette;
pub mod scale;

pub use compose::{compose_palette, derive_theme};
pub use config::{Appearance, PaletteConfig, ScaleConfig, ScalePreset, ThemeConfig};
pub use error::ThemeError;
pub use gradient::{ColorGradient, build_gradient, build_gradient_str};
pub use palette::{PaletteResult, ThemeColors, ThemePalette};
pub use scale::{ColorAliases, GradientScale, GradientStep, ScaleStep};
pub use stg_color::HexColor;
