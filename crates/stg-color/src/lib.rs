// SPDX-License-Identifier: MIT
//
// stg-color — RGB color math for the site theme generator.
//
// The leaf of the pipeline. Everything above it (gradients, themes, code
// emission) only ever asks two questions of a color: "what is its canonical
// hex spelling?" and "what does it look like N percent lighter or darker?".
// Both are answered here, in plain 8-bit sRGB with no perceptual model.

pub mod color;
pub mod error;

pub use color::{HexColor, Rgb, change_lightness, darken, hex_to_rgb, lighten, rgb_to_hex};
pub use error::ColorError;
