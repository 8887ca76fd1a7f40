// SPDX-License-Identifier: MIT
//
// Hex ↔ RGB conversion and percentage blending.
//
// Blending is linear in 8-bit sRGB: lightening moves each channel toward 255,
// darkening scales it toward 0.
//
//   lighten: c' = floor(c + (255 - c) * p / 100)
//   darken:  c' = floor(c * (1 - p / 100))
//
// The arithmetic runs in f64 in exactly this order. Generated palettes are
// compared byte-for-byte across regenerations, so the rounding behaviour is
// part of the output format, not an implementation detail.
//
// Percentages are not bounds-checked. Anything outside 0–100 simply lands on
// the clamp at 0 or 255.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An 8-bit sRGB triple.
///
/// Only used while doing arithmetic. Everything that leaves this crate is a
/// [`HexColor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Blend every channel `percent` of the way toward white.
    #[must_use]
    pub fn lighten(self, percent: f64) -> Self {
        Self::new(
            lighten(self.r, percent),
            lighten(self.g, percent),
            lighten(self.b, percent),
        )
    }

    /// Scale every channel down by `percent`.
    #[must_use]
    pub fn darken(self, percent: f64) -> Self {
        Self::new(
            darken(self.r, percent),
            darken(self.g, percent),
            darken(self.b, percent),
        )
    }

    #[must_use]
    pub fn to_hex(self) -> HexColor {
        HexColor::from_rgb(self)
    }
}

// ─── HexColor ────────────────────────────────────────────────────────────────

/// A validated color in canonical `#RRGGBB` form (uppercase, 6 digits).
///
/// The only way to build one is through parsing or from an [`Rgb`], so a
/// `HexColor` always holds valid hex. `#abc` parses to `#AABBCC`.
///
/// ```
/// use stg_color::HexColor;
///
/// let c = HexColor::parse("#336699").unwrap();
/// assert_eq!(c.darken(20.0).as_str(), "#28517A");
/// assert_eq!(HexColor::parse("#fff").unwrap().as_str(), "#FFFFFF");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Parse and canonicalize a hex color string.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] if `s` is not a 3- or
    /// 6-digit hex color (see [`hex_to_rgb`]).
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        hex_to_rgb(s).map(Self::from_rgb)
    }

    #[must_use]
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self(format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b))
    }

    /// The canonical `#RRGGBB` spelling.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn rgb(&self) -> Rgb {
        // The canonical form always decodes.
        hex_to_rgb(&self.0).unwrap_or(Rgb::BLACK)
    }

    #[must_use]
    pub fn lighten(&self, percent: f64) -> Self {
        self.rgb().lighten(percent).to_hex()
    }

    #[must_use]
    pub fn darken(&self, percent: f64) -> Self {
        self.rgb().darken(percent).to_hex()
    }

    /// Shorthand for [`change_lightness`].
    #[must_use]
    pub fn shifted(&self, signed_percent: f64) -> Self {
        change_lightness(self, signed_percent)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

// ─── Conversion ──────────────────────────────────────────────────────────────

/// Parse a hex color into its RGB channels.
///
/// Accepts `#RRGGBB`, `RRGGBB`, and the shorthand `#RGB` (each digit `n`
/// expands to `n * 17`). The shorthand needs its `#`: a bare three-letter
/// word like `bad` is rejected rather than read as a color.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] on any other length or on a
/// non-hex digit.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let invalid = || ColorError::invalid(hex);
    let (digits, prefixed) = match hex.strip_prefix('#') {
        Some(rest) => (rest, true),
        None => (hex, false),
    };
    let bytes = digits.as_bytes();

    match bytes.len() {
        // #RGB
        3 if prefixed => {
            let r = parse_hex_digit(bytes[0]).ok_or_else(invalid)?;
            let g = parse_hex_digit(bytes[1]).ok_or_else(invalid)?;
            let b = parse_hex_digit(bytes[2]).ok_or_else(invalid)?;
            Ok(Rgb::new(r * 17, g * 17, b * 17))
        }
        // #RRGGBB
        6 => {
            let r = parse_hex_byte(&bytes[0..2]).ok_or_else(invalid)?;
            let g = parse_hex_byte(&bytes[2..4]).ok_or_else(invalid)?;
            let b = parse_hex_byte(&bytes[4..6]).ok_or_else(invalid)?;
            Ok(Rgb::new(r, g, b))
        }
        _ => Err(invalid()),
    }
}

/// Encode channels as `#RRGGBB`, clamping each to 0–255 first.
#[must_use]
pub fn rgb_to_hex(r: i32, g: i32, b: i32) -> HexColor {
    Rgb::new(clamp_i32(r), clamp_i32(g), clamp_i32(b)).to_hex()
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

#[inline]
fn clamp_i32(c: i32) -> u8 {
    u8::try_from(c.clamp(0, 255)).unwrap_or(u8::MAX)
}

/// Floor a blended channel and clamp it into 0–255.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.floor().clamp(0.0, 255.0) as u8
}

// ─── Blending ────────────────────────────────────────────────────────────────

/// Move one channel `percent` of the way toward 255.
#[inline]
#[must_use]
pub fn lighten(channel: u8, percent: f64) -> u8 {
    let c = f64::from(channel);
    to_channel(c + (255.0 - c) * (percent / 100.0))
}

/// Scale one channel down by `percent`.
#[inline]
#[must_use]
pub fn darken(channel: u8, percent: f64) -> u8 {
    let c = f64::from(channel);
    to_channel(c * (1.0 - percent / 100.0))
}

/// Shift a color's lightness: negative darkens, positive lightens.
///
/// Zero returns the input untouched. It is cloned, never re-encoded, so the
/// result is byte-identical to what came in.
#[must_use]
pub fn change_lightness(hex: &HexColor, signed_percent: f64) -> HexColor {
    if signed_percent < 0.0 {
        hex.darken(-signed_percent)
    } else if signed_percent > 0.0 {
        hex.lighten(signed_percent)
    } else {
        hex.clone()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn hex(s: &str) -> HexColor {
        HexColor::parse(s).unwrap()
    }

    // ── Parsing ──────────────────────────────────────────────────────────

    #[test]
    fn parse_six_digits() {
        assert_eq!(hex_to_rgb("#336699").unwrap(), Rgb::new(0x33, 0x66, 0x99));
        assert_eq!(hex_to_rgb("336699").unwrap(), Rgb::new(0x33, 0x66, 0x99));
        assert_eq!(hex_to_rgb("#aBcDeF").unwrap(), Rgb::new(0xAB, 0xCD, 0xEF));
    }

    #[test]
    fn parse_shorthand() {
        assert_eq!(hex_to_rgb("#FFF").unwrap(), Rgb::WHITE);
        assert_eq!(hex_to_rgb("#000").unwrap(), Rgb::BLACK);
        assert_eq!(hex_to_rgb("#1a2").unwrap(), Rgb::new(0x11, 0xAA, 0x22));
    }

    #[test]
    fn bare_shorthand_rejected() {
        assert_eq!(
            hex_to_rgb("bad"),
            Err(ColorError::InvalidColorFormat {
                input: "bad".to_owned()
            })
        );
    }

    #[test]
    fn invalid_inputs_rejected() {
        for input in ["", "#", "#12", "#1234", "#12345", "#1234567", "#GGGGGG", "#12 456", "red", "#ééé"] {
            assert!(hex_to_rgb(input).is_err(), "{input:?} should not parse");
        }
    }

    #[test]
    fn parse_canonicalizes() {
        assert_eq!(hex("#abc").as_str(), "#AABBCC");
        assert_eq!(hex("e5484d").as_str(), "#E5484D");
        assert_eq!(hex("#E5484D").to_string(), "#E5484D");
    }

    #[test]
    fn from_str_and_serde() {
        let c: HexColor = "#0090ff".parse().unwrap();
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"#0090FF\"");

        let back: HexColor = serde_json::from_str("\"#0090ff\"").unwrap();
        assert_eq!(back, c);
        assert!(serde_json::from_str::<HexColor>("\"#nope00\"").is_err());
    }

    // ── Encoding ─────────────────────────────────────────────────────────

    #[test]
    fn encode_is_uppercase_six_digits() {
        assert_eq!(rgb_to_hex(0x0a, 0x0b, 0x0c).as_str(), "#0A0B0C");
    }

    #[test]
    fn encode_clamps_channels() {
        assert_eq!(rgb_to_hex(-20, 300, 128).as_str(), "#00FF80");
    }

    #[test]
    fn encode_decode_roundtrip() {
        for (r, g, b) in [(0, 0, 0), (255, 255, 255), (1, 128, 254), (51, 102, 153), (17, 34, 51)] {
            let encoded = rgb_to_hex(i32::from(r), i32::from(g), i32::from(b));
            assert_eq!(hex_to_rgb(encoded.as_str()).unwrap(), Rgb::new(r, g, b));
        }
    }

    // ── Blending ─────────────────────────────────────────────────────────

    #[test]
    fn channel_formulas() {
        assert_eq!(lighten(51, 20.0), 91);
        assert_eq!(darken(51, 20.0), 40);
        assert_eq!(darken(153, 20.0), 122);
        assert_eq!(lighten(255, 50.0), 255);
        assert_eq!(darken(0, 50.0), 0);
    }

    #[test]
    fn darken_reference_color() {
        assert_eq!(change_lightness(&hex("#336699"), -20.0).as_str(), "#28517A");
    }

    #[test]
    fn lighten_reference_color() {
        assert_eq!(change_lightness(&hex("#336699"), 20.0).as_str(), "#5B84AD");
    }

    #[test]
    fn mid_gray_halfway() {
        assert_eq!(hex("#808080").lighten(50.0).as_str(), "#BFBFBF");
        assert_eq!(hex("#808080").darken(50.0).as_str(), "#404040");
    }

    #[test]
    fn zero_is_identity() {
        for s in ["#336699", "#000000", "#FFFFFF", "#E5484D"] {
            let c = hex(s);
            assert_eq!(change_lightness(&c, 0.0), c);
            assert_eq!(change_lightness(&c, -0.0), c);
        }
    }

    #[test]
    fn full_percent_saturates() {
        let c = hex("#336699");
        assert_eq!(change_lightness(&c, 100.0).as_str(), "#FFFFFF");
        assert_eq!(change_lightness(&c, -100.0).as_str(), "#000000");
    }

    #[test]
    fn out_of_range_clamps() {
        let c = hex("#336699");
        assert_eq!(change_lightness(&c, 150.0).as_str(), "#FFFFFF");
        assert_eq!(change_lightness(&c, -150.0).as_str(), "#000000");
        // Negative magnitudes flip the blend and clamp on the far side.
        assert_eq!(lighten(10, -200.0), 0);
        assert_eq!(darken(200, -200.0), 255);
    }

    #[test]
    fn lighten_never_lowers_darken_never_raises() {
        let samples = ["#000000", "#FFFFFF", "#336699", "#E5484D", "#0090FF", "#7F7F7F"];
        for s in samples {
            let base = hex(s).rgb();
            for p in [1.0, 5.0, 20.0, 33.3, 50.0, 99.0, 100.0] {
                let up = base.lighten(p);
                let down = base.darken(p);
                assert!(up.r >= base.r && up.g >= base.g && up.b >= base.b, "{s} +{p}");
                assert!(down.r <= base.r && down.g <= base.g && down.b <= base.b, "{s} -{p}");
            }
        }
    }

    #[test]
    fn shifted_matches_change_lightness() {
        let c = hex("#0090FF");
        assert_eq!(c.shifted(-20.0).as_str(), "#0073CC");
        assert_eq!(c.shifted(20.0).as_str(), "#33A6FF");
    }
}
