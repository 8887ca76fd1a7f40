// SPDX-License-Identifier: MIT

//! Tonal ramps: one base color spread across a [`GradientScale`].

use serde::ser::{Serialize, SerializeMap, Serializer};
use stg_color::{ColorError, HexColor, change_lightness};

use crate::scale::{GradientScale, GradientStep};

/// An ordered mapping from gradient step to color for one named color.
///
/// Stops are kept in step order. Lightness is monotonic: walking away from
/// the midpoint, colors only get darker (below) or lighter (above).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorGradient {
    stops: Vec<(GradientStep, HexColor)>,
}

impl ColorGradient {
    /// The color at `step`, if the gradient has that rung.
    #[must_use]
    pub fn get(&self, step: GradientStep) -> Option<&HexColor> {
        self.stops
            .binary_search_by_key(&step, |(s, _)| *s)
            .ok()
            .map(|idx| &self.stops[idx].1)
    }

    /// Stops in step order.
    pub fn iter(&self) -> impl Iterator<Item = (GradientStep, &HexColor)> {
        self.stops.iter().map(|(step, color)| (*step, color))
    }

    pub fn steps(&self) -> impl Iterator<Item = GradientStep> + '_ {
        self.stops.iter().map(|(step, _)| *step)
    }

    pub fn colors(&self) -> impl Iterator<Item = &HexColor> {
        self.stops.iter().map(|(_, color)| color)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

impl Serialize for ColorGradient {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.stops.len()))?;
        for (step, color) in &self.stops {
            map.serialize_entry(&step.to_string(), color)?;
        }
        map.end()
    }
}

/// Spread `base` across every rung of `scale`.
///
/// The midpoint rung (offset 0) is `base` itself, cloned, never run through
/// the blend. Every other rung is `change_lightness(base, offset)`.
#[must_use]
pub fn build_gradient(base: &HexColor, scale: &GradientScale) -> ColorGradient {
    let stops = scale
        .steps()
        .iter()
        .map(|rung| {
            let color = if rung.is_midpoint() {
                base.clone()
            } else {
                change_lightness(base, rung.offset)
            };
            (rung.step, color)
        })
        .collect();
    ColorGradient { stops }
}

/// [`build_gradient`] from an unparsed color string.
///
/// # Errors
///
/// [`ColorError::InvalidColorFormat`] if `base` is not a hex color.
pub fn build_gradient_str(base: &str, scale: &GradientScale) -> Result<ColorGradient, ColorError> {
    let base = HexColor::parse(base)?;
    Ok(build_gradient(&base, scale))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
