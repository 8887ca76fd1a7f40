// SPDX-License-Identifier: MIT

//! Gradient scales: which rungs a tonal ramp has, and how far each one
//! sits from the base color.
//!
//! A scale is an ordered list of `(step, offset)` pairs. The step is the
//! public key (`red40`, `blue700`); the offset is the signed lightness
//! percentage handed to [`change_lightness`](stg_color::change_lightness).
//! Offsets are stored per step instead of derived from the step number, so
//! the same gradient code serves both scales below.
//!
//! | Preset   | Steps            | Offset            |
//! |----------|------------------|-------------------|
//! | `fine`   | 5, 10, …, 95     | `2 × (step − 50)` |
//! | `tokens` | 100, 200, …, 900 | `(step − 500) / 5`|

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::builtin::DEFAULT_ALIAS_OFFSETS;
use crate::error::ThemeError;

/// Semantic alias name → gradient step, in declaration order.
pub type ColorAliases = IndexMap<String, GradientStep>;

// ---------------------------------------------------------------------------
// GradientStep
// ---------------------------------------------------------------------------

/// The ordinal key of one rung of a gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GradientStep(pub u16);

impl fmt::Display for GradientStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for GradientStep {
    fn from(step: u16) -> Self {
        Self(step)
    }
}

// ---------------------------------------------------------------------------
// GradientScale
// ---------------------------------------------------------------------------

/// One rung of a scale: the step key and its signed lightness offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleStep {
    pub step: GradientStep,
    pub offset: f64,
}

impl ScaleStep {
    #[must_use]
    pub const fn new(step: u16, offset: f64) -> Self {
        Self {
            step: GradientStep(step),
            offset,
        }
    }

    /// The rung that carries the unmodified base color.
    #[must_use]
    pub fn is_midpoint(&self) -> bool {
        self.offset.abs() < f64::EPSILON
    }
}

/// An ordered, validated list of gradient rungs.
///
/// Steps are strictly increasing and offsets never decrease, which is what
/// keeps every generated gradient monotonic in lightness.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientScale {
    steps: Vec<ScaleStep>,
}

impl GradientScale {
    /// Nineteen rungs, 5% apart, offsets −90…+90 around step 50.
    #[must_use]
    pub fn fine() -> Self {
        let steps = (1..=19u16)
            .map(|i| {
                let step = i * 5;
                ScaleStep::new(step, f64::from(2 * (i32::from(step) - 50)))
            })
            .collect();
        Self { steps }
    }

    /// Nine design-token rungs, 100–900, offsets ±20/40/60/80 around 500.
    #[must_use]
    pub fn tokens() -> Self {
        let steps = (1..=9u16)
            .map(|i| {
                let step = i * 100;
                ScaleStep::new(step, f64::from((i32::from(step) - 500) / 5))
            })
            .collect();
        Self { steps }
    }

    /// Build a scale from explicit rungs.
    ///
    /// # Errors
    ///
    /// [`ThemeError::InvalidScale`] when the list is empty, an offset is not
    /// finite, steps are not strictly increasing, or an offset decreases.
    pub fn custom(steps: Vec<ScaleStep>) -> Result<Self, ThemeError> {
        let invalid = |reason: String| ThemeError::InvalidScale { reason };

        if steps.is_empty() {
            return Err(invalid("a custom scale needs at least one step".to_owned()));
        }
        if let Some(bad) = steps.iter().find(|s| !s.offset.is_finite()) {
            return Err(invalid(format!("step {} has a non-finite offset", bad.step)));
        }
        for pair in steps.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if b.step <= a.step {
                return Err(invalid(format!(
                    "steps must be strictly increasing ({} is followed by {})",
                    a.step, b.step
                )));
            }
            if b.offset < a.offset {
                return Err(invalid(format!(
                    "offsets must not decrease (step {} is {}, step {} is {})",
                    a.step, a.offset, b.step, b.offset
                )));
            }
        }

        Ok(Self { steps })
    }

    #[must_use]
    pub fn steps(&self) -> &[ScaleStep] {
        &self.steps
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[must_use]
    pub fn contains(&self, step: GradientStep) -> bool {
        self.steps.binary_search_by_key(&step, |s| s.step).is_ok()
    }

    /// The step whose offset is exactly zero, if the scale has one.
    #[must_use]
    pub fn midpoint(&self) -> Option<GradientStep> {
        self.steps.iter().find(|s| s.is_midpoint()).map(|s| s.step)
    }

    /// The step sitting at `offset`, if any.
    #[must_use]
    pub fn step_at_offset(&self, offset: f64) -> Option<GradientStep> {
        self.steps
            .iter()
            .find(|s| (s.offset - offset).abs() < f64::EPSILON)
            .map(|s| s.step)
    }

    /// The stock alias set (`""`, `Dark`, `Demote`, `Bright`, `Section`)
    /// placed on this scale.
    ///
    /// Aliases are matched by offset, so `Demote` lands on step 40 of the
    /// fine scale and on step 400 of the token scale. Aliases with no rung
    /// at their offset are left out.
    #[must_use]
    pub fn default_aliases(&self) -> ColorAliases {
        DEFAULT_ALIAS_OFFSETS
            .iter()
            .filter_map(|&(alias, offset)| {
                self.step_at_offset(offset)
                    .map(|step| (alias.to_owned(), step))
            })
            .collect()
    }
}

impl Default for GradientScale {
    fn default() -> Self {
        Self::fine()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
