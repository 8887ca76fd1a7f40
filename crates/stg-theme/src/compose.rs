// SPDX-License-Identifier: MIT

//! Theme composition: from a [`PaletteConfig`] to a [`PaletteResult`].
//!
//! Composition runs in two passes. The first validates every cross
//! reference (accent names, aliased steps, the scale itself) without
//! touching a color. The second parses colors and builds gradients and
//! theme ladders. A bad reference therefore fails before any color work
//! starts, and a bad color fails before any result exists.

use indexmap::IndexMap;
use stg_color::{HexColor, change_lightness};
use tracing::debug;

use crate::config::{Appearance, PaletteConfig, ThemeConfig};
use crate::error::ThemeError;
use crate::gradient::{ColorGradient, build_gradient_str};
use crate::palette::{PaletteResult, ThemeColors, ThemePalette};
use crate::scale::{ColorAliases, GradientScale};

/// Lightness distance between neighbouring background tiers.
const BACKGROUND_NOTCH: f64 = 10.0;

/// Lightness distance between neighbouring text tiers.
const TEXT_NOTCH: f64 = 15.0;

/// Derive one theme's background and text ladders.
///
/// Backgrounds move away from the canvas one notch per tier (section,
/// section highlight, outline); text moves away from the type color the
/// opposite way (body, demote). For a dark theme backgrounds get lighter
/// and text darker. A light theme flips both.
///
/// # Errors
///
/// [`ThemeError::Color`] if `canvas` or `type` is not a hex color.
pub fn derive_theme(theme: &ThemeConfig, appearance: Appearance) -> Result<ThemeColors, ThemeError> {
    let k = appearance.coefficient();
    let canvas = HexColor::parse(&theme.canvas)?;
    let type_color = HexColor::parse(&theme.type_color)?;

    Ok(ThemeColors {
        section: change_lightness(&canvas, k * BACKGROUND_NOTCH),
        section_highlight: change_lightness(&canvas, k * 2.0 * BACKGROUND_NOTCH),
        outline: change_lightness(&canvas, k * 3.0 * BACKGROUND_NOTCH),
        canvas,
        type_body: change_lightness(&type_color, -k * TEXT_NOTCH),
        type_demote: change_lightness(&type_color, -k * 2.0 * TEXT_NOTCH),
        type_color,
    })
}

/// A theme whose references have been checked but whose colors have not
/// been computed yet.
struct ThemePlan<'a> {
    name: &'a str,
    config: &'a ThemeConfig,
    appearance: Appearance,
    aliases: ColorAliases,
    accents: Vec<String>,
}

/// Compose the full palette.
///
/// # Errors
///
/// - [`ThemeError::InvalidScale`] for a malformed custom scale.
/// - [`ThemeError::MissingColorDefinition`] when a theme lists an accent
///   that `colors` does not define.
/// - [`ThemeError::UnknownGradientStep`] when an alias points off the scale.
/// - [`ThemeError::Color`] for any malformed hex string.
pub fn compose_palette(config: &PaletteConfig) -> Result<PaletteResult, ThemeError> {
    let scale = config.resolve_scale()?;

    let plans = config
        .themes
        .iter()
        .map(|(name, theme)| plan_theme(name, theme, config, &scale))
        .collect::<Result<Vec<_>, _>>()?;

    let colors = config
        .colors
        .iter()
        .map(|(name, base)| -> Result<_, ThemeError> {
            let gradient = build_gradient_str(base, &scale)?;
            debug!(color = %name, base = %base, steps = gradient.len(), "built gradient");
            Ok((name.clone(), gradient))
        })
        .collect::<Result<IndexMap<String, ColorGradient>, ThemeError>>()?;

    let themes = plans
        .into_iter()
        .map(|plan| -> Result<_, ThemeError> {
            let colors = derive_theme(plan.config, plan.appearance)?;
            debug!(
                theme = plan.name,
                appearance = ?plan.appearance,
                section = %colors.section,
                type_body = %colors.type_body,
                "derived theme"
            );
            let palette = ThemePalette {
                appearance: plan.appearance,
                colors,
                aliases: plan.aliases,
                accents: plan.accents,
            };
            Ok((plan.name.to_owned(), palette))
        })
        .collect::<Result<IndexMap<String, ThemePalette>, ThemeError>>()?;

    Ok(PaletteResult::new(themes, colors))
}

fn plan_theme<'a>(
    name: &'a str,
    theme: &'a ThemeConfig,
    config: &PaletteConfig,
    scale: &GradientScale,
) -> Result<ThemePlan<'a>, ThemeError> {
    let accents = match &theme.accents {
        Some(listed) => {
            if let Some(missing) = listed.iter().find(|c| !config.colors.contains_key(*c)) {
                return Err(ThemeError::MissingColorDefinition {
                    theme: name.to_owned(),
                    color: missing.clone(),
                });
            }
            listed.clone()
        }
        None => config.colors.keys().cloned().collect(),
    };

    let aliases = if theme.aliases.is_empty() {
        scale.default_aliases()
    } else {
        theme.aliases.clone()
    };
    if let Some((alias, step)) = aliases.iter().find(|(_, step)| !scale.contains(**step)) {
        return Err(ThemeError::UnknownGradientStep {
            theme: name.to_owned(),
            alias: alias.clone(),
            step: *step,
        });
    }

    Ok(ThemePlan {
        name,
        config: theme,
        appearance: theme.appearance.unwrap_or_else(|| Appearance::infer(name)),
        aliases,
        accents,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use stg_color::ColorError;

    use super::*;
    use crate::config::{ScaleConfig, ScalePreset};
    use crate::scale::GradientStep;

    fn config() -> PaletteConfig {
        let mut config = PaletteConfig::default();
        config.colors.insert("red".into(), "#E5484D".into());
        config.colors.insert("blue".into(), "#0090FF".into());
        config
            .themes
            .insert("dark".into(), ThemeConfig::new("#111111", "#EEEEEE"));
        config
            .themes
            .insert("light".into(), ThemeConfig::new("#FCFCFC", "#202020"));
        config
    }

    #[test]
    fn dark_ladders() {
        let t = derive_theme(&ThemeConfig::new("#111111", "#EEEEEE"), Appearance::Dark).unwrap();
        assert_eq!(t.canvas.as_str(), "#111111");
        assert_eq!(t.section.as_str(), "#282828");
        assert_eq!(t.section_highlight.as_str(), "#404040");
        assert_eq!(t.outline.as_str(), "#585858");
        assert_eq!(t.type_color.as_str(), "#EEEEEE");
        assert_eq!(t.type_body.as_str(), "#CACACA");
        assert_eq!(t.type_demote.as_str(), "#A6A6A6");
    }

    #[test]
    fn light_ladders_flip_direction() {
        let t = derive_theme(&ThemeConfig::new("#FCFCFC", "#202020"), Appearance::Light).unwrap();
        assert_eq!(t.section.as_str(), "#E2E2E2");
        assert_eq!(t.section_highlight.as_str(), "#C9C9C9");
        assert_eq!(t.outline.as_str(), "#B0B0B0");
        assert_eq!(t.type_body.as_str(), "#414141");
        assert_eq!(t.type_demote.as_str(), "#626262");
    }

    #[test]
    fn same_input_different_appearance_differs() {
        let theme = ThemeConfig::new("#808080", "#808080");
        let dark = derive_theme(&theme, Appearance::Dark).unwrap();
        let light = derive_theme(&theme, Appearance::Light).unwrap();
        assert!(dark.section.rgb().r > light.section.rgb().r);
        assert!(dark.type_body.rgb().r < light.type_body.rgb().r);
    }

    #[test]
    fn composes_all_themes_and_colors() {
        let palette = compose_palette(&config()).unwrap();

        let themes: Vec<_> = palette.themes().keys().map(String::as_str).collect();
        assert_eq!(themes, vec!["dark", "light"]);
        let colors: Vec<_> = palette.colors().keys().map(String::as_str).collect();
        assert_eq!(colors, vec!["red", "blue"]);

        assert_eq!(palette.theme("dark").unwrap().appearance, Appearance::Dark);
        assert_eq!(palette.theme("light").unwrap().appearance, Appearance::Light);
        assert_eq!(palette.gradient("red").unwrap().len(), 19);
    }

    #[test]
    fn default_aliases_fill_empty_alias_set() {
        let palette = compose_palette(&config()).unwrap();
        let aliases: Vec<_> = palette.theme("dark").unwrap().aliases.keys().cloned().collect();
        assert_eq!(aliases, vec!["", "Dark", "Demote", "Bright", "Section"]);
        assert_eq!(
            palette.alias_color("dark", "red", "").unwrap().as_str(),
            "#E5484D"
        );
    }

    #[test]
    fn accents_default_to_all_colors() {
        let palette = compose_palette(&config()).unwrap();
        assert_eq!(palette.theme("light").unwrap().accents, vec!["red", "blue"]);
    }

    #[test]
    fn token_scale_aliases() {
        let mut config = config();
        config.scale = Some(ScaleConfig::Preset(ScalePreset::Tokens));
        for theme in config.themes.values_mut() {
            theme.aliases.insert("Demote".into(), GradientStep(400));
            theme.aliases.insert(String::new(), GradientStep(500));
        }
        let palette = compose_palette(&config).unwrap();
        assert_eq!(
            palette.alias_color("dark", "red", "Demote").unwrap().as_str(),
            "#B7393D"
        );
        assert_eq!(
            palette.alias_color("dark", "blue", "Demote").unwrap().as_str(),
            "#0073CC"
        );
        assert_eq!(
            palette.alias_color("light", "blue", "").unwrap().as_str(),
            "#0090FF"
        );
    }

    #[test]
    fn explicit_appearance_wins_over_name() {
        let mut config = config();
        config.themes.insert(
            "paper".into(),
            ThemeConfig::new("#FCFCFC", "#202020").with_appearance(Appearance::Light),
        );
        let palette = compose_palette(&config).unwrap();
        assert_eq!(palette.theme("paper").unwrap().appearance, Appearance::Light);
        assert_eq!(
            palette.theme("paper").unwrap().colors.section.as_str(),
            "#E2E2E2"
        );
    }

    #[test]
    fn missing_accent_fails() {
        let mut config = config();
        config.colors.shift_remove("red");
        config.themes["dark"].accents = Some(vec!["red".into()]);

        assert_eq!(
            compose_palette(&config),
            Err(ThemeError::MissingColorDefinition {
                theme: "dark".into(),
                color: "red".into(),
            })
        );
    }

    #[test]
    fn reference_errors_win_over_color_errors() {
        let mut config = config();
        config.colors.insert("blue".into(), "not a color".into());
        config.themes["light"].accents = Some(vec!["green".into()]);
        assert!(matches!(
            compose_palette(&config),
            Err(ThemeError::MissingColorDefinition { .. })
        ));
    }

    #[test]
    fn alias_off_scale_fails() {
        let mut config = config();
        config.themes["dark"].aliases.insert("Demote".into(), GradientStep(42));
        assert_eq!(
            compose_palette(&config),
            Err(ThemeError::UnknownGradientStep {
                theme: "dark".into(),
                alias: "Demote".into(),
                step: GradientStep(42),
            })
        );
    }

    #[test]
    fn malformed_accent_fails() {
        let mut config = config();
        config.colors.insert("red".into(), "#12345".into());
        assert_eq!(
            compose_palette(&config),
            Err(ThemeError::Color(ColorError::InvalidColorFormat {
                input: "#12345".into()
            }))
        );
    }

    #[test]
    fn malformed_canvas_fails() {
        let mut config = config();
        config.themes["light"].canvas = "bad".into();
        assert!(matches!(
            compose_palette(&config),
            Err(ThemeError::Color(ColorError::InvalidColorFormat { .. }))
        ));
    }

    #[test]
    fn deterministic() {
        let a = compose_palette(&config()).unwrap();
        let b = compose_palette(&config()).unwrap();
        assert_eq!(a, b);
        assert_eq!(format!("{a:?}"), format!("{b:?}"));
    }

    #[test]
    fn empty_config_composes_to_empty_palette() {
        let palette = compose_palette(&PaletteConfig::default()).unwrap();
        assert!(palette.themes().is_empty());
        assert!(palette.colors().is_empty());
    }
}
