// SPDX-License-Identifier: MIT
//
// Interactive config assembly, used when `generate` runs without `--config`.
//
// Asks for the themes, then each theme's canvas and type colors, then every
// stock accent color, then the outputs. Every color answer is checked as it
// is typed, and each one comes with a sensible default.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, MultiSelect};
use eyre::{Result, bail};
use stg_color::HexColor;
use stg_emit::OutputKind;
use stg_theme::builtin::{self, THEME_NAMES};
use stg_theme::{Appearance, PaletteConfig, ThemeConfig};
use tracing::debug;

use crate::load::{GenerateConfig, normalize};

pub fn ask_config() -> Result<GenerateConfig> {
    let theme = ColorfulTheme::default();

    let selected = MultiSelect::with_theme(&theme)
        .with_prompt("Themes")
        .items(THEME_NAMES)
        .defaults(&[true])
        .interact()?;
    if selected.is_empty() {
        bail!("at least one theme must be selected");
    }

    let mut palette = PaletteConfig::default();

    for name in selected.into_iter().map(|i| THEME_NAMES[i]) {
        let appearance = Appearance::infer(name);
        let (canvas, type_color) = builtin::default_base_colors(appearance);

        let canvas = ask_hex(&theme, &format!("{name}: canvas color (background)"), canvas)?;
        let type_color = ask_hex(&theme, &format!("{name}: type color (text)"), type_color)?;
        palette.themes.insert(
            name.to_owned(),
            ThemeConfig::new(canvas, type_color).with_appearance(appearance),
        );
    }

    for name in builtin::accent_names() {
        let default = builtin::default_accent(name).unwrap_or("#808080");
        let hex = ask_hex(&theme, &format!("Base {name} color"), default)?;
        palette.colors.insert(name.to_owned(), hex);
    }

    let names: Vec<&str> = OutputKind::ALL.iter().map(|kind| kind.name()).collect();
    let outputs: Vec<OutputKind> = MultiSelect::with_theme(&theme)
        .with_prompt("Outputs")
        .items(&names)
        .defaults(&[true])
        .interact()?
        .into_iter()
        .map(|i| OutputKind::ALL[i])
        .collect();
    if outputs.is_empty() {
        bail!("at least one output must be selected");
    }

    normalize(&mut palette);
    debug!(
        themes = palette.themes.len(),
        colors = palette.colors.len(),
        "assembled config interactively"
    );

    Ok(GenerateConfig { palette, outputs })
}

fn ask_hex(theme: &ColorfulTheme, prompt: &str, default: &str) -> Result<String> {
    let answer = Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .default(default.to_owned())
        .validate_with(validate_hex)
        .interact_text()?;
    Ok(answer)
}

#[allow(clippy::ptr_arg)]
fn validate_hex(input: &String) -> Result<(), String> {
    HexColor::parse(input.trim())
        .map(drop)
        .map_err(|e| e.to_string())
}

// ─── Tests ──────────────────────────────────────────────────────────────────
