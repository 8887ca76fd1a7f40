// SPDX-License-Identifier: MIT
//
// Config file loading.
//
// A config file is the palette input (colors, themes, scale) plus the list
// of outputs to produce:
//
//   {
//     "colors":  { "red": "#e5484d", ... },
//     "themes":  { "dark": { "canvas": "#111", "type": "#eee" }, ... },
//     "scale":   "fine",
//     "outputs": ["typescript"]
//   }
//
// Hex strings are trimmed and uppercased here. Whether they are actually
// valid hex is left to composition, which reports the first bad one.

use std::fs;
use std::path::Path;

use eyre::{Result, WrapErr, bail};
use serde::Deserialize;
use stg_emit::OutputKind;
use stg_theme::PaletteConfig;
use tracing::{debug, info};

/// Everything one `stg generate` run needs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenerateConfig {
    #[serde(flatten)]
    pub palette: PaletteConfig,

    #[serde(default = "default_outputs")]
    pub outputs: Vec<OutputKind>,
}

fn default_outputs() -> Vec<OutputKind> {
    vec![OutputKind::Typescript]
}

/// Read, parse, and normalize the config file at `path`.
pub fn load_config(path: &Path) -> Result<GenerateConfig> {
    if !path.exists() {
        bail!("File does not exist at path: {}", path.display());
    }
    debug!("config file exists");

    let text = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read config file {}", path.display()))?;
    info!("read config file");

    let config = parse_config(&text)
        .wrap_err_with(|| format!("could not parse config at {}", path.display()))?;
    info!("parsed config JSON");
    Ok(config)
}

/// Parse config JSON and normalize it.
pub fn parse_config(text: &str) -> Result<GenerateConfig> {
    let mut config: GenerateConfig = serde_json::from_str(text)?;
    normalize(&mut config.palette);

    let mut outputs = Vec::with_capacity(config.outputs.len());
    for kind in config.outputs {
        if !outputs.contains(&kind) {
            outputs.push(kind);
        }
    }
    if outputs.is_empty() {
        bail!("`outputs` must name at least one output");
    }
    config.outputs = outputs;

    Ok(config)
}

/// Trim and uppercase every color string in place.
pub fn normalize(palette: &mut PaletteConfig) {
    for hex in palette.colors.values_mut() {
        *hex = normalize_hex(hex);
    }
    for theme in palette.themes.values_mut() {
        theme.canvas = normalize_hex(&theme.canvas);
        theme.type_color = normalize_hex(&theme.type_color);
    }
}

fn normalize_hex(hex: &str) -> String {
    hex.trim().to_uppercase()
}

// ─── Tests ──────────────────────────────────────────────────────────────────
