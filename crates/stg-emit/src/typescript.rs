// SPDX-License-Identifier: MIT

//! TypeScript emission.
//!
//! The generated module has six sections, always in this order:
//!
//! ```text
//! export const COLORS = { red5: '#…', … }           flat color table
//! export const REDS = [ COLORS.red5, … ]             one per color, step order
//! export const RED_ENTRIES = [ { name, color }, … ]  one per color
//! export const COLOR_ENTRIES = [ RED_ENTRIES, … ]    all entries arrays
//! export const DARK_PALETTE = { canvas: '#…', … }    one per theme
//! export type Palette = { canvas: string, … }        shape of a theme palette
//! ```
//!
//! Everything is checked up front by [`validate`]; the section writers only
//! run on a palette that is known to render.

use std::collections::HashSet;
use std::fmt::Write;

use indexmap::IndexMap;
use stg_theme::{PaletteResult, ThemeColors, ThemePalette};

use crate::error::EmitError;
use crate::naming::{NamingConvention, alias_field, capitalize, is_identifier, table_key};

const INDENT: &str = "  ";

/// Render `palette` as a TypeScript module, ending in a single newline.
///
/// # Errors
///
/// - [`EmitError::InvalidIdentifier`] when a color, alias, or theme name
///   cannot be spelled as an identifier.
/// - [`EmitError::DuplicateIdentifier`] when two names generate the same
///   identifier.
/// - [`EmitError::MissingGradient`] / [`EmitError::MissingStep`] when a
///   theme refers to gradient data the palette does not contain.
pub fn render(palette: &PaletteResult, naming: &NamingConvention) -> Result<String, EmitError> {
    validate(palette, naming)?;

    let sections = [
        colors_table(palette, naming)?,
        gradient_arrays(palette, naming)?,
        entries_arrays(palette, naming)?,
        all_entries(palette, naming)?,
        palette_consts(palette, naming)?,
        palette_type(palette, naming)?,
    ];

    let mut out = sections
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n");
    out.push('\n');
    Ok(out)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Tracks generated names within one scope and rejects collisions.
struct Scope {
    name: String,
    seen: HashSet<String>,
}

impl Scope {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            seen: HashSet::new(),
        }
    }

    fn claim(&mut self, kind: &'static str, source: &str, identifier: String) -> Result<(), EmitError> {
        if !is_identifier(&identifier) {
            return Err(EmitError::InvalidIdentifier {
                kind,
                name: source.to_owned(),
                identifier,
            });
        }
        if !self.seen.insert(identifier.clone()) {
            return Err(EmitError::DuplicateIdentifier {
                scope: self.name.clone(),
                identifier,
            });
        }
        Ok(())
    }
}

/// Check every identifier and cross reference the sections will need.
///
/// # Errors
///
/// See [`render`].
pub fn validate(palette: &PaletteResult, naming: &NamingConvention) -> Result<(), EmitError> {
    let mut module = Scope::new("the module");
    module.claim("table", &naming.colors_table, naming.colors_table.clone())?;
    module.claim("entries", &naming.all_entries, naming.all_entries.clone())?;
    module.claim("type", &naming.palette_type, naming.palette_type.clone())?;

    let mut table = Scope::new(naming.colors_table.clone());
    for (color, gradient) in palette.colors() {
        if !is_identifier(color) {
            return Err(EmitError::InvalidIdentifier {
                kind: "color",
                name: color.clone(),
                identifier: color.clone(),
            });
        }
        module.claim("color", color, naming.gradient_const(color))?;
        module.claim("color", color, naming.entries_const(color))?;
        for step in gradient.steps() {
            table.claim("color", color, table_key(color, step))?;
        }
    }

    for (theme_name, theme) in palette.themes() {
        let const_name = naming.palette_const(theme_name);
        module.claim("theme", theme_name, const_name.clone())?;

        let mut fields = Scope::new(const_name);
        for field in ThemeColors::FIELD_NAMES {
            fields.claim("theme color", field, field.to_owned())?;
        }
        for color in &theme.accents {
            let gradient = palette.gradient(color).ok_or_else(|| EmitError::MissingGradient {
                theme: theme_name.clone(),
                color: color.clone(),
            })?;
            for (alias, step) in &theme.aliases {
                if gradient.get(*step).is_none() {
                    return Err(EmitError::MissingStep {
                        theme: theme_name.clone(),
                        color: color.clone(),
                        alias: alias.clone(),
                        step: *step,
                    });
                }
                fields.claim("alias", alias, alias_field(color, alias))?;
            }
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// (a) `COLORS`: every `{color}{step}` → hex value.
fn colors_table(palette: &PaletteResult, naming: &NamingConvention) -> Result<String, EmitError> {
    let mut out = String::new();
    writeln!(out, "export const {} = {{", naming.colors_table)?;
    for (color, gradient) in palette.colors() {
        for (step, hex) in gradient.iter() {
            writeln!(out, "{INDENT}{}: '{hex}',", table_key(color, step))?;
        }
    }
    write!(out, "}}")?;
    Ok(out)
}

/// (b) One array of table references per color, in step order.
fn gradient_arrays(palette: &PaletteResult, naming: &NamingConvention) -> Result<String, EmitError> {
    let blocks = palette
        .colors()
        .iter()
        .map(|(color, gradient)| -> Result<String, EmitError> {
            let mut out = String::new();
            writeln!(out, "export const {} = [", naming.gradient_const(color))?;
            for step in gradient.steps() {
                writeln!(out, "{INDENT}{},", naming.table_ref(color, step))?;
            }
            write!(out, "]")?;
            Ok(out)
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(blocks.join("\n\n"))
}

/// (c) One array of `{ name, color }` pairs per color.
fn entries_arrays(palette: &PaletteResult, naming: &NamingConvention) -> Result<String, EmitError> {
    let blocks = palette
        .colors()
        .iter()
        .map(|(color, gradient)| -> Result<String, EmitError> {
            let mut out = String::new();
            writeln!(out, "export const {} = [", naming.entries_const(color))?;
            for step in gradient.steps() {
                writeln!(
                    out,
                    "{INDENT}{{ name: '{}', color: {} }},",
                    table_key(color, step),
                    naming.table_ref(color, step)
                )?;
            }
            write!(out, "]")?;
            Ok(out)
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(blocks.join("\n\n"))
}

/// (d) The array of every entries array.
fn all_entries(palette: &PaletteResult, naming: &NamingConvention) -> Result<String, EmitError> {
    let mut out = String::new();
    writeln!(out, "export const {} = [", naming.all_entries)?;
    for color in palette.colors().keys() {
        writeln!(out, "{INDENT}{},", naming.entries_const(color))?;
    }
    write!(out, "]")?;
    Ok(out)
}

/// (e) One palette object per theme.
fn palette_consts(palette: &PaletteResult, naming: &NamingConvention) -> Result<String, EmitError> {
    let blocks = palette
        .themes()
        .iter()
        .map(|(name, theme)| palette_const(name, theme, naming))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(blocks.join("\n\n"))
}

fn palette_const(name: &str, theme: &ThemePalette, naming: &NamingConvention) -> Result<String, EmitError> {
    let mut out = String::new();
    writeln!(out, "export const {} = {{", naming.palette_const(name))?;

    writeln!(out, "{INDENT}// -- Backgrounds")?;
    for (field, hex) in theme.colors.backgrounds() {
        writeln!(out, "{INDENT}{field}: '{hex}',")?;
    }
    writeln!(out, "{INDENT}// -- Foregrounds")?;
    for (field, hex) in theme.colors.foregrounds() {
        writeln!(out, "{INDENT}{field}: '{hex}',")?;
    }

    if !theme.aliases.is_empty() {
        for color in &theme.accents {
            writeln!(out, "{INDENT}// -- {}s", capitalize(color))?;
            for (alias, step) in &theme.aliases {
                writeln!(
                    out,
                    "{INDENT}{}: {},",
                    alias_field(color, alias),
                    naming.table_ref(color, *step)
                )?;
            }
        }
    }

    write!(out, "}}")?;
    Ok(out)
}

/// (f) The palette shape, built from the same alias loop as (e).
///
/// Tier fields are always present. An accent field present in only some
/// themes is emitted optional.
fn palette_type(palette: &PaletteResult, naming: &NamingConvention) -> Result<String, EmitError> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for theme in palette.themes().values() {
        for color in &theme.accents {
            for alias in theme.aliases.keys() {
                *counts.entry(alias_field(color, alias)).or_default() += 1;
            }
        }
    }
    let theme_count = palette.themes().len();

    let mut out = String::new();
    writeln!(out, "export type {} = {{", naming.palette_type)?;
    for field in ThemeColors::FIELD_NAMES {
        writeln!(out, "{INDENT}{field}: string")?;
    }
    for (field, count) in &counts {
        let optional = if *count < theme_count { "?" } else { "" };
        writeln!(out, "{INDENT}{field}{optional}: string")?;
    }
    write!(out, "}}")?;
    Ok(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
