// SPDX-License-Identifier: MIT
//
// Command line surface.
//
//   stg [-v...] generate [--config PATH] [--out-dir DIR] [--stdout]
//
// `generate` is also what a bare `stg` runs. Without `--config` the palette
// is assembled interactively.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::{ArgAction, Args, Parser, Subcommand};
use eyre::{Result, WrapErr, bail};
use stg_emit::{NamingConvention, OutputKind};
use stg_theme::{HexColor, PaletteConfig, PaletteResult, compose_palette};
use tempfile::NamedTempFile;
use tracing::{debug, info, trace};

use crate::load::{GenerateConfig, load_config};
use crate::logging::{self, LogConfig};
use crate::prompt;

#[derive(Debug, Clone, Parser)]
#[command(name = "stg", version, about = "Site theme generator")]
pub struct CliArgs {
    #[command(subcommand)]
    pub subcommand: Option<RootSubcommand>,
    /// Increase logging verbosity
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl CliArgs {
    pub fn execute(self) -> Result<ExitCode> {
        logging::init(LogConfig::from_verbosity(self.verbose))?;

        let subcommand = self.subcommand.unwrap_or_default();
        subcommand.execute()
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum RootSubcommand {
    /// Compose the palette and write the generated files
    Generate(GenerateArgs),
}

impl RootSubcommand {
    pub fn execute(self) -> Result<ExitCode> {
        match self {
            Self::Generate(args) => args.execute(),
        }
    }
}

impl Default for RootSubcommand {
    fn default() -> Self {
        Self::Generate(GenerateArgs::default())
    }
}

#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Palette config file (JSON). Prompts interactively when omitted
    #[arg(long, short)]
    pub config: Option<PathBuf>,
    /// Directory the generated files are written to
    #[arg(long, short, default_value = ".")]
    pub out_dir: PathBuf,
    /// Print the generated files instead of writing them
    #[arg(long)]
    pub stdout: bool,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            config: None,
            out_dir: PathBuf::from("."),
            stdout: false,
        }
    }
}

impl GenerateArgs {
    pub fn execute(self) -> Result<ExitCode> {
        let config = match &self.config {
            Some(path) => load_config(path)?,
            None => prompt::ask_config()?,
        };

        let written = generate(&config, &self.out_dir, self.stdout)?;
        for path in &written {
            info!("wrote {}", path.display());
        }
        Ok(ExitCode::SUCCESS)
    }
}

/// Compose, render every requested output, then write them all.
///
/// Nothing touches the disk until every output has rendered. Files are
/// staged next to their targets and only moved into place once all of them
/// were written, so a failure leaves earlier generated files as they were.
/// Returns the written paths (empty when printing to stdout).
pub fn generate(config: &GenerateConfig, out_dir: &Path, to_stdout: bool) -> Result<Vec<PathBuf>> {
    let start = Instant::now();

    if to_stdout && config.outputs.len() > 1 {
        bail!(
            "--stdout prints a single output, but {} are selected",
            config.outputs.len()
        );
    }

    info!("color configuration:");
    for line in config_table(&config.palette) {
        info!("  {line}");
    }

    let palette = compose_palette(&config.palette).wrap_err("failed to compose palette")?;
    debug!(
        themes = palette.themes().len(),
        colors = palette.colors().len(),
        "composed palette"
    );

    info!("color results:");
    for line in results_table(&palette) {
        info!("  {line}");
    }

    let naming = NamingConvention::default();
    let mut rendered = Vec::with_capacity(config.outputs.len());
    for &kind in &config.outputs {
        let text = kind
            .render(&palette, &naming)
            .wrap_err_with(|| format!("failed to render {kind} output"))?;
        debug!(output = %kind, bytes = text.len(), "rendered");
        rendered.push((kind, text));
    }

    let written = if to_stdout {
        for (_, text) in &rendered {
            print!("{text}");
        }
        Vec::new()
    } else {
        write_outputs(out_dir, &rendered)?
    };

    info!("done in {:.2?}", start.elapsed());
    Ok(written)
}

/// Stage every output as a temp file in `out_dir`, then move them all into
/// place.
fn write_outputs(out_dir: &Path, rendered: &[(OutputKind, String)]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir).wrap_err_with(|| format!("failed to create {}", out_dir.display()))?;

    let staged = rendered
        .iter()
        .map(|(kind, text)| -> Result<(NamedTempFile, PathBuf)> {
            let path = out_dir.join(kind.file_name());
            let mut file = NamedTempFile::new_in(out_dir)
                .wrap_err_with(|| format!("failed to stage {}", path.display()))?;
            file.write_all(text.as_bytes())
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
            trace!(target_path = %path.display(), staged = %file.path().display(), "staged");
            Ok((file, path))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut written = Vec::with_capacity(staged.len());
    for (file, path) in staged {
        file.persist(&path)
            .map_err(|e| e.error)
            .wrap_err_with(|| format!("failed to write {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}

/// The input as `name: value` lines: every accent base color, then every
/// theme's canvas and type colors.
fn config_table(palette: &PaletteConfig) -> Vec<String> {
    let colors = palette
        .colors
        .iter()
        .map(|(name, hex)| format!("{name}: {hex}"));
    let themes = palette.themes.iter().flat_map(|(name, theme)| {
        [
            format!("{name}.canvas: {}", theme.canvas),
            format!("{name}.type: {}", theme.type_color),
        ]
    });
    colors.chain(themes).collect()
}

/// The composed palette as `name: value` lines: every theme tier, then every
/// accent gradient with its colors joined by ','.
fn results_table(palette: &PaletteResult) -> Vec<String> {
    let themes = palette.themes().iter().flat_map(|(name, theme)| {
        let colors = &theme.colors;
        colors
            .backgrounds()
            .into_iter()
            .chain(colors.foregrounds())
            .map(move |(field, hex)| format!("{name}.{field}: {hex}"))
    });
    let gradients = palette.colors().iter().map(|(name, gradient)| {
        let values = gradient
            .colors()
            .map(HexColor::as_str)
            .collect::<Vec<_>>()
            .join(",");
        format!("{name}: {values}")
    });
    themes.chain(gradients).collect()
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::load::parse_config;

    fn config(text: &str) -> GenerateConfig {
        parse_config(text).unwrap()
    }

    #[test]
    fn writes_every_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(
            r##"{
                "colors": { "red": "#E5484D" },
                "themes": { "dark": { "canvas": "#111111", "type": "#EEEEEE" } },
                "outputs": ["typescript", "json"]
            }"##,
        );

        let written = generate(&config, dir.path(), false).unwrap();
        assert_eq!(
            written,
            vec![dir.path().join("palette.ts"), dir.path().join("palette.json")]
        );

        let ts = fs::read_to_string(dir.path().join("palette.ts")).unwrap();
        assert!(ts.contains("red40: '#B7393D',"));
        assert!(ts.contains("export const DARK_PALETTE"));

        let json = fs::read_to_string(dir.path().join("palette.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["themes"]["dark"]["colors"]["section"], "#282828");
    }

    #[test]
    fn creates_the_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("src").join("theme");
        let config = config(r#"{ "colors": {}, "themes": {} }"#);

        let written = generate(&config, &out, false).unwrap();
        assert_eq!(written, vec![out.join(OutputKind::Typescript.file_name())]);
        assert!(out.join("palette.ts").exists());
    }

    #[test]
    fn missing_color_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(
            r##"{
                "colors": { "red": "#E5484D" },
                "themes": {
                    "dark": { "canvas": "#111111", "type": "#EEEEEE", "accents": ["blue"] }
                }
            }"##,
        );

        let err = generate(&config, dir.path(), false).unwrap_err();
        assert!(err.to_string().contains("failed to compose palette"));
        assert!(!dir.path().join("palette.ts").exists());
    }

    #[test]
    fn invalid_color_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(
            r##"{
                "colors": { "red": "nope" },
                "themes": { "dark": { "canvas": "#111111", "type": "#EEEEEE" } }
            }"##,
        );

        assert!(generate(&config, dir.path(), false).is_err());
        assert!(!dir.path().join("palette.ts").exists());
    }

    #[test]
    fn stdout_writes_no_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(r#"{ "colors": {}, "themes": {} }"#);

        let written = generate(&config, dir.path(), true).unwrap();
        assert!(written.is_empty());
        assert!(!dir.path().join("palette.ts").exists());
    }

    #[test]
    fn parses_generate_flags() {
        let args = CliArgs::try_parse_from(["stg", "-vv", "generate", "--config", "p.json", "--stdout"]).unwrap();
        assert_eq!(args.verbose, 2);
        let Some(RootSubcommand::Generate(generate)) = args.subcommand else {
            panic!("expected generate");
        };
        assert_eq!(generate.config, Some(PathBuf::from("p.json")));
        assert_eq!(generate.out_dir, PathBuf::from("."));
        assert!(generate.stdout);
    }

    #[test]
    fn bare_invocation_generates() {
        let args = CliArgs::try_parse_from(["stg"]).unwrap();
        assert!(args.subcommand.is_none());
        let RootSubcommand::Generate(generate) = RootSubcommand::default();
        assert_eq!(generate.config, None);
    }

    const RED_FINE: &str = "#160707,#2D0E0F,#441517,#5B1C1E,#722426,#892B2E,#A03235,\
#B7393D,#CE4045,#E5484D,#E75A5E,#EA6C70,#EC7E82,#EF9194,#F2A3A6,#F4B5B7,#F7C8C9,#F9DADB,#FCECED";

    fn dark_red() -> GenerateConfig {
        config(
            r##"{
                "colors": { "red": "#E5484D" },
                "themes": { "dark": { "canvas": "#111111", "type": "#EEEEEE" } }
            }"##,
        )
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture_logs(f: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn config_table_lists_colors_then_theme_bases() {
        assert_eq!(
            config_table(&dark_red().palette),
            vec![
                "red: #E5484D".to_owned(),
                "dark.canvas: #111111".to_owned(),
                "dark.type: #EEEEEE".to_owned(),
            ]
        );
    }

    #[test]
    fn results_table_lists_tiers_then_gradients() {
        let palette = compose_palette(&dark_red().palette).unwrap();
        assert_eq!(
            results_table(&palette),
            vec![
                "dark.canvas: #111111".to_owned(),
                "dark.section: #282828".to_owned(),
                "dark.sectionHighlight: #404040".to_owned(),
                "dark.outline: #585858".to_owned(),
                "dark.type: #EEEEEE".to_owned(),
                "dark.typeBody: #CACACA".to_owned(),
                "dark.typeDemote: #A6A6A6".to_owned(),
                format!("red: {RED_FINE}"),
            ]
        );
    }

    #[test]
    fn generate_logs_both_tables() {
        let dir = tempfile::tempdir().unwrap();
        let config = dark_red();
        let logs = capture_logs(|| {
            generate(&config, dir.path(), false).unwrap();
        });

        let configuration = logs.find("color configuration:").unwrap();
        let results = logs.find("color results:").unwrap();
        assert!(configuration < results);

        assert!(logs.contains("  dark.canvas: #111111"));
        assert!(logs.contains("  dark.type: #EEEEEE"));
        assert!(logs.contains("  dark.sectionHighlight: #404040"));
        assert!(logs.contains("  dark.typeDemote: #A6A6A6"));
        assert!(logs.contains(&format!("  red: {RED_FINE}")));
    }

    #[test]
    fn stdout_rejects_several_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = dark_red();
        config.outputs = vec![OutputKind::Typescript, OutputKind::Json];

        let err = generate(&config, dir.path(), true).unwrap_err();
        assert!(err.to_string().contains("--stdout"));
    }

    #[test]
    fn writes_leave_no_staging_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = dark_red();
        config.outputs = vec![OutputKind::Typescript, OutputKind::Json];

        generate(&config, dir.path(), false).unwrap();

        let mut names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect();
        names.sort();
        assert_eq!(names, vec!["palette.json".to_owned(), "palette.ts".to_owned()]);
    }

    #[test]
    fn regeneration_replaces_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("palette.ts"), "stale").unwrap();

        generate(&dark_red(), dir.path(), false).unwrap();

        let ts = fs::read_to_string(dir.path().join("palette.ts")).unwrap();
        assert!(ts.starts_with("export const COLORS = {"));
    }
}
