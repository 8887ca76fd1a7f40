// SPDX-License-Identifier: MIT
//
// stg — site theme generator.
//
// This is the binary that wires the crates together:
//
//   stg-color → hex parsing and lighten/darken math
//   stg-theme → gradients, theme ladders, palette composition
//   stg-emit  → TypeScript / JSON rendering
//
// One `stg generate` run flows through:
//
//   --config file or interactive prompt → GenerateConfig
//   compose_palette → PaletteResult
//   OutputKind::render for every requested output → text
//   write every file (only after all of them rendered)
//
// Each run is a full regeneration. Nothing is read back from earlier output.

mod cli;
mod load;
mod logging;
mod prompt;

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match args.execute() {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("an error occurred");
            eprintln!("stg: {e:?}");
            ExitCode::FAILURE
        }
    }
}
