//! Command-line tool for compact binary masks.

#![warn(missing_docs)]

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, info, LevelFilter};
use std::path::PathBuf;

use maskarray::io::MaskFormat;

mod commands;
mod config;

use config::Config;

/// Inspect, convert, and combine binary masks stored as RLE text or pages.
#[derive(Debug, Parser)]
#[clap(name = "maskarray", version)]
struct Options {
    /// Maximum level of log messages to print.
    #[clap(long, global = true, default_value = "info")]
    log_level: LevelFilter,
    /// Character used for set cells by `render`.
    #[clap(long, global = true)]
    set_char: Option<char>,
    /// Character used for clear cells by `render`.
    #[clap(long, global = true)]
    clear_char: Option<char>,
    /// Format for output files with an unrecognized extension ("rle" or
    /// "pages").
    #[clap(long, global = true)]
    default_format: Option<MaskFormat>,
    /// Keep unused row patterns in memory after `combine`.
    #[clap(long, global = true)]
    no_gc: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the size, population, bounding box, and storage statistics of a
    /// mask.
    Info {
        /// Mask file.
        file: PathBuf,
    },
    /// Convert a mask from one format to another.
    Convert {
        /// Input mask file.
        input: PathBuf,
        /// Output mask file.
        output: PathBuf,
        /// Output format ("rle" or "pages"); inferred from the output
        /// extension if omitted.
        #[clap(long)]
        format: Option<MaskFormat>,
    },
    /// Combine two masks of the same size.
    Combine {
        /// Set operation to apply.
        op: CombineOp,
        /// First mask file.
        a: PathBuf,
        /// Second mask file.
        b: PathBuf,
        /// Output mask file.
        #[clap(short, long)]
        output: PathBuf,
        /// Output format ("rle" or "pages"); inferred from the output
        /// extension if omitted.
        #[clap(long)]
        format: Option<MaskFormat>,
    },
    /// Print a mask as text.
    Render {
        /// Mask file.
        file: PathBuf,
    },
}

/// Set operation for `combine`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum CombineOp {
    /// Cells set in either mask.
    Union,
    /// Cells set in both masks.
    Intersection,
    /// Cells set in the first mask but not the second.
    Difference,
    /// Cells set in exactly one mask.
    Xor,
}

impl Options {
    fn config(&self) -> Config {
        let default = Config::default();
        Config {
            default_format: self.default_format.unwrap_or(default.default_format),
            render_set: self.set_char.unwrap_or(default.render_set),
            render_clear: self.clear_char.unwrap_or(default.render_clear),
            gc_after_combine: !self.no_gc,
            ..default
        }
    }
}

fn main() -> Result<()> {
    let options = Options::parse();
    simple_logger::SimpleLogger::new()
        .with_level(options.log_level)
        .init()?;
    info!("Starting maskarray v{} ...", maskarray::VERSION);

    let config = options.config();
    debug!("Using {:?}", config);

    match options.command {
        Command::Info { file } => commands::info(&file),
        Command::Convert {
            input,
            output,
            format,
        } => commands::convert(&config, &input, &output, format),
        Command::Combine {
            op,
            a,
            b,
            output,
            format,
        } => commands::combine(&config, op, &a, &b, &output, format),
        Command::Render { file } => commands::render(&config, &file),
    }
}
