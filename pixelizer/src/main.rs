use std::error::Error as _;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, CommandFactory, Parser, ValueEnum};
use lib_pixel::{convert, ConvertError, ConvertOptions, OutputStyle, Radix, ScanOrder};
use log::{info, LevelFilter};
use thiserror::Error;

/// Converts 8x8 images into a PROGMEM array of blue, green, red triplets.
#[derive(Parser, Debug)]
#[command(name = "pixelizer", disable_help_flag = true)]
struct Args {
    /// Input image file to process. Must be exactly 8x8 pixels in size
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Write the array to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Number format of the channel values
    #[arg(long, value_enum, default_value_t)]
    radix: RadixArg,

    /// Leave out the blank line between the file comments and the declaration
    #[arg(long)]
    compact: bool,

    /// Read each image column by column instead of row by row
    #[arg(long)]
    column_major: bool,

    /// Skip files that cannot be converted instead of stopping
    #[arg(short, long)]
    keep_going: bool,

    /// Log more, repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Print this usage message
    #[arg(short, long, action = ArgAction::SetTrue)]
    help: bool,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, ValueEnum)]
enum RadixArg {
    #[default]
    Hex,
    Decimal,
}

impl Args {
    fn options(&self) -> ConvertOptions {
        let radix = match self.radix {
            RadixArg::Hex => Radix::Hex,
            RadixArg::Decimal => Radix::Decimal,
        };
        let order = if self.column_major {
            ScanOrder::ColumnMajor
        } else {
            ScanOrder::RowMajor
        };

        ConvertOptions {
            style: OutputStyle {
                radix,
                blank_after_header: !self.compact,
            },
            order,
            keep_going: self.keep_going,
        }
    }

    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error("Failed to write {}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write to stdout")]
    WriteStdout(#[source] io::Error),
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    if args.help || args.files.is_empty() {
        eprintln!("{}", Args::command().render_help());
        return ExitCode::FAILURE;
    }

    lib_pixel::init_logging(args.log_level());

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            let mut cause = e.source();
            while let Some(inner) = cause {
                eprintln!("  caused by: {}", inner);
                cause = inner.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let conversion = convert(&args.files, &args.options())?;

    // Everything is rendered before the first byte goes out.
    let text = format!("{}\n", conversion.document.render());

    match &args.output {
        Some(path) => {
            fs::write(path, &text).map_err(|source| CliError::WriteFile {
                path: path.clone(),
                source,
            })?;
            info!("Wrote {} bytes to {}", text.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(CliError::WriteStdout)?;
        }
    }

    if !conversion.skipped.is_empty() {
        info!(
            "{} of {} files were skipped",
            conversion.skipped.len(),
            args.files.len()
        );
    }

    Ok(())
}
