use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use mrchead::report;

/// Display an MRC file header in the terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the MRC file
    file: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let summary = mrchead::read_header(&args.file)?;

    let display_name = args
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.file.display().to_string());

    report::print_report(&summary, &display_name);
    Ok(())
}
