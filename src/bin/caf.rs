//! `caf <input-directory> <output-file.caf>`: packs a directory tree into a
//! CAF archive.

use std::path::PathBuf;

use caf::Builder;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(version, about = "Pack a directory tree into a CAF archive")]
struct Cli {
    /// Directory to archive
    input_directory: PathBuf,
    /// Path of the archive to write
    output_file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let mut builder = Builder::new();
    builder.add_directory_tree(&cli.input_directory, None)?;
    let archive = builder.finish();

    let mut out = std::fs::File::create(&cli.output_file)?;
    caf::emit(&archive, &mut out)?;

    log::info!(
        "packed {} into {}",
        cli.input_directory.display(),
        cli.output_file.display()
    );
    Ok(())
}
