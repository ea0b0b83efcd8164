//! `uncaf <input-file.caf> <output-directory>`: unpacks a CAF archive into a
//! directory tree.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(version, about = "Unpack a CAF archive into a directory tree")]
struct Cli {
    /// Archive to read
    input_file: PathBuf,
    /// Directory to unpack into (created if absent)
    output_directory: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let bytes = std::fs::read(&cli.input_file)?;
    let archive = caf::parse(&bytes)?;
    caf::unpack(&archive, &cli.output_directory)?;

    log::info!(
        "unpacked {} into {}",
        cli.input_file.display(),
        cli.output_directory.display()
    );
    Ok(())
}
