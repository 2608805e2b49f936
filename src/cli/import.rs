use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ImportCommand {
    /// Repackage an existing zip comic archive into an entry container
    Cbz {
        /// Path to the source archive
        file: PathBuf,
        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Series name override (defaults to the archive's Series field)
        #[arg(long)]
        series: Option<String>,
    },
}
