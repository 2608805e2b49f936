use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum EntryCommand {
    /// Pack a source directory's chapters into entry containers
    Pack {
        /// Source base directory (holds manifest.json and chapters/)
        dir: PathBuf,
        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Series name override (defaults to the manifest title)
        #[arg(long)]
        series: Option<String>,
        /// Mark the entries as comics instead of manga
        #[arg(long)]
        comic: bool,
        /// Pack only the chapter with this index
        #[arg(long)]
        chapter: Option<u32>,
    },
    /// Show information about an entry container
    Info {
        /// Path to the .sw file
        file: PathBuf,
    },
    /// Validate an entry container
    Validate {
        /// Path to the .sw file
        file: PathBuf,
    },
}
