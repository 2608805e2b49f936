use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum SeriesCommand {
    /// Pack a source directory's metadata and cover into a series container
    Pack {
        /// Source base directory (holds manifest.json and chapters/)
        dir: PathBuf,
        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Cover image override (defaults to the manifest cover, else the
        /// first page of the first chapter)
        #[arg(long)]
        cover: Option<PathBuf>,
        /// MyAnimeList id
        #[arg(long)]
        mal_id: Option<String>,
        /// AniList id
        #[arg(long)]
        anilist_id: Option<String>,
    },
    /// Show information about a series container
    Info {
        /// Path to the .sws file
        file: PathBuf,
    },
}
