pub mod entry;
pub mod import;
pub mod output;
pub mod series;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "swpack",
    version,
    about = "Pack manga and comic pages into .sw/.sws containers"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Resource,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// ImageMagick binary used for cover resizing
    #[arg(long, global = true, env = "SWPACK_MAGICK", default_value = "magick")]
    pub magick: String,
}

#[derive(Subcommand, Debug)]
pub enum Resource {
    /// Entry containers (.sw): pack, info, validate
    Entry {
        #[command(subcommand)]
        command: entry::EntryCommand,
    },
    /// Series containers (.sws): pack, info
    Series {
        #[command(subcommand)]
        command: series::SeriesCommand,
    },
    /// Foreign archives: import into entry containers
    Import {
        #[command(subcommand)]
        command: import::ImportCommand,
    },
}
