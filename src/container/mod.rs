pub mod reader;
pub mod writer;
pub mod zip_utils;

use std::path::Path;

/// File extension of an entry container.
pub const ENTRY_EXT: &str = "sw";
/// File extension of a series container.
pub const SERIES_EXT: &str = "sws";

/// Metadata entry name, common to both container kinds.
pub const INFO_NAME: &str = "info.json";
/// Cover entry name inside an entry container.
pub const COVER_NAME: &str = "cover.png";

/// Entry cover target size.
pub const ENTRY_COVER_SIZE: (u32, u32) = (80, 112);

/// Resized series cover variants: entry name, width, height.
pub const SERIES_COVER_LARGE: (&str, u32, u32) = ("cover-large.png", 360, 480);
pub const SERIES_COVER_MEDIUM: (&str, u32, u32) = ("cover-medium.png", 270, 360);
pub const SERIES_COVER_SMALL: (&str, u32, u32) = ("cover-small.png", 180, 240);

pub const SERIES_COVER_VARIANTS: [(&str, u32, u32); 3] =
    [SERIES_COVER_LARGE, SERIES_COVER_MEDIUM, SERIES_COVER_SMALL];

/// Canonical in-container name for the page at `index`: the index followed
/// by the original file's extension, verbatim.
pub fn page_name(index: usize, original: &str) -> String {
    match Path::new(original).extension() {
        Some(ext) => format!("{index}.{}", ext.to_string_lossy()),
        None => index.to_string(),
    }
}
