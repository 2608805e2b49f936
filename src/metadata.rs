use serde::{Deserialize, Serialize};

/// Metadata written as `info.json` into an entry container (`.sw`).
///
/// `pages` lists the canonical page names in reading order and is the
/// authoritative ordering; the numeric filenames merely mirror it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryInfo {
    pub name: String,
    pub series: String,

    pub is_manga: bool,
    pub prefer_vertical: bool,

    pub cover: String,
    pub pages: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesType {
    Manga,
    Comic,
    VisualNovel,
}

impl std::fmt::Display for SeriesType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            SeriesType::Manga => "manga",
            SeriesType::Comic => "comic",
            SeriesType::VisualNovel => "visual_novel",
        })
    }
}

/// The four cover images carried by a series container: the untouched
/// original plus the three fixed-size crops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesCover {
    pub original: String,
    pub small: String,
    pub medium: String,
    pub large: String,
}

/// Metadata written as `info.json` into a series container (`.sws`).
///
/// External ids are passed through verbatim; an empty string means absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SeriesType,

    pub mal_id: String,
    pub anilist_id: String,

    pub cover: SeriesCover,
}
