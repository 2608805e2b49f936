use crate::error::{Result, SwpackError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed manifest location relative to the source base directory.
pub const MANIFEST_NAME: &str = "manifest.json";

/// One chapter of a source: the index names the source subdirectory and
/// fixes display order; `pages` is the reading order, preserved verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct ChapterSource {
    pub index: u32,
    pub name: String,
    pub pages: Vec<String>,
}

/// A parsed source manifest. `cover` may be empty, meaning "use the first
/// page of the first chapter".
#[derive(Debug, Clone, Deserialize)]
pub struct MangaSource {
    pub title: String,
    #[serde(default)]
    pub cover: String,
    pub chapters: Vec<ChapterSource>,
}

impl ChapterSource {
    /// Directory holding this chapter's page files.
    pub fn dir(&self, base: &Path) -> PathBuf {
        base.join("chapters").join(self.index.to_string())
    }

    /// Page paths in reading order.
    pub fn page_paths(&self, base: &Path) -> Vec<PathBuf> {
        let dir = self.dir(base);
        self.pages.iter().map(|p| dir.join(p)).collect()
    }
}

impl MangaSource {
    /// Resolve the series cover: the manifest's `cover` path if set, else
    /// the first page of the first chapter. `None` when neither exists.
    pub fn cover_path(&self, base: &Path) -> Option<PathBuf> {
        if !self.cover.is_empty() {
            return Some(base.join(&self.cover));
        }
        let first = self.chapters.first()?;
        let page = first.pages.first()?;
        Some(first.dir(base).join(page))
    }
}

/// Locate and parse the manifest under `base`.
pub fn read_source(base: &Path) -> Result<MangaSource> {
    let path = base.join(MANIFEST_NAME);
    if !path.is_file() {
        return Err(SwpackError::ManifestNotFound(path));
    }
    let text = fs::read_to_string(&path)?;
    serde_json::from_str(&text).map_err(SwpackError::ManifestParse)
}
