pub mod comicinfo;

use crate::container::zip_utils;
use crate::error::{Result, SwpackError};
use crate::pack::{EntryJob, Page, PageData};
use std::io::Read;
use std::path::Path;

/// Page extensions accepted from a foreign archive.
const PAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// A foreign zip comic archive scanned into pipeline inputs.
///
/// `pages` keeps the archive's enumeration order; entries are not sorted
/// by name, so page indices follow the archive's internal directory order
/// even when that differs from the visual reading order.
#[derive(Debug)]
pub struct ForeignArchive {
    pub title: String,
    pub series: String,
    pub is_manga: bool,
    pub pages: Vec<Page>,
    /// Entries skipped for unsupported extensions; warnings, not errors.
    pub skipped: Vec<String>,
}

impl ForeignArchive {
    /// Turn the scan into an entry job. No cover override: the pipeline's
    /// first-page fallback is exactly the forced first candidate page.
    pub fn into_job(self, series_override: Option<String>) -> EntryJob {
        EntryJob {
            name: self.title,
            series: series_override.unwrap_or(self.series),
            is_manga: self.is_manga,
            pages: self.pages,
            cover_override: None,
        }
    }
}

fn is_page(name: &str) -> bool {
    Path::new(name)
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .is_some_and(|e| PAGE_EXTENSIONS.contains(&e.as_str()))
}

/// Scan a zip-based comic archive: parse its root `ComicInfo.xml` (absence
/// is a hard failure) and collect supported image entries as in-memory
/// pages in enumeration order.
pub fn scan_archive(path: &Path) -> Result<ForeignArchive> {
    let mut archive = zip_utils::open_container(path)?;

    let mut comic_info = None;
    let mut pages = Vec::new();
    let mut skipped = Vec::new();

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        if entry.is_dir() {
            continue;
        }
        let name = entry.name().to_string();
        if name == comicinfo::COMIC_INFO_NAME {
            let mut text = String::new();
            entry.read_to_string(&mut text)?;
            comic_info = Some(comicinfo::parse_comic_info(&text)?);
        } else if is_page(&name) {
            let mut data = Vec::new();
            entry.read_to_end(&mut data)?;
            let file_name = name.rsplit('/').next().unwrap_or(&name).to_string();
            pages.push(Page {
                name: file_name,
                data: PageData::Bytes(data),
            });
        } else {
            skipped.push(name);
        }
    }

    let Some(info) = comic_info else {
        return Err(SwpackError::MissingForeignMetadata(path.to_path_buf()));
    };

    let title = info.title.trim().to_string();
    if title.is_empty() {
        return Err(SwpackError::EmptyName);
    }

    Ok(ForeignArchive {
        title,
        series: info.series.trim().to_string(),
        is_manga: info.is_manga(),
        pages,
        skipped,
    })
}
