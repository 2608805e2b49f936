use crate::container::writer::ContainerWriter;
use crate::container::{
    COVER_NAME, ENTRY_COVER_SIZE, ENTRY_EXT, INFO_NAME, SERIES_COVER_LARGE, SERIES_COVER_MEDIUM,
    SERIES_COVER_SMALL, SERIES_COVER_VARIANTS, SERIES_EXT, page_name,
};
use crate::cover::Resizer;
use crate::error::{Result, SwpackError};
use crate::metadata::{EntryInfo, SeriesCover, SeriesInfo, SeriesType};
use crate::source::MangaSource;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where a page's bytes come from: a file on disk (directory sources) or
/// memory (foreign-archive imports). Both feed the same pipeline.
#[derive(Debug, Clone)]
pub enum PageData {
    File(PathBuf),
    Bytes(Vec<u8>),
}

/// One page in reading order. `name` is the original filename; only its
/// extension survives into the container.
#[derive(Debug, Clone)]
pub struct Page {
    pub name: String,
    pub data: PageData,
}

impl Page {
    fn read(&self) -> io::Result<Vec<u8>> {
        match &self.data {
            PageData::File(path) => fs::read(path),
            PageData::Bytes(bytes) => Ok(bytes.clone()),
        }
    }

    /// Path to a readable copy of this page, staging in-memory bytes
    /// under `dir` so the external resizer can open them.
    fn stage(&self, dir: &Path) -> Result<PathBuf> {
        match &self.data {
            PageData::File(path) => Ok(path.clone()),
            PageData::Bytes(bytes) => {
                let file_name = Path::new(&self.name)
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "page".to_string());
                let path = dir.join(file_name);
                fs::write(&path, bytes)?;
                Ok(path)
            }
        }
    }
}

/// Optional cross-reference ids carried by a series container. Empty
/// string means absent.
#[derive(Debug, Clone, Default)]
pub struct ExternalIds {
    pub mal: String,
    pub anilist: String,
}

/// Everything needed to pack one entry container.
#[derive(Debug)]
pub struct EntryJob {
    pub name: String,
    pub series: String,
    pub is_manga: bool,
    pub pages: Vec<Page>,
    pub cover_override: Option<PathBuf>,
}

/// Pack one entry container into `out_dir`, returning its path.
///
/// Pages are copied verbatim in reading order as `0.<ext>`, `1.<ext>`, …;
/// the cover (override, else first page) is resized to 80x112 PNG in a
/// scoped temp workspace; `info.json` is written last. Any failure
/// removes the partly-written output before returning.
pub fn pack_entry(job: &EntryJob, out_dir: &Path, resizer: &Resizer) -> Result<PathBuf> {
    let name = job.name.trim();
    if name.is_empty() {
        return Err(SwpackError::EmptyName);
    }

    let out_path = out_dir.join(format!("{}.{ENTRY_EXT}", slug::slugify(name)));
    let mut writer = ContainerWriter::create(&out_path)?;

    let mut pages = Vec::with_capacity(job.pages.len());
    for (i, page) in job.pages.iter().enumerate() {
        let data = page.read().map_err(|e| SwpackError::PageCopy {
            index: i,
            source: e,
        })?;
        let stored_name = page_name(i, &page.name);
        writer.add_raw(&stored_name, &data)?;
        pages.push(stored_name);
    }

    let workspace = tempfile::Builder::new().prefix("swpack").tempdir()?;
    let cover_src = match &job.cover_override {
        Some(path) => path.clone(),
        None => match job.pages.first() {
            Some(page) => page.stage(workspace.path())?,
            None => return Err(SwpackError::NoCoverSource),
        },
    };
    let cover_out = workspace.path().join(COVER_NAME);
    let (width, height) = ENTRY_COVER_SIZE;
    resizer.generate(&cover_src, &cover_out, width, height)?;
    writer.add_raw(COVER_NAME, &fs::read(&cover_out)?)?;

    let info = EntryInfo {
        name: name.to_string(),
        series: job.series.clone(),
        is_manga: job.is_manga,
        prefer_vertical: false,
        cover: COVER_NAME.to_string(),
        pages,
    };
    writer.add_deflated(INFO_NAME, &serde_json::to_vec_pretty(&info)?)?;

    writer.finish()
}

/// Everything needed to pack one series container.
#[derive(Debug)]
pub struct SeriesJob {
    pub name: String,
    pub cover: PathBuf,
    pub ids: ExternalIds,
}

/// Pack a series container: the original cover under its own base name
/// plus the three fixed-size variants, and `info.json`.
pub fn pack_series(job: &SeriesJob, out_dir: &Path, resizer: &Resizer) -> Result<PathBuf> {
    let name = job.name.trim();
    if name.is_empty() {
        return Err(SwpackError::EmptyName);
    }
    let original_name = job
        .cover
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or(SwpackError::NoCoverSource)?;

    let workspace = tempfile::Builder::new().prefix("swpack").tempdir()?;
    let mut variants = Vec::with_capacity(SERIES_COVER_VARIANTS.len());
    for (entry_name, width, height) in SERIES_COVER_VARIANTS {
        let out = workspace.path().join(entry_name);
        resizer.generate(&job.cover, &out, width, height)?;
        variants.push((entry_name, out));
    }

    let out_path = out_dir.join(format!("{}.{SERIES_EXT}", slug::slugify(name)));
    let mut writer = ContainerWriter::create(&out_path)?;

    writer.add_raw(&original_name, &fs::read(&job.cover)?)?;
    for (entry_name, path) in &variants {
        writer.add_raw(entry_name, &fs::read(path)?)?;
    }

    let info = SeriesInfo {
        name: name.to_string(),
        kind: SeriesType::Manga,
        mal_id: job.ids.mal.clone(),
        anilist_id: job.ids.anilist.clone(),
        cover: SeriesCover {
            original: original_name,
            small: SERIES_COVER_SMALL.0.to_string(),
            medium: SERIES_COVER_MEDIUM.0.to_string(),
            large: SERIES_COVER_LARGE.0.to_string(),
        },
    };
    writer.add_deflated(INFO_NAME, &serde_json::to_vec_pretty(&info)?)?;

    writer.finish()
}

/// Per-chapter result of a source run. Chapters are independent: one
/// chapter failing never aborts its siblings.
#[derive(Debug)]
pub struct ChapterOutcome {
    pub index: u32,
    pub name: String,
    pub result: Result<PathBuf>,
}

#[derive(Debug, Default)]
pub struct SourceOptions {
    /// Series name override; defaults to the manifest title.
    pub series: Option<String>,
    pub is_comic: bool,
    /// Pack only the chapter with this index.
    pub chapter: Option<u32>,
}

/// Pack every chapter of a source (or one, with `SourceOptions::chapter`),
/// sequentially and in source order, collecting per-chapter outcomes.
pub fn pack_source(
    source: &MangaSource,
    base: &Path,
    out_dir: &Path,
    resizer: &Resizer,
    opts: &SourceOptions,
) -> Vec<ChapterOutcome> {
    let series = opts
        .series
        .clone()
        .unwrap_or_else(|| source.title.clone());

    source
        .chapters
        .iter()
        .filter(|c| opts.chapter.is_none_or(|i| c.index == i))
        .map(|chapter| {
            let dir = chapter.dir(base);
            let job = EntryJob {
                name: chapter.name.clone(),
                series: series.clone(),
                is_manga: !opts.is_comic,
                pages: chapter
                    .pages
                    .iter()
                    .map(|p| Page {
                        name: p.clone(),
                        data: PageData::File(dir.join(p)),
                    })
                    .collect(),
                cover_override: None,
            };
            ChapterOutcome {
                index: chapter.index,
                name: chapter.name.clone(),
                result: pack_entry(&job, out_dir, resizer),
            }
        })
        .collect()
}
