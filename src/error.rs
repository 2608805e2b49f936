use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwpackError {
    #[error("manifest not found: {0}")]
    ManifestNotFound(PathBuf),

    #[error("invalid manifest: {0}")]
    ManifestParse(#[source] serde_json::Error),

    #[error("name is empty")]
    EmptyName,

    #[error("output already exists: {0}")]
    OutputExists(PathBuf),

    #[error("cover generation failed: {0}")]
    CoverGeneration(String),

    #[error("cover generation timed out after {0:?}")]
    CoverTimeout(Duration),

    #[error("no cover source: no override given and no pages to fall back on")]
    NoCoverSource,

    #[error("failed to copy page {index}: {source}")]
    PageCopy {
        index: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("missing ComicInfo.xml in {0}")]
    MissingForeignMetadata(PathBuf),

    #[error("invalid container: {0}")]
    InvalidContainer(String),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SwpackError>;
