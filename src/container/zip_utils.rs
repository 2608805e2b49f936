use crate::error::{Result, SwpackError};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::ZipArchive;

pub fn open_container(path: &Path) -> Result<ZipArchive<File>> {
    let file = File::open(path)?;
    let archive = ZipArchive::new(file)?;
    Ok(archive)
}

pub fn read_entry(archive: &mut ZipArchive<File>, name: &str) -> Result<Vec<u8>> {
    let mut entry = archive
        .by_name(name)
        .map_err(|_| SwpackError::InvalidContainer(format!("missing entry: {name}")))?;
    let mut buf = Vec::new();
    entry.read_to_end(&mut buf)?;
    Ok(buf)
}

pub fn read_entry_string(archive: &mut ZipArchive<File>, name: &str) -> Result<String> {
    let bytes = read_entry(archive, name)?;
    String::from_utf8(bytes)
        .map_err(|e| SwpackError::InvalidContainer(format!("invalid UTF-8 in {name}: {e}")))
}

pub fn list_entries(archive: &ZipArchive<File>) -> Vec<String> {
    (0..archive.len())
        .filter_map(|i| archive.name_for_index(i).map(|s| s.to_string()))
        .collect()
}
