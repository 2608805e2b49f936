use crate::container::{INFO_NAME, zip_utils};
use crate::error::Result;
use crate::metadata::{EntryInfo, SeriesInfo};
use regex::Regex;
use std::path::Path;

/// Parse `info.json` out of an entry container.
pub fn read_entry_info(path: &Path) -> Result<EntryInfo> {
    let mut archive = zip_utils::open_container(path)?;
    let text = zip_utils::read_entry_string(&mut archive, INFO_NAME)?;
    Ok(serde_json::from_str(&text)?)
}

/// Parse `info.json` out of a series container.
pub fn read_series_info(path: &Path) -> Result<SeriesInfo> {
    let mut archive = zip_utils::open_container(path)?;
    let text = zip_utils::read_entry_string(&mut archive, INFO_NAME)?;
    Ok(serde_json::from_str(&text)?)
}

/// Structural checks on an entry container. Returns the list of issues
/// found; an unreadable archive is an error, a malformed one is an issue.
pub fn validate_entry(path: &Path) -> Result<Vec<String>> {
    let mut archive = zip_utils::open_container(path)?;
    let entries = zip_utils::list_entries(&archive);
    let mut issues: Vec<String> = Vec::new();

    if !entries.iter().any(|e| e == INFO_NAME) {
        issues.push(format!("missing {INFO_NAME}"));
        return Ok(issues);
    }
    let text = zip_utils::read_entry_string(&mut archive, INFO_NAME)?;
    let info: EntryInfo = match serde_json::from_str(&text) {
        Ok(info) => info,
        Err(e) => {
            issues.push(format!("invalid {INFO_NAME}: {e}"));
            return Ok(issues);
        }
    };

    if info.name.trim().is_empty() {
        issues.push("empty name".to_string());
    }
    if !entries.iter().any(|e| *e == info.cover) {
        issues.push(format!("missing cover entry: {}", info.cover));
    }

    let canonical = Regex::new(r"^(\d+)(\.[A-Za-z0-9]+)?$").unwrap();
    for (i, page) in info.pages.iter().enumerate() {
        if !entries.iter().any(|e| e == page) {
            issues.push(format!("missing page entry: {page}"));
        }
        match canonical.captures(page) {
            Some(caps) => {
                let index: usize = caps[1].parse().unwrap_or(usize::MAX);
                if index != i {
                    issues.push(format!("page {page} out of order: expected index {i}"));
                }
            }
            None => issues.push(format!("non-canonical page name: {page}")),
        }
    }

    for entry in &entries {
        if entry != INFO_NAME && *entry != info.cover && !info.pages.iter().any(|p| p == entry) {
            issues.push(format!("stray entry: {entry}"));
        }
    }

    Ok(issues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::writer::ContainerWriter;

    fn write_container(path: &Path, info: &EntryInfo, entries: &[(&str, &[u8])]) {
        let mut writer = ContainerWriter::create(path).unwrap();
        for (name, data) in entries {
            writer.add_raw(name, data).unwrap();
        }
        let json = serde_json::to_vec_pretty(info).unwrap();
        writer.add_deflated(INFO_NAME, &json).unwrap();
        writer.finish().unwrap();
    }

    fn sample_info(pages: &[&str]) -> EntryInfo {
        EntryInfo {
            name: "Chapter 1".to_string(),
            series: "Series".to_string(),
            is_manga: true,
            prefer_vertical: false,
            cover: "cover.png".to_string(),
            pages: pages.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn read_back_entry_info() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("c.sw");
        let info = sample_info(&["0.jpg"]);
        write_container(
            &path,
            &info,
            &[("0.jpg", b"p0"), ("cover.png", b"cover")],
        );

        assert_eq!(read_entry_info(&path).unwrap(), info);
    }

    #[test]
    fn validate_clean_container() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("c.sw");
        write_container(
            &path,
            &sample_info(&["0.jpg", "1.png"]),
            &[("0.jpg", b"p0"), ("1.png", b"p1"), ("cover.png", b"cover")],
        );

        assert!(validate_entry(&path).unwrap().is_empty());
    }

    #[test]
    fn validate_reports_missing_and_stray() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("c.sw");
        // info lists 1.png which is absent; thumbs.db is unaccounted for.
        write_container(
            &path,
            &sample_info(&["0.jpg", "1.png"]),
            &[("0.jpg", b"p0"), ("cover.png", b"cover"), ("thumbs.db", b"x")],
        );

        let issues = validate_entry(&path).unwrap();
        assert!(issues.iter().any(|i| i.contains("missing page entry: 1.png")));
        assert!(issues.iter().any(|i| i.contains("stray entry: thumbs.db")));
    }

    #[test]
    fn validate_reports_out_of_order_pages() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("c.sw");
        write_container(
            &path,
            &sample_info(&["1.jpg", "0.jpg"]),
            &[("0.jpg", b"p0"), ("1.jpg", b"p1"), ("cover.png", b"cover")],
        );

        let issues = validate_entry(&path).unwrap();
        assert!(issues.iter().any(|i| i.contains("out of order")));
    }

    #[test]
    fn validate_reports_non_canonical_names() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("c.sw");
        write_container(
            &path,
            &sample_info(&["page-0.jpg"]),
            &[("page-0.jpg", b"p0"), ("cover.png", b"cover")],
        );

        let issues = validate_entry(&path).unwrap();
        assert!(issues.iter().any(|i| i.contains("non-canonical")));
    }
}
