use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Drop a fake resizer into `dir`: a script that copies its source
/// argument over its destination argument, standing in for ImageMagick so
/// tests neither need it installed nor depend on real pixel data.
pub fn stub_resizer(dir: &Path) -> PathBuf {
    let path = dir.join("fake-magick");
    fs::write(
        &path,
        "#!/bin/sh\nfor a; do dest=$a; done; cp \"$2\" \"$dest\"\n",
    )
    .expect("write stub resizer");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod stub");
    }
    path
}

/// The swpack binary wired to the stub resizer.
pub fn swpack(magick: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("swpack").expect("binary under test");
    cmd.env("SWPACK_MAGICK", magick);
    cmd
}

/// Lay out a source tree: `manifest.json` plus page files given as paths
/// relative to the base directory.
#[allow(dead_code)]
pub fn write_source_tree(base: &Path, manifest: &str, pages: &[(&str, &[u8])]) {
    fs::create_dir_all(base).expect("create base dir");
    fs::write(base.join("manifest.json"), manifest).expect("write manifest");
    for (rel, data) in pages {
        let path = base.join(rel);
        fs::create_dir_all(path.parent().expect("page parent")).expect("create page dir");
        fs::write(path, data).expect("write page");
    }
}

/// Write a zip archive with the given entries, in the given order.
#[allow(dead_code)]
pub fn write_zip(path: &Path, entries: &[(&str, &[u8])]) {
    let mut zip = zip::ZipWriter::new(File::create(path).expect("create zip"));
    for (name, data) in entries {
        zip.start_file(*name, zip::write::SimpleFileOptions::default())
            .expect("start entry");
        zip.write_all(data).expect("write entry");
    }
    zip.finish().expect("finish zip");
}

#[allow(dead_code)]
pub fn list_zip_entries(path: &Path) -> Vec<String> {
    let archive = zip::ZipArchive::new(File::open(path).expect("open zip")).expect("read zip");
    (0..archive.len())
        .filter_map(|i| archive.name_for_index(i).map(|s| s.to_string()))
        .collect()
}

#[allow(dead_code)]
pub fn read_zip_entry(path: &Path, name: &str) -> Vec<u8> {
    let mut archive = zip::ZipArchive::new(File::open(path).expect("open zip")).expect("read zip");
    let mut entry = archive.by_name(name).expect("entry present");
    let mut buf = Vec::new();
    entry.read_to_end(&mut buf).expect("read entry");
    buf
}
