use crate::error::{Result, SwpackError};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Archive writer with exclusive-create semantics.
///
/// Creation fails with `OutputExists` rather than truncating an existing
/// file. Dropping the writer without calling `finish` deletes the output,
/// so a failed packaging run never leaves a half-written container behind.
#[derive(Debug)]
pub struct ContainerWriter {
    zip: Option<ZipWriter<File>>,
    path: PathBuf,
    finished: bool,
}

impl ContainerWriter {
    pub fn create(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| {
                if e.kind() == io::ErrorKind::AlreadyExists {
                    SwpackError::OutputExists(path.to_path_buf())
                } else {
                    SwpackError::Io(e)
                }
            })?;
        Ok(Self {
            zip: Some(ZipWriter::new(file)),
            path: path.to_path_buf(),
            finished: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Add an already-compressed entry (page and cover images) verbatim.
    pub fn add_raw(&mut self, name: &str, data: &[u8]) -> Result<()> {
        let stored =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        self.start(name, stored)?.write_all(data)?;
        Ok(())
    }

    /// Add a compressible entry (metadata).
    pub fn add_deflated(&mut self, name: &str, data: &[u8]) -> Result<()> {
        let deflate =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        self.start(name, deflate)?.write_all(data)?;
        Ok(())
    }

    fn start(&mut self, name: &str, options: SimpleFileOptions) -> Result<&mut ZipWriter<File>> {
        let Some(zip) = self.zip.as_mut() else {
            return Err(SwpackError::InvalidContainer(
                "write after finish".to_string(),
            ));
        };
        zip.start_file(name, options)?;
        Ok(zip)
    }

    /// Finalize the archive and keep the output file.
    pub fn finish(mut self) -> Result<PathBuf> {
        if let Some(zip) = self.zip.take() {
            zip.finish()?;
        }
        self.finished = true;
        Ok(self.path.clone())
    }
}

impl Drop for ContainerWriter {
    fn drop(&mut self) {
        if !self.finished {
            drop(self.zip.take());
            let _ = fs::remove_file(&self.path);
        }
    }
}
