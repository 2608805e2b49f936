use crate::error::{Result, SwpackError};
use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Per-invocation deadline for the external resize process.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Wraps the external ImageMagick process that produces cover images.
///
/// The resize is crop-to-fill: scale to cover the full target box, then
/// crop the excess centered. Output format follows the destination
/// extension, which callers always set to `.png`.
pub struct Resizer {
    program: String,
    timeout: Duration,
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new("magick")
    }
}

impl Resizer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resize `src` into `dest` at exactly `width`x`height`.
    ///
    /// Spawn failures and non-zero exits surface as `CoverGeneration`;
    /// exceeding the deadline kills the child and surfaces `CoverTimeout`.
    pub fn generate(&self, src: &Path, dest: &Path, width: u32, height: u32) -> Result<()> {
        let mut child = Command::new(&self.program)
            .arg("convert")
            .arg(src)
            .arg("-resize")
            .arg(format!("{width}x{height}^"))
            .arg("-gravity")
            .arg("Center")
            .arg("-extent")
            .arg(format!("{width}x{height}"))
            .arg(dest)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                SwpackError::CoverGeneration(format!("failed to run {}: {e}", self.program))
            })?;

        let deadline = Instant::now() + self.timeout;
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) => {
                    if Instant::now() >= deadline {
                        let _ = child.kill();
                        let _ = child.wait();
                        return Err(SwpackError::CoverTimeout(self.timeout));
                    }
                    std::thread::sleep(Duration::from_millis(20));
                }
                Err(e) => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(e.into());
                }
            }
        };

        if !status.success() {
            let mut stderr = String::new();
            if let Some(mut pipe) = child.stderr.take() {
                let _ = pipe.read_to_string(&mut stderr);
            }
            let stderr = stderr.trim();
            return Err(SwpackError::CoverGeneration(if stderr.is_empty() {
                format!("{} exited with {status}", self.program)
            } else {
                stderr.to_string()
            }));
        }

        Ok(())
    }
}
