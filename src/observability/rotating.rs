//! Append-only line writer with size-based rotation.
//!
//! When the active file grows past the size limit it is shifted to `<file>.1`,
//! existing backups move up by one, and anything past the retention count is
//! dropped.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Size at which the active file is rotated (10 MiB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of rotated backups kept next to the active file.
pub const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating file writer.
///
/// The file is opened lazily on first write, so construction never fails.
pub struct RotatingWriter {
    path: PathBuf,
    max_bytes: u64,
    file: Mutex<Option<File>>,
}

impl RotatingWriter {
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limit(path, MAX_FILE_SIZE_BYTES)
    }

    pub const fn with_limit(path: PathBuf, max_bytes: u64) -> Self {
        Self {
            path,
            max_bytes,
            file: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is over the limit.
    ///
    /// # Errors
    ///
    /// Returns I/O errors from rotation, opening or writing, and a poisoned lock.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("writer lock poisoned: {e}")))?;

        let size = fs::metadata(&self.path).map(|m| m.len()).unwrap_or(0);
        if size > self.max_bytes {
            *file = None;
            rotate(&self.path)?;
        }

        if file.is_none() {
            if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            *file = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        let handle = file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "trace file not open"))?;

        writeln!(handle, "{line}")?;
        handle.flush()
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Debug for RotatingWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingWriter")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .finish_non_exhaustive()
    }
}

fn backup_path(path: &Path, index: usize) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(format!(".{index}"));
    PathBuf::from(name)
}

fn rotate(path: &Path) -> io::Result<()> {
    let oldest = backup_path(path, MAX_BACKUP_FILES);
    if oldest.exists() {
        fs::remove_file(&oldest)?;
    }
    for index in (1..MAX_BACKUP_FILES).rev() {
        let from = backup_path(path, index);
        if from.exists() {
            fs::rename(&from, backup_path(path, index + 1))?;
        }
    }
    if path.exists() {
        fs::rename(path, backup_path(path, 1))?;
    }
    Ok(())
}
