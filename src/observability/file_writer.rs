//! Rotating log file writer with size-based rotation and backup retention.
//!
//! The writer plugs into `tracing-subscriber`'s fmt layer through
//! [`MakeWriter`]. Every formatted event lands in one file; once that file
//! exceeds its size threshold it is renamed with a timestamp suffix, a new
//! file is started, and backups beyond the retention limit are removed.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing_subscriber::fmt::MakeWriter;

/// Maximum file size before rotation (10 MB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
pub const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating file writer.
///
/// The file is opened lazily on the first write, so construction never
/// fails. A shared `Mutex` serializes writes from concurrent events.
///
/// # Rotation Strategy
///
/// 1. Check file size before each write
/// 2. If size exceeds the limit, rotate:
///    - Rename current file to `<name>.<timestamp_millis>`
///    - Open a new empty file
///    - Remove the oldest backups beyond the retention limit
pub struct RotatingFileWriter {
    /// Path to the primary log file.
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    /// Lazily-initialized file handle.
    file: Mutex<Option<File>>,
}

impl RotatingFileWriter {
    /// Creates a writer with the default 10 MB limit and 3 backups.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    #[must_use]
    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            file: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Writes `buf` to the file, rotating first if the file is too large.
    ///
    /// # Errors
    ///
    /// May fail due to file system permissions, disk space exhaustion, or a
    /// poisoned lock.
    pub fn write_bytes(&self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self.lock()?;

        self.check_and_rotate(&mut guard)?;

        if guard.is_none() {
            let file = OpenOptions::new().create(true).append(true).open(&self.file_path)?;
            *guard = Some(file);
        }

        let file = guard
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "no log file available"))?;
        file.write_all(buf)?;
        file.flush()?;
        Ok(buf.len())
    }

    fn lock(&self) -> io::Result<MutexGuard<'_, Option<File>>> {
        self.file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("mutex poisoned: {e}")))
    }

    fn check_and_rotate(&self, file: &mut Option<File>) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > self.max_bytes {
                *file = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    fn file_name(&self) -> io::Result<&str> {
        self.file_path
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "invalid log file name"))
    }

    fn rotate_files(&self) -> io::Result<()> {
        let timestamp = chrono::Utc::now().timestamp_millis();
        let backup_path = self.file_path.with_file_name(format!("{}.{timestamp}", self.file_name()?));

        if self.file_path.exists() {
            fs::rename(&self.file_path, &backup_path)?;
        }

        self.cleanup_old_backups()
    }

    /// Removes backups `<name>.<timestamp>` beyond the retention limit,
    /// keeping the newest.
    ///
    /// Individual deletion errors are ignored.
    fn cleanup_old_backups(&self) -> io::Result<()> {
        let parent_dir = match self.file_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let prefix = format!("{}.", self.file_name()?);

        let mut backups: Vec<(i64, PathBuf)> = fs::read_dir(parent_dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter_map(|path| {
                let stamp = path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .and_then(|name| name.strip_prefix(&prefix))
                    .and_then(|suffix| suffix.parse::<i64>().ok())?;
                Some((stamp, path))
            })
            .collect();

        backups.sort();
        let excess = backups.len().saturating_sub(self.max_backups);
        for (_, old_backup) in backups.iter().take(excess) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl std::fmt::Debug for RotatingFileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

/// Per-event handle handed out by [`RotatingFileWriter`].
#[derive(Debug)]
pub struct RotatingHandle<'a> {
    writer: &'a RotatingFileWriter,
}

impl Write for RotatingHandle<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write_bytes(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for RotatingFileWriter {
    type Writer = RotatingHandle<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        RotatingHandle { writer: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backups(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .filter_map(|e| e.ok()?.file_name().into_string().ok())
            .filter(|name| name.starts_with("viewer.log."))
            .collect();
        names.sort();
        names
    }

    #[test]
    fn writes_are_appended() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RotatingFileWriter::new(dir.path().join("viewer.log"));

        writer.make_writer().write_all(b"first\n").unwrap();
        writer.make_writer().write_all(b"second\n").unwrap();

        assert_eq!(fs::read_to_string(writer.path()).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn oversized_file_is_rotated() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RotatingFileWriter::with_limits(dir.path().join("viewer.log"), 8, 3);

        writer.write_bytes(b"0123456789\n").unwrap();
        writer.write_bytes(b"next\n").unwrap();

        assert_eq!(fs::read_to_string(writer.path()).unwrap(), "next\n");
        assert_eq!(backups(dir.path()).len(), 1);
    }

    #[test]
    fn old_backups_are_pruned() {
        let dir = tempfile::tempdir().unwrap();
        for stamp in ["1000", "2000", "3000"] {
            fs::write(dir.path().join(format!("viewer.log.{stamp}")), "old").unwrap();
        }
        fs::write(dir.path().join("viewer.log.keep-me"), "unrelated").unwrap();

        let writer = RotatingFileWriter::with_limits(dir.path().join("viewer.log"), 2, 2);
        writer.write_bytes(b"full\n").unwrap();
        writer.write_bytes(b"x\n").unwrap();

        let remaining = backups(dir.path());
        assert_eq!(remaining.len(), 3);
        assert!(!remaining.contains(&"viewer.log.1000".to_string()));
        assert!(!remaining.contains(&"viewer.log.2000".to_string()));
        assert!(remaining.contains(&"viewer.log.3000".to_string()));
        assert!(remaining.contains(&"viewer.log.keep-me".to_string()));
    }
}
