//! File operations
//!
//! Buffered file copy with metadata preservation, plus the idempotent
//! directory creation used by concurrent workers targeting the same bucket.

use crate::error::{IoResultExt, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Copy operation statistics
#[derive(Debug, Clone, Default)]
pub struct CopyStats {
    /// Bytes copied
    pub bytes_copied: u64,
    /// Duration of the copy
    pub duration: std::time::Duration,
}

/// Options for file copy operations
#[derive(Debug, Clone)]
pub struct CopyOptions {
    /// Buffer size for buffered operations
    pub buffer_size: usize,
    /// Preserve file permissions
    pub preserve_permissions: bool,
    /// Preserve modification time
    pub preserve_mtime: bool,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            buffer_size: 64 * 1024,
            preserve_permissions: true,
            preserve_mtime: true,
        }
    }
}

/// Performs single-file copies according to a set of [`CopyOptions`]
#[derive(Debug, Clone)]
pub struct FileCopier {
    options: CopyOptions,
}

impl FileCopier {
    /// Create a new file copier
    pub fn new(options: CopyOptions) -> Self {
        Self { options }
    }

    /// Copy a file's contents and attributes to `dest`.
    ///
    /// An existing destination file is truncated and overwritten
    /// (last-writer-wins).
    pub fn copy(&self, source: &Path, dest: &Path) -> Result<CopyStats> {
        let start = std::time::Instant::now();

        let bytes_copied = self.copy_buffered(source, dest)?;

        if self.options.preserve_permissions {
            self.copy_permissions(source, dest)?;
        }
        if self.options.preserve_mtime {
            self.copy_mtime(source, dest)?;
        }

        Ok(CopyStats {
            bytes_copied,
            duration: start.elapsed(),
        })
    }

    /// Buffered copy of file contents
    fn copy_buffered(&self, source: &Path, dest: &Path) -> Result<u64> {
        let src_file = File::open(source).with_path(source)?;
        let dst_file = File::create(dest).with_path(dest)?;

        let mut reader = BufReader::with_capacity(self.options.buffer_size, src_file);
        let mut writer = BufWriter::with_capacity(self.options.buffer_size, dst_file);

        let mut buffer = vec![0u8; self.options.buffer_size];
        let mut total = 0u64;

        loop {
            let read = reader.read(&mut buffer).with_path(source)?;
            if read == 0 {
                break;
            }
            writer.write_all(&buffer[..read]).with_path(dest)?;
            total += read as u64;
        }

        writer.flush().with_path(dest)?;
        Ok(total)
    }

    /// Copy file permissions
    fn copy_permissions(&self, source: &Path, dest: &Path) -> Result<()> {
        let metadata = std::fs::metadata(source).with_path(source)?;
        std::fs::set_permissions(dest, metadata.permissions()).with_path(dest)?;
        Ok(())
    }

    /// Copy modification and access times
    fn copy_mtime(&self, source: &Path, dest: &Path) -> Result<()> {
        let metadata = std::fs::metadata(source).with_path(source)?;

        if let Ok(mtime) = metadata.modified() {
            let _ = filetime::set_file_mtime(dest, filetime::FileTime::from_system_time(mtime));
        }
        if let Ok(atime) = metadata.accessed() {
            let _ = filetime::set_file_atime(dest, filetime::FileTime::from_system_time(atime));
        }

        Ok(())
    }
}

/// Create a directory and all missing parents.
///
/// Safe to call concurrently from multiple workers targeting the same
/// path: "already exists" is success, not an error.
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).with_path(path)
}
