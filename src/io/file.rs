//! File-backed log target.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use super::{LogHandle, LogTarget};

/// Permission bits applied when the log file is created: `rwxr-xr-x`.
pub const DEFAULT_FILE_MODE: u32 = 0o755;

/// Log target for an append-only file on disk.
#[derive(Debug, Clone)]
pub struct FileTarget {
    id: String,
    path: PathBuf,
    mode: u32,
}

impl FileTarget {
    /// Create a new file target with the default permission mode.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let id = path.to_string_lossy().into_owned();
        Self {
            id,
            path,
            mode: DEFAULT_FILE_MODE,
        }
    }

    /// Set the permission bits used if the file has to be created.
    ///
    /// Ignored on platforms without unix permissions.
    pub fn with_mode(mut self, mode: u32) -> Self {
        self.mode = mode;
        self
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the creation permission mode.
    pub fn mode(&self) -> u32 {
        self.mode
    }

    fn open_options(&self) -> OpenOptions {
        let mut options = OpenOptions::new();
        // append implies write; every write lands at the current end of file
        options.create(true).append(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(self.mode);
        }
        options
    }
}

impl LogTarget for FileTarget {
    fn id(&self) -> &str {
        &self.id
    }

    fn open_append(&self) -> io::Result<Box<dyn LogHandle>> {
        let file = self.open_options().open(&self.path)?;
        Ok(Box::new(file))
    }
}

impl LogHandle for File {
    fn sync(&mut self) -> io::Result<()> {
        self.sync_all()
    }

    fn close(self: Box<Self>) -> io::Result<()> {
        // std closes on drop and discards the result; deferred write-back
        // errors are surfaced by a final sync instead.
        let result = self.sync_all();
        drop(self);
        result
    }
}
