//! In-memory log target for testing.

use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use super::{LogHandle, LogTarget};

/// In-memory log sink.
///
/// Clones share the same buffer, so a test can keep one clone and hand
/// another to the writer.
#[derive(Debug, Clone)]
pub struct InMemorySink {
    id: String,
    buf: Arc<Mutex<Vec<u8>>>,
    syncs: Arc<AtomicUsize>,
}

impl InMemorySink {
    /// Create a new empty in-memory sink.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            buf: Arc::new(Mutex::new(Vec::new())),
            syncs: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the contents of the sink as bytes.
    pub fn contents(&self) -> Vec<u8> {
        self.buf
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Get the contents of the sink as a string.
    pub fn contents_string(&self) -> String {
        String::from_utf8_lossy(&self.contents()).into_owned()
    }

    /// Number of times an open handle has been synced.
    pub fn sync_count(&self) -> usize {
        self.syncs.load(Ordering::SeqCst)
    }

    /// Clear the sink contents.
    pub fn clear(&self) {
        self.buf
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl LogTarget for InMemorySink {
    fn id(&self) -> &str {
        &self.id
    }

    fn open_append(&self) -> io::Result<Box<dyn LogHandle>> {
        Ok(Box::new(InMemoryHandle {
            buf: self.buf.clone(),
            syncs: self.syncs.clone(),
        }))
    }
}

/// Handle for in-memory sink.
struct InMemoryHandle {
    buf: Arc<Mutex<Vec<u8>>>,
    syncs: Arc<AtomicUsize>,
}

impl std::fmt::Debug for InMemoryHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryHandle").finish()
    }
}

impl Write for InMemoryHandle {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let mut guard = self.buf.lock().unwrap_or_else(PoisonError::into_inner);
        guard.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl LogHandle for InMemoryHandle {
    fn sync(&mut self) -> io::Result<()> {
        self.syncs.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn close(self: Box<Self>) -> io::Result<()> {
        Ok(())
    }
}
