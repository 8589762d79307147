// Ephemeral buffer bridge
// Audio backends that only open files get each decoded clip as a freshly
// created, uniquely named temp file. One file per play request, no pooling.

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use tempfile::TempPath;

use super::decoder::DecodedBuffer;
use crate::error::BackingResourceError;

/// Process-unique identity of one play request's backing resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandleId(u64);

#[cfg(test)]
impl HandleId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A fully written backing file the backend can open by path.
///
/// Removed by [`BufferBridge::release`]; dropping an unreleased handle also
/// removes it.
#[derive(Debug)]
pub struct PlayableHandle {
    id: HandleId,
    path: TempPath,
}

impl PlayableHandle {
    pub fn id(&self) -> HandleId {
        self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

pub struct BufferBridge {
    dir: PathBuf,
    prefix: String,
    next_id: AtomicU64,
}

impl BufferBridge {
    /// Bridge writing into `dir`, or the system temp directory
    pub fn new(dir: Option<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.unwrap_or_else(std::env::temp_dir),
            prefix: prefix.into(),
            next_id: AtomicU64::new(0),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `buffer` to a new backing file and return its handle.
    /// The file is complete and flushed when this returns.
    pub fn materialize(&self, buffer: DecodedBuffer) -> Result<PlayableHandle, BackingResourceError> {
        let id = HandleId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let suffix = format!(".{}", buffer.container());

        let mut file = tempfile::Builder::new()
            .prefix(&self.prefix)
            .suffix(&suffix)
            .tempfile_in(&self.dir)
            .map_err(|source| BackingResourceError::Create {
                dir: self.dir.clone(),
                source,
            })?;

        let written = file
            .write_all(buffer.bytes())
            .and_then(|_| file.as_file().sync_all());
        if let Err(source) = written {
            return Err(BackingResourceError::Write {
                path: file.path().to_path_buf(),
                source,
            });
        }

        let path = file.into_temp_path();
        log::debug!("[Bridge] Materialized {} ({} bytes) at {:?}", id, buffer.len(), path);
        Ok(PlayableHandle { id, path })
    }

    /// Remove the backing file once the backend is done with it
    pub fn release(&self, handle: PlayableHandle) -> Result<(), BackingResourceError> {
        let PlayableHandle { id, path } = handle;
        let display = path.to_path_buf();
        path.close().map_err(|source| BackingResourceError::Remove {
            path: display.clone(),
            source,
        })?;
        log::debug!("[Bridge] Released {} at {:?}", id, display);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::decoder;
    use crate::test_util::wav_bytes;

    fn buffer() -> DecodedBuffer {
        decoder::decode(&decoder::encode(&wav_bytes(&[1, 2, 3], 8000))).unwrap()
    }

    #[test]
    fn test_materialize_writes_complete_file() {
        let dir = tempfile::tempdir().unwrap();
        let bridge = BufferBridge::new(Some(dir.path().to_path_buf()), "test-");

        let buffer = buffer();
        let handle = bridge.materialize(buffer.clone()).unwrap();

        assert!(handle.path().starts_with(dir.path()));
        assert_eq!(handle.path().extension().unwrap(), "wav");
        assert_eq!(std::fs::read(handle.path()).unwrap(), buffer.bytes());
    }

    #[test]
    fn test_same_clip_gets_distinct_resources() {
        let dir = tempfile::tempdir().unwrap();
        let bridge = BufferBridge::new(Some(dir.path().to_path_buf()), "test-");

        let first = bridge.materialize(buffer()).unwrap();
        let second = bridge.materialize(buffer()).unwrap();

        assert_ne!(first.id(), second.id());
        assert_ne!(first.path(), second.path());
    }

    #[test]
    fn test_release_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let bridge = BufferBridge::new(Some(dir.path().to_path_buf()), "test-");

        let handle = bridge.materialize(buffer()).unwrap();
        let path = handle.path().to_path_buf();
        bridge.release(handle).unwrap();

        assert!(!path.exists());
    }

    #[test]
    fn test_drop_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let bridge = BufferBridge::new(Some(dir.path().to_path_buf()), "test-");

        let handle = bridge.materialize(buffer()).unwrap();
        let path = handle.path().to_path_buf();
        drop(handle);

        assert!(!path.exists());
    }

    #[test]
    fn test_missing_directory_is_a_backing_error() {
        let dir = tempfile::tempdir().unwrap();
        let bridge = BufferBridge::new(Some(dir.path().join("does/not/exist")), "test-");

        let err = bridge.materialize(buffer()).unwrap_err();
        assert!(matches!(err, BackingResourceError::Create { .. }));
    }
}
