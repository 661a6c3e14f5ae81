use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw catalog I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while CatalogStore handles the "what" (decoding, recovery policy).
pub trait StorageBackend {
    /// Read the raw catalog text.
    /// Returns Ok(None) if nothing has been written yet.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_catalog(&self) -> Result<Option<String>>;

    /// Replace the catalog text.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write_catalog(&self, content: &str) -> Result<()>;

    /// Whether a catalog has ever been written.
    fn exists(&self) -> bool;

    /// Where the catalog lives.
    /// For FsBackend, this is the real path. For MemBackend, a virtual path.
    fn location(&self) -> PathBuf;
}
