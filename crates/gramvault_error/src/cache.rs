//! Cache storage error types.

/// Kinds of blob cache errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CacheErrorKind {
    /// Failed to create the cache directory
    #[display("Failed to create cache directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write a cache entry
    #[display("Failed to write cache entry: {}", _0)]
    EntryWrite(String),
    /// Failed to read a cache entry
    #[display("Failed to read cache entry: {}", _0)]
    EntryRead(String),
    /// Failed to delete a cache entry
    #[display("Failed to delete cache entry: {}", _0)]
    EntryDelete(String),
}

/// Cache error with location tracking.
///
/// Only surfaced from cache construction; read/write failures during
/// operation are logged and swallowed so an in-flight fetch keeps its bytes.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Cache Error: {} at line {} in {}", kind, line, file)]
pub struct CacheError {
    /// The kind of error that occurred
    pub kind: CacheErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CacheError {
    /// Create a new cache error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CacheErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
