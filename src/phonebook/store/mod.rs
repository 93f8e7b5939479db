//! # Storage Layer
//!
//! The directory is persisted as one document holding the whole Record Set.
//! [`DataStore`] abstracts where that document lives so the session and the
//! commands never touch the filesystem directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production JSON file storage
//!   - A single array of record objects (`data.json` by default)
//!   - Written pretty-printed, non-ASCII text kept literal
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate a missing store
//!
//! ## Load Semantics
//!
//! `load` distinguishes the two store-boundary failures:
//! [`DirectoryError::StoreNotFound`](crate::error::DirectoryError::StoreNotFound) and
//! [`DirectoryError::StoreMalformed`](crate::error::DirectoryError::StoreMalformed).
//! Neither is fatal: the session layer turns them into an empty Record Set plus a
//! warning. There is no partial recovery of valid records from a malformed file.
//!
//! `save` always overwrites the previous content with the full Record Set.

use crate::error::Result;
use crate::model::Record;

pub mod fs;
pub mod memory;

/// Abstract interface for the persisted Record Set.
pub trait DataStore {
    /// Read the full Record Set.
    fn load(&self) -> Result<Vec<Record>>;

    /// Replace the persisted Record Set with `records`.
    fn save(&mut self, records: &[Record]) -> Result<()>;

    /// Whether a store currently exists.
    fn exists(&self) -> bool;

    /// Human readable location, used in messages.
    fn location(&self) -> String;
}
