//! Storage layer: atomic file writes and the key-value store backends.

mod atomic_file;
mod json_file_store;
mod memory_store;

pub use atomic_file::AtomicFile;
pub use json_file_store::JsonFileStore;
pub use memory_store::MemoryStore;
