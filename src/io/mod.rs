pub mod config_io;
pub mod paths;
pub mod persist;
pub mod storage;

pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};
