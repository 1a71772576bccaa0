// Utils compartidos

pub mod constants;
pub mod storage;
pub mod theme;

pub use constants::*;
pub use storage::{BrowserStorage, KeyValueStore, MemoryStorage, StorageError};
pub use theme::Theme;
