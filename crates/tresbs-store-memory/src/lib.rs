//! In-memory backend for the TRESBS content store.
//!
//! Lists live behind a single async `RwLock` and are swapped wholesale on
//! every write, so readers always hold a complete snapshot. Nothing is
//! persisted: a restart returns the store to its seed.

mod store;

pub mod error;
pub mod fixtures;

pub use error::{Error, Result};
pub use store::MemoryStore;
