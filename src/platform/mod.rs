//! Platform abstraction layer
//!
//! Handles browser/native differences for storage. The web build persists
//! through LocalStorage; native builds and tests use the in-memory store.

pub mod storage;

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStore;
pub use storage::MemoryStore;
