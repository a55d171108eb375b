//! Expiring flag stores.
//!
//! This module provides:
//! - A bounded in-memory store for long-running hosts
//! - A JSON file store that survives restarts

pub mod disk_store;
pub mod memory_store;

pub use disk_store::DiskTransientStore;
pub use memory_store::MemoryTransientStore;
