//! Infrastructure layer for store implementations.
//!
//! Implements the [`crate::domain::LinkStore`] contract. The service core
//! is agnostic to the backend; only the wiring in [`crate::server`] picks
//! one.

pub mod memory_store;

pub use memory_store::MemoryStore;
