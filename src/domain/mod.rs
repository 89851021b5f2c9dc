//! Domain layer: the link-store collaborator contract.
//!
//! The persistence engine itself is external to this service. The domain
//! layer only defines the contract the rest of the crate programs against:
//!
//! - [`store::LinkStore`] - key-value access for link mappings
//! - [`store::StoreError`] - the failure surface of a store backend
//!
//! Concrete implementations live in [`crate::infrastructure`]; mock
//! implementations are auto-generated via `mockall` for testing.

pub mod store;

pub use store::{LinkStore, StoreError};

#[cfg(test)]
pub use store::MockLinkStore;
