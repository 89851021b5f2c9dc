//! Application layer services implementing the service's two operations.
//!
//! Services consume the [`crate::domain::LinkStore`] trait and map store
//! failures to [`crate::error::AppError`], providing a clean API for the
//! HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::resolve_service::ResolveService`] - key lookup for redirects
//! - [`services::write_service::WriteService`] - token authorization and writes

pub mod services;
