//! Business logic services for the application layer.

pub mod resolve_service;
pub mod write_service;

pub use resolve_service::ResolveService;
pub use write_service::WriteService;
