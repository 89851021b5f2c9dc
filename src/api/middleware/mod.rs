//! HTTP middleware.

pub mod observe;
