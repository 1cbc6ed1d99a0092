//! HTTP middleware for request processing.
//!
//! - [`reserved_paths`] - Keeps non-code paths away from the redirect handler
//! - [`tracing`] - Request/response logging

pub mod reserved_paths;
pub mod tracing;
