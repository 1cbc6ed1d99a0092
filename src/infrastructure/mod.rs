//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! - [`persistence`] - PostgreSQL repository implementations

pub mod persistence;
