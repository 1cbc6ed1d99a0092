//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! bound query parameters.
//!
//! - [`PgLinkRepository`] - Link storage, lookup and click counting

pub mod pg_link_repository;

pub use pg_link_repository::PgLinkRepository;
