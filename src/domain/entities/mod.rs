//! Core domain entities representing the business data model.
//!
//! - [`Link`] - A shortened URL mapping with its click counters
//! - [`NewLink`] - Input for creating a link
//! - [`LinkTotals`] - Aggregate counters across all links

pub mod link;

pub use link::{Link, LinkTotals, NewLink};
