//! Web dashboard layer for browser-based UI.
//!
//! Server-side pages are thin Askama shells; all data flows through the same
//! JSON API that external clients use.
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Dashboard route configuration

pub mod handlers;
pub mod routes;
