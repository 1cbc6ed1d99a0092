//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a small API for HTTP
//! handlers and the admin CLI.
//!
//! - [`services::link_service::LinkService`] - Code allocation, redirect counting and link management

pub mod services;
