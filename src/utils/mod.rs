//! Utility functions for code generation and input validation.
//!
//! - [`code_generator`] - Short code generation and format validation
//! - [`url_validator`] - Target URL validation
//! - [`db_error`] - Database error classification

pub mod code_generator;
pub mod db_error;
pub mod url_validator;
