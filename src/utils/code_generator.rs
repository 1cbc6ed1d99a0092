//! Short code generation and validation utilities.
//!
//! Generated codes are 7 characters drawn uniformly from `A-Z a-z 0-9`
//! (62^7 ≈ 3.5 × 10^12 possible codes). User-supplied codes must be 6 to 8
//! ASCII letters or digits and are used verbatim, case included.

use crate::error::AppError;
use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

/// Characters a short code may contain.
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of generated codes.
pub const GENERATED_CODE_LENGTH: usize = 7;

/// Error message for a malformed user-supplied code.
pub const INVALID_CODE_MESSAGE: &str = "Invalid code. Must be 6-8 alphanumeric characters.";

static CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{6,8}$").expect("code pattern is valid"));

/// Generates a random short code.
///
/// Each character is picked independently and uniformly from
/// [`CODE_ALPHABET`] using the thread-local CSPRNG.
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..GENERATED_CODE_LENGTH)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

/// Returns true if `code` has a valid short code format.
///
/// Says nothing about whether the code is free.
pub fn is_valid_code(code: &str) -> bool {
    CODE_REGEX.is_match(code)
}

/// Validates a user-provided custom short code.
///
/// # Errors
///
/// Returns [`AppError::Validation`] unless the code is 6 to 8 ASCII letters
/// or digits.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if !is_valid_code(code) {
        return Err(AppError::bad_request(INVALID_CODE_MESSAGE));
    }

    Ok(())
}
