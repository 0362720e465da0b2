//! Input rules for short codes and target URLs.
//!
//! Request DTOs declare the same rules through `validator` attributes; these
//! functions let services and the admin CLI enforce them on plain strings
//! before any store is touched.

use crate::error::AppError;
use serde_json::json;
use url::Url;

/// Minimum number of characters in a short code.
pub const MIN_CODE_LENGTH: usize = 3;

/// Validates a short code.
///
/// Length is counted in characters, not bytes.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the code is shorter than
/// [`MIN_CODE_LENGTH`].
///
/// # Examples
///
/// ```ignore
/// assert!(validate_code("abc").is_ok());
/// assert!(validate_code("ab").is_err());
/// ```
pub fn validate_code(code: &str) -> Result<(), AppError> {
    let length = code.chars().count();

    if length < MIN_CODE_LENGTH {
        return Err(AppError::bad_request(
            format!("Code must be at least {MIN_CODE_LENGTH} characters"),
            json!({ "field": "code", "provided_length": length }),
        ));
    }

    Ok(())
}

/// Validates that a target URL is well-formed.
///
/// The URL is stored exactly as given; parsing is only used as a check.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the string does not parse as an
/// absolute URL, or if it contains control characters. The parser drops tabs
/// and newlines silently, but the stored string is sent verbatim in the
/// `Location` header, where they are not allowed.
pub fn validate_target_url(url: &str) -> Result<(), AppError> {
    if let Some(position) = url.find(|c: char| c.is_control()) {
        return Err(AppError::bad_request(
            "Invalid URL format",
            json!({ "field": "url", "reason": "control character in URL", "position": position }),
        ));
    }

    Url::parse(url).map_err(|e| {
        AppError::bad_request(
            "Invalid URL format",
            json!({ "field": "url", "reason": e.to_string() }),
        )
    })?;

    Ok(())
}
