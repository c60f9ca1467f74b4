//! Input validation shared by the resource modules.

use bookshelf_http::AppError;

pub const INVALID_ID: &str = "Invalid ID format";
pub const BLANK_NAME: &str = "name must not be empty";

/// Parses a path or body identifier.
///
/// Accepts only ASCII digits whose value fits the store's `i32` keys;
/// signs, whitespace and anything else are a 400.
pub fn parse_id(raw: &str) -> Result<i32, AppError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::bad_request(INVALID_ID));
    }

    raw.parse::<u32>()
        .ok()
        .and_then(|id| i32::try_from(id).ok())
        .ok_or_else(|| AppError::bad_request(INVALID_ID))
}

/// Trims a submitted name, rejecting blank values.
pub fn require_name(name: String) -> Result<String, AppError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::bad_request(BLANK_NAME));
    }
    Ok(trimmed.to_string())
}
