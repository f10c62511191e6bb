//! # Filename Sanitization
//!
//! Converts note titles into safe, filesystem-friendly names.
//!
//! ## Rules
//! 1. Replace every character that is not alphanumeric, space, `-`, `_`,
//!    or `.` with an underscore (one-for-one)
//! 2. Trim leading/trailing whitespace
//! 3. Fall back to `"note"` if nothing remains

use crate::constants::FALLBACK_NOTE_NAME;

/// Converts a title string into a safe filename base.
///
/// The result contains only alphanumerics, spaces, hyphens, underscores,
/// and periods, and is never empty. Total: no input can make it fail.
///
/// # Example
/// ```
/// use sniffgo_notes::note::sanitize_title;
/// assert_eq!(sanitize_title("notes: draft/v2?"), "notes_ draft_v2_");
/// ```
pub fn sanitize_title(title: &str) -> String {
    let mut result = String::with_capacity(title.len());

    for c in title.chars() {
        if c.is_alphanumeric() || c == ' ' || c == '-' || c == '_' || c == '.' {
            result.push(c);
        } else {
            result.push('_');
        }
    }

    let trimmed = result.trim();
    if trimmed.is_empty() {
        FALLBACK_NOTE_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}
