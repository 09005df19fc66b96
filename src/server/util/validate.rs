//! Request field validation helpers.
//!
//! Each helper returns `AppError::Validation` naming the offending field so DTO → params
//! conversions can chain them with `?`.

use crate::server::error::AppError;

/// Requires `value` to be between `min` and `max` characters long (inclusive).
pub fn char_length(field: &str, value: &str, min: usize, max: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(AppError::validation(format!(
            "{field} must be between {min} and {max} characters"
        )));
    }
    Ok(())
}

/// Like [`char_length`] but only checks present values.
pub fn optional_max_length(field: &str, value: Option<&str>, max: usize) -> Result<(), AppError> {
    match value {
        Some(value) => char_length(field, value, 0, max),
        None => Ok(()),
    }
}

pub fn max_items<T>(field: &str, items: &[T], max: usize) -> Result<(), AppError> {
    if items.len() > max {
        return Err(AppError::validation(format!(
            "{field} accepts at most {max} entries"
        )));
    }
    Ok(())
}

pub fn non_negative(field: &str, value: i32) -> Result<(), AppError> {
    if value < 0 {
        return Err(AppError::validation(format!("{field} must not be negative")));
    }
    Ok(())
}

/// Matches `#RRGGBB`.
pub fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}
