use crate::server::error::{code::ErrorCode, AppError};
use test_utils::{builder::TestBuilder, factory};

mod concentration;
mod diary;
mod follow;
mod like;

/// True when `result` failed with the catalog `code`.
fn is_code<T>(result: &Result<T, AppError>, code: ErrorCode) -> bool {
    matches!(result, Err(AppError::Domain(actual)) if *actual == code)
}
