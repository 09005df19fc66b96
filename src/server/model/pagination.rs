//! Cursor page types shared by every paginated listing.

use crate::{model::pagination::CursorPageDto, server::error::pagination::PaginationError};

/// Page size used when a request omits `limit`.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Validated page size, always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimit(u64);

impl PageLimit {
    /// Validates a requested page size.
    ///
    /// # Returns
    /// - `Ok(PageLimit)` - `value` is positive
    /// - `Err(PaginationError::NonPositiveLimit)` - `value` is zero or negative
    pub fn new(value: i64) -> Result<Self, PaginationError> {
        if value <= 0 {
            return Err(PaginationError::NonPositiveLimit(value));
        }
        Ok(Self(value as u64))
    }

    /// Validates an optional query parameter, falling back to [`DEFAULT_PAGE_LIMIT`].
    pub fn from_query(value: Option<i64>) -> Result<Self, PaginationError> {
        Self::new(value.unwrap_or(DEFAULT_PAGE_LIMIT))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// One page of results ordered by descending identifier.
///
/// `next_cursor` is the identifier of the last item and is only set when `has_more` is.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorPage<T> {
    pub results: Vec<T>,
    pub has_more: bool,
    pub next_cursor: Option<i32>,
}

impl<T> CursorPage<T> {
    pub fn empty() -> Self {
        Self {
            results: Vec::new(),
            has_more: false,
            next_cursor: None,
        }
    }

    /// Converts every item while keeping the cursor metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> CursorPage<U> {
        CursorPage {
            results: self.results.into_iter().map(f).collect(),
            has_more: self.has_more,
            next_cursor: self.next_cursor,
        }
    }

    /// Fallible [`map`](Self::map); the first error aborts the conversion.
    pub fn try_map<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<CursorPage<U>, E> {
        Ok(CursorPage {
            results: self.results.into_iter().map(f).collect::<Result<_, _>>()?,
            has_more: self.has_more,
            next_cursor: self.next_cursor,
        })
    }

    pub fn into_dto<D>(self, f: impl FnMut(T) -> D) -> CursorPageDto<D> {
        let page = self.map(f);
        CursorPageDto {
            results: page.results,
            has_more: page.has_more,
            next_cursor: page.next_cursor,
        }
    }
}
