use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One page of a cursor-paginated listing.
///
/// `next_cursor` is present only when `has_more` is true; pass it back as the `cursor`
/// query parameter to fetch the following page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CursorPageDto<T> {
    pub results: Vec<T>,
    pub has_more: bool,
    pub next_cursor: Option<i32>,
}
