//! Application error-code catalog.
//!
//! Every business-rule failure the API can report is a variant of [`ErrorCode`]. Each
//! variant maps to a fixed HTTP status, a stable numeric code clients switch on, and a
//! user-facing message. The mapping is a plain `match`, so the catalog is immutable for
//! the lifetime of the process.

use axum::http::StatusCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /* 401xx auth */
    ExistsUserId,
    ExistsUserNickname,

    /* 402xx user */
    NotFoundUser,

    /* 404xx social */
    NotFoundSocialBoard,
    UnauthorizedAccessSocialBoard,
    NotFoundSocialCategory,
    NotFoundComment,
    UnauthorizedAccessComment,
    InvalidCommentForBoard,
    ExistsLike,
    NotFoundLike,
    EmptySocialCategoryList,
    CannotFollowSelf,
    ExistsFollow,
    NotFoundFollow,

    /* 431xx schedule */
    NotFoundSchedule,
    ScheduleInvalidDate,
    NotFoundScheduleRecord,

    /* 432xx routine */
    NotFoundRoutine,
    RoutineInvalidDate,

    /* 441xx diary */
    ExistsDateDiary,
    NotFoundDiary,

    /* 499xx etc */
    NotFoundResource,
    MethodForbidden,
}

impl ErrorCode {
    /// HTTP status the code is reported with.
    pub fn status(self) -> StatusCode {
        match self {
            Self::ExistsUserId
            | Self::ExistsUserNickname
            | Self::ExistsLike
            | Self::ExistsFollow
            | Self::ExistsDateDiary => StatusCode::CONFLICT,
            Self::NotFoundUser
            | Self::NotFoundSocialBoard
            | Self::NotFoundSocialCategory
            | Self::NotFoundComment
            | Self::NotFoundLike
            | Self::NotFoundFollow
            | Self::NotFoundSchedule
            | Self::NotFoundScheduleRecord
            | Self::NotFoundRoutine
            | Self::NotFoundDiary
            | Self::NotFoundResource => StatusCode::NOT_FOUND,
            Self::UnauthorizedAccessSocialBoard | Self::UnauthorizedAccessComment => {
                StatusCode::FORBIDDEN
            }
            Self::InvalidCommentForBoard
            | Self::EmptySocialCategoryList
            | Self::CannotFollowSelf
            | Self::ScheduleInvalidDate
            | Self::RoutineInvalidDate => StatusCode::BAD_REQUEST,
            Self::MethodForbidden => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// Stable numeric code; the first three digits group the domain.
    pub fn code(self) -> u32 {
        match self {
            Self::ExistsUserId => 40113,
            Self::ExistsUserNickname => 40117,
            Self::NotFoundUser => 40201,
            Self::NotFoundSocialBoard => 40401,
            Self::UnauthorizedAccessSocialBoard => 40402,
            Self::NotFoundSocialCategory => 40403,
            Self::NotFoundComment => 40404,
            Self::UnauthorizedAccessComment => 40405,
            Self::InvalidCommentForBoard => 40406,
            Self::ExistsLike => 40407,
            Self::NotFoundLike => 40408,
            Self::EmptySocialCategoryList => 40411,
            Self::CannotFollowSelf => 40412,
            Self::ExistsFollow => 40413,
            Self::NotFoundFollow => 40414,
            Self::NotFoundSchedule => 43101,
            Self::ScheduleInvalidDate => 43102,
            Self::NotFoundScheduleRecord => 43103,
            Self::NotFoundRoutine => 43201,
            Self::RoutineInvalidDate => 43202,
            Self::ExistsDateDiary => 44101,
            Self::NotFoundDiary => 44102,
            Self::NotFoundResource => 49901,
            Self::MethodForbidden => 49902,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::ExistsUserId => "This login id is already registered.",
            Self::ExistsUserNickname => "This nickname is already taken.",
            Self::NotFoundUser => "User not found.",
            Self::NotFoundSocialBoard => "Post not found.",
            Self::UnauthorizedAccessSocialBoard => "You do not have access to this post.",
            Self::NotFoundSocialCategory => "One or more categories could not be found.",
            Self::NotFoundComment => "Comment not found.",
            Self::UnauthorizedAccessComment => "You do not have access to this comment.",
            Self::InvalidCommentForBoard => "The comment does not belong to this post.",
            Self::ExistsLike => "Already liked.",
            Self::NotFoundLike => "Like not found.",
            Self::EmptySocialCategoryList => "At least one category is required.",
            Self::CannotFollowSelf => "You cannot follow yourself.",
            Self::ExistsFollow => "Already following this user.",
            Self::NotFoundFollow => "You are not following this user.",
            Self::NotFoundSchedule => "Schedule not found or not accessible.",
            Self::ScheduleInvalidDate => "The schedule does not occur on this date.",
            Self::NotFoundScheduleRecord => "Schedule record not found or not accessible.",
            Self::NotFoundRoutine => "Routine not found or not accessible.",
            Self::RoutineInvalidDate => {
                "The routine cannot be changed on this date. Check its repeat days and start date."
            }
            Self::ExistsDateDiary => "A diary already exists for this date.",
            Self::NotFoundDiary => "Diary not found.",
            Self::NotFoundResource => "No such path.",
            Self::MethodForbidden => "HTTP method not supported for this path.",
        }
    }
}
