//! SeaORM entity models for every table owned by the backend.
//!
//! Models are plain records; all behavior lives in the server's repositories.

pub mod prelude;

pub mod comment;
pub mod comment_like;
pub mod concentration;
pub mod diary;
pub mod diary_image;
pub mod follow;
pub mod routine;
pub mod routine_record;
pub mod schedule;
pub mod schedule_record;
pub mod social;
pub mod social_category;
pub mod social_category_link;
pub mod social_image;
pub mod social_like;
pub mod user;
