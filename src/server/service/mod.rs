//! Business logic layer.
//!
//! Services borrow the database connection per request, enforce the business rules
//! that map to the error-code catalog, and orchestrate one or more repositories.

pub mod comment;
pub mod concentration;
pub mod diary;
pub mod follow;
pub mod like;
pub mod profile;
pub mod routine;
pub mod schedule;
pub mod social;
pub mod user;

#[cfg(test)]
mod test;
