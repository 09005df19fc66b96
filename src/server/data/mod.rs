//! Database repository layer for all domain entities.
//!
//! Repositories wrap a borrowed `DatabaseConnection` and expose the queries each domain
//! needs. They speak SeaORM entity models (or infallibly converted domain models) and
//! return `DbErr`; business rules live in the service layer above. Paginated listings go
//! through the cursor engine in [`pagination`].

pub mod category;
pub mod comment;
pub mod concentration;
pub mod diary;
pub mod follow;
pub mod like;
pub mod pagination;
pub mod routine;
pub mod schedule;
pub mod social;
pub mod user;

#[cfg(test)]
mod test;
