//! Test utilities for the toduck backend.
//!
//! Builds isolated in-memory SQLite environments for repository and service tests and
//! provides factories for the entities those tests need.
//!
//! - **TestBuilder**: chooses which tables the test database gets
//! - **TestContext**: owns the database connection and an optional session
//! - **factory**: inserts entities with sensible defaults
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_posts() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_social_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let author = factory::create_user(db).await?;
//!     let post = factory::create_social(db, author.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
