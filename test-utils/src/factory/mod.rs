//! Factories for inserting test entities with sensible defaults.
//!
//! Every entity gets a `*Factory` builder for customization and a `create_*` shortcut
//! for the defaults.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let author = factory::create_user(&db).await?;
//! let category = factory::create_category(&db).await?;
//!
//! let post = factory::social::SocialFactory::new(&db, author.id)
//!     .content("Morning run done")
//!     .categories(vec![category.id])
//!     .build()
//!     .await?;
//! ```

pub mod comment;
pub mod follow;
pub mod helpers;
pub mod routine;
pub mod schedule;
pub mod social;
pub mod social_category;
pub mod user;

pub use comment::create_comment;
pub use follow::create_follow;
pub use routine::create_routine;
pub use schedule::create_schedule;
pub use social::{create_social, create_socials};
pub use social_category::create_category;
pub use user::create_user;
