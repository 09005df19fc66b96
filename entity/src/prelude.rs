pub use super::comment::Entity as Comment;
pub use super::comment_like::Entity as CommentLike;
pub use super::concentration::Entity as Concentration;
pub use super::diary::Entity as Diary;
pub use super::diary_image::Entity as DiaryImage;
pub use super::follow::Entity as Follow;
pub use super::routine::Entity as Routine;
pub use super::routine_record::Entity as RoutineRecord;
pub use super::schedule::Entity as Schedule;
pub use super::schedule_record::Entity as ScheduleRecord;
pub use super::social::Entity as Social;
pub use super::social_category::Entity as SocialCategory;
pub use super::social_category_link::Entity as SocialCategoryLink;
pub use super::social_image::Entity as SocialImage;
pub use super::social_like::Entity as SocialLike;
pub use super::user::Entity as User;
