use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "social")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub routine_id: Option<i32>,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub is_anonymous: bool,
    pub like_count: i32,
    pub created_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::routine::Entity",
        from = "Column::RoutineId",
        to = "super::routine::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Routine,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
    #[sea_orm(has_many = "super::social_image::Entity")]
    SocialImage,
    #[sea_orm(has_many = "super::social_like::Entity")]
    SocialLike,
    #[sea_orm(has_many = "super::social_category_link::Entity")]
    SocialCategoryLink,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::routine::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Routine.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl Related<super::social_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SocialImage.def()
    }
}

impl Related<super::social_like::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SocialLike.def()
    }
}

impl Related<super::social_category_link::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SocialCategoryLink.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
