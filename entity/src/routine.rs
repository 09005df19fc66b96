use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "routine")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub category: Option<String>,
    pub color: Option<String>,
    pub time: Option<Time>,
    pub is_public: bool,
    pub reminder_minutes: Option<i32>,
    pub memo: Option<String>,
    /// Weekday bitmask, Monday is bit 0.
    pub days_of_week: i16,
    pub shared_count: i32,
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
    #[sea_orm(has_many = "super::routine_record::Entity")]
    RoutineRecord,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::routine_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoutineRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
