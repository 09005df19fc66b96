use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "schedule")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub category: Option<String>,
    pub color: Option<String>,
    pub start_date: Date,
    /// Inclusive.
    pub end_date: Date,
    pub is_all_day: bool,
    pub time: Option<Time>,
    /// Weekday bitmask, Monday is bit 0. `None` repeats every day of the range.
    pub days_of_week: Option<i16>,
    pub location: Option<String>,
    pub memo: Option<String>,
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
    #[sea_orm(has_many = "super::schedule_record::Entity")]
    ScheduleRecord,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::schedule_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScheduleRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
