use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "routine_record")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub routine_id: i32,
    pub record_date: Date,
    pub is_completed: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::routine::Entity",
        from = "Column::RoutineId",
        to = "super::routine::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Routine,
}

impl Related<super::routine::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Routine.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
