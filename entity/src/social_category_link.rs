use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "social_category_link")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub social_id: i32,
    pub category_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::social::Entity",
        from = "Column::SocialId",
        to = "super::social::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Social,
    #[sea_orm(
        belongs_to = "super::social_category::Entity",
        from = "Column::CategoryId",
        to = "super::social_category::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    SocialCategory,
}

impl Related<super::social::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Social.def()
    }
}

impl Related<super::social_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SocialCategory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
