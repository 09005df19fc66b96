use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "social_category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::social_category_link::Entity")]
    SocialCategoryLink,
}

impl Related<super::social_category_link::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SocialCategoryLink.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
