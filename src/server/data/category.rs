use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct SocialCategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SocialCategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All categories ordered by id.
    pub async fn get_all(&self) -> Result<Vec<entity::social_category::Model>, DbErr> {
        entity::prelude::SocialCategory::find()
            .order_by_asc(entity::social_category::Column::Id)
            .all(self.db)
            .await
    }

    /// Categories among `ids` that exist.
    pub async fn find_by_ids(
        &self,
        ids: &[i32],
    ) -> Result<Vec<entity::social_category::Model>, DbErr> {
        entity::prelude::SocialCategory::find()
            .filter(entity::social_category::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Categories attached to a post, ordered by id.
    pub async fn get_for_social(
        &self,
        social_id: i32,
    ) -> Result<Vec<entity::social_category::Model>, DbErr> {
        let category_ids: Vec<i32> = entity::prelude::SocialCategoryLink::find()
            .filter(entity::social_category_link::Column::SocialId.eq(social_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|link| link.category_id)
            .collect();

        entity::prelude::SocialCategory::find()
            .filter(entity::social_category::Column::Id.is_in(category_ids))
            .order_by_asc(entity::social_category::Column::Id)
            .all(self.db)
            .await
    }
}
