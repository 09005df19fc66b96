use sea_orm::DatabaseConnection;

use crate::server::{
    data::diary::DiaryRepository,
    error::{code::ErrorCode, AppError},
    model::diary::{CreateDiaryParams, Diary},
    util::date::MonthRange,
};

pub struct DiaryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiaryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// # Returns
    /// - `Ok(id)` - Id of the new diary
    /// - `Err(AppError::Domain(ExistsDateDiary))` - A live diary already exists on that date
    pub async fn create(&self, params: CreateDiaryParams) -> Result<i32, AppError> {
        let repo = DiaryRepository::new(self.db);

        if repo
            .find_live_by_date(params.user_id, params.date)
            .await?
            .is_some()
        {
            return Err(ErrorCode::ExistsDateDiary.into());
        }

        let diary = repo.create(params).await?;

        Ok(diary.id)
    }

    pub async fn get_monthly(
        &self,
        user_id: i32,
        month: MonthRange,
    ) -> Result<Vec<Diary>, AppError> {
        let repo = DiaryRepository::new(self.db);

        let diaries = repo.get_in_range(user_id, month.start, month.end).await?;
        let ids: Vec<i32> = diaries.iter().map(|diary| diary.id).collect();
        let mut images = repo.get_image_urls(&ids).await?;

        diaries
            .into_iter()
            .map(|diary| {
                let urls = images.remove(&diary.id).unwrap_or_default();
                Diary::from_entity(diary, urls)
            })
            .collect()
    }

    /// # Returns
    /// - `Ok(())` - Deleted
    /// - `Err(AppError::Domain(NotFoundDiary))` - Missing, deleted or owned by someone else
    pub async fn delete(&self, user_id: i32, diary_id: i32) -> Result<(), AppError> {
        let repo = DiaryRepository::new(self.db);

        repo.find_live_by_id(diary_id)
            .await?
            .filter(|diary| diary.user_id == user_id)
            .ok_or(ErrorCode::NotFoundDiary)?;

        repo.soft_delete(diary_id).await?;

        Ok(())
    }
}
