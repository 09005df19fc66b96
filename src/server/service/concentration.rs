use sea_orm::DatabaseConnection;

use crate::server::{
    data::concentration::ConcentrationRepository,
    error::AppError,
    model::concentration::{Concentration, SaveConcentrationParams},
    util::date::MonthRange,
};

pub struct ConcentrationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ConcentrationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a session to the day's record and returns the updated record.
    ///
    /// # Returns
    /// - `Ok(Concentration)` - The day's record after the save
    /// - `Err(AppError::Validation)` - The day's totals no longer fit
    pub async fn save(&self, params: SaveConcentrationParams) -> Result<Concentration, AppError> {
        let record = ConcentrationRepository::new(self.db)
            .accumulate(params)
            .await?
            .ok_or_else(|| {
                AppError::validation("Concentration totals for the day are too large")
            })?;

        Ok(Concentration::from_entity(record))
    }

    pub async fn get_monthly(
        &self,
        user_id: i32,
        month: MonthRange,
    ) -> Result<Vec<Concentration>, AppError> {
        let records = ConcentrationRepository::new(self.db)
            .get_in_range(user_id, month.start, month.end)
            .await?;

        Ok(records.into_iter().map(Concentration::from_entity).collect())
    }
}
