//! Daily concentration records.

use chrono::NaiveDate;

use crate::{
    model::concentration::{ConcentrationDto, SaveConcentrationDto},
    server::{error::AppError, util::validate},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concentration {
    pub id: i32,
    pub date: NaiveDate,
    pub target_count: i32,
    pub setting_count: i32,
    /// Seconds.
    pub time: i32,
}

impl Concentration {
    pub fn from_entity(entity: entity::concentration::Model) -> Self {
        Self {
            id: entity.id,
            date: entity.date,
            target_count: entity.target_count,
            setting_count: entity.setting_count,
            time: entity.time,
        }
    }

    /// Share of the set count that was reached, truncated; 0 when nothing was set.
    ///
    /// Accumulated counts can exceed the set count, so the result is not capped at 100.
    pub fn percentage(&self) -> i32 {
        if self.setting_count == 0 {
            return 0;
        }
        let percentage = i64::from(self.target_count) * 100 / i64::from(self.setting_count);
        i32::try_from(percentage).unwrap_or(i32::MAX)
    }

    pub fn into_dto(self) -> ConcentrationDto {
        ConcentrationDto {
            percentage: self.percentage(),
            id: self.id,
            date: self.date,
            target_count: self.target_count,
            setting_count: self.setting_count,
            time: self.time,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SaveConcentrationParams {
    pub user_id: i32,
    pub date: NaiveDate,
    pub target_count: i32,
    pub setting_count: i32,
    pub time: i32,
}

impl SaveConcentrationParams {
    /// # Returns
    /// - `Ok(SaveConcentrationParams)` - All counts are non-negative and the reached count
    ///   does not exceed the set count
    /// - `Err(AppError::Validation)` - Otherwise
    pub fn from_dto(user_id: i32, dto: SaveConcentrationDto) -> Result<Self, AppError> {
        validate::non_negative("targetCount", dto.target_count)?;
        validate::non_negative("settingCount", dto.setting_count)?;
        validate::non_negative("time", dto.time)?;

        if dto.target_count > dto.setting_count {
            return Err(AppError::validation(
                "targetCount must not exceed settingCount",
            ));
        }

        Ok(Self {
            user_id,
            date: dto.date,
            target_count: dto.target_count,
            setting_count: dto.setting_count,
            time: dto.time,
        })
    }
}
