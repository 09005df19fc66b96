//! Diary entries and emotions.

use chrono::NaiveDate;

use crate::{
    model::diary::{CreateDiaryDto, DiaryDto, EmotionDto},
    server::{error::AppError, util::validate},
};

/// Mood attached to a diary entry, stored by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emotion {
    Happy,
    Good,
    Sad,
    Angry,
    Anxious,
    Tired,
    Sick,
    Soso,
    Love,
}

impl Emotion {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Happy => "HAPPY",
            Self::Good => "GOOD",
            Self::Sad => "SAD",
            Self::Angry => "ANGRY",
            Self::Anxious => "ANXIOUS",
            Self::Tired => "TIRED",
            Self::Sick => "SICK",
            Self::Soso => "SOSO",
            Self::Love => "LOVE",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Some(match value {
            "HAPPY" => Self::Happy,
            "GOOD" => Self::Good,
            "SAD" => Self::Sad,
            "ANGRY" => Self::Angry,
            "ANXIOUS" => Self::Anxious,
            "TIRED" => Self::Tired,
            "SICK" => Self::Sick,
            "SOSO" => Self::Soso,
            "LOVE" => Self::Love,
            _ => return None,
        })
    }

    fn from_dto(dto: EmotionDto) -> Self {
        match dto {
            EmotionDto::Happy => Self::Happy,
            EmotionDto::Good => Self::Good,
            EmotionDto::Sad => Self::Sad,
            EmotionDto::Angry => Self::Angry,
            EmotionDto::Anxious => Self::Anxious,
            EmotionDto::Tired => Self::Tired,
            EmotionDto::Sick => Self::Sick,
            EmotionDto::Soso => Self::Soso,
            EmotionDto::Love => Self::Love,
        }
    }

    fn into_dto(self) -> EmotionDto {
        match self {
            Self::Happy => EmotionDto::Happy,
            Self::Good => EmotionDto::Good,
            Self::Sad => EmotionDto::Sad,
            Self::Angry => EmotionDto::Angry,
            Self::Anxious => EmotionDto::Anxious,
            Self::Tired => EmotionDto::Tired,
            Self::Sick => EmotionDto::Sick,
            Self::Soso => EmotionDto::Soso,
            Self::Love => EmotionDto::Love,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diary {
    pub id: i32,
    pub date: NaiveDate,
    pub emotion: Emotion,
    pub title: Option<String>,
    pub memo: Option<String>,
    pub image_urls: Vec<String>,
}

impl Diary {
    /// Converts a diary entity and its image URLs at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Diary)` - The converted diary
    /// - `Err(AppError::InternalError)` - The stored emotion name is unknown
    pub fn from_entity(
        entity: entity::diary::Model,
        image_urls: Vec<String>,
    ) -> Result<Self, AppError> {
        let emotion = Emotion::parse(&entity.emotion).ok_or_else(|| {
            AppError::InternalError(format!(
                "Diary {} has unknown emotion {}",
                entity.id, entity.emotion
            ))
        })?;

        Ok(Self {
            id: entity.id,
            date: entity.date,
            emotion,
            title: entity.title,
            memo: entity.memo,
            image_urls,
        })
    }

    pub fn into_dto(self) -> DiaryDto {
        DiaryDto {
            diary_id: self.id,
            date: self.date,
            emotion: self.emotion.into_dto(),
            title: self.title,
            memo: self.memo,
            image_urls: self.image_urls,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateDiaryParams {
    pub user_id: i32,
    pub date: NaiveDate,
    pub emotion: Emotion,
    pub title: Option<String>,
    pub memo: Option<String>,
    pub image_urls: Vec<String>,
}

impl CreateDiaryParams {
    /// # Returns
    /// - `Ok(CreateDiaryParams)` - Title is at most 16 characters, memo at most 2048 and
    ///   no more than 3 images are attached
    /// - `Err(AppError::Validation)` - Otherwise
    pub fn from_dto(user_id: i32, dto: CreateDiaryDto) -> Result<Self, AppError> {
        validate::optional_max_length("title", dto.title.as_deref(), 16)?;
        validate::optional_max_length("memo", dto.memo.as_deref(), 2048)?;
        validate::max_items("imageUrls", &dto.image_urls, 3)?;

        Ok(Self {
            user_id,
            date: dto.date,
            emotion: Emotion::from_dto(dto.emotion),
            title: dto.title,
            memo: dto.memo,
            image_urls: dto.image_urls,
        })
    }
}
