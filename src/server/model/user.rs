//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{RegisterUserDto, UserDto},
    server::{error::AppError, util::validate},
};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub nickname: String,
    pub login_id: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            nickname: self.nickname,
            login_id: self.login_id,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            nickname: entity.nickname,
            login_id: entity.login_id,
            created_at: entity.created_at,
        }
    }
}

/// Validated registration input.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub nickname: String,
    pub login_id: String,
}

impl RegisterUserParams {
    /// # Returns
    /// - `Ok(RegisterUserParams)` - Nickname is 1..=20 characters and login id is 4..=30
    ///   ASCII letters or digits
    /// - `Err(AppError::Validation)` - Either field is malformed
    pub fn from_dto(dto: RegisterUserDto) -> Result<Self, AppError> {
        validate_nickname(&dto.nickname)?;
        validate::char_length("loginId", &dto.login_id, 4, 30)?;
        if !dto.login_id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(AppError::validation(
                "loginId may only contain letters and digits",
            ));
        }

        Ok(Self {
            nickname: dto.nickname,
            login_id: dto.login_id,
        })
    }
}

pub fn validate_nickname(nickname: &str) -> Result<(), AppError> {
    validate::char_length("nickname", nickname, 1, 20)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(nickname: &str, login_id: &str) -> RegisterUserDto {
        RegisterUserDto {
            nickname: nickname.to_string(),
            login_id: login_id.to_string(),
        }
    }

    #[test]
    fn accepts_well_formed_registration() {
        assert!(RegisterUserParams::from_dto(dto("duckling", "duck01")).is_ok());
    }

    #[test]
    fn rejects_short_or_symbolic_login_id() {
        assert!(RegisterUserParams::from_dto(dto("duckling", "abc")).is_err());
        assert!(RegisterUserParams::from_dto(dto("duckling", "duck_01")).is_err());
    }

    #[test]
    fn rejects_blank_or_long_nickname() {
        assert!(RegisterUserParams::from_dto(dto("", "duck01")).is_err());
        assert!(RegisterUserParams::from_dto(dto(&"n".repeat(21), "duck01")).is_err());
    }
}
