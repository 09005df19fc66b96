use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{code::ErrorCode, AppError},
    model::user::{validate_nickname, RegisterUserParams, User},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Domain(ExistsUserId))` - Login id already registered
    /// - `Err(AppError::Domain(ExistsUserNickname))` - Nickname already taken
    pub async fn register(&self, params: RegisterUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.login_id_taken(&params.login_id).await? {
            return Err(ErrorCode::ExistsUserId.into());
        }
        if repo.nickname_taken(&params.nickname).await? {
            return Err(ErrorCode::ExistsUserNickname.into());
        }

        // A concurrent registration can still race past the checks above.
        let user = repo.create(params).await.map_err(user_conflict)?;

        tracing::info!(user_id = user.id, "Registered user");

        Ok(user)
    }

    pub async fn get(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| ErrorCode::NotFoundUser.into())
    }

    pub async fn find_by_login_id(&self, login_id: &str) -> Result<Option<User>, AppError> {
        Ok(UserRepository::new(self.db)
            .find_by_login_id(login_id)
            .await?)
    }

    /// Changes the nickname of a user.
    ///
    /// Keeping the current nickname is allowed.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::Validation)` - Nickname is not 1..=20 characters
    /// - `Err(AppError::Domain(ExistsUserNickname))` - Another user has the nickname
    /// - `Err(AppError::Domain(NotFoundUser))` - Unknown user
    pub async fn update_nickname(&self, user_id: i32, nickname: String) -> Result<User, AppError> {
        validate_nickname(&nickname)?;

        let repo = UserRepository::new(self.db);
        let current = self.get(user_id).await?;

        if current.nickname != nickname && repo.nickname_taken(&nickname).await? {
            return Err(ErrorCode::ExistsUserNickname.into());
        }

        repo.update_nickname(user_id, nickname)
            .await
            .map_err(user_conflict)?
            .ok_or_else(|| ErrorCode::NotFoundUser.into())
    }
}

/// Maps a unique violation on the user table to the column it hit.
///
/// Login id and nickname are the only unique columns; the driver message names the
/// violated column (`user.login_id` on SQLite, `user_login_id_key` on Postgres).
fn user_conflict(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(message)) if message.contains("login_id") => {
            ErrorCode::ExistsUserId.into()
        }
        Some(SqlErr::UniqueConstraintViolation(_)) => ErrorCode::ExistsUserNickname.into(),
        _ => err.into(),
    }
}
