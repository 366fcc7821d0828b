use chrono::{DateTime, Utc};

use crate::domain::error::DomainError;
use crate::domain::ids::UserId;
use crate::domain::user::User;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub handle: String,
    pub display_name: String,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Реестр пользователей. Только добавление: пользователи не меняются и не удаляются.
pub trait UserRepository: Send + Sync {
    fn create_user(&mut self, input: NewUser) -> Result<User, DomainError>;
    fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError>;
    fn list_users(&self) -> Result<Vec<User>, DomainError>;
}
