use crate::data::user_repository::{NewUser, UserRepository};
use crate::domain::error::DomainError;
use crate::domain::ids::{IdSequence, UserId};
use crate::domain::user::User;

#[derive(Debug, Default, Clone)]
pub struct MemoryUserRepository {
    users: Vec<User>,
    ids: IdSequence,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for MemoryUserRepository {
    fn create_user(&mut self, input: NewUser) -> Result<User, DomainError> {
        let id = UserId(self.ids.next(input.created_at));
        let user = User::new(
            id,
            input.handle,
            input.display_name,
            input.bio,
            input.created_at,
        )?;
        self.users.push(user.clone());
        Ok(user)
    }

    fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        Ok(self.users.iter().find(|user| user.id == id).cloned())
    }

    fn list_users(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.users.clone())
    }
}
