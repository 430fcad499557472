use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

/// Process-lifetime user store.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        if users.iter().any(|existing| existing.email == user.email) {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }

        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|user| user.id == *id).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|user| user.email == *email).cloned())
    }
}
