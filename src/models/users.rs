// Registered user module
// Abstract user datastore plus the in-memory implementation used at runtime

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::RwLock;

/// A persisted registration record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub registered_at: DateTime<Utc>,
}

/// Input for a new registration; the password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("email {0} is already registered")]
    DuplicateEmail(String),
    #[error("datastore unavailable: {0}")]
    Unavailable(String),
}

/// Data access for registered users.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn email_exists(&self, email: &str) -> Result<bool, RepositoryError>;
    async fn save(&self, user: NewUser) -> Result<RegisteredUser, RepositoryError>;
    async fn list_all(&self) -> Result<Vec<RegisteredUser>, RepositoryError>;
}

/// In-memory user store.
///
/// `save` holds the write lock across the duplicate check and the insert, so
/// email uniqueness is enforced here even when two submissions race past the
/// handler-level existence check.
pub struct InMemoryUserRepository {
    users: RwLock<Vec<RegisteredUser>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn email_exists(&self, email: &str) -> Result<bool, RepositoryError> {
        let users = self.users.read().await;
        Ok(users.iter().any(|u| u.email == email))
    }

    async fn save(&self, user: NewUser) -> Result<RegisteredUser, RepositoryError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == user.email) {
            return Err(RepositoryError::DuplicateEmail(user.email));
        }
        let record = RegisteredUser {
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            registered_at: Utc::now(),
        };
        users.push(record.clone());
        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<RegisteredUser>, RepositoryError> {
        let users = self.users.read().await;
        Ok(users.clone())
    }
}
