// Password hashing wrapper
// bcrypt is deliberately slow, so hashing runs on the blocking pool

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HashError {
    #[error(transparent)]
    Bcrypt(#[from] bcrypt::BcryptError),
    #[error("hashing task failed: {0}")]
    Task(String),
}

/// Salted one-way password hashing at a configurable cost factor.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub const fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a password off the async worker threads.
    pub async fn hash(&self, password: String) -> Result<String, HashError> {
        let cost = self.cost;
        let result = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| HashError::Task(e.to_string()))?;
        Ok(result?)
    }
}
