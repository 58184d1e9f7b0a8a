use async_trait::async_trait;
use bcrypt::{hash, verify};

use crate::modules::auth::application::ports::outgoing::password_hasher::{
    HashError, PasswordHasher,
};

/// Default hasher. Cost 12 matches what existing stored hashes were
/// produced with, so verification keeps working across deployments.
const BCRYPT_COST: u32 = 12;

pub struct BcryptHasher;

#[async_trait]
impl PasswordHasher for BcryptHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        tokio::task::spawn_blocking(move || {
            hash(password, BCRYPT_COST).map_err(|_| HashError::HashFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }

    async fn verify_password(&self, password: &str, hashed: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hashed = hashed.to_string();
        tokio::task::spawn_blocking(move || {
            verify(password, &hashed).map_err(|_| HashError::VerifyFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}
