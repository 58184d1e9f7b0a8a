use uuid::Uuid;

/// Signed session token issuance and verification, implemented by the JWT
/// adapter. Kept synchronous: HS256 signing is pure CPU work.
pub trait TokenProvider: Send + Sync {
    fn sign_session_token(&self, user_id: Uuid) -> Result<String, String>;

    /// Returns the user id carried by a valid, unexpired session token.
    fn verify_session_token(&self, token: &str) -> Result<Uuid, String>;
}
