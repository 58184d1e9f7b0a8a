pub mod oauth_provider;
pub mod password_hasher;
pub mod token_provider;
pub mod user_query;
pub mod user_repository;

pub use oauth_provider::{OAuthProfile, OAuthProvider, OAuthProviderError};
pub use password_hasher::{HashError, PasswordHasher};
pub use token_provider::TokenProvider;
pub use user_query::{UserQuery, UserQueryError};
pub use user_repository::{UserRepository, UserRepositoryError};
