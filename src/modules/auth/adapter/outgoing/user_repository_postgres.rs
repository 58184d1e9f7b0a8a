use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::user_repository::{
    CreateUserData, UserRepository, UserRepositoryError,
};
use crate::modules::auth::domain::entities::User;

use super::sea_orm_entity::users::ActiveModel as UserActiveModel;

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: CreateUserData) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            date_of_birth: Set(user.date_of_birth),
            phone: Set(user.phone),
            bio: Set(user.bio),
            avatar: Set(user.avatar),
            is_email_verified: Set(user.is_email_verified),
            two_factor_enabled: Set(false),
            biometric_enabled: Set(false),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user.insert(&*self.db).await.map_err(|e| {
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("23505")
                || err_str.contains("duplicate key")
                || err_str.contains("unique constraint")
            {
                return UserRepositoryError::EmailAlreadyRegistered;
            }
            UserRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(inserted.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Model as UserModel;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn create_test_user_data() -> CreateUserData {
        CreateUserData {
            email: "test@example.com".to_string(),
            password_hash: Some("hashed_password".to_string()),
            first_name: "Test".to_string(),
            last_name: "Person".to_string(),
            date_of_birth: None,
            phone: None,
            bio: None,
            avatar: None,
            is_email_verified: false,
        }
    }

    fn model_for(data: &CreateUserData) -> UserModel {
        let now = chrono::Utc::now();
        UserModel {
            id: Uuid::new_v4(),
            email: data.email.clone(),
            password_hash: data.password_hash.clone(),
            first_name: data.first_name.clone(),
            last_name: data.last_name.clone(),
            date_of_birth: None,
            phone: None,
            bio: None,
            avatar: None,
            is_email_verified: false,
            two_factor_enabled: false,
            biometric_enabled: false,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn create_user_success() {
        let data = create_test_user_data();
        let mock_model = model_for(&data);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![mock_model.clone()]])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let result = repo.create_user(data).await;

        assert!(result.is_ok(), "Expected insert to succeed: {:?}", result.err());
        let user = result.unwrap();
        assert_eq!(user.email, "test@example.com");
        assert_eq!(user.full_name(), "Test Person");
    }

    #[tokio::test]
    async fn duplicate_email_maps_to_already_registered() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([sea_orm::DbErr::Custom(
                "duplicate key value violates unique constraint \"users_email_key\"".to_string(),
            )])
            .into_connection();

        let repo = UserRepositoryPostgres::new(Arc::new(db));
        let result = repo.create_user(create_test_user_data()).await;

        assert!(
            matches!(result, Err(UserRepositoryError::EmailAlreadyRegistered)),
            "Expected EmailAlreadyRegistered, got {:?}",
            result
        );
    }
}
