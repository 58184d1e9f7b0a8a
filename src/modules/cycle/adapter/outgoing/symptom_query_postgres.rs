use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::collections::HashMap;
use std::sync::Arc;

use crate::modules::auth::adapter::outgoing::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity,
};
use crate::modules::auth::domain::entities::User;
use crate::modules::cycle::application::ports::outgoing::{
    SymptomQuery, SymptomQueryError, SymptomWithUser,
};
use crate::modules::cycle::domain::entities::Symptom;

use super::sea_orm_entity::symptoms::{Column as SymptomColumn, Entity as SymptomEntity};

/// Loads symptoms and populates each row's user in a second query,
/// matched in memory. Rows whose user was deleted keep `user: None`.
#[derive(Clone, Debug)]
pub struct SymptomQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SymptomQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SymptomQuery for SymptomQueryPostgres {
    async fn find_all_with_user(&self) -> Result<Vec<SymptomWithUser>, SymptomQueryError> {
        let rows = SymptomEntity::find()
            .order_by_asc(SymptomColumn::Date)
            .all(&*self.db)
            .await
            .map_err(|e| SymptomQueryError::DatabaseError(e.to_string()))?;

        if rows.is_empty() {
            return Ok(vec![]);
        }

        let mut user_ids: Vec<_> = rows.iter().map(|r| r.user_id).collect();
        user_ids.sort_unstable();
        user_ids.dedup();

        let users: HashMap<_, _> = UserEntity::find()
            .filter(UserColumn::Id.is_in(user_ids))
            .all(&*self.db)
            .await
            .map_err(|e| SymptomQueryError::DatabaseError(e.to_string()))?
            .into_iter()
            .map(|u| (u.id, User::from(u)))
            .collect();

        Ok(rows
            .into_iter()
            .map(|row| {
                let user = users.get(&row.user_id).cloned();
                SymptomWithUser {
                    symptom: Symptom::from(row),
                    user,
                }
            })
            .collect())
    }
}
