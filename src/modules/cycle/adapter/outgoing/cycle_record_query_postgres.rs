use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::collections::HashMap;
use std::sync::Arc;

use crate::modules::auth::adapter::outgoing::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity,
};
use crate::modules::auth::domain::entities::User;
use crate::modules::cycle::application::ports::outgoing::{
    CycleRecordQuery, CycleRecordQueryError, CycleRecordWithUser,
};
use crate::modules::cycle::domain::entities::CycleRecord;

use super::sea_orm_entity::cycle_data::Entity as CycleDataEntity;

#[derive(Clone, Debug)]
pub struct CycleRecordQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CycleRecordQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CycleRecordQuery for CycleRecordQueryPostgres {
    async fn find_all_with_user(&self) -> Result<Vec<CycleRecordWithUser>, CycleRecordQueryError> {
        let rows = CycleDataEntity::find()
            .all(&*self.db)
            .await
            .map_err(|e| CycleRecordQueryError::DatabaseError(e.to_string()))?;

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
            .map_err(|e| CycleRecordQueryError::DatabaseError(e.to_string()))?
            .into_iter()
            .map(|u| (u.id, User::from(u)))
            .collect();

        Ok(rows
            .into_iter()
            .map(|row| {
                let user = users.get(&row.user_id).cloned();
                CycleRecordWithUser {
                    record: CycleRecord::from(row),
                    user,
                }
            })
            .collect())
    }
}
