use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::cycle::domain::entities::{FlowIntensity, PeriodDay};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "period_days")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub date: Date,
    pub flow: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub symptom_ids: Json,
    pub user_id: Uuid,
    pub notes: String,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use chrono::Utc;
        use sea_orm::ActiveValue::Set;

        if !insert {
            self.updated_at = Set(Utc::now().into());
        }

        Ok(self)
    }
}

impl From<Model> for PeriodDay {
    fn from(model: Model) -> Self {
        PeriodDay {
            id: model.id,
            date: model.date,
            flow: model.flow.as_deref().and_then(FlowIntensity::parse),
            symptom_ids: serde_json::from_value(model.symptom_ids).unwrap_or_default(),
            user_id: model.user_id,
            notes: model.notes,
            updated_at: model.updated_at.to_utc(),
        }
    }
}
