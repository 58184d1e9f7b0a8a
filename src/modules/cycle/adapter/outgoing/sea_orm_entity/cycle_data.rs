use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::cycle::domain::entities::{CycleRecord, SymptomSummary};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cycle_data")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub user_id: Uuid,
    #[sea_orm(column_type = "JsonBinary")]
    pub period_day_ids: Json,
    pub symptom_date: Date,
    pub symptom_type: String,
    pub symptom_intensity: i32,
    pub symptom_notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for CycleRecord {
    fn from(model: Model) -> Self {
        CycleRecord {
            id: model.id,
            user_id: model.user_id,
            period_day_ids: serde_json::from_value(model.period_day_ids).unwrap_or_default(),
            symptom_summary: SymptomSummary {
                date: model.symptom_date,
                symptom_type: model.symptom_type,
                intensity: model.symptom_intensity,
                notes: model.symptom_notes,
            },
        }
    }
}
