use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::cycle::domain::entities::SymptomLog;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "symptom_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: Date,
    pub symptom_type: String,
    pub intensity: i32,
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for SymptomLog {
    fn from(model: Model) -> Self {
        SymptomLog {
            id: model.id,
            user_id: model.user_id,
            date: model.date,
            symptom_type: model.symptom_type,
            intensity: model.intensity,
            notes: model.notes,
        }
    }
}
