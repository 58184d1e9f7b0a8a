use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::cycle::domain::entities::Symptom;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "symptoms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub date: Date,
    pub category: String,
    pub symptom_type: String,
    pub intensity: i32,
    pub period_day_id: Uuid,
    pub user_id: Uuid,
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Symptom {
    fn from(model: Model) -> Self {
        Symptom {
            id: model.id,
            date: model.date,
            category: model.category,
            symptom_type: model.symptom_type,
            intensity: model.intensity,
            period_day_id: model.period_day_id,
            user_id: model.user_id,
            notes: model.notes,
        }
    }
}
