use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::cycle::domain::entities::{FlowIntensity, Period};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "periods")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: Date,
    pub flow: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub symptoms: Json,
    pub notes: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Period {
    fn from(model: Model) -> Self {
        Period {
            id: model.id,
            user_id: model.user_id,
            date: model.date,
            // Unknown flow strings collapse to "none" rather than failing
            // the whole query
            flow: FlowIntensity::parse(&model.flow).unwrap_or(FlowIntensity::None),
            symptoms: serde_json::from_value(model.symptoms).unwrap_or_default(),
            notes: model.notes,
        }
    }
}
