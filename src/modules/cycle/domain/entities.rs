use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Flow intensity as logged by the tracker. `None` is a real value on
/// period rows ("spotting ended" style entries), not an absent column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowIntensity {
    Light,
    Medium,
    Heavy,
    None,
}

impl FlowIntensity {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowIntensity::Light => "light",
            FlowIntensity::Medium => "medium",
            FlowIntensity::Heavy => "heavy",
            FlowIntensity::None => "none",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(FlowIntensity::Light),
            "medium" => Some(FlowIntensity::Medium),
            "heavy" => Some(FlowIntensity::Heavy),
            "none" => Some(FlowIntensity::None),
            _ => None,
        }
    }
}

impl std::fmt::Display for FlowIntensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One logged period day belonging to a user's cycle history, with a
/// free-form symptom tag list ("cramps", "bloating", ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Period {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub flow: FlowIntensity,
    pub symptoms: Vec<String>,
    pub notes: Option<String>,
}

/// Calendar entry keyed by date. At most one row per date exists.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodDay {
    pub id: Uuid,
    pub date: NaiveDate,
    pub flow: Option<FlowIntensity>,
    pub symptom_ids: Vec<Uuid>,
    pub user_id: Uuid,
    pub notes: String,
    pub updated_at: DateTime<Utc>,
}

/// Dated symptom entry linked to a period day.
#[derive(Debug, Clone, PartialEq)]
pub struct Symptom {
    pub id: Uuid,
    pub date: NaiveDate,
    pub category: String,
    pub symptom_type: String,
    pub intensity: i32,
    pub period_day_id: Uuid,
    pub user_id: Uuid,
    pub notes: Option<String>,
}

/// Flat symptom log row. Several types may share a date.
#[derive(Debug, Clone, PartialEq)]
pub struct SymptomLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub symptom_type: String,
    pub intensity: i32,
    pub notes: Option<String>,
}

/// Aggregated cycle record: referenced period days plus an embedded
/// symptom summary.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub period_day_ids: Vec<Uuid>,
    pub symptom_summary: SymptomSummary,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SymptomSummary {
    pub date: NaiveDate,
    pub symptom_type: String,
    pub intensity: i32,
    pub notes: Option<String>,
}
