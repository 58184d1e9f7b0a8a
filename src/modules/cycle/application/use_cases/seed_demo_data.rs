use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::{uuid, Uuid};

use crate::modules::cycle::application::ports::outgoing::{
    NewPeriod, NewSymptomLog, PeriodRepository, SymptomLogRepository,
};
use crate::modules::cycle::domain::entities::FlowIntensity;

/// Fixed id the demo dataset is written under.
pub const DEMO_USER_ID: Uuid = uuid!("be4a4cf1-0993-46f2-a934-d20b2d2d6ba4");

#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct SeedError(pub String);

#[derive(Debug, Clone, PartialEq)]
pub struct SeedReport {
    pub periods_inserted: u64,
    pub symptom_logs_inserted: u64,
}

#[async_trait]
pub trait ISeedDemoDataUseCase: Send + Sync {
    async fn execute(&self) -> Result<SeedReport, SeedError>;
}

/// Dev-only bulk loader. Intentionally not idempotent: calling it twice
/// inserts the whole fixture set twice, matching how the route has
/// always behaved.
#[derive(Clone)]
pub struct SeedDemoDataUseCase<P, S>
where
    P: PeriodRepository + Send + Sync,
    S: SymptomLogRepository + Send + Sync,
{
    periods: P,
    symptom_logs: S,
}

impl<P, S> SeedDemoDataUseCase<P, S>
where
    P: PeriodRepository + Send + Sync,
    S: SymptomLogRepository + Send + Sync,
{
    pub fn new(periods: P, symptom_logs: S) -> Self {
        Self {
            periods,
            symptom_logs,
        }
    }
}

#[async_trait]
impl<P, S> ISeedDemoDataUseCase for SeedDemoDataUseCase<P, S>
where
    P: PeriodRepository + Send + Sync,
    S: SymptomLogRepository + Send + Sync,
{
    async fn execute(&self) -> Result<SeedReport, SeedError> {
        let periods_inserted = self
            .periods
            .insert_many(period_fixtures())
            .await
            .map_err(|e| SeedError(e.to_string()))?;

        let symptom_logs_inserted = self
            .symptom_logs
            .insert_many(symptom_log_fixtures())
            .await
            .map_err(|e| SeedError(e.to_string()))?;

        Ok(SeedReport {
            periods_inserted,
            symptom_logs_inserted,
        })
    }
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("fixture dates are valid")
}

fn period(date: NaiveDate, flow: FlowIntensity, symptoms: &[&str]) -> NewPeriod {
    NewPeriod {
        user_id: DEMO_USER_ID,
        date,
        flow,
        symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
        notes: None,
    }
}

/// Seven months of demo periods, December 2024 through June 2025.
pub fn period_fixtures() -> Vec<NewPeriod> {
    use FlowIntensity::{Heavy, Light, Medium};

    vec![
        // Dec 2024
        period(d(2024, 12, 15), Medium, &["cramps", "bloating"]),
        period(d(2024, 12, 16), Heavy, &["cramps", "headache"]),
        period(d(2024, 12, 17), Heavy, &["cramps"]),
        period(d(2024, 12, 18), Medium, &["fatigue"]),
        period(d(2024, 12, 19), Light, &[]),
        // Jan 2025
        period(d(2025, 1, 12), Light, &["mood swings"]),
        period(d(2025, 1, 13), Medium, &["cramps", "bloating"]),
        period(d(2025, 1, 14), Heavy, &["cramps", "headache"]),
        period(d(2025, 1, 15), Heavy, &["cramps", "fatigue"]),
        period(d(2025, 1, 16), Medium, &["bloating"]),
        period(d(2025, 1, 17), Light, &[]),
        // Feb 2025
        period(d(2025, 2, 9), Medium, &["cramps", "acne"]),
        period(d(2025, 2, 10), Heavy, &["cramps", "headache", "bloating"]),
        period(d(2025, 2, 11), Heavy, &["cramps", "fatigue"]),
        period(d(2025, 2, 12), Medium, &["bloating"]),
        period(d(2025, 2, 13), Light, &[]),
        // Mar 2025
        period(d(2025, 3, 8), Light, &["mood swings"]),
        period(d(2025, 3, 9), Medium, &["cramps", "bloating"]),
        period(d(2025, 3, 10), Heavy, &["cramps", "headache"]),
        period(d(2025, 3, 11), Heavy, &["cramps", "fatigue", "bloating"]),
        period(d(2025, 3, 12), Medium, &["fatigue"]),
        period(d(2025, 3, 13), Light, &[]),
        // Apr 2025
        period(d(2025, 4, 5), Medium, &["cramps", "acne"]),
        period(d(2025, 4, 6), Heavy, &["cramps", "headache", "bloating"]),
        period(d(2025, 4, 7), Heavy, &["cramps", "fatigue"]),
        period(d(2025, 4, 8), Medium, &["bloating"]),
        period(d(2025, 4, 9), Light, &[]),
        // May 2025
        period(d(2025, 5, 3), Light, &["mood swings"]),
        period(d(2025, 5, 4), Medium, &["cramps", "bloating"]),
        period(d(2025, 5, 5), Heavy, &["cramps", "headache"]),
        period(d(2025, 5, 6), Heavy, &["cramps", "fatigue"]),
        period(d(2025, 5, 7), Medium, &["bloating"]),
        period(d(2025, 5, 8), Light, &[]),
        // Jun 2025
        period(d(2025, 6, 1), Medium, &["cramps", "bloating"]),
        period(d(2025, 6, 2), Heavy, &["cramps", "headache"]),
        period(d(2025, 6, 3), Heavy, &["cramps", "fatigue"]),
        period(d(2025, 6, 4), Medium, &["bloating"]),
        period(d(2025, 6, 5), Light, &[]),
    ]
}

fn log(date: NaiveDate, symptom_type: &str, intensity: i32) -> NewSymptomLog {
    NewSymptomLog {
        user_id: DEMO_USER_ID,
        date,
        symptom_type: symptom_type.to_string(),
        intensity,
        notes: None,
    }
}

pub fn symptom_log_fixtures() -> Vec<NewSymptomLog> {
    vec![
        // Cramps
        log(d(2024, 12, 15), "cramps", 8),
        log(d(2025, 1, 13), "cramps", 7),
        log(d(2025, 2, 9), "cramps", 9),
        log(d(2025, 3, 9), "cramps", 8),
        log(d(2025, 4, 5), "cramps", 6),
        log(d(2025, 5, 4), "cramps", 8),
        log(d(2025, 6, 1), "cramps", 7),
        // Headache
        log(d(2024, 12, 16), "headache", 6),
        log(d(2025, 1, 14), "headache", 7),
        log(d(2025, 2, 10), "headache", 5),
        log(d(2025, 3, 10), "headache", 6),
        log(d(2025, 4, 6), "headache", 8),
        log(d(2025, 5, 5), "headache", 6),
        log(d(2025, 6, 2), "headache", 7),
        // Bloating
        log(d(2024, 12, 15), "bloating", 8),
        log(d(2025, 1, 13), "bloating", 9),
        log(d(2025, 2, 10), "bloating", 7),
        log(d(2025, 3, 9), "bloating", 8),
        log(d(2025, 4, 6), "bloating", 8),
        log(d(2025, 5, 4), "bloating", 7),
        log(d(2025, 6, 1), "bloating", 8),
        // Fatigue
        log(d(2024, 12, 18), "fatigue", 5),
        log(d(2025, 1, 15), "fatigue", 6),
        log(d(2025, 2, 11), "fatigue", 7),
        log(d(2025, 3, 11), "fatigue", 8),
        log(d(2025, 4, 7), "fatigue", 7),
        log(d(2025, 5, 6), "fatigue", 6),
        log(d(2025, 6, 3), "fatigue", 8),
        // Mood swings
        log(d(2025, 1, 12), "mood swings", 7),
        log(d(2025, 3, 8), "mood swings", 6),
        log(d(2025, 5, 3), "mood swings", 8),
        // Acne
        log(d(2025, 2, 9), "acne", 6),
        log(d(2025, 4, 5), "acne", 5),
    ]
}
