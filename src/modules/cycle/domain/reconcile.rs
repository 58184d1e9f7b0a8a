use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::entities::{FlowIntensity, PeriodDay};

/// Period-day entry as cached on a client device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalEntry {
    pub date: NaiveDate,
    pub flow: Option<FlowIntensity>,
    #[serde(default)]
    pub notes: String,
    pub updated_at: DateTime<Utc>,
}

/// Snapshot of a server row as shown to the client in a conflict.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerEntry {
    pub date: NaiveDate,
    pub flow: Option<FlowIntensity>,
    pub notes: String,
    pub updated_at: DateTime<Utc>,
}

impl From<&PeriodDay> for ServerEntry {
    fn from(day: &PeriodDay) -> Self {
        ServerEntry {
            date: day.date,
            flow: day.flow,
            notes: day.notes.clone(),
            updated_at: day.updated_at,
        }
    }
}

/// Outcome of comparing one locally cached entry against the server row
/// for the same date. Conflicts are surfaced to the caller, never
/// auto-applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Reconciliation {
    /// Server copy is as new or newer; the client should drop its edit.
    ServerAuthoritative { date: NaiveDate },
    /// No server row exists for this date; the entry can be persisted.
    LocalOnly { entry: LocalEntry },
    /// Local edit is newer than the server row.
    Conflict {
        server: ServerEntry,
        local: LocalEntry,
    },
}

pub fn reconcile(local: LocalEntry, server: Option<&PeriodDay>) -> Reconciliation {
    match server {
        None => Reconciliation::LocalOnly { entry: local },
        Some(day) if day.updated_at >= local.updated_at => Reconciliation::ServerAuthoritative {
            date: local.date,
        },
        Some(day) => Reconciliation::Conflict {
            server: ServerEntry::from(day),
            local,
        },
    }
}
