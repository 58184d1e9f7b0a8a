use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::cycle::domain::reconcile::{LocalEntry, Reconciliation, ServerEntry};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SyncRequestDto {
    pub entries: Vec<LocalEntryDto>,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocalEntryDto {
    #[schema(example = "2025-06-01")]
    pub date: NaiveDate,
    /// "light", "medium" or "heavy"
    #[schema(example = "medium")]
    pub flow: Option<String>,
    #[serde(default)]
    pub notes: String,
    pub updated_at: DateTime<Utc>,
}

impl LocalEntryDto {
    fn into_domain(self) -> Result<LocalEntry, String> {
        let flow = match self.flow.as_deref() {
            None => None,
            Some(raw) => match crate::modules::cycle::domain::entities::FlowIntensity::parse(raw) {
                Some(flow) => Some(flow),
                None => return Err(format!("Unknown flow value: {raw}")),
            },
        };

        Ok(LocalEntry {
            date: self.date,
            flow,
            notes: self.notes,
            updated_at: self.updated_at,
        })
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntrySnapshotDto {
    pub date: NaiveDate,
    pub flow: Option<String>,
    pub notes: String,
    pub updated_at: DateTime<Utc>,
}

impl From<ServerEntry> for EntrySnapshotDto {
    fn from(entry: ServerEntry) -> Self {
        EntrySnapshotDto {
            date: entry.date,
            flow: entry.flow.map(|f| f.to_string()),
            notes: entry.notes,
            updated_at: entry.updated_at,
        }
    }
}

impl From<LocalEntry> for EntrySnapshotDto {
    fn from(entry: LocalEntry) -> Self {
        EntrySnapshotDto {
            date: entry.date,
            flow: entry.flow.map(|f| f.to_string()),
            notes: entry.notes,
            updated_at: entry.updated_at,
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum SyncOutcomeDto {
    /// The server row stands; the client should discard its local edit.
    ServerAuthoritative { date: NaiveDate },
    /// The entry was new to the server and has been persisted.
    LocalOnly { date: NaiveDate },
    /// Both sides changed; nothing was written.
    Conflict {
        date: NaiveDate,
        server: EntrySnapshotDto,
        local: EntrySnapshotDto,
    },
}

impl From<Reconciliation> for SyncOutcomeDto {
    fn from(outcome: Reconciliation) -> Self {
        match outcome {
            Reconciliation::ServerAuthoritative { date } => {
                SyncOutcomeDto::ServerAuthoritative { date }
            }
            Reconciliation::LocalOnly { entry } => SyncOutcomeDto::LocalOnly { date: entry.date },
            Reconciliation::Conflict { server, local } => SyncOutcomeDto::Conflict {
                date: local.date,
                server: server.into(),
                local: local.into(),
            },
        }
    }
}

/// Reconcile locally cached period days
///
/// Requires a valid session. New entries are persisted, stale local
/// edits are rejected, and true conflicts are reported back for the
/// user to resolve.
#[utoipa::path(
    post,
    path = "/api/cycle-data/sync",
    tag = "cycle",
    request_body = SyncRequestDto,
    responses(
        (
            status = 200,
            description = "One outcome per submitted entry, in input order",
            body = inline(SuccessResponse<Vec<SyncOutcomeDto>>)
        ),
        (status = 400, description = "Malformed entry", body = ErrorResponse),
        (status = 401, description = "Missing or invalid session token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(
        ("session_cookie" = [])
    )
)]
#[post("/api/cycle-data/sync")]
pub async fn sync_cycle_data_handler(
    user: AuthenticatedUser,
    req: web::Json<SyncRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let mut entries = Vec::with_capacity(req.entries.len());
    for dto in req.into_inner().entries {
        match dto.into_domain() {
            Ok(entry) => entries.push(entry),
            Err(msg) => {
                return ApiResponse::bad_request("VALIDATION_ERROR", &msg);
            }
        }
    }

    info!(user_id = %user.user_id, entries = entries.len(), "Sync requested");

    match data
        .sync_cycle_data_use_case
        .execute(user.user_id, entries)
        .await
    {
        Ok(outcomes) => {
            let dtos: Vec<SyncOutcomeDto> =
                outcomes.into_iter().map(SyncOutcomeDto::from).collect();
            ApiResponse::success(dtos)
        }
        Err(e) => {
            error!(error = %e, "Sync failed");
            ApiResponse::internal_error()
        }
    }
}
