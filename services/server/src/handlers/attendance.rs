use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::domain::types::{AttendanceEvent, AttendanceKind};
use crate::error::ServiceError;
use crate::state::AppState;
use crate::usecase::attendance::{
    ListAttendanceUseCase, ListUserAttendanceUseCase, RecordAttendanceInput,
    RecordAttendanceUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceReceiptResponse {
    pub message: String,
    pub attendance_id: i32,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceEventResponse {
    pub attendance_id: i32,
    pub user_id: i32,
    pub location_id: i32,
    #[serde(rename = "type")]
    pub kind: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub user_latitude: f64,
    pub user_longitude: f64,
    pub status: Option<String>,
    pub notes: Option<String>,
}

impl From<AttendanceEvent> for AttendanceEventResponse {
    fn from(event: AttendanceEvent) -> Self {
        Self {
            attendance_id: event.id,
            user_id: event.user_id,
            location_id: event.location_id,
            kind: event.kind,
            timestamp: event.recorded_at,
            user_latitude: event.latitude,
            user_longitude: event.longitude,
            status: event.status,
            notes: event.notes,
        }
    }
}

// ── POST /user/checkin, POST /user/checkout ──────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordAttendanceRequest {
    pub user_id: Option<i32>,
    pub user_latitude: Option<f64>,
    pub user_longitude: Option<f64>,
    pub notes: Option<String>,
}

pub async fn check_in(
    State(state): State<AppState>,
    Json(body): Json<RecordAttendanceRequest>,
) -> Result<Json<AttendanceReceiptResponse>, ServiceError> {
    record(state, body, AttendanceKind::CheckIn).await
}

pub async fn check_out(
    State(state): State<AppState>,
    Json(body): Json<RecordAttendanceRequest>,
) -> Result<Json<AttendanceReceiptResponse>, ServiceError> {
    record(state, body, AttendanceKind::CheckOut).await
}

async fn record(
    state: AppState,
    body: RecordAttendanceRequest,
    kind: AttendanceKind,
) -> Result<Json<AttendanceReceiptResponse>, ServiceError> {
    let usecase = RecordAttendanceUseCase {
        locations: state.location_repo(),
        attendance: state.attendance_repo(),
        clock: state.clock(),
        kind,
    };
    let receipt = usecase
        .execute(RecordAttendanceInput {
            user_id: body.user_id,
            latitude: body.user_latitude,
            longitude: body.user_longitude,
            notes: body.notes,
        })
        .await?;
    Ok(Json(AttendanceReceiptResponse {
        message: format!("{} recorded successfully", kind.label()),
        attendance_id: receipt.attendance_id,
        timestamp: receipt.recorded_at,
    }))
}

// ── POST /user/get-attendance-user, POST /admin/get-attendance-user ──────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAttendanceRequest {
    pub user_id: Option<i32>,
}

pub async fn get_user_attendance(
    State(state): State<AppState>,
    Json(body): Json<UserAttendanceRequest>,
) -> Result<Json<Vec<AttendanceEventResponse>>, ServiceError> {
    let Some(user_id) = body.user_id else {
        return Err(ServiceError::MissingInput("userId is required".into()));
    };
    let usecase = ListUserAttendanceUseCase {
        attendance: state.attendance_repo(),
    };
    let events = usecase.execute(user_id).await?;
    Ok(Json(events.into_iter().map(Into::into).collect()))
}

// ── GET /admin/get-attendance ────────────────────────────────────────────────

pub async fn get_all_attendance(
    State(state): State<AppState>,
) -> Result<Json<Vec<AttendanceEventResponse>>, ServiceError> {
    let usecase = ListAttendanceUseCase {
        attendance: state.attendance_repo(),
    };
    let events = usecase.execute().await?;
    Ok(Json(events.into_iter().map(Into::into).collect()))
}
