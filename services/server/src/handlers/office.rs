use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::domain::repository::LocationRepository as _;
use crate::domain::types::{OFFICE_LOCATION_ID, OfficeLocation};
use crate::error::ServiceError;
use crate::state::AppState;
use crate::usecase::office::{
    GetOfficeLocationUseCase, SetOfficeLocationInput, SetOfficeLocationUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficeLocationResponse {
    pub location_id: i32,
    pub location_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<OfficeLocation> for OfficeLocationResponse {
    fn from(office: OfficeLocation) -> Self {
        Self {
            location_id: office.id,
            location_name: office.name,
            latitude: office.latitude,
            longitude: office.longitude,
            radius: office.radius,
            created_at: office.created_at,
        }
    }
}

// ── GET /user/get-office-location ────────────────────────────────────────────

pub async fn get_office_location(
    State(state): State<AppState>,
) -> Result<Json<OfficeLocationResponse>, ServiceError> {
    let usecase = GetOfficeLocationUseCase {
        locations: state.location_repo(),
    };
    let office = usecase.execute().await?;
    Ok(Json(office.into()))
}

// ── GET /admin/get-office-location ───────────────────────────────────────────

/// The admin variant returns an array (empty when unset) — wire quirk kept
/// for client compatibility.
pub async fn get_office_locations(
    State(state): State<AppState>,
) -> Result<Json<Vec<OfficeLocationResponse>>, ServiceError> {
    let offices = state
        .location_repo()
        .get_office()
        .await?
        .map(Into::into)
        .into_iter()
        .collect();
    Ok(Json(offices))
}

// ── POST /admin/set-office-location ──────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetOfficeLocationRequest {
    pub location_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub radius: Option<f64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetOfficeLocationResponse {
    pub success: bool,
    pub message: &'static str,
    pub location_id: i32,
}

pub async fn set_office_location(
    State(state): State<AppState>,
    Json(body): Json<SetOfficeLocationRequest>,
) -> Result<Json<SetOfficeLocationResponse>, ServiceError> {
    let (Some(name), Some(latitude), Some(longitude), Some(radius)) =
        (body.location_name, body.latitude, body.longitude, body.radius)
    else {
        return Err(ServiceError::MissingInput(
            "locationName, latitude, longitude, and radius are required".into(),
        ));
    };
    let usecase = SetOfficeLocationUseCase {
        locations: state.location_repo(),
        clock: state.clock(),
    };
    usecase
        .execute(SetOfficeLocationInput {
            name,
            latitude,
            longitude,
            radius,
        })
        .await?;
    Ok(Json(SetOfficeLocationResponse {
        success: true,
        message: "Office location updated successfully",
        location_id: OFFICE_LOCATION_ID,
    }))
}
