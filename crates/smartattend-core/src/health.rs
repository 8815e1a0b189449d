use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
}

/// Handler for `GET /healthz` — liveness check.
pub async fn healthz() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Handler for `GET /readyz` — readiness check (override per service as needed).
pub async fn readyz() -> Json<Health> {
    Json(Health { status: "ok" })
}
