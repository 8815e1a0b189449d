use axum::{Json, extract::Query, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::domain::types::Notification;
use crate::error::ServiceError;
use crate::state::AppState;
use crate::usecase::notification::{
    CreateNotificationUseCase, DeleteNotificationUseCase, GetLatestNotificationUseCase,
    ListNotificationsUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

/// Notification with `createdAt` in the `YYYY-MM-DD HH:MM:SS` wire format
/// (latest + admin list).
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    pub notification_id: i32,
    pub title: String,
    pub message: String,
    #[serde(serialize_with = "smartattend_core::serde::to_plain_datetime")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Notification> for NotificationResponse {
    fn from(n: Notification) -> Self {
        Self {
            notification_id: n.id,
            title: n.title,
            message: n.message,
            created_at: n.created_at,
        }
    }
}

/// Same shape with a raw timestamp — the user-facing list endpoint returns
/// `createdAt` unformatted. Wire quirk kept for client compatibility.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRawResponse {
    pub notification_id: i32,
    pub title: String,
    pub message: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Notification> for NotificationRawResponse {
    fn from(n: Notification) -> Self {
        Self {
            notification_id: n.id,
            title: n.title,
            message: n.message,
            created_at: n.created_at,
        }
    }
}

// ── GET /user/get-notification-latest ────────────────────────────────────────

pub async fn get_latest_notification(
    State(state): State<AppState>,
) -> Result<Json<NotificationResponse>, ServiceError> {
    let usecase = GetLatestNotificationUseCase {
        notifications: state.notification_repo(),
    };
    let notification = usecase.execute().await?;
    Ok(Json(notification.into()))
}

// ── GET /user/get-notifications-all ──────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NotificationListQuery {
    pub user_id: Option<String>,
}

pub async fn get_user_notifications(
    State(state): State<AppState>,
    Query(query): Query<NotificationListQuery>,
) -> Result<Json<Vec<NotificationRawResponse>>, ServiceError> {
    // The query parameter is required but unused: notifications are
    // broadcast to everyone.
    if query.user_id.is_none() {
        return Err(ServiceError::MissingInput("userId is required".into()));
    }
    let usecase = ListNotificationsUseCase {
        notifications: state.notification_repo(),
    };
    let notifications = usecase.execute().await?;
    Ok(Json(notifications.into_iter().map(Into::into).collect()))
}

// ── GET /admin/get-notifications-all ─────────────────────────────────────────

pub async fn list_notifications(
    State(state): State<AppState>,
) -> Result<Json<Vec<NotificationResponse>>, ServiceError> {
    let usecase = ListNotificationsUseCase {
        notifications: state.notification_repo(),
    };
    let notifications = usecase.execute().await?;
    Ok(Json(notifications.into_iter().map(Into::into).collect()))
}

// ── POST /admin/add-notification ─────────────────────────────────────────────

#[derive(Deserialize)]
pub struct AddNotificationRequest {
    pub title: Option<String>,
    pub message: Option<String>,
}

#[derive(Serialize)]
pub struct AddNotificationResponse {
    pub success: bool,
    pub message: &'static str,
}

pub async fn add_notification(
    State(state): State<AppState>,
    Json(body): Json<AddNotificationRequest>,
) -> Result<(StatusCode, Json<AddNotificationResponse>), ServiceError> {
    let (Some(title), Some(message)) = (body.title, body.message) else {
        return Err(ServiceError::MissingInput(
            "Title and message are required".into(),
        ));
    };
    let usecase = CreateNotificationUseCase {
        notifications: state.notification_repo(),
        clock: state.clock(),
    };
    usecase.execute(&title, &message).await?;
    Ok((
        StatusCode::CREATED,
        Json(AddNotificationResponse {
            success: true,
            message: "Notification sent successfully to all users",
        }),
    ))
}

// ── DELETE /admin/delete-notification ────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteNotificationRequest {
    pub notification_id: Option<i32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteNotificationResponse {
    pub success: bool,
    pub deleted_notification: NotificationRawResponse,
}

pub async fn delete_notification(
    State(state): State<AppState>,
    Json(body): Json<DeleteNotificationRequest>,
) -> Result<Json<DeleteNotificationResponse>, ServiceError> {
    let Some(notification_id) = body.notification_id else {
        return Err(ServiceError::MissingInput(
            "notificationId is required".into(),
        ));
    };
    let usecase = DeleteNotificationUseCase {
        notifications: state.notification_repo(),
    };
    let deleted = usecase.execute(notification_id).await?;
    Ok(Json(DeleteNotificationResponse {
        success: true,
        deleted_notification: deleted.into(),
    }))
}
