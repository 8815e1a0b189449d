use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use smartattend_core::health::{healthz, readyz};
use smartattend_core::middleware::request_id_layer;

use crate::handlers::{
    attendance::{check_in, check_out, get_all_attendance, get_user_attendance},
    auth::{forget_password, login, resend_2fa, update_password, verify_2fa},
    notification::{
        add_notification, delete_notification, get_latest_notification, get_user_notifications,
        list_notifications,
    },
    office::{get_office_location, get_office_locations, set_office_location},
    user::{add_user, delete_user, edit_user, get_user, list_users},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Auth (shared by both surfaces)
        .route("/user/login", post(login))
        .route("/user/verify-2fa", post(verify_2fa))
        .route("/user/resend-2fa", post(resend_2fa))
        .route("/user/update-password", post(update_password))
        .route("/admin/login", post(login))
        .route("/admin/verify-2fa", post(verify_2fa))
        .route("/admin/resend-2fa", post(resend_2fa))
        .route("/admin/forget-password", post(forget_password))
        // User surface
        .route("/user/get-user", post(get_user))
        .route("/user/get-notification-latest", get(get_latest_notification))
        .route("/user/get-notifications-all", get(get_user_notifications))
        .route("/user/get-attendance-user", post(get_user_attendance))
        .route("/user/checkin", post(check_in))
        .route("/user/checkout", post(check_out))
        .route("/user/get-office-location", get(get_office_location))
        // Admin surface
        .route("/admin/get-user-all", get(list_users))
        .route("/admin/add-user", post(add_user))
        .route("/admin/edit-user", put(edit_user))
        .route("/admin/delete-user", delete(delete_user))
        .route("/admin/get-attendance", get(get_all_attendance))
        .route("/admin/get-attendance-user", post(get_user_attendance))
        .route("/admin/get-notifications-all", get(list_notifications))
        .route("/admin/add-notification", post(add_notification))
        .route("/admin/delete-notification", delete(delete_notification))
        .route("/admin/get-office-location", get(get_office_locations))
        .route("/admin/set-office-location", post(set_office_location))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
