use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;
use crate::state::AppState;
use crate::usecase::auth::{
    ForgetPasswordUseCase, LoginInput, LoginUseCase, Resend2faUseCase, UpdatePasswordUseCase,
    Verify2faUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub message: &'static str,
    pub user_id: i32,
    pub email: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

// ── POST /user/login, POST /admin/login ──────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ServiceError> {
    let (Some(email), Some(password)) = (body.email, body.password) else {
        return Err(ServiceError::MissingInput(
            "Email and password are required".into(),
        ));
    };
    let usecase = LoginUseCase {
        users: state.user_repo(),
        codes: state.code_repo(),
        mailer: state.mailer(),
        verifier: state.verifier(),
        clock: state.clock(),
    };
    let out = usecase.execute(LoginInput { email, password }).await?;
    Ok(Json(AuthResponse {
        message: "Login successful, 2FA code sent",
        user_id: out.user_id,
        email: out.email,
    }))
}

// ── POST /user/verify-2fa, POST /admin/verify-2fa ────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verify2faRequest {
    pub user_id: Option<i32>,
    pub code: Option<String>,
}

pub async fn verify_2fa(
    State(state): State<AppState>,
    Json(body): Json<Verify2faRequest>,
) -> Result<Json<AuthResponse>, ServiceError> {
    let (Some(user_id), Some(code)) = (body.user_id, body.code) else {
        return Err(ServiceError::MissingInput(
            "userId and code are required".into(),
        ));
    };
    let usecase = Verify2faUseCase {
        users: state.user_repo(),
        codes: state.code_repo(),
        clock: state.clock(),
    };
    let out = usecase.execute(user_id, &code).await?;
    Ok(Json(AuthResponse {
        message: "2FA verified",
        user_id: out.user_id,
        email: out.email,
    }))
}

// ── POST /user/resend-2fa, POST /admin/resend-2fa ────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resend2faRequest {
    pub user_id: Option<i32>,
}

pub async fn resend_2fa(
    State(state): State<AppState>,
    Json(body): Json<Resend2faRequest>,
) -> Result<Json<AuthResponse>, ServiceError> {
    let Some(user_id) = body.user_id else {
        return Err(ServiceError::MissingInput("userId is required".into()));
    };
    let usecase = Resend2faUseCase {
        users: state.user_repo(),
        codes: state.code_repo(),
        mailer: state.mailer(),
        clock: state.clock(),
    };
    let out = usecase.execute(user_id).await?;
    Ok(Json(AuthResponse {
        message: "2FA code resent",
        user_id: out.user_id,
        email: out.email,
    }))
}

// ── POST /user/update-password ───────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    pub user_id: Option<i32>,
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

pub async fn update_password(
    State(state): State<AppState>,
    Json(body): Json<UpdatePasswordRequest>,
) -> Result<Json<MessageResponse>, ServiceError> {
    let (Some(user_id), Some(current), Some(new)) =
        (body.user_id, body.current_password, body.new_password)
    else {
        return Err(ServiceError::MissingInput(
            "userId, currentPassword, and newPassword are required".into(),
        ));
    };
    let usecase = UpdatePasswordUseCase {
        users: state.user_repo(),
        verifier: state.verifier(),
    };
    usecase.execute(user_id, &current, &new).await?;
    Ok(Json(MessageResponse {
        message: "Password updated successfully",
    }))
}

// ── POST /admin/forget-password ──────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgetPasswordRequest {
    pub user_id: Option<i32>,
    pub email: Option<String>,
    pub new_password: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgetPasswordResponse {
    pub message: &'static str,
    pub user_id: i32,
    pub email: String,
}

pub async fn forget_password(
    State(state): State<AppState>,
    Json(body): Json<ForgetPasswordRequest>,
) -> Result<Json<ForgetPasswordResponse>, ServiceError> {
    let (Some(user_id), Some(email), Some(new)) = (body.user_id, body.email, body.new_password)
    else {
        return Err(ServiceError::MissingInput(
            "userId, email, and newPassword are required".into(),
        ));
    };
    let usecase = ForgetPasswordUseCase {
        users: state.user_repo(),
    };
    usecase.execute(user_id, &email, &new).await?;
    Ok(Json(ForgetPasswordResponse {
        message: "Password updated successfully",
        user_id,
        email,
    }))
}
