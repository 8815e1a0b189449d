use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::domain::types::{User, UserChanges};
use crate::error::ServiceError;
use crate::state::AppState;
use crate::usecase::user::{
    CreateUserInput, CreateUserUseCase, DeleteUserUseCase, GetUserUseCase, ListUsersUseCase,
    UpdateUserUseCase,
};

// ── POST /user/get-user ──────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUserRequest {
    pub user_id: Option<i32>,
}

/// Profile response; `nim_nip` stays snake_case here while the admin list
/// uses `nimNip` — wire quirk kept for client compatibility.
#[derive(Serialize)]
pub struct UserProfileResponse {
    #[serde(rename = "userId")]
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub nim_nip: Option<String>,
}

pub async fn get_user(
    State(state): State<AppState>,
    Json(body): Json<GetUserRequest>,
) -> Result<Json<UserProfileResponse>, ServiceError> {
    let Some(user_id) = body.user_id else {
        return Err(ServiceError::MissingInput("userId is required".into()));
    };
    let usecase = GetUserUseCase {
        users: state.user_repo(),
    };
    let user = usecase.execute(user_id).await?;
    Ok(Json(UserProfileResponse {
        user_id: user.id,
        name: user.name,
        email: user.email,
        role: user.role,
        nim_nip: user.nim_nip,
    }))
}

// ── GET /admin/get-user-all ──────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListItemResponse {
    pub user_id: i32,
    pub name: String,
    pub username_email: String,
    pub role: String,
    pub nim_nip: Option<String>,
}

impl From<User> for UserListItemResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            name: user.name,
            username_email: user.email,
            role: user.role,
            nim_nip: user.nim_nip,
        }
    }
}

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserListItemResponse>>, ServiceError> {
    let usecase = ListUsersUseCase {
        users: state.user_repo(),
    };
    let users = usecase.execute().await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

// ── POST /admin/add-user ─────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddUserRequest {
    pub name: Option<String>,
    pub username_email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub nim_nip: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddUserResponse {
    pub success: bool,
    pub message: &'static str,
    pub user_id: i32,
}

pub async fn add_user(
    State(state): State<AppState>,
    Json(body): Json<AddUserRequest>,
) -> Result<(StatusCode, Json<AddUserResponse>), ServiceError> {
    let (Some(name), Some(email), Some(password)) =
        (body.name, body.username_email, body.password)
    else {
        return Err(ServiceError::MissingInput(
            "Name, email, and password are required".into(),
        ));
    };
    let usecase = CreateUserUseCase {
        users: state.user_repo(),
    };
    let user_id = usecase
        .execute(CreateUserInput {
            name,
            email,
            password,
            role: body.role,
            nim_nip: body.nim_nip,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(AddUserResponse {
            success: true,
            message: "User created successfully",
            user_id,
        }),
    ))
}

// ── PUT /admin/edit-user ─────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditUserRequest {
    pub user_id: Option<i32>,
    pub name: Option<String>,
    pub username_email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub nim_nip: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditUserResponse {
    pub success: bool,
    pub user_id: i32,
}

pub async fn edit_user(
    State(state): State<AppState>,
    Json(body): Json<EditUserRequest>,
) -> Result<Json<EditUserResponse>, ServiceError> {
    let Some(user_id) = body.user_id else {
        return Err(ServiceError::MissingInput("userId is required".into()));
    };
    let usecase = UpdateUserUseCase {
        users: state.user_repo(),
    };
    usecase
        .execute(
            user_id,
            UserChanges {
                name: body.name,
                email: body.username_email,
                password: body.password,
                role: body.role,
                nim_nip: body.nim_nip,
            },
        )
        .await?;
    Ok(Json(EditUserResponse {
        success: true,
        user_id,
    }))
}

// ── DELETE /admin/delete-user ────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUserRequest {
    pub user_id: Option<i32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUserResponse {
    pub success: bool,
    pub deleted_user_id: i32,
}

pub async fn delete_user(
    State(state): State<AppState>,
    Json(body): Json<DeleteUserRequest>,
) -> Result<Json<DeleteUserResponse>, ServiceError> {
    let Some(user_id) = body.user_id else {
        return Err(ServiceError::MissingInput("userId is required".into()));
    };
    let usecase = DeleteUserUseCase {
        users: state.user_repo(),
    };
    usecase.execute(user_id).await?;
    Ok(Json(DeleteUserResponse {
        success: true,
        deleted_user_id: user_id,
    }))
}
