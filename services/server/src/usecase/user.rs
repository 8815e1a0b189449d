use crate::domain::repository::UserRepository;
use crate::domain::types::{NewUser, User, UserChanges};
use crate::error::ServiceError;

pub struct GetUserUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> GetUserUseCase<U> {
    pub async fn execute(&self, user_id: i32) -> Result<User, ServiceError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::UserNotFound)
    }
}

pub struct ListUsersUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> ListUsersUseCase<U> {
    pub async fn execute(&self) -> Result<Vec<User>, ServiceError> {
        self.users.list().await
    }
}

pub struct CreateUserInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Option<String>,
    pub nim_nip: Option<String>,
}

pub struct CreateUserUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> CreateUserUseCase<U> {
    pub async fn execute(&self, input: CreateUserInput) -> Result<i32, ServiceError> {
        let user = NewUser {
            name: input.name,
            email: input.email,
            password: input.password,
            role: input.role.unwrap_or_else(|| "user".to_owned()),
            nim_nip: input.nim_nip,
        };
        self.users.create(&user).await
    }
}

pub struct UpdateUserUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> UpdateUserUseCase<U> {
    pub async fn execute(&self, user_id: i32, changes: UserChanges) -> Result<(), ServiceError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::UserNotFound)?;

        if changes.is_empty() {
            return Err(ServiceError::MissingInput("No fields to update".into()));
        }

        self.users.update(user_id, &changes).await
    }
}

pub struct DeleteUserUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> DeleteUserUseCase<U> {
    pub async fn execute(&self, user_id: i32) -> Result<(), ServiceError> {
        if !self.users.delete(user_id).await? {
            return Err(ServiceError::UserNotFound);
        }
        Ok(())
    }
}
