//! Auth flow: login, 2FA verification, resend, password operations.

use crate::domain::clock::Clock;
use crate::domain::credential::CredentialVerifier;
use crate::domain::repository::{Mailer, TwoFaCodeRepository, UserRepository};
use crate::error::ServiceError;
use crate::usecase::twofa::{rotate_code, verify_and_consume};

/// The authenticated identity returned by login, verify and resend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthOutput {
    pub user_id: i32,
    pub email: String,
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

pub struct LoginUseCase<U, C, M, V, K>
where
    U: UserRepository,
    C: TwoFaCodeRepository,
    M: Mailer,
    V: CredentialVerifier,
    K: Clock,
{
    pub users: U,
    pub codes: C,
    pub mailer: M,
    pub verifier: V,
    pub clock: K,
}

impl<U, C, M, V, K> LoginUseCase<U, C, M, V, K>
where
    U: UserRepository,
    C: TwoFaCodeRepository,
    M: Mailer,
    V: CredentialVerifier,
    K: Clock,
{
    pub async fn execute(&self, input: LoginInput) -> Result<AuthOutput, ServiceError> {
        let user = self
            .users
            .find_by_email(&input.email)
            .await?
            .ok_or(ServiceError::UserNotFound)?;

        if !self.verifier.verify(&input.password, &user.password) {
            return Err(ServiceError::InvalidCredential("Invalid password"));
        }

        let code = rotate_code(&self.codes, &self.clock, user.id).await?;

        // The code is already durably stored at this point. A delivery
        // failure fails the request but leaves the code in place; the user
        // can recover via resend without a credential re-check.
        let body = format!("Your 2FA code is: {}", code.code);
        self.mailer.send(&user.email, "Your 2FA code", &body).await?;

        Ok(AuthOutput {
            user_id: user.id,
            email: user.email,
        })
    }
}

// ── Verify 2FA ───────────────────────────────────────────────────────────────

pub struct Verify2faUseCase<U, C, K>
where
    U: UserRepository,
    C: TwoFaCodeRepository,
    K: Clock,
{
    pub users: U,
    pub codes: C,
    pub clock: K,
}

impl<U, C, K> Verify2faUseCase<U, C, K>
where
    U: UserRepository,
    C: TwoFaCodeRepository,
    K: Clock,
{
    pub async fn execute(&self, user_id: i32, code: &str) -> Result<AuthOutput, ServiceError> {
        verify_and_consume(&self.codes, &self.clock, user_id, code).await?;

        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::UserNotFound)?;

        Ok(AuthOutput {
            user_id: user.id,
            email: user.email,
        })
    }
}

// ── Resend 2FA ───────────────────────────────────────────────────────────────

pub struct Resend2faUseCase<U, C, M, K>
where
    U: UserRepository,
    C: TwoFaCodeRepository,
    M: Mailer,
    K: Clock,
{
    pub users: U,
    pub codes: C,
    pub mailer: M,
    pub clock: K,
}

impl<U, C, M, K> Resend2faUseCase<U, C, M, K>
where
    U: UserRepository,
    C: TwoFaCodeRepository,
    M: Mailer,
    K: Clock,
{
    pub async fn execute(&self, user_id: i32) -> Result<AuthOutput, ServiceError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::UserNotFound)?;

        // Rotation is unconditional: a still-valid code is replaced too.
        let code = rotate_code(&self.codes, &self.clock, user.id).await?;

        let body = format!("Your new 2FA code is: {}", code.code);
        self.mailer
            .send(&user.email, "Your new 2FA code", &body)
            .await?;

        Ok(AuthOutput {
            user_id: user.id,
            email: user.email,
        })
    }
}

// ── Update password ──────────────────────────────────────────────────────────

pub struct UpdatePasswordUseCase<U, V>
where
    U: UserRepository,
    V: CredentialVerifier,
{
    pub users: U,
    pub verifier: V,
}

impl<U, V> UpdatePasswordUseCase<U, V>
where
    U: UserRepository,
    V: CredentialVerifier,
{
    pub async fn execute(
        &self,
        user_id: i32,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), ServiceError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::UserNotFound)?;

        if !self.verifier.verify(current_password, &user.password) {
            return Err(ServiceError::InvalidCredential(
                "Current password is incorrect",
            ));
        }

        self.users.update_password(user_id, new_password).await
    }
}

// ── Forget password (admin reset) ────────────────────────────────────────────

pub struct ForgetPasswordUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> ForgetPasswordUseCase<U> {
    /// Resets a password given the matching (user id, email) pair. No 2FA
    /// involvement.
    pub async fn execute(
        &self,
        user_id: i32,
        email: &str,
        new_password: &str,
    ) -> Result<(), ServiceError> {
        self.users
            .find_by_id_and_email(user_id, email)
            .await?
            .ok_or(ServiceError::UserNotFound)?;

        self.users.update_password(user_id, new_password).await
    }
}
