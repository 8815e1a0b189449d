//! One-time-code manager: issuance, verification, consumption.

use chrono::Duration;
use rand::RngExt;

use crate::domain::clock::Clock;
use crate::domain::repository::TwoFaCodeRepository;
use crate::domain::types::{CODE_LEN, CODE_TTL_MINUTES, TwoFaCode};
use crate::error::ServiceError;

/// Charset for generated 2FA codes (lowercase alphanumeric; matching is
/// case-insensitive, so uppercase would add nothing).
const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

pub fn generate_code() -> String {
    let mut rng = rand::rng();
    (0..CODE_LEN)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

/// Rotate the user's active code: generate a fresh one and upsert it keyed
/// by user id. Any previous code — valid or not — is gone after return, so
/// the user holds exactly one active code.
pub async fn rotate_code<C, K>(
    codes: &C,
    clock: &K,
    user_id: i32,
) -> Result<TwoFaCode, ServiceError>
where
    C: TwoFaCodeRepository,
    K: Clock,
{
    let now = clock.now();
    let code = TwoFaCode {
        user_id,
        code: generate_code(),
        expires_at: now + Duration::minutes(CODE_TTL_MINUTES),
        created_at: now,
    };
    codes.replace(&code).await?;
    Ok(code)
}

/// Verify a submitted code and consume it (single-use). Wrong, expired, and
/// never-issued all collapse into `InvalidOrExpiredCode`.
pub async fn verify_and_consume<C, K>(
    codes: &C,
    clock: &K,
    user_id: i32,
    submitted: &str,
) -> Result<(), ServiceError>
where
    C: TwoFaCodeRepository,
    K: Clock,
{
    let stored = codes
        .find_active(user_id, submitted, clock.now())
        .await?
        .ok_or(ServiceError::InvalidOrExpiredCode)?;

    // Delete by the stored spelling, not the submitted one — a
    // case-insensitive match must still consume the row.
    codes.consume(user_id, &stored.code).await?;
    Ok(())
}
