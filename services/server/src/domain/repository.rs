#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};

use crate::domain::types::{
    AttendanceEvent, AttendanceReceipt, NewAttendanceEvent, NewUser, Notification, OfficeLocation,
    OfficeUpsert, TwoFaCode, User, UserChanges,
};
use crate::error::ServiceError;

/// Repository for account records.
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, ServiceError>;
    async fn find_by_id_and_email(
        &self,
        id: i32,
        email: &str,
    ) -> Result<Option<User>, ServiceError>;
    async fn list(&self) -> Result<Vec<User>, ServiceError>;

    /// Insert a user; the store assigns the id.
    async fn create(&self, user: &NewUser) -> Result<i32, ServiceError>;

    async fn update(&self, id: i32, changes: &UserChanges) -> Result<(), ServiceError>;
    async fn update_password(&self, id: i32, password: &str) -> Result<(), ServiceError>;

    /// Delete a user. Returns `true` if deleted, `false` if not found.
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// Repository for one-time 2FA codes.
pub trait TwoFaCodeRepository: Send + Sync {
    /// Atomically replace the user's active code (upsert keyed by user id).
    /// After return the user holds exactly this code and no other.
    async fn replace(&self, code: &TwoFaCode) -> Result<(), ServiceError>;

    /// Find the user's code if it matches `submitted` case-insensitively
    /// and expires strictly after `now`.
    async fn find_active(
        &self,
        user_id: i32,
        submitted: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<TwoFaCode>, ServiceError>;

    /// Delete the code row for (user id, stored code). Single-use consumption.
    async fn consume(&self, user_id: i32, code: &str) -> Result<(), ServiceError>;
}

/// Repository for the singleton office location.
pub trait LocationRepository: Send + Sync {
    async fn get_office(&self) -> Result<Option<OfficeLocation>, ServiceError>;
    async fn upsert_office(&self, office: &OfficeUpsert) -> Result<(), ServiceError>;
}

/// Repository for attendance events.
pub trait AttendanceRepository: Send + Sync {
    async fn insert(&self, event: &NewAttendanceEvent) -> Result<AttendanceReceipt, ServiceError>;
    async fn list_all(&self) -> Result<Vec<AttendanceEvent>, ServiceError>;
    async fn list_by_user(&self, user_id: i32) -> Result<Vec<AttendanceEvent>, ServiceError>;
}

/// Repository for broadcast notifications.
pub trait NotificationRepository: Send + Sync {
    async fn latest(&self) -> Result<Option<Notification>, ServiceError>;
    async fn list(&self) -> Result<Vec<Notification>, ServiceError>;
    async fn create(
        &self,
        title: &str,
        message: &str,
        created_at: DateTime<Utc>,
    ) -> Result<i32, ServiceError>;

    /// Delete a notification, returning the deleted row if it existed.
    async fn delete(&self, id: i32) -> Result<Option<Notification>, ServiceError>;
}

/// Out-of-band delivery channel for 2FA codes (email).
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), ServiceError>;
}
