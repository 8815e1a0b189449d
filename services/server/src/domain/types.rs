use std::fmt;

use chrono::{DateTime, Utc};

/// Account record. `email` is the login identifier; `nim_nip` is the
/// external student/staff reference.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub nim_nip: Option<String>,
}

/// Fields for creating a user (admin provisioning).
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub nim_nip: Option<String>,
}

/// Partial update for a user. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub nim_nip: Option<String>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.role.is_none()
            && self.nim_nip.is_none()
    }
}

/// One-time 2FA code. A user holds at most one at a time.
#[derive(Debug, Clone)]
pub struct TwoFaCode {
    pub user_id: i32,
    pub code: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl TwoFaCode {
    /// Codes match case-insensitively.
    pub fn matches(&self, submitted: &str) -> bool {
        self.code.eq_ignore_ascii_case(submitted)
    }

    /// A code is usable only while its expiry is strictly in the future.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }
}

/// The singleton office location defining the geofence.
#[derive(Debug, Clone)]
pub struct OfficeLocation {
    pub id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius: f64,
    pub created_at: DateTime<Utc>,
}

/// Office location fields as upserted by an admin.
#[derive(Debug, Clone)]
pub struct OfficeUpsert {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius: f64,
    pub created_at: DateTime<Utc>,
}

/// The two attendance event kinds. The string tags ("check-in",
/// "checkout") are part of the wire contract and the stored data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceKind {
    CheckIn,
    CheckOut,
}

impl AttendanceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CheckIn => "check-in",
            Self::CheckOut => "checkout",
        }
    }

    /// Capitalized form used in success messages ("Check-in recorded...").
    pub fn label(self) -> &'static str {
        match self {
            Self::CheckIn => "Check-in",
            Self::CheckOut => "Checkout",
        }
    }
}

impl fmt::Display for AttendanceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded attendance event, immutable after insert.
#[derive(Debug, Clone)]
pub struct AttendanceEvent {
    pub id: i32,
    pub user_id: i32,
    pub location_id: i32,
    pub kind: String,
    pub recorded_at: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub status: Option<String>,
    pub notes: Option<String>,
}

/// Attendance event fields at insert time; the id is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewAttendanceEvent {
    pub user_id: i32,
    pub location_id: i32,
    pub kind: AttendanceKind,
    pub recorded_at: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub notes: Option<String>,
}

/// Proof of a recorded attendance event returned to the caller.
#[derive(Debug, Clone)]
pub struct AttendanceReceipt {
    pub attendance_id: i32,
    pub recorded_at: DateTime<Utc>,
}

/// Broadcast notification authored by an admin.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: i32,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// 2FA code length in characters.
pub const CODE_LEN: usize = 6;

/// 2FA code time-to-live in minutes.
pub const CODE_TTL_MINUTES: i64 = 15;

/// Fixed id of the singleton office location row.
pub const OFFICE_LOCATION_ID: i32 = 1;
