//! sea-orm entities for the SmartAttend database.

pub mod attendance_events;
pub mod locations;
pub mod notifications;
pub mod two_fa_codes;
pub mod users;
