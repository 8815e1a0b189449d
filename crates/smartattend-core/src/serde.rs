// Module name shadows the `serde` crate — use `::serde` for the external crate.
use ::serde::Serializer;
use chrono::{DateTime, Utc};

/// Serialize `DateTime<Utc>` as `YYYY-MM-DD HH:MM:SS`.
/// Matches the `to_char(created_at, 'YYYY-MM-DD HH24:MI:SS')` wire format.
pub fn to_plain_datetime<S>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(&dt.format("%Y-%m-%d %H:%M:%S").to_string())
}
