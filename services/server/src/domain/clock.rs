use chrono::{DateTime, Utc};

/// Single time source for code issuance and expiry comparison. Issuing and
/// verifying against the same clock keeps expiry arithmetic consistent
/// regardless of the deployment host's local zone.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock UTC time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
