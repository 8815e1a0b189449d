//! Attendance recorder: geofence gate + event insert, plus listings.

use crate::domain::clock::Clock;
use crate::domain::geo::distance_meters;
use crate::domain::repository::{AttendanceRepository, LocationRepository};
use crate::domain::types::{
    AttendanceEvent, AttendanceKind, AttendanceReceipt, NewAttendanceEvent, OFFICE_LOCATION_ID,
};
use crate::error::ServiceError;

pub struct RecordAttendanceInput {
    pub user_id: Option<i32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub notes: Option<String>,
}

/// Records a check-in or checkout; the two differ only in the kind tag and
/// the out-of-range wording.
pub struct RecordAttendanceUseCase<L, A, K>
where
    L: LocationRepository,
    A: AttendanceRepository,
    K: Clock,
{
    pub locations: L,
    pub attendance: A,
    pub clock: K,
    pub kind: AttendanceKind,
}

impl<L, A, K> RecordAttendanceUseCase<L, A, K>
where
    L: LocationRepository,
    A: AttendanceRepository,
    K: Clock,
{
    pub async fn execute(
        &self,
        input: RecordAttendanceInput,
    ) -> Result<AttendanceReceipt, ServiceError> {
        let (Some(user_id), Some(latitude), Some(longitude)) =
            (input.user_id, input.latitude, input.longitude)
        else {
            return Err(ServiceError::MissingInput(
                "userId, userLatitude, and userLongitude are required".into(),
            ));
        };

        let office = self
            .locations
            .get_office()
            .await?
            .ok_or(ServiceError::ConfigurationMissing)?;

        let distance = distance_meters(latitude, longitude, office.latitude, office.longitude);
        // Non-strict compare: a reading exactly on the radius passes.
        if distance > office.radius {
            return Err(ServiceError::OutOfRange(self.kind));
        }

        // No sequencing between check-ins and check-outs; consecutive
        // events of the same kind are allowed.
        let event = NewAttendanceEvent {
            user_id,
            location_id: OFFICE_LOCATION_ID,
            kind: self.kind,
            recorded_at: self.clock.now(),
            latitude,
            longitude,
            notes: input.notes,
        };
        self.attendance.insert(&event).await
    }
}

// ── Listings ─────────────────────────────────────────────────────────────────

pub struct ListAttendanceUseCase<A: AttendanceRepository> {
    pub attendance: A,
}

impl<A: AttendanceRepository> ListAttendanceUseCase<A> {
    pub async fn execute(&self) -> Result<Vec<AttendanceEvent>, ServiceError> {
        self.attendance.list_all().await
    }
}

pub struct ListUserAttendanceUseCase<A: AttendanceRepository> {
    pub attendance: A,
}

impl<A: AttendanceRepository> ListUserAttendanceUseCase<A> {
    pub async fn execute(&self, user_id: i32) -> Result<Vec<AttendanceEvent>, ServiceError> {
        self.attendance.list_by_user(user_id).await
    }
}
