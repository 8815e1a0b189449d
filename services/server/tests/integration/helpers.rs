use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};

use smartattend_server::domain::clock::Clock;
use smartattend_server::domain::repository::{
    AttendanceRepository, LocationRepository, Mailer, NotificationRepository, TwoFaCodeRepository,
    UserRepository,
};
use smartattend_server::domain::types::{
    AttendanceEvent, AttendanceReceipt, NewAttendanceEvent, NewUser, Notification, OFFICE_LOCATION_ID,
    OfficeLocation, OfficeUpsert, TwoFaCode, User, UserChanges,
};
use smartattend_server::error::ServiceError;

// ── FixedClock ───────────────────────────────────────────────────────────────

/// Clock pinned to a fixed instant so expiry arithmetic is deterministic.
#[derive(Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 1, 9, 0, 0).unwrap()
}

// ── MockUserRepo ─────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockUserRepo {
    pub users: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn users_handle(&self) -> Arc<Mutex<Vec<User>>> {
        Arc::clone(&self.users)
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, ServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn find_by_id_and_email(
        &self,
        id: i32,
        email: &str,
    ) -> Result<Option<User>, ServiceError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id && u.email == email)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<User>, ServiceError> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn create(&self, user: &NewUser) -> Result<i32, ServiceError> {
        let mut users = self.users.lock().unwrap();
        let id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        users.push(User {
            id,
            name: user.name.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
            role: user.role.clone(),
            nim_nip: user.nim_nip.clone(),
        });
        Ok(id)
    }

    async fn update(&self, id: i32, changes: &UserChanges) -> Result<(), ServiceError> {
        let mut users = self.users.lock().unwrap();
        if let Some(u) = users.iter_mut().find(|u| u.id == id) {
            if let Some(name) = &changes.name {
                u.name = name.clone();
            }
            if let Some(email) = &changes.email {
                u.email = email.clone();
            }
            if let Some(password) = &changes.password {
                u.password = password.clone();
            }
            if let Some(role) = &changes.role {
                u.role = role.clone();
            }
            if let Some(nim_nip) = &changes.nim_nip {
                u.nim_nip = Some(nim_nip.clone());
            }
        }
        Ok(())
    }

    async fn update_password(&self, id: i32, password: &str) -> Result<(), ServiceError> {
        let mut users = self.users.lock().unwrap();
        if let Some(u) = users.iter_mut().find(|u| u.id == id) {
            u.password = password.to_owned();
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok(users.len() < before)
    }
}

// ── MockCodeRepo ─────────────────────────────────────────────────────────────

/// In-memory stand-in for the code store. `replace` keeps the upsert
/// semantics: at most one row per user id.
#[derive(Clone)]
pub struct MockCodeRepo {
    pub codes: Arc<Mutex<Vec<TwoFaCode>>>,
}

impl MockCodeRepo {
    pub fn new(codes: Vec<TwoFaCode>) -> Self {
        Self {
            codes: Arc::new(Mutex::new(codes)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn codes_handle(&self) -> Arc<Mutex<Vec<TwoFaCode>>> {
        Arc::clone(&self.codes)
    }
}

impl TwoFaCodeRepository for MockCodeRepo {
    async fn replace(&self, code: &TwoFaCode) -> Result<(), ServiceError> {
        let mut codes = self.codes.lock().unwrap();
        codes.retain(|c| c.user_id != code.user_id);
        codes.push(code.clone());
        Ok(())
    }

    async fn find_active(
        &self,
        user_id: i32,
        submitted: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<TwoFaCode>, ServiceError> {
        Ok(self
            .codes
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.user_id == user_id && c.matches(submitted) && c.is_active(now))
            .cloned())
    }

    async fn consume(&self, user_id: i32, code: &str) -> Result<(), ServiceError> {
        self.codes
            .lock()
            .unwrap()
            .retain(|c| !(c.user_id == user_id && c.code == code));
        Ok(())
    }
}

// ── MockLocationRepo ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockLocationRepo {
    pub office: Arc<Mutex<Option<OfficeLocation>>>,
}

impl MockLocationRepo {
    pub fn new(office: Option<OfficeLocation>) -> Self {
        Self {
            office: Arc::new(Mutex::new(office)),
        }
    }

    pub fn empty() -> Self {
        Self::new(None)
    }
}

impl LocationRepository for MockLocationRepo {
    async fn get_office(&self) -> Result<Option<OfficeLocation>, ServiceError> {
        Ok(self.office.lock().unwrap().clone())
    }

    async fn upsert_office(&self, office: &OfficeUpsert) -> Result<(), ServiceError> {
        let mut slot = self.office.lock().unwrap();
        let created_at = slot
            .as_ref()
            .map(|o| o.created_at)
            .unwrap_or(office.created_at);
        *slot = Some(OfficeLocation {
            id: OFFICE_LOCATION_ID,
            name: office.name.clone(),
            latitude: office.latitude,
            longitude: office.longitude,
            radius: office.radius,
            created_at,
        });
        Ok(())
    }
}

// ── MockAttendanceRepo ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockAttendanceRepo {
    pub events: Arc<Mutex<Vec<AttendanceEvent>>>,
}

impl MockAttendanceRepo {
    pub fn empty() -> Self {
        Self {
            events: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn events_handle(&self) -> Arc<Mutex<Vec<AttendanceEvent>>> {
        Arc::clone(&self.events)
    }
}

impl AttendanceRepository for MockAttendanceRepo {
    async fn insert(&self, event: &NewAttendanceEvent) -> Result<AttendanceReceipt, ServiceError> {
        let mut events = self.events.lock().unwrap();
        let id = events.len() as i32 + 1;
        events.push(AttendanceEvent {
            id,
            user_id: event.user_id,
            location_id: event.location_id,
            kind: event.kind.as_str().to_owned(),
            recorded_at: event.recorded_at,
            latitude: event.latitude,
            longitude: event.longitude,
            status: None,
            notes: event.notes.clone(),
        });
        Ok(AttendanceReceipt {
            attendance_id: id,
            recorded_at: event.recorded_at,
        })
    }

    async fn list_all(&self) -> Result<Vec<AttendanceEvent>, ServiceError> {
        Ok(self.events.lock().unwrap().clone())
    }

    async fn list_by_user(&self, user_id: i32) -> Result<Vec<AttendanceEvent>, ServiceError> {
        Ok(self
            .events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect())
    }
}

// ── MockNotificationRepo ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockNotificationRepo {
    pub notifications: Arc<Mutex<Vec<Notification>>>,
}

impl MockNotificationRepo {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self {
            notifications: Arc::new(Mutex::new(notifications)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }
}

impl NotificationRepository for MockNotificationRepo {
    async fn latest(&self) -> Result<Option<Notification>, ServiceError> {
        Ok(self
            .notifications
            .lock()
            .unwrap()
            .iter()
            .max_by_key(|n| n.created_at)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Notification>, ServiceError> {
        Ok(self.notifications.lock().unwrap().clone())
    }

    async fn create(
        &self,
        title: &str,
        message: &str,
        created_at: DateTime<Utc>,
    ) -> Result<i32, ServiceError> {
        let mut notifications = self.notifications.lock().unwrap();
        let id = notifications.iter().map(|n| n.id).max().unwrap_or(0) + 1;
        notifications.push(Notification {
            id,
            title: title.to_owned(),
            message: message.to_owned(),
            created_at,
        });
        Ok(id)
    }

    async fn delete(&self, id: i32) -> Result<Option<Notification>, ServiceError> {
        let mut notifications = self.notifications.lock().unwrap();
        let found = notifications.iter().find(|n| n.id == id).cloned();
        notifications.retain(|n| n.id != id);
        Ok(found)
    }
}

// ── MockMailer ───────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockMailer {
    pub sent: Arc<Mutex<Vec<(String, String, String)>>>,
    fail: bool,
}

impl MockMailer {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(vec![])),
            fail: false,
        }
    }

    /// A mailer whose every send fails, for delivery-failure paths.
    pub fn failing() -> Self {
        Self {
            sent: Arc::new(Mutex::new(vec![])),
            fail: true,
        }
    }

    pub fn sent_handle(&self) -> Arc<Mutex<Vec<(String, String, String)>>> {
        Arc::clone(&self.sent)
    }
}

impl Mailer for MockMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), ServiceError> {
        if self.fail {
            return Err(ServiceError::Delivery(anyhow::anyhow!(
                "smtp relay unreachable"
            )));
        }
        self.sent
            .lock()
            .unwrap()
            .push((to.to_owned(), subject.to_owned(), body.to_owned()));
        Ok(())
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub fn test_user() -> User {
    User {
        id: 1,
        name: "Ana".to_owned(),
        email: "a@x.com".to_owned(),
        password: "p1".to_owned(),
        role: "user".to_owned(),
        nim_nip: Some("2210512345".to_owned()),
    }
}

pub fn test_code(user_id: i32, code: &str, expires_at: DateTime<Utc>) -> TwoFaCode {
    TwoFaCode {
        user_id,
        code: code.to_owned(),
        expires_at,
        created_at: expires_at - chrono::Duration::minutes(15),
    }
}

pub fn test_office(latitude: f64, longitude: f64, radius: f64) -> OfficeLocation {
    OfficeLocation {
        id: OFFICE_LOCATION_ID,
        name: "Head Office".to_owned(),
        latitude,
        longitude,
        radius,
        created_at: test_now(),
    }
}
