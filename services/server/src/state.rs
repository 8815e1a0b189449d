use sea_orm::DatabaseConnection;

use crate::domain::clock::SystemClock;
use crate::domain::credential::PlainTextVerifier;
use crate::infra::db::{
    DbAttendanceRepository, DbLocationRepository, DbNotificationRepository, DbTwoFaCodeRepository,
    DbUserRepository,
};
use crate::infra::mailer::SmtpMailer;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub mailer: SmtpMailer,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn code_repo(&self) -> DbTwoFaCodeRepository {
        DbTwoFaCodeRepository {
            db: self.db.clone(),
        }
    }

    pub fn location_repo(&self) -> DbLocationRepository {
        DbLocationRepository {
            db: self.db.clone(),
        }
    }

    pub fn attendance_repo(&self) -> DbAttendanceRepository {
        DbAttendanceRepository {
            db: self.db.clone(),
        }
    }

    pub fn notification_repo(&self) -> DbNotificationRepository {
        DbNotificationRepository {
            db: self.db.clone(),
        }
    }

    pub fn mailer(&self) -> SmtpMailer {
        self.mailer.clone()
    }

    pub fn clock(&self) -> SystemClock {
        SystemClock
    }

    pub fn verifier(&self) -> PlainTextVerifier {
        PlainTextVerifier
    }
}
