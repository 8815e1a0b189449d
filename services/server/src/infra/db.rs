use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::{Expr, Func, OnConflict};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use smartattend_schema::{attendance_events, locations, notifications, two_fa_codes, users};

use crate::domain::repository::{
    AttendanceRepository, LocationRepository, NotificationRepository, TwoFaCodeRepository,
    UserRepository,
};
use crate::domain::types::{
    AttendanceEvent, AttendanceReceipt, NewAttendanceEvent, NewUser, Notification, OFFICE_LOCATION_ID,
    OfficeLocation, OfficeUpsert, TwoFaCode, User, UserChanges,
};
use crate::error::ServiceError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, ServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_id_and_email(
        &self,
        id: i32,
        email: &str,
    ) -> Result<Option<User>, ServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Id.eq(id))
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by id and email")?;
        Ok(model.map(user_from_model))
    }

    async fn list(&self) -> Result<Vec<User>, ServiceError> {
        let models = users::Entity::find()
            .all(&self.db)
            .await
            .context("list users")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn create(&self, user: &NewUser) -> Result<i32, ServiceError> {
        let inserted = users::ActiveModel {
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            password: Set(user.password.clone()),
            role: Set(user.role.clone()),
            nim_nip: Set(user.nim_nip.clone()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create user")?;
        Ok(inserted.id)
    }

    async fn update(&self, id: i32, changes: &UserChanges) -> Result<(), ServiceError> {
        let mut model = users::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(ref name) = changes.name {
            model.name = Set(name.clone());
        }
        if let Some(ref email) = changes.email {
            model.email = Set(email.clone());
        }
        if let Some(ref password) = changes.password {
            model.password = Set(password.clone());
        }
        if let Some(ref role) = changes.role {
            model.role = Set(role.clone());
        }
        if let Some(ref nim_nip) = changes.nim_nip {
            model.nim_nip = Set(Some(nim_nip.clone()));
        }
        model.update(&self.db).await.context("update user")?;
        Ok(())
    }

    async fn update_password(&self, id: i32, password: &str) -> Result<(), ServiceError> {
        users::ActiveModel {
            id: Set(id),
            password: Set(password.to_owned()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update user password")?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let result = users::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete user")?;
        Ok(result.rows_affected > 0)
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        name: model.name,
        email: model.email,
        password: model.password,
        role: model.role,
        nim_nip: model.nim_nip,
    }
}

// ── 2FA code repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbTwoFaCodeRepository {
    pub db: DatabaseConnection,
}

impl TwoFaCodeRepository for DbTwoFaCodeRepository {
    async fn replace(&self, code: &TwoFaCode) -> Result<(), ServiceError> {
        // Single-statement upsert keyed by user_id: atomic with respect to
        // concurrent issue/resend for the same user.
        two_fa_codes::Entity::insert(two_fa_codes::ActiveModel {
            user_id: Set(code.user_id),
            code: Set(code.code.clone()),
            expires_at: Set(code.expires_at),
            created_at: Set(code.created_at),
        })
        .on_conflict(
            OnConflict::column(two_fa_codes::Column::UserId)
                .update_columns([
                    two_fa_codes::Column::Code,
                    two_fa_codes::Column::ExpiresAt,
                    two_fa_codes::Column::CreatedAt,
                ])
                .to_owned(),
        )
        .exec(&self.db)
        .await
        .context("replace 2fa code")?;
        Ok(())
    }

    async fn find_active(
        &self,
        user_id: i32,
        submitted: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<TwoFaCode>, ServiceError> {
        let model = two_fa_codes::Entity::find()
            .filter(two_fa_codes::Column::UserId.eq(user_id))
            .filter(
                Expr::expr(Func::lower(Expr::col(two_fa_codes::Column::Code)))
                    .eq(submitted.to_lowercase()),
            )
            .filter(two_fa_codes::Column::ExpiresAt.gt(now))
            .one(&self.db)
            .await
            .context("find active 2fa code")?;
        Ok(model.map(code_from_model))
    }

    async fn consume(&self, user_id: i32, code: &str) -> Result<(), ServiceError> {
        two_fa_codes::Entity::delete_many()
            .filter(two_fa_codes::Column::UserId.eq(user_id))
            .filter(two_fa_codes::Column::Code.eq(code))
            .exec(&self.db)
            .await
            .context("consume 2fa code")?;
        Ok(())
    }
}

fn code_from_model(model: two_fa_codes::Model) -> TwoFaCode {
    TwoFaCode {
        user_id: model.user_id,
        code: model.code,
        expires_at: model.expires_at,
        created_at: model.created_at,
    }
}

// ── Location repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbLocationRepository {
    pub db: DatabaseConnection,
}

impl LocationRepository for DbLocationRepository {
    async fn get_office(&self) -> Result<Option<OfficeLocation>, ServiceError> {
        let model = locations::Entity::find_by_id(OFFICE_LOCATION_ID)
            .one(&self.db)
            .await
            .context("get office location")?;
        Ok(model.map(location_from_model))
    }

    async fn upsert_office(&self, office: &OfficeUpsert) -> Result<(), ServiceError> {
        // created_at is kept from the first insert; the conflict branch only
        // refreshes the four settable fields.
        locations::Entity::insert(locations::ActiveModel {
            id: Set(OFFICE_LOCATION_ID),
            name: Set(office.name.clone()),
            latitude: Set(office.latitude),
            longitude: Set(office.longitude),
            radius: Set(office.radius),
            created_at: Set(office.created_at),
        })
        .on_conflict(
            OnConflict::column(locations::Column::Id)
                .update_columns([
                    locations::Column::Name,
                    locations::Column::Latitude,
                    locations::Column::Longitude,
                    locations::Column::Radius,
                ])
                .to_owned(),
        )
        .exec(&self.db)
        .await
        .context("upsert office location")?;
        Ok(())
    }
}

fn location_from_model(model: locations::Model) -> OfficeLocation {
    OfficeLocation {
        id: model.id,
        name: model.name,
        latitude: model.latitude,
        longitude: model.longitude,
        radius: model.radius,
        created_at: model.created_at,
    }
}

// ── Attendance repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAttendanceRepository {
    pub db: DatabaseConnection,
}

impl AttendanceRepository for DbAttendanceRepository {
    async fn insert(&self, event: &NewAttendanceEvent) -> Result<AttendanceReceipt, ServiceError> {
        let inserted = attendance_events::ActiveModel {
            user_id: Set(event.user_id),
            location_id: Set(event.location_id),
            kind: Set(event.kind.as_str().to_owned()),
            recorded_at: Set(event.recorded_at),
            latitude: Set(event.latitude),
            longitude: Set(event.longitude),
            status: Set(None),
            notes: Set(event.notes.clone()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("insert attendance event")?;
        Ok(AttendanceReceipt {
            attendance_id: inserted.id,
            recorded_at: inserted.recorded_at,
        })
    }

    async fn list_all(&self) -> Result<Vec<AttendanceEvent>, ServiceError> {
        let models = attendance_events::Entity::find()
            .order_by_desc(attendance_events::Column::RecordedAt)
            .all(&self.db)
            .await
            .context("list attendance events")?;
        Ok(models.into_iter().map(event_from_model).collect())
    }

    async fn list_by_user(&self, user_id: i32) -> Result<Vec<AttendanceEvent>, ServiceError> {
        let models = attendance_events::Entity::find()
            .filter(attendance_events::Column::UserId.eq(user_id))
            .order_by_desc(attendance_events::Column::RecordedAt)
            .all(&self.db)
            .await
            .context("list attendance events by user")?;
        Ok(models.into_iter().map(event_from_model).collect())
    }
}

fn event_from_model(model: attendance_events::Model) -> AttendanceEvent {
    AttendanceEvent {
        id: model.id,
        user_id: model.user_id,
        location_id: model.location_id,
        kind: model.kind,
        recorded_at: model.recorded_at,
        latitude: model.latitude,
        longitude: model.longitude,
        status: model.status,
        notes: model.notes,
    }
}

// ── Notification repository ──────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbNotificationRepository {
    pub db: DatabaseConnection,
}

impl NotificationRepository for DbNotificationRepository {
    async fn latest(&self) -> Result<Option<Notification>, ServiceError> {
        let model = notifications::Entity::find()
            .order_by_desc(notifications::Column::CreatedAt)
            .one(&self.db)
            .await
            .context("get latest notification")?;
        Ok(model.map(notification_from_model))
    }

    async fn list(&self) -> Result<Vec<Notification>, ServiceError> {
        let models = notifications::Entity::find()
            .order_by_desc(notifications::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list notifications")?;
        Ok(models.into_iter().map(notification_from_model).collect())
    }

    async fn create(
        &self,
        title: &str,
        message: &str,
        created_at: DateTime<Utc>,
    ) -> Result<i32, ServiceError> {
        let inserted = notifications::ActiveModel {
            title: Set(title.to_owned()),
            message: Set(message.to_owned()),
            created_at: Set(created_at),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create notification")?;
        Ok(inserted.id)
    }

    async fn delete(&self, id: i32) -> Result<Option<Notification>, ServiceError> {
        let Some(model) = notifications::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find notification for delete")?
        else {
            return Ok(None);
        };
        notifications::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete notification")?;
        Ok(Some(notification_from_model(model)))
    }
}

fn notification_from_model(model: notifications::Model) -> Notification {
    Notification {
        id: model.id,
        title: model.title,
        message: model.message,
        created_at: model.created_at,
    }
}
