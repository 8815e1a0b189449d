use crate::domain::clock::Clock;
use crate::domain::repository::NotificationRepository;
use crate::domain::types::Notification;
use crate::error::ServiceError;

pub struct GetLatestNotificationUseCase<N: NotificationRepository> {
    pub notifications: N,
}

impl<N: NotificationRepository> GetLatestNotificationUseCase<N> {
    pub async fn execute(&self) -> Result<Notification, ServiceError> {
        self.notifications
            .latest()
            .await?
            .ok_or(ServiceError::NoNotifications)
    }
}

pub struct ListNotificationsUseCase<N: NotificationRepository> {
    pub notifications: N,
}

impl<N: NotificationRepository> ListNotificationsUseCase<N> {
    pub async fn execute(&self) -> Result<Vec<Notification>, ServiceError> {
        self.notifications.list().await
    }
}

pub struct CreateNotificationUseCase<N, K>
where
    N: NotificationRepository,
    K: Clock,
{
    pub notifications: N,
    pub clock: K,
}

impl<N, K> CreateNotificationUseCase<N, K>
where
    N: NotificationRepository,
    K: Clock,
{
    pub async fn execute(&self, title: &str, message: &str) -> Result<i32, ServiceError> {
        self.notifications
            .create(title, message, self.clock.now())
            .await
    }
}

pub struct DeleteNotificationUseCase<N: NotificationRepository> {
    pub notifications: N,
}

impl<N: NotificationRepository> DeleteNotificationUseCase<N> {
    pub async fn execute(&self, id: i32) -> Result<Notification, ServiceError> {
        self.notifications
            .delete(id)
            .await?
            .ok_or(ServiceError::NotificationNotFound)
    }
}
