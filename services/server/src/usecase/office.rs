use crate::domain::clock::Clock;
use crate::domain::repository::LocationRepository;
use crate::domain::types::{OfficeLocation, OfficeUpsert};
use crate::error::ServiceError;

pub struct GetOfficeLocationUseCase<L: LocationRepository> {
    pub locations: L,
}

impl<L: LocationRepository> GetOfficeLocationUseCase<L> {
    pub async fn execute(&self) -> Result<OfficeLocation, ServiceError> {
        self.locations
            .get_office()
            .await?
            .ok_or(ServiceError::OfficeLocationNotFound)
    }
}

pub struct SetOfficeLocationInput {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius: f64,
}

pub struct SetOfficeLocationUseCase<L, K>
where
    L: LocationRepository,
    K: Clock,
{
    pub locations: L,
    pub clock: K,
}

impl<L, K> SetOfficeLocationUseCase<L, K>
where
    L: LocationRepository,
    K: Clock,
{
    pub async fn execute(&self, input: SetOfficeLocationInput) -> Result<(), ServiceError> {
        let office = OfficeUpsert {
            name: input.name,
            latitude: input.latitude,
            longitude: input.longitude,
            radius: input.radius,
            created_at: self.clock.now(),
        };
        self.locations.upsert_office(&office).await
    }
}
