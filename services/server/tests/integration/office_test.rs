use smartattend_server::error::ServiceError;
use smartattend_server::usecase::office::{
    GetOfficeLocationUseCase, SetOfficeLocationInput, SetOfficeLocationUseCase,
};

use crate::helpers::{FixedClock, MockLocationRepo, test_now, test_office};

#[tokio::test]
async fn should_return_not_found_when_office_is_unset() {
    let uc = GetOfficeLocationUseCase {
        locations: MockLocationRepo::empty(),
    };

    let result = uc.execute().await;
    assert!(
        matches!(result, Err(ServiceError::OfficeLocationNotFound)),
        "expected OfficeLocationNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_create_office_on_first_set() {
    let locations = MockLocationRepo::empty();

    let set = SetOfficeLocationUseCase {
        locations: locations.clone(),
        clock: FixedClock(test_now()),
    };
    set.execute(SetOfficeLocationInput {
        name: "Head Office".to_owned(),
        latitude: -6.2,
        longitude: 106.8,
        radius: 150.0,
    })
    .await
    .unwrap();

    let get = GetOfficeLocationUseCase { locations };
    let office = get.execute().await.unwrap();
    assert_eq!(office.name, "Head Office");
    assert_eq!(office.latitude, -6.2);
    assert_eq!(office.longitude, 106.8);
    assert_eq!(office.radius, 150.0);
}

#[tokio::test]
async fn should_overwrite_existing_office_on_set() {
    let locations = MockLocationRepo::new(Some(test_office(0.0, 0.0, 100.0)));

    let set = SetOfficeLocationUseCase {
        locations: locations.clone(),
        clock: FixedClock(test_now()),
    };
    set.execute(SetOfficeLocationInput {
        name: "Branch".to_owned(),
        latitude: 1.0,
        longitude: 2.0,
        radius: 50.0,
    })
    .await
    .unwrap();

    let get = GetOfficeLocationUseCase { locations };
    let office = get.execute().await.unwrap();
    assert_eq!(office.name, "Branch");
    assert_eq!(office.radius, 50.0);
}
