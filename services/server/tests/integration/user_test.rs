use smartattend_server::domain::types::UserChanges;
use smartattend_server::error::ServiceError;
use smartattend_server::usecase::user::{
    CreateUserInput, CreateUserUseCase, DeleteUserUseCase, GetUserUseCase, UpdateUserUseCase,
};

use crate::helpers::{MockUserRepo, test_user};

#[tokio::test]
async fn should_default_role_to_user_when_omitted() {
    let users = MockUserRepo::empty();
    let users_handle = users.users_handle();

    let uc = CreateUserUseCase { users };
    let id = uc
        .execute(CreateUserInput {
            name: "Budi".to_owned(),
            email: "b@x.com".to_owned(),
            password: "pw".to_owned(),
            role: None,
            nim_nip: None,
        })
        .await
        .unwrap();

    assert_eq!(id, 1);
    assert_eq!(users_handle.lock().unwrap()[0].role, "user");
}

#[tokio::test]
async fn should_apply_only_provided_fields_on_update() {
    let users = MockUserRepo::new(vec![test_user()]);
    let users_handle = users.users_handle();

    let uc = UpdateUserUseCase { users };
    uc.execute(
        1,
        UserChanges {
            name: Some("Ana Maria".to_owned()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let stored = users_handle.lock().unwrap();
    assert_eq!(stored[0].name, "Ana Maria");
    assert_eq!(stored[0].email, "a@x.com", "untouched fields stay put");
    assert_eq!(stored[0].password, "p1");
}

#[tokio::test]
async fn should_reject_update_with_no_fields() {
    let uc = UpdateUserUseCase {
        users: MockUserRepo::new(vec![test_user()]),
    };

    let result = uc.execute(1, UserChanges::default()).await;
    assert!(
        matches!(result, Err(ServiceError::MissingInput(_))),
        "expected MissingInput, got {result:?}"
    );
}

#[tokio::test]
async fn should_return_not_found_when_updating_unknown_user() {
    let uc = UpdateUserUseCase {
        users: MockUserRepo::empty(),
    };

    let result = uc
        .execute(
            42,
            UserChanges {
                name: Some("x".to_owned()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(ServiceError::UserNotFound)));
}

#[tokio::test]
async fn should_return_not_found_when_deleting_unknown_user() {
    let uc = DeleteUserUseCase {
        users: MockUserRepo::new(vec![test_user()]),
    };

    uc.execute(1).await.unwrap();

    let again = uc.execute(1).await;
    assert!(
        matches!(again, Err(ServiceError::UserNotFound)),
        "expected UserNotFound, got {again:?}"
    );
}

#[tokio::test]
async fn should_fetch_user_profile_by_id() {
    let uc = GetUserUseCase {
        users: MockUserRepo::new(vec![test_user()]),
    };

    let user = uc.execute(1).await.unwrap();
    assert_eq!(user.email, "a@x.com");
    assert_eq!(user.nim_nip.as_deref(), Some("2210512345"));
}
