use super::*;

/// Tests admin user successfully passes admin permission check.
///
/// Expected: Ok(User) with the admin role
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::user::UserFactory::new(db)
        .email("admin@example.com")
        .role(UserRole::Admin)
        .build()
        .await?;

    AuthSession::new(session).set_user_id(admin.id).await?;

    let user = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(user.id, admin.id);
    assert_eq!(user.role, Role::Admin);
    assert_eq!(user.email.as_deref(), Some("admin@example.com"));

    Ok(())
}

/// Tests that leaders and students are denied admin permission.
///
/// Expected: Err(AuthError::AccessDenied) for both roles
#[tokio::test]
async fn denies_access_to_non_admin_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    for role in [UserRole::Student, UserRole::Leader] {
        let user = factory::user::create_user_with_role(db, role).await?;
        AuthSession::new(session).set_user_id(user.id).await?;

        let result = AuthGuard::new(db, session)
            .require(&[Permission::Admin])
            .await;

        match result {
            Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
                assert_eq!(user_id, user.id);
                assert!(message.contains("admin"));
            }
            other => panic!("Expected AccessDenied error, got: {:?}", other),
        }
    }

    Ok(())
}

/// Tests unauthenticated request.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn denies_access_when_not_authenticated() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session pointing at a user that no longer exists.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn denies_access_when_user_not_in_database() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(999).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(999)))
    ));

    Ok(())
}

/// Tests that an empty permission list only requires a login.
///
/// Expected: Ok(Principal) with the student role
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let student = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(student.id).await?;

    let principal = AuthGuard::new(db, session).principal(&[]).await?;

    assert_eq!(principal.user_id, student.id);
    assert_eq!(principal.role, Role::Student);

    Ok(())
}
