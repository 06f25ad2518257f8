// crates/backend-lib/tests/auth.rs
use std::sync::Arc;

use coursebook_backend::auth::{
    AuthService, CredentialStore, DefaultAuth, Role, TokenAuthority,
};
use coursebook_backend::error::AppError;

async fn seeded_service() -> DefaultAuth {
    let store = CredentialStore::new();
    store.seed_default().await.unwrap();
    DefaultAuth::new(store)
}

#[tokio::test]
async fn test_register_then_duplicate() {
    let auth = seeded_service().await;

    auth.register("nikita", "first-password").await.unwrap();

    // Second registration loses regardless of the password it carries
    let err = auth.register("nikita", "other-password").await.unwrap_err();
    assert!(matches!(err, AppError::AlreadyExists));
}

#[tokio::test]
async fn test_register_missing_fields() {
    let auth = seeded_service().await;

    assert!(matches!(
        auth.register("", "secret").await.unwrap_err(),
        AppError::MissingFields
    ));
    assert!(matches!(
        auth.register("nikita", "").await.unwrap_err(),
        AppError::MissingFields
    ));
}

#[tokio::test]
async fn test_login_round_trip() {
    let auth = seeded_service().await;

    auth.register("carol", "super-secret").await.unwrap();
    let (token, role) = auth.login("carol", "super-secret").await.unwrap();

    assert_eq!(role, Role::User);
    assert_eq!(auth.validate(&token).await.unwrap(), "carol");
}

#[tokio::test]
async fn test_seeded_admin_login() {
    let auth = seeded_service().await;

    let (token, role) = auth.login("admin", "password").await.unwrap();
    assert_eq!(role, Role::Admin);
    assert_eq!(token, TokenAuthority::issue("admin"));
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let auth = seeded_service().await;
    auth.register("dave", "right-password").await.unwrap();

    // Wrong password and unknown user are indistinguishable to the caller
    assert!(matches!(
        auth.login("dave", "wrong-password").await.unwrap_err(),
        AppError::InvalidCredentials
    ));
    assert!(matches!(
        auth.login("nobody", "whatever").await.unwrap_err(),
        AppError::InvalidCredentials
    ));
}

#[tokio::test]
async fn test_change_password_flow() {
    let auth = seeded_service().await;
    auth.register("erin", "old-secret").await.unwrap();

    auth.change_password("erin", "old-secret", "new-secret")
        .await
        .unwrap();

    assert!(matches!(
        auth.login("erin", "old-secret").await.unwrap_err(),
        AppError::InvalidCredentials
    ));
    let (_, role) = auth.login("erin", "new-secret").await.unwrap();
    assert_eq!(role, Role::User);
}

#[tokio::test]
async fn test_change_password_error_kinds() {
    let auth = seeded_service().await;
    auth.register("frank", "secret").await.unwrap();

    assert!(matches!(
        auth.change_password("ghost", "a", "b").await.unwrap_err(),
        AppError::NotFound(_)
    ));
    assert!(matches!(
        auth.change_password("frank", "not-the-secret", "b")
            .await
            .unwrap_err(),
        AppError::WrongSecret
    ));
    assert!(matches!(
        auth.change_password("frank", "", "b").await.unwrap_err(),
        AppError::MissingFields
    ));
}

#[tokio::test]
async fn test_seed_is_idempotent() {
    let store = CredentialStore::new();
    store.seed_default().await.unwrap();

    // Change the admin password, then seed again: the record must survive
    store
        .update_secret("admin", "password", "rotated")
        .await
        .unwrap();
    store.seed_default().await.unwrap();

    assert_eq!(store.verify_secret("admin", "rotated").await, Some(Role::Admin));
    assert_eq!(store.verify_secret("admin", "password").await, None);
}

#[tokio::test]
async fn test_secrets_are_stored_hashed() {
    let store = CredentialStore::new();
    store.create("grace", "plain-secret").await.unwrap();

    let record = store.get("grace").await.unwrap();
    assert_ne!(record.secret_hash, "plain-secret");
    assert!(record.secret_hash.starts_with("$scrypt$"));
    assert_eq!(record.role, Role::User);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_register_single_winner() {
    let store = CredentialStore::new();
    let auth = Arc::new(DefaultAuth::new(store));

    let mut handles = Vec::new();
    for i in 0..4 {
        let auth = Arc::clone(&auth);
        handles.push(tokio::spawn(async move {
            auth.register("contested", &format!("password-{i}")).await
        }));
    }

    let mut successes = 0;
    let mut duplicates = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(()) => successes += 1,
            Err(AppError::AlreadyExists) => duplicates += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(duplicates, 3);
}

#[tokio::test]
async fn test_ghost_token_validates() {
    // Structural validation does not consult the store: a token shaped like
    // an issued one passes even though "ghost" was never registered.
    let auth = seeded_service().await;

    let username = auth.validate("token_for_ghost").await.unwrap();
    assert_eq!(username, "ghost");
    assert!(auth.store().get("ghost").await.is_none());
}

#[tokio::test]
async fn test_refresh_chain_stays_valid() {
    let auth = seeded_service().await;

    let (token, _) = auth.login("admin", "password").await.unwrap();
    let once = auth.refresh(&token).await.unwrap();
    let twice = auth.refresh(&once).await.unwrap();

    assert_eq!(once, "token_for_admin_refreshed");
    assert_eq!(twice, "token_for_admin_refreshed_refreshed");
    assert_eq!(auth.validate(&twice).await.unwrap(), "admin");
}

#[tokio::test]
async fn test_invalid_tokens_rejected() {
    let auth = seeded_service().await;

    assert!(matches!(
        auth.validate("garbage").await.unwrap_err(),
        AppError::InvalidToken
    ));
    assert!(matches!(
        auth.refresh("garbage").await.unwrap_err(),
        AppError::InvalidToken
    ));
}
