use client::{CredentialStore, IdentityProvider, MemoryStore};
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, LoginRequest, Notice, Role};
use std::sync::Arc;

use crate::common;

fn login(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn sign_in_resolves_role_and_publishes_session() {
    let env = common::test_env().await;
    let uid = env
        .backend
        .add_account("chef@example.com", "secret1", Some("kitchen"))
        .await;
    let mut rx = env.session.subscribe();

    let user = env
        .session
        .sign_in(&login("chef@example.com", "secret1"))
        .await
        .unwrap();

    assert_eq!(user.uid, uid);
    assert_eq!(user.role, Role::Kitchen);
    assert_eq!(user.role.dashboard_path(), "/kitchen-dashboard");
    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().as_ref(), Some(&user));
}

#[tokio::test]
async fn profile_role_is_case_insensitive() {
    let env = common::test_env().await;
    env.backend
        .add_account("boss@example.com", "secret1", Some("Admin"))
        .await;
    let user = env
        .session
        .sign_in(&login("boss@example.com", "secret1"))
        .await
        .unwrap();
    assert_eq!(user.role, Role::Admin);
}

#[tokio::test]
async fn missing_profile_is_an_error_and_leaves_no_session() {
    let env = common::test_env().await;
    env.backend
        .add_account("ghost@example.com", "secret1", None)
        .await;

    let err = env
        .session
        .sign_in(&login("ghost@example.com", "secret1"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.message, "User not found in the directory");
    assert!(env.session.current().is_none());
    assert!(env.api.client().identity().current_user().is_none());
}

#[tokio::test]
async fn unknown_role_value_yields_no_session() {
    let env = common::test_env().await;
    env.backend
        .add_account("odd@example.com", "secret1", Some("sommelier"))
        .await;
    assert!(env
        .session
        .sign_in(&login("odd@example.com", "secret1"))
        .await
        .is_err());
    assert!(env.session.current().is_none());
}

#[tokio::test]
async fn wrong_password_maps_to_friendly_message() {
    let env = common::test_env().await;
    env.backend
        .add_account("w@example.com", "secret1", Some("waiter"))
        .await;

    let err = env
        .session
        .sign_in(&login("w@example.com", "nope"))
        .await
        .unwrap_err();
    assert_eq!(err.message, "The password is incorrect.");

    let err = env
        .session
        .sign_in(&login("nobody@example.com", "nope"))
        .await
        .unwrap_err();
    assert_eq!(err.message, "No account exists for this email.");
}

#[tokio::test]
async fn invalid_form_is_rejected_before_the_identity_service() {
    let env = common::test_env().await;
    let err = env.session.sign_in(&login("", "")).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(env.backend.requests().await.is_empty());
}

#[tokio::test]
async fn restore_rebuilds_session_from_identity() {
    let (env, user) = common::signed_in_env("client").await;
    let restored = env.session.restore().await;
    assert_eq!(restored, Some(user));
}

#[tokio::test]
async fn restore_without_identity_is_empty() {
    let env = common::test_env().await;
    assert_eq!(env.session.restore().await, None);
    assert!(env.backend.requests().await.is_empty());
}

#[tokio::test]
async fn sign_out_clears_session() {
    let (env, _) = common::signed_in_env("waiter").await;
    let rx = env.session.subscribe();
    env.session.sign_out();
    assert!(env.session.current().is_none());
    assert!(rx.borrow().is_none());
    assert!(env.api.client().identity().current_user().is_none());
}

#[tokio::test]
async fn stored_session_is_restored_by_a_new_connection() {
    let backend = common::MockBackend::default();
    let config = common::config_for(&common::spawn_backend(backend.clone()).await);
    backend
        .add_account("chef@example.com", "secret1", Some("kitchen"))
        .await;
    let store = MemoryStore::default();

    let (_, first) = client::connect_with_store(&config, Arc::new(store.clone()));
    let user = first
        .sign_in(&login("chef@example.com", "secret1"))
        .await
        .unwrap();
    assert!(store.load().is_some());

    let (api, second) = client::connect_with_store(&config, Arc::new(store.clone()));
    assert!(second.current().is_none());
    assert_eq!(second.restore().await, Some(user.clone()));
    assert_eq!(second.current(), Some(user));
    assert!(api.kitchen_orders().await.is_ok());
}

#[tokio::test]
async fn sign_out_forgets_the_stored_session() {
    let backend = common::MockBackend::default();
    let config = common::config_for(&common::spawn_backend(backend.clone()).await);
    backend
        .add_account("w@example.com", "secret1", Some("waiter"))
        .await;
    let store = MemoryStore::default();

    let (_, first) = client::connect_with_store(&config, Arc::new(store.clone()));
    first.sign_in(&login("w@example.com", "secret1")).await.unwrap();
    first.sign_out();
    assert!(store.load().is_none());

    let (_, second) = client::connect_with_store(&config, Arc::new(store));
    assert_eq!(second.restore().await, None);
}

#[tokio::test]
async fn rejected_credentials_end_the_session() {
    let (env, _) = common::signed_in_env("admin").await;
    env.backend.revoke_refresh_tokens().await;

    let err = env.api.workers().await.unwrap_err();
    let notice = Notice::failure("Could not load the workers", &err);

    assert!(env.session.end_if_rejected(&notice));
    assert!(env.session.current().is_none());
    assert!(env.api.client().identity().current_user().is_none());
    assert_eq!(env.session.restore().await, None);
}

#[tokio::test]
async fn ordinary_failures_keep_the_session() {
    let (env, user) = common::signed_in_env("admin").await;
    env.backend.fail("/workers").await;

    let err = env.api.workers().await.unwrap_err();
    let notice = Notice::failure("Could not load the workers", &err);

    assert!(!env.session.end_if_rejected(&notice));
    assert_eq!(env.session.current(), Some(user));
}
