use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::AppErrorKind;

use crate::common;

#[tokio::test]
async fn menu_is_fetched_without_credentials() {
    let (env, _) = common::signed_in_env("client").await;
    env.backend
        .set_menu(vec![common::menu_item("p1", "Taco", json!(3.5))])
        .await;

    let menu = env.api.menu().await.unwrap();

    assert_eq!(menu.len(), 1);
    let requests = env.backend.api_requests("/menu").await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].authorization, None);
}

#[tokio::test]
async fn protected_requests_carry_a_bearer_token() {
    let (env, _) = common::signed_in_env("kitchen").await;

    env.api.kitchen_orders().await.unwrap();

    let requests = env.backend.api_requests("/kitchen-orders").await;
    assert_eq!(requests.len(), 1);
    let auth = requests[0].authorization.clone().unwrap_or_default();
    assert!(auth.starts_with("Bearer id-"), "got {auth}");
}

#[tokio::test]
async fn each_request_gets_a_fresh_credential() {
    let (env, _) = common::signed_in_env("admin").await;

    env.api.workers().await.unwrap();
    env.api.workers().await.unwrap();

    let requests = env.backend.api_requests("/workers").await;
    assert_eq!(requests.len(), 2);
    assert_ne!(requests[0].authorization, requests[1].authorization);
}

#[tokio::test]
async fn no_session_means_unauthorized_and_nothing_sent() {
    let env = common::test_env().await;

    let err = env.api.kitchen_orders().await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert!(err.requires_login());
    assert!(env.backend.requests().await.is_empty());
}

#[tokio::test]
async fn credential_failure_means_unauthorized_and_nothing_sent() {
    let (env, _) = common::signed_in_env("admin").await;
    env.backend.revoke_refresh_tokens().await;

    let err = env.api.clients().await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert!(env.backend.api_requests("/clients").await.is_empty());
}

#[tokio::test]
async fn server_errors_carry_status_and_body_message() {
    let (env, _) = common::signed_in_env("admin").await;
    env.backend.fail("/order-history").await;

    let err = env.api.order_history().await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::InternalError);
    assert_eq!(err.message, "Internal server error");
    assert_eq!(env.backend.api_requests("/order-history").await.len(), 1);
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let (api, _) = client::connect(&common::config_for("http://127.0.0.1:9"));

    let err = api.menu().await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Network);
}
