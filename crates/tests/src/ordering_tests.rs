use client::dashboards::OrderDesk;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{OrderStatus, Severity};

use crate::common;

async fn desk_with_menu(env: &common::TestEnv) -> OrderDesk {
    env.backend
        .set_menu(vec![
            common::menu_item("p1", "Taco", json!(3.5)),
            common::menu_item("p2", "Agua", json!("1.25")),
        ])
        .await;
    let mut desk = OrderDesk::default();
    desk.load_menu(&env.api).await.unwrap();
    desk
}

#[tokio::test]
async fn adding_the_same_item_twice_gives_one_line_of_two() {
    let (env, _) = common::signed_in_env("waiter").await;
    let mut desk = desk_with_menu(&env).await;
    let taco = desk.menu[0].clone();

    desk.add(&taco);
    desk.add(&taco);

    assert_eq!(desk.cart.len(), 1);
    assert_eq!(desk.cart.lines()[0].quantity, 2);
    assert_eq!(desk.cart.total_display(), "7.00");
}

#[tokio::test]
async fn empty_cart_is_rejected_without_a_request() {
    let (env, user) = common::signed_in_env("client").await;
    let mut desk = OrderDesk::default();

    let notice = desk.submit(&env.api, &user).await;

    assert_eq!(notice.severity, Severity::Warning);
    assert!(env.backend.api_requests("/create-order").await.is_empty());
}

#[tokio::test]
async fn submission_posts_cart_clears_it_and_refreshes_orders() {
    let (env, user) = common::signed_in_env("client").await;
    let mut desk = desk_with_menu(&env).await;
    let taco = desk.menu[0].clone();
    let water = desk.menu[1].clone();
    desk.add(&taco);
    desk.add(&taco);
    desk.add(&water);

    let notice = desk.submit(&env.api, &user).await;

    assert_eq!(notice.severity, Severity::Success);
    assert_eq!(notice.message, "Order created successfully");
    assert!(desk.cart.is_empty());

    let posted = env.backend.api_requests("/create-order").await;
    assert_eq!(posted.len(), 1);
    assert_eq!(
        posted[0].body,
        json!({
            "userId": user.uid,
            "items": [
                {"productId": "p1", "quantity": 2, "price": 3.5},
                {"productId": "p2", "quantity": 1, "price": 1.25},
            ]
        })
    );

    assert_eq!(desk.orders.len(), 1);
    assert_eq!(desk.orders[0].status, OrderStatus::Pending);
    assert_eq!(desk.orders[0].total_display(), "8.25");
}

#[tokio::test]
async fn failed_submission_keeps_the_cart() {
    let (env, user) = common::signed_in_env("waiter").await;
    let mut desk = desk_with_menu(&env).await;
    let taco = desk.menu[0].clone();
    desk.add(&taco);
    env.backend.fail("/create-order").await;

    let notice = desk.submit(&env.api, &user).await;

    assert_eq!(notice.severity, Severity::Error);
    assert_eq!(notice.message, "Could not place the order");
    assert_eq!(desk.cart.len(), 1);
    assert!(desk.orders.is_empty());
}

#[tokio::test]
async fn client_sees_only_their_own_orders() {
    let (env, user) = common::signed_in_env("client").await;
    env.backend
        .add_order(common::order_json("o1", &user.uid, "listo"))
        .await;
    env.backend
        .add_order(common::order_json("o2", "someone-else", "pendiente"))
        .await;
    let mut desk = OrderDesk::default();

    desk.refresh_orders(&env.api, &user).await.unwrap();

    assert_eq!(desk.orders.len(), 1);
    assert_eq!(desk.orders[0].status, OrderStatus::Ready);
    assert_eq!(desk.orders[0].created_display(), "2026-01-20 21:35");
}

#[tokio::test]
async fn order_with_unpriced_item_stays_readable_for_client_and_kitchen() {
    let (env, user) = common::signed_in_env("client").await;
    env.backend
        .set_menu(vec![
            common::menu_item("p1", "Agua", json!("gratis")),
            common::menu_item("p2", "Pan", serde_json::Value::Null),
        ])
        .await;
    let mut desk = OrderDesk::default();
    desk.load_menu(&env.api).await.unwrap();
    assert_eq!(desk.menu.len(), 2);
    assert_eq!(desk.menu[1].price.display(), "N/A");

    let water = desk.menu[0].clone();
    desk.add(&water);
    let notice = desk.submit(&env.api, &user).await;

    assert_eq!(notice.severity, Severity::Success);
    let posted = env.backend.api_requests("/create-order").await;
    assert!(posted[0].body["items"][0]["price"].is_null());

    assert_eq!(desk.orders.len(), 1);
    assert_eq!(desk.orders[0].items[0].price.display(), "N/A");

    let mut kitchen = client::dashboards::KitchenDesk::default();
    kitchen.load(&env.api).await.unwrap();
    assert_eq!(kitchen.board.pending.len(), 1);
}
