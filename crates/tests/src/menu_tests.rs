use client::dashboards::MenuBoard;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::Severity;

use crate::common;

#[tokio::test]
async fn anonymous_visitor_sees_the_menu() {
    let env = common::test_env().await;
    env.backend
        .set_menu(vec![
            common::menu_item("p1", "Taco", json!(3.5)),
            common::menu_item("p2", "Pozole", json!("8")),
            common::menu_item("p3", "Especial", json!("market price")),
        ])
        .await;

    let mut board = MenuBoard::default();
    board.load(&env.api).await.unwrap();

    let prices: Vec<String> = board.items.iter().map(|i| i.price.display()).collect();
    assert_eq!(prices, vec!["3.50", "8.00", "N/A"]);
    assert_eq!(board.items[0].image_src(), "/images/p1.jpg");
}

#[tokio::test]
async fn failed_menu_fetch_leaves_empty_state() {
    let env = common::test_env().await;
    env.backend
        .set_menu(vec![common::menu_item("p1", "Taco", json!(3.5))])
        .await;
    let mut board = MenuBoard::default();
    board.load(&env.api).await.unwrap();

    env.backend.fail("/menu").await;
    let notice = board.load(&env.api).await.unwrap_err();

    assert!(board.items.is_empty());
    assert_eq!(notice.severity, Severity::Error);
    assert_eq!(notice.message, "Could not load the menu");
}
