//! Integration tests for the customer directory and point lookups
//!
//! These tests verify that:
//! - The directory filters by name/email search and exact city
//! - Point lookups return None for unknown ids instead of failing
//! - Order history joins on the stored customer id
//! - Status updates persist without touching neighboring rows

mod fixtures;

use fixtures::*;
use salesdash::prelude::*;

#[tokio::test]
async fn test_directory_comes_back_whole_in_insertion_order() {
    let dashboard = seeded_dashboard();

    let customers = dashboard
        .customers()
        .list(&CustomerQuery::all())
        .await
        .unwrap();

    let ids: Vec<&str> = customers.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["CUST-001", "CUST-002", "CUST-003", "CUST-004", "CUST-005"]
    );
}

#[tokio::test]
async fn test_search_matches_name_and_email() {
    let dashboard = seeded_dashboard();
    let customers = dashboard.customers();

    let by_name = customers
        .list(&CustomerQuery {
            search: Some("петрова".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].id, "CUST-002");

    let by_email = customers
        .list(&CustomerQuery {
            search: Some("SERGEY".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_email.len(), 1);
    assert_eq!(by_email[0].id, "CUST-005");
}

#[tokio::test]
async fn test_city_filter_is_exact() {
    let dashboard = seeded_dashboard();
    let customers = dashboard.customers();

    let astana = customers
        .list(&CustomerQuery {
            city: Some("Астана".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    let ids: Vec<&str> = astana.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["CUST-002", "CUST-005"]);

    // City is an exact dropdown value, not a substring
    let partial = customers
        .list(&CustomerQuery {
            city: Some("Аста".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(partial.is_empty());
}

#[tokio::test]
async fn test_search_and_city_combine() {
    let dashboard = seeded_dashboard();

    let found = dashboard
        .customers()
        .list(&CustomerQuery {
            search: Some("анна".to_string()),
            city: Some("Алматы".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "CUST-004");
}

#[tokio::test]
async fn test_get_customer_and_loyalty_tier() {
    let dashboard = seeded_dashboard();
    let customers = dashboard.customers();

    let found = customers.get("CUST-001").await.unwrap().unwrap();
    assert_eq!(found.name, "Алексей Иванов");
    assert_eq!(found.loyalty_tier(), LoyaltyTier::Platinum);

    assert!(customers.get("CUST-404").await.unwrap().is_none());
}

#[tokio::test]
async fn test_get_order_known_and_unknown() {
    let dashboard = seeded_dashboard();
    let orders = dashboard.orders();

    let found = orders.get("ORD-2024-001").await.unwrap().unwrap();
    assert_eq!(found.total, 45_000.0);
    assert_eq!(found.customer_id, "CUST-001");

    assert!(orders.get("ORD-2024-999").await.unwrap().is_none());
}

#[tokio::test]
async fn test_order_history_joins_on_customer_id() {
    let dashboard = seeded_dashboard();

    let history = dashboard.orders().for_customer("CUST-003").await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, "ORD-2024-003");

    assert!(
        dashboard
            .orders()
            .for_customer("CUST-404")
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn test_order_history_collects_every_order_of_a_customer() {
    let dashboard = dashboard_with_orders(vec![
        order(
            "ORD-1",
            date(2024, 3, 1),
            "Анна",
            "Алматы",
            Channel::Web,
            OrderStatus::New,
            100.0,
        ),
        order(
            "ORD-2",
            date(2024, 3, 2),
            "Борис",
            "Астана",
            Channel::Mobile,
            OrderStatus::New,
            200.0,
        ),
        order(
            "ORD-3",
            date(2024, 3, 3),
            "Анна",
            "Алматы",
            Channel::Offline,
            OrderStatus::Shipped,
            300.0,
        ),
    ]);

    let history = dashboard.orders().for_customer("CUST-Анна").await.unwrap();

    let ids: Vec<&str> = history.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["ORD-1", "ORD-3"]);
}

#[tokio::test]
async fn test_status_update_persists_without_touching_neighbors() {
    let dashboard = seeded_dashboard();
    let orders = dashboard.orders();

    let updated = orders
        .update_status("ORD-2024-004", OrderStatus::Processing)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, OrderStatus::Processing);
    assert_eq!(updated.total, 32_000.0);

    let reread = orders.get("ORD-2024-004").await.unwrap().unwrap();
    assert_eq!(reread.status, OrderStatus::Processing);

    // Neighbors and row count are untouched
    let neighbor = orders.get("ORD-2024-001").await.unwrap().unwrap();
    assert_eq!(neighbor.status, OrderStatus::Delivered);

    let page = orders.list(&OrderQuery::default()).await.unwrap();
    assert_eq!(page.pagination.total, 5);
}

#[tokio::test]
async fn test_status_update_for_unknown_id_writes_nothing() {
    let dashboard = seeded_dashboard();
    let orders = dashboard.orders();

    let updated = orders
        .update_status("ORD-2024-999", OrderStatus::Delivered)
        .await
        .unwrap();
    assert!(updated.is_none());

    let page = orders.list(&OrderQuery::default()).await.unwrap();
    assert_eq!(page.pagination.total, 5);
}
