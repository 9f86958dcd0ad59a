//! Shared fixtures for the integration suites
//!
//! Builds dashboards with simulated latency switched off, over either
//! the seeded demo dataset or purpose-built rows.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! mod fixtures;
//! use fixtures::*;
//! ```

#![allow(dead_code)]

use chrono::Days;
use salesdash::prelude::*;
use salesdash::seed;
use std::sync::Arc;

/// Dashboard over the seeded demo dataset
pub fn seeded_dashboard() -> Dashboard {
    Dashboard::seeded(DashboardConfig::without_latency())
}

/// Dashboard over empty stores
pub fn empty_dashboard() -> Dashboard {
    Dashboard::new(
        Arc::new(InMemoryStore::<Order>::new()),
        Arc::new(InMemoryStore::<Customer>::new()),
        Vec::new(),
        DashboardConfig::without_latency(),
    )
}

/// Dashboard over the given orders, with no customers and no chart
pub fn dashboard_with_orders(rows: Vec<Order>) -> Dashboard {
    Dashboard::new(
        Arc::new(InMemoryStore::with_rows(rows)),
        Arc::new(InMemoryStore::<Customer>::new()),
        Vec::new(),
        DashboardConfig::without_latency(),
    )
}

pub fn date(year: i32, month: u32, dom: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, dom).unwrap()
}

/// Order row with the fields the listing and metrics care about
pub fn order(
    id: &str,
    date: NaiveDate,
    customer: &str,
    city: &str,
    channel: Channel,
    status: OrderStatus,
    total: f64,
) -> Order {
    Order {
        id: id.to_string(),
        date,
        customer_id: format!("CUST-{customer}"),
        customer_name: customer.to_string(),
        city: city.to_string(),
        channel,
        status,
        total,
        items: None,
        comment: None,
    }
}

/// Batch of `n` orders with distinct dates and totals, ids ORD-001 and up
///
/// Channels, statuses and cities cycle so every vocabulary value shows up
/// in a batch of reasonable size.
pub fn order_batch(n: usize) -> Vec<Order> {
    (0..n)
        .map(|i| {
            order(
                &format!("ORD-{:03}", i + 1),
                date(2024, 1, 1) + Days::new(i as u64),
                &format!("Клиент {:02}", i + 1),
                seed::CITIES[i % seed::CITIES.len()],
                Channel::ALL[i % Channel::ALL.len()],
                OrderStatus::ALL[i % OrderStatus::ALL.len()],
                1_000.0 + (i as f64) * 250.0,
            )
        })
        .collect()
}

/// Ids of the rows on a page, in page order
pub fn page_ids(page: &PaginatedResponse<Order>) -> Vec<String> {
    page.data.iter().map(|o| o.id.clone()).collect()
}

/// Install a log subscriber honoring RUST_LOG, once per test binary
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
