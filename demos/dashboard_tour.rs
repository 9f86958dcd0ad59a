//! Dashboard Data Tour
//!
//! This example walks through every service of the salesdash crate:
//! - Paged order listing with search and sort
//! - Point lookups and an in-place status update
//! - Dashboard metrics with filtering
//! - CSV export of the order table
//! - Theme and language preferences
//!
//! Latency simulation is left on, so calls pause like a remote API would.

use anyhow::Result;
use salesdash::prelude::*;
use std::time::Instant;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let dashboard = Dashboard::seeded(DashboardConfig::default());

    println!("📊 Dashboard summary");
    let started = Instant::now();
    let summary = dashboard
        .metrics()
        .summary(&DashboardFilters::default())
        .await?;
    println!(
        "  revenue {} ₸, {} orders, AOV {} ₸, conversion {:.1}% ({} ms)",
        summary.metrics.revenue,
        summary.metrics.orders,
        summary.metrics.aov,
        summary.metrics.conversion_rate * 100.0,
        started.elapsed().as_millis()
    );

    println!("\n🧾 Orders, newest first");
    let page = dashboard.orders().list(&OrderQuery::default()).await?;
    for order in &page.data {
        println!(
            "  {}  {}  {:<10}  {:>9} ₸  {}",
            order.id, order.date, order.status, order.total, order.customer_name
        );
    }
    println!(
        "  page {}/{} ({} total)",
        page.pagination.page, page.pagination.total_pages, page.pagination.total
    );

    println!("\n🚚 Shipping ORD-2024-004");
    if let Some(updated) = dashboard
        .orders()
        .update_status("ORD-2024-004", OrderStatus::Shipped)
        .await?
    {
        println!("  now {}", updated.status);
    }

    println!("\n🔍 Orders matching \"алматы\"");
    let found = dashboard
        .orders()
        .list(&OrderQuery {
            search: Some("алматы".to_string()),
            ..Default::default()
        })
        .await?;
    println!("  {} orders match", found.pagination.total);

    println!("\n👥 Customers in Астана");
    let customers = dashboard
        .customers()
        .list(&CustomerQuery {
            city: Some("Астана".to_string()),
            ..Default::default()
        })
        .await?;
    for customer in &customers {
        println!(
            "  {}  {}  {}",
            customer.id,
            customer.name,
            customer.loyalty_tier()
        );
    }

    println!("\n📤 CSV export of the current page");
    let csv = dashboard.exporter().export(&page.data).await;
    for line in csv.lines().take(3) {
        println!("  {line}");
    }

    let settings = Settings::in_memory();
    settings.set_theme(Theme::Dark)?;
    settings.set_language(Language::Ru)?;
    println!(
        "\n⚙️  Preferences saved: theme={}, language={}",
        settings.theme()?,
        settings.language()?
    );

    Ok(())
}
