//! Dashboard summary metrics

use crate::config::{LatencyConfig, MetricsConfig};
use crate::core::EntityStore;
use crate::entities::{DashboardFilters, Order, Period, RevenuePoint};
use anyhow::Result;
use serde::Serialize;
use std::sync::Arc;

/// Headline numbers for the metric cards
#[derive(Debug, Clone, Serialize)]
pub struct DashboardMetrics {
    /// Sum of matching order totals, in tenge
    pub revenue: f64,

    /// Number of matching orders
    pub orders: usize,

    /// Average order value, rounded to whole tenge; 0 when nothing matches
    pub aov: f64,

    /// Store-wide conversion rate constant
    pub conversion_rate: f64,
}

/// Everything the dashboard page renders
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub metrics: DashboardMetrics,
    pub chart_data: Vec<RevenuePoint>,
}

/// Aggregation service behind the dashboard page
#[derive(Clone)]
pub struct MetricsService {
    orders: Arc<dyn EntityStore<Order>>,
    chart: Arc<Vec<RevenuePoint>>,
    metrics: MetricsConfig,
    latency: LatencyConfig,
}

impl MetricsService {
    pub fn new(
        orders: Arc<dyn EntityStore<Order>>,
        chart: Vec<RevenuePoint>,
        metrics: MetricsConfig,
        latency: LatencyConfig,
    ) -> Self {
        Self {
            orders,
            chart: Arc::new(chart),
            metrics,
            latency,
        }
    }

    /// Compute the dashboard summary for the given filters
    ///
    /// Channel and city narrow the counted orders. The period selector
    /// and custom date range are accepted but not applied; the seeded
    /// dataset has no notion of "now" to anchor a relative period to.
    /// The chart series always comes back whole.
    pub async fn summary(&self, filters: &DashboardFilters) -> Result<DashboardSummary> {
        self.latency.dashboard().await;

        if filters.period != Period::Last30Days
            || filters.start_date.is_some()
            || filters.end_date.is_some()
        {
            tracing::debug!(period = %filters.period, "Period filter accepted but not applied");
        }

        let mut rows = self.orders.list().await?;

        if let Some(channel) = filters.channel {
            rows.retain(|order| order.channel == channel);
        }

        if let Some(city) = filters.city.as_deref().filter(|c| !c.is_empty()) {
            rows.retain(|order| order.city == city);
        }

        let revenue: f64 = rows.iter().map(|order| order.total).sum();
        let orders = rows.len();
        let aov = if orders > 0 {
            (revenue / orders as f64).round()
        } else {
            0.0
        };

        tracing::debug!(revenue, orders, "Dashboard summary computed");

        Ok(DashboardSummary {
            metrics: DashboardMetrics {
                revenue,
                orders,
                aov,
                conversion_rate: self.metrics.conversion_rate,
            },
            chart_data: self.chart.as_ref().clone(),
        })
    }
}
