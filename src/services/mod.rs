//! Query services behind the dashboard pages

pub mod customers;
pub mod export;
pub mod metrics;
pub mod orders;

pub use customers::{CustomerQuery, CustomerService};
pub use export::{CsvExporter, to_csv};
pub use metrics::{DashboardMetrics, DashboardSummary, MetricsService};
pub use orders::{OrderQuery, OrderService, OrderSortField};

use crate::config::DashboardConfig;
use crate::core::EntityStore;
use crate::entities::{Customer, Order, RevenuePoint};
use crate::seed;
use crate::storage::InMemoryStore;
use std::sync::Arc;

/// One handle bundling every data service of the dashboard
///
/// Stores are injected, so tests and demos can pick between the seeded
/// dataset and purpose-built fixtures.
pub struct Dashboard {
    orders: OrderService,
    customers: CustomerService,
    metrics: MetricsService,
    exporter: CsvExporter,
}

impl Dashboard {
    /// Wire the services over the given stores
    pub fn new(
        order_store: Arc<dyn EntityStore<Order>>,
        customer_store: Arc<dyn EntityStore<Customer>>,
        chart: Vec<RevenuePoint>,
        config: DashboardConfig,
    ) -> Self {
        let latency = config.latency;

        Self {
            orders: OrderService::new(order_store.clone(), latency.clone()),
            customers: CustomerService::new(customer_store, latency.clone()),
            metrics: MetricsService::new(order_store, chart, config.metrics, latency.clone()),
            exporter: CsvExporter::new(latency),
        }
    }

    /// Dashboard over the seeded demo dataset
    pub fn seeded(config: DashboardConfig) -> Self {
        Self::new(
            Arc::new(InMemoryStore::with_rows(seed::orders())),
            Arc::new(InMemoryStore::with_rows(seed::customers())),
            seed::revenue_series(),
            config,
        )
    }

    pub fn orders(&self) -> &OrderService {
        &self.orders
    }

    pub fn customers(&self) -> &CustomerService {
        &self.customers
    }

    pub fn metrics(&self) -> &MetricsService {
        &self.metrics
    }

    pub fn exporter(&self) -> &CsvExporter {
        &self.exporter
    }
}
