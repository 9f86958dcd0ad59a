//! Order listing, lookups and status updates

use crate::config::LatencyConfig;
use crate::core::{EntityStore, PaginatedResponse, Record, SortDirection};
use crate::entities::{Order, OrderStatus};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::Arc;

/// Column the order listing can sort by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderSortField {
    #[default]
    Date,
    Customer,
    Total,
    Status,
}

impl OrderSortField {
    /// Ascending comparison of two orders on this column
    ///
    /// Total uses `f64::total_cmp`, status compares by lifecycle. Equal
    /// keys are left to the caller's tie-break.
    pub fn compare(&self, a: &Order, b: &Order) -> Ordering {
        match self {
            OrderSortField::Date => a.date.cmp(&b.date),
            OrderSortField::Customer => a.customer_name.cmp(&b.customer_name),
            OrderSortField::Total => a.total.total_cmp(&b.total),
            OrderSortField::Status => a.status.cmp(&b.status),
        }
    }
}

/// Parameters of the order listing
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OrderQuery {
    /// Page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub limit: usize,

    /// Case-insensitive substring matched against id, customer and city
    pub search: Option<String>,

    /// Sort column
    pub sort_by: OrderSortField,

    /// Sort direction
    pub sort_order: SortDirection,
}

impl Default for OrderQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            search: None,
            sort_by: OrderSortField::default(),
            sort_order: SortDirection::default(),
        }
    }
}

impl OrderQuery {
    /// Get page number, ensuring minimum of 1
    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    /// Get limit, ensuring it doesn't exceed the maximum
    pub fn limit(&self) -> usize {
        self.limit.clamp(1, 100) // Maximum 100 per page, minimum 1
    }
}

/// Query service over the order collection
#[derive(Clone)]
pub struct OrderService {
    store: Arc<dyn EntityStore<Order>>,
    latency: LatencyConfig,
}

impl OrderService {
    pub fn new(store: Arc<dyn EntityStore<Order>>, latency: LatencyConfig) -> Self {
        Self { store, latency }
    }

    /// List orders with search, sort and pagination applied in that order
    pub async fn list(&self, query: &OrderQuery) -> Result<PaginatedResponse<Order>> {
        self.latency.list_orders().await;

        let mut rows = self.store.list().await?;

        if let Some(term) = query.search.as_deref().filter(|s| !s.is_empty()) {
            rows.retain(|order| order.matches_search(term));
        }

        // Ties always break on id ascending, so paging stays stable
        rows.sort_by(|a, b| {
            query
                .sort_order
                .apply(query.sort_by.compare(a, b))
                .then_with(|| a.id.cmp(&b.id))
        });

        tracing::debug!(
            total = rows.len(),
            page = query.page(),
            limit = query.limit(),
            "Order listing assembled"
        );

        Ok(PaginatedResponse::paginate(rows, query.page(), query.limit()))
    }

    /// Get one order by id
    pub async fn get(&self, id: &str) -> Result<Option<Order>> {
        self.latency.get_order().await;

        self.store.get(id).await
    }

    /// Set the status of an order, returning the updated row
    ///
    /// Returns None when no order has this id; nothing is written in
    /// that case.
    pub async fn update_status(&self, id: &str, status: OrderStatus) -> Result<Option<Order>> {
        self.latency.update_status().await;

        let Some(mut order) = self.store.get(id).await? else {
            tracing::warn!(order_id = %id, "Status update for unknown order");
            return Ok(None);
        };

        order.status = status;
        let stored = self.store.replace(order).await?;

        if stored.is_some() {
            tracing::info!(order_id = %id, status = %status, "Order status updated");
        }

        Ok(stored)
    }

    /// All orders placed by one customer, in insertion order
    pub async fn for_customer(&self, customer_id: &str) -> Result<Vec<Order>> {
        self.latency.customer_orders().await;

        let rows = self.store.list().await?;

        Ok(rows
            .into_iter()
            .filter(|order| order.customer_id == customer_id)
            .collect())
    }
}
