//! # Salesdash
//!
//! Data services for a sales analytics dashboard: orders, customers,
//! dashboard metrics and CSV export over an in-memory dataset.
//!
//! ## Features
//!
//! - **Typed Entities**: Orders, customers and daily revenue points
//! - **Search, Sort, Paginate**: Case-insensitive search with stable paging
//! - **Dashboard Metrics**: Revenue, order count and average order value
//! - **CSV Export**: Spreadsheet-friendly quoting for any record type
//! - **Pluggable Storage**: Swap the in-memory store behind a trait
//! - **Configurable Latency**: Simulate production response times in demos
//! - **Preference Persistence**: Theme and language survive restarts
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use salesdash::prelude::*;
//!
//! let dashboard = Dashboard::seeded(DashboardConfig::default());
//!
//! // Page through orders, newest first
//! let page = dashboard.orders().list(&OrderQuery::default()).await?;
//! println!("{} of {} orders", page.data.len(), page.pagination.total);
//!
//! // Move one through its lifecycle
//! dashboard
//!     .orders()
//!     .update_status("ORD-2024-001", OrderStatus::Shipped)
//!     .await?;
//!
//! // Headline numbers plus the revenue chart
//! let summary = dashboard
//!     .metrics()
//!     .summary(&DashboardFilters::default())
//!     .await?;
//! println!("revenue: {}", summary.metrics.revenue);
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod seed;
pub mod services;
pub mod settings;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        entity::{Entity, Record},
        error::{ParseValueError, StoreError},
        field::FieldValue,
        query::{PaginatedResponse, PaginationMeta, SortDirection},
        store::EntityStore,
    };

    // === Entities ===
    pub use crate::entities::{
        Channel, Customer, DashboardFilters, LoyaltyTier, Order, OrderItem, OrderStatus, Period,
        RevenuePoint,
    };

    // === Services ===
    pub use crate::services::{
        CsvExporter, CustomerQuery, CustomerService, Dashboard, DashboardMetrics,
        DashboardSummary, MetricsService, OrderQuery, OrderService, OrderSortField, to_csv,
    };

    // === Storage ===
    pub use crate::storage::InMemoryStore;

    // === Settings ===
    pub use crate::settings::{
        InMemorySettings, Language, Settings, SettingsStore, Theme, YamlSettings,
    };

    // === Config ===
    pub use crate::config::{DashboardConfig, LatencyConfig, MetricsConfig};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::NaiveDate;
    pub use serde::{Deserialize, Serialize};
}
