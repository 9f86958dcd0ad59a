//! Configuration loading and management

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Simulated network latency per operation, in milliseconds
///
/// The seeded dataset lives in memory, so these pauses are what make the
/// services behave like a remote API. Tests disable them wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    /// Master switch; when false every operation returns immediately
    pub enabled: bool,

    pub dashboard_ms: u64,
    pub list_orders_ms: u64,
    pub get_order_ms: u64,
    pub update_status_ms: u64,
    pub list_customers_ms: u64,
    pub get_customer_ms: u64,
    pub customer_orders_ms: u64,
    pub export_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dashboard_ms: 500,
            list_orders_ms: 300,
            get_order_ms: 200,
            update_status_ms: 300,
            list_customers_ms: 400,
            get_customer_ms: 200,
            customer_orders_ms: 300,
            export_ms: 100,
        }
    }
}

impl LatencyConfig {
    /// Latency config with the master switch off
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub async fn dashboard(&self) {
        self.pause(self.dashboard_ms).await;
    }

    pub async fn list_orders(&self) {
        self.pause(self.list_orders_ms).await;
    }

    pub async fn get_order(&self) {
        self.pause(self.get_order_ms).await;
    }

    pub async fn update_status(&self) {
        self.pause(self.update_status_ms).await;
    }

    pub async fn list_customers(&self) {
        self.pause(self.list_customers_ms).await;
    }

    pub async fn get_customer(&self) {
        self.pause(self.get_customer_ms).await;
    }

    pub async fn customer_orders(&self) {
        self.pause(self.customer_orders_ms).await;
    }

    pub async fn export(&self) {
        self.pause(self.export_ms).await;
    }

    async fn pause(&self, ms: u64) {
        if self.enabled && ms > 0 {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }
}

/// Constants feeding the dashboard metric cards
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Store-wide conversion rate; not derivable from the order data
    pub conversion_rate: f64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            conversion_rate: 0.034,
        }
    }
}

/// Complete configuration for the dashboard data services
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub latency: LatencyConfig,
    pub metrics: MetricsConfig,
}

impl DashboardConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Configuration with simulated latency switched off
    pub fn without_latency() -> Self {
        Self {
            latency: LatencyConfig::disabled(),
            ..Self::default()
        }
    }
}
