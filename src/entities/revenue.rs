//! Daily revenue points for the dashboard chart

use crate::core::Record;
use crate::core::field::FieldValue;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Revenue and order count for one day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub date: NaiveDate,
    pub revenue: f64,
    pub orders: u32,
}

impl RevenuePoint {
    pub fn new(date: NaiveDate, revenue: f64, orders: u32) -> Self {
        Self {
            date,
            revenue,
            orders,
        }
    }
}

impl Record for RevenuePoint {
    fn field_names() -> &'static [&'static str] {
        &["date", "revenue", "orders"]
    }

    fn indexed_fields() -> &'static [&'static str] {
        &[]
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "date" => Some(FieldValue::Date(self.date)),
            "revenue" => Some(FieldValue::Float(self.revenue)),
            "orders" => Some(FieldValue::Integer(i64::from(self.orders))),
            _ => None,
        }
    }
}
