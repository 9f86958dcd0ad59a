//! Order entity with its channel and status vocabularies

use crate::core::error::ParseValueError;
use crate::core::field::FieldValue;
use crate::core::{Entity, Record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sales channel an order came through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    Web,
    Mobile,
    Offline,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Web, Channel::Mobile, Channel::Offline];

    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Web => "Web",
            Channel::Mobile => "Mobile",
            Channel::Offline => "Offline",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Web" => Ok(Channel::Web),
            "Mobile" => Ok(Channel::Mobile),
            "Offline" => Ok(Channel::Offline),
            other => Err(ParseValueError::new(
                "sales channel",
                other,
                "Web, Mobile, Offline",
            )),
        }
    }
}

/// Fulfillment status of an order
///
/// Variants are declared in lifecycle order, so the derived `Ord` sorts
/// New before Processing before Shipped before Delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OrderStatus {
    New,
    Processing,
    Shipped,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::New,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::New => "New",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "New" => Ok(OrderStatus::New),
            "Processing" => Ok(OrderStatus::Processing),
            "Shipped" => Ok(OrderStatus::Shipped),
            "Delivered" => Ok(OrderStatus::Delivered),
            other => Err(ParseValueError::new(
                "order status",
                other,
                "New, Processing, Shipped, Delivered",
            )),
        }
    }
}

/// A single line item of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: u32,
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

/// An order placed by a customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier, e.g. "ORD-2024-001"
    pub id: String,

    /// Day the order was placed
    pub date: NaiveDate,

    /// Identifier of the customer who placed the order
    pub customer_id: String,

    /// Customer display name, denormalized for listings and export
    #[serde(rename = "customer")]
    pub customer_name: String,

    /// Delivery city
    pub city: String,

    /// Sales channel the order came through
    pub channel: Channel,

    /// Current fulfillment status
    pub status: OrderStatus,

    /// Order total in tenge
    pub total: f64,

    /// Line items, when itemized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<OrderItem>>,

    /// Free-form note attached at checkout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Entity for Order {
    fn resource_name() -> &'static str {
        "orders"
    }

    fn resource_name_singular() -> &'static str {
        "order"
    }

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Order {
    fn field_names() -> &'static [&'static str] {
        &["id", "date", "customer", "city", "channel", "status", "total"]
    }

    fn indexed_fields() -> &'static [&'static str] {
        &["id", "customer", "city"]
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "id" => Some(FieldValue::String(self.id.clone())),
            "date" => Some(FieldValue::Date(self.date)),
            "customer" => Some(FieldValue::String(self.customer_name.clone())),
            "city" => Some(FieldValue::String(self.city.clone())),
            "channel" => Some(FieldValue::String(self.channel.to_string())),
            "status" => Some(FieldValue::String(self.status.to_string())),
            "total" => Some(FieldValue::Float(self.total)),
            _ => None,
        }
    }
}
