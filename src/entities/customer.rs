//! Customer entity and loyalty tiers

use crate::core::field::FieldValue;
use crate::core::{Entity, Record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Loyalty tier derived from lifetime value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LoyaltyTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl LoyaltyTier {
    /// Tier for a given lifetime value in tenge
    pub fn from_ltv(ltv: f64) -> Self {
        if ltv >= 150_000.0 {
            LoyaltyTier::Platinum
        } else if ltv >= 100_000.0 {
            LoyaltyTier::Gold
        } else if ltv >= 50_000.0 {
            LoyaltyTier::Silver
        } else {
            LoyaltyTier::Bronze
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LoyaltyTier::Bronze => "Bronze",
            LoyaltyTier::Silver => "Silver",
            LoyaltyTier::Gold => "Gold",
            LoyaltyTier::Platinum => "Platinum",
        }
    }
}

impl fmt::Display for LoyaltyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A customer with aggregated purchase history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier, e.g. "CUST-001"
    pub id: String,

    /// Full display name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Home city
    pub city: String,

    /// Lifetime value in tenge
    pub ltv: f64,

    /// Number of orders placed so far
    pub orders_count: u32,

    /// Day the account was created
    pub created_at: NaiveDate,
}

impl Customer {
    /// Loyalty tier for this customer's lifetime value
    pub fn loyalty_tier(&self) -> LoyaltyTier {
        LoyaltyTier::from_ltv(self.ltv)
    }
}

impl Entity for Customer {
    fn resource_name() -> &'static str {
        "customers"
    }

    fn resource_name_singular() -> &'static str {
        "customer"
    }

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Customer {
    fn field_names() -> &'static [&'static str] {
        &["id", "name", "email", "city", "ltv", "orders_count", "created_at"]
    }

    fn indexed_fields() -> &'static [&'static str] {
        &["name", "email"]
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "id" => Some(FieldValue::String(self.id.clone())),
            "name" => Some(FieldValue::String(self.name.clone())),
            "email" => Some(FieldValue::String(self.email.clone())),
            "city" => Some(FieldValue::String(self.city.clone())),
            "ltv" => Some(FieldValue::Float(self.ltv)),
            "orders_count" => Some(FieldValue::Integer(i64::from(self.orders_count))),
            "created_at" => Some(FieldValue::Date(self.created_at)),
            _ => None,
        }
    }
}
