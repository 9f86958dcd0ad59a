//! Domain entities of the sales dashboard

pub mod customer;
pub mod filters;
pub mod order;
pub mod revenue;

pub use customer::{Customer, LoyaltyTier};
pub use filters::{DashboardFilters, Period};
pub use order::{Channel, Order, OrderItem, OrderStatus};
pub use revenue::RevenuePoint;
