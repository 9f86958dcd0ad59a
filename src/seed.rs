//! Demo dataset the dashboard ships with
//!
//! Five orders, five customers and a two-week revenue series. Order rows
//! carry the id of the customer who placed them, so the customer detail
//! page can pull order history without joining on display names.

use crate::entities::{Channel, Customer, Order, OrderItem, OrderStatus, RevenuePoint};
use chrono::NaiveDate;

/// Cities offered by the dashboard filter dropdowns
pub const CITIES: [&str; 5] = ["Алматы", "Астана", "Шымкент", "Караганда", "Актобе"];

fn day(year: i32, month: u32, dom: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, dom).expect("seed dates are valid")
}

/// Seeded orders, newest last
pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: "ORD-2024-001".to_string(),
            date: day(2024, 1, 15),
            customer_id: "CUST-001".to_string(),
            customer_name: "Алексей Иванов".to_string(),
            city: "Алматы".to_string(),
            channel: Channel::Web,
            status: OrderStatus::Delivered,
            total: 45_000.0,
            items: Some(vec![OrderItem {
                id: 1,
                name: "Laptop ASUS".to_string(),
                quantity: 1,
                price: 45_000.0,
            }]),
            comment: Some("Доставка в офис".to_string()),
        },
        Order {
            id: "ORD-2024-002".to_string(),
            date: day(2024, 1, 16),
            customer_id: "CUST-002".to_string(),
            customer_name: "Мария Петрова".to_string(),
            city: "Астана".to_string(),
            channel: Channel::Mobile,
            status: OrderStatus::Shipped,
            total: 12_500.0,
            items: Some(vec![OrderItem {
                id: 2,
                name: "Smartphone".to_string(),
                quantity: 1,
                price: 12_500.0,
            }]),
            comment: None,
        },
        Order {
            id: "ORD-2024-003".to_string(),
            date: day(2024, 1, 17),
            customer_id: "CUST-003".to_string(),
            customer_name: "Дмитрий Сидоров".to_string(),
            city: "Шымкент".to_string(),
            channel: Channel::Offline,
            status: OrderStatus::Processing,
            total: 8_750.0,
            items: Some(vec![OrderItem {
                id: 3,
                name: "Headphones".to_string(),
                quantity: 2,
                price: 4_375.0,
            }]),
            comment: None,
        },
        Order {
            id: "ORD-2024-004".to_string(),
            date: day(2024, 1, 18),
            customer_id: "CUST-004".to_string(),
            customer_name: "Анна Козлова".to_string(),
            city: "Алматы".to_string(),
            channel: Channel::Web,
            status: OrderStatus::New,
            total: 32_000.0,
            items: None,
            comment: None,
        },
        Order {
            id: "ORD-2024-005".to_string(),
            date: day(2024, 1, 19),
            customer_id: "CUST-005".to_string(),
            customer_name: "Сергей Морозов".to_string(),
            city: "Астана".to_string(),
            channel: Channel::Mobile,
            status: OrderStatus::Delivered,
            total: 15_600.0,
            items: None,
            comment: None,
        },
    ]
}

/// Seeded customers
pub fn customers() -> Vec<Customer> {
    vec![
        Customer {
            id: "CUST-001".to_string(),
            name: "Алексей Иванов".to_string(),
            email: "alexey.ivanov@example.com".to_string(),
            city: "Алматы".to_string(),
            ltv: 156_000.0,
            orders_count: 12,
            created_at: day(2023, 6, 15),
        },
        Customer {
            id: "CUST-002".to_string(),
            name: "Мария Петрова".to_string(),
            email: "maria.petrova@example.com".to_string(),
            city: "Астана".to_string(),
            ltv: 89_000.0,
            orders_count: 8,
            created_at: day(2023, 8, 22),
        },
        Customer {
            id: "CUST-003".to_string(),
            name: "Дмитрий Сидоров".to_string(),
            email: "dmitry.sidorov@example.com".to_string(),
            city: "Шымкент".to_string(),
            ltv: 67_500.0,
            orders_count: 5,
            created_at: day(2023, 11, 10),
        },
        Customer {
            id: "CUST-004".to_string(),
            name: "Анна Козлова".to_string(),
            email: "anna.kozlova@example.com".to_string(),
            city: "Алматы".to_string(),
            ltv: 145_000.0,
            orders_count: 15,
            created_at: day(2023, 3, 7),
        },
        Customer {
            id: "CUST-005".to_string(),
            name: "Сергей Морозов".to_string(),
            email: "sergey.morozov@example.com".to_string(),
            city: "Астана".to_string(),
            ltv: 98_000.0,
            orders_count: 7,
            created_at: day(2023, 9, 18),
        },
    ]
}

/// Daily revenue series for the dashboard chart
pub fn revenue_series() -> Vec<RevenuePoint> {
    [
        (1, 45_000.0, 12),
        (2, 52_000.0, 14),
        (3, 38_000.0, 9),
        (4, 61_000.0, 18),
        (5, 43_000.0, 11),
        (6, 67_000.0, 19),
        (7, 55_000.0, 16),
        (8, 49_000.0, 13),
        (9, 58_000.0, 17),
        (10, 41_000.0, 10),
        (11, 63_000.0, 20),
        (12, 46_000.0, 12),
        (13, 54_000.0, 15),
        (14, 59_000.0, 18),
    ]
    .into_iter()
    .map(|(dom, revenue, orders)| RevenuePoint::new(day(2024, 1, dom), revenue, orders))
    .collect()
}
