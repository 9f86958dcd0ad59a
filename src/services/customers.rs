//! Customer directory queries

use crate::config::LatencyConfig;
use crate::core::{EntityStore, Record};
use crate::entities::Customer;
use anyhow::Result;
use serde::Deserialize;
use std::sync::Arc;

/// Parameters of the customer listing
///
/// The directory is small enough to come back whole, so there is no
/// pagination here. Empty strings count as "no filter".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CustomerQuery {
    /// Case-insensitive substring matched against name and email
    pub search: Option<String>,

    /// Exact home-city match
    pub city: Option<String>,
}

impl CustomerQuery {
    /// Query matching everything
    pub fn all() -> Self {
        Self::default()
    }
}

/// Query service over the customer collection
#[derive(Clone)]
pub struct CustomerService {
    store: Arc<dyn EntityStore<Customer>>,
    latency: LatencyConfig,
}

impl CustomerService {
    pub fn new(store: Arc<dyn EntityStore<Customer>>, latency: LatencyConfig) -> Self {
        Self { store, latency }
    }

    /// List customers matching the query, in insertion order
    pub async fn list(&self, query: &CustomerQuery) -> Result<Vec<Customer>> {
        self.latency.list_customers().await;

        let mut rows = self.store.list().await?;

        if let Some(term) = query.search.as_deref().filter(|s| !s.is_empty()) {
            rows.retain(|customer| customer.matches_search(term));
        }

        if let Some(city) = query.city.as_deref().filter(|c| !c.is_empty()) {
            rows.retain(|customer| customer.city == city);
        }

        tracing::debug!(matched = rows.len(), "Customer listing assembled");

        Ok(rows)
    }

    /// Get one customer by id
    pub async fn get(&self, id: &str) -> Result<Option<Customer>> {
        self.latency.get_customer().await;

        self.store.get(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryStore;
    use chrono::NaiveDate;

    fn customer(id: &str, name: &str, email: &str, city: &str) -> Customer {
        Customer {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            city: city.to_string(),
            ltv: 10_000.0,
            orders_count: 1,
            created_at: NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
        }
    }

    fn fixture() -> CustomerService {
        CustomerService::new(
            Arc::new(InMemoryStore::with_rows(vec![
                customer("CUST-1", "Алексей Иванов", "alexey@example.com", "Алматы"),
                customer("CUST-2", "Мария Петрова", "maria@example.com", "Астана"),
                customer("CUST-3", "Анна Козлова", "anna@example.com", "Алматы"),
            ])),
            LatencyConfig::disabled(),
        )
    }

    #[tokio::test]
    async fn test_list_unfiltered_keeps_insertion_order() {
        let customers = fixture().list(&CustomerQuery::all()).await.unwrap();
        let ids: Vec<&str> = customers.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["CUST-1", "CUST-2", "CUST-3"]);
    }

    #[tokio::test]
    async fn test_search_matches_name_or_email() {
        let by_name = fixture()
            .list(&CustomerQuery {
                search: Some("петрова".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, "CUST-2");

        let by_email = fixture()
            .list(&CustomerQuery {
                search: Some("ANNA@".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(by_email.len(), 1);
        assert_eq!(by_email[0].id, "CUST-3");
    }

    #[tokio::test]
    async fn test_city_filter_is_exact() {
        let in_almaty = fixture()
            .list(&CustomerQuery {
                city: Some("Алматы".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(in_almaty.len(), 2);

        let nowhere = fixture()
            .list(&CustomerQuery {
                city: Some("алматы".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(nowhere.is_empty());
    }

    #[tokio::test]
    async fn test_search_and_city_combine() {
        let found = fixture()
            .list(&CustomerQuery {
                search: Some("анна".to_string()),
                city: Some("Алматы".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "CUST-3");
    }

    #[tokio::test]
    async fn test_empty_strings_mean_no_filter() {
        let customers = fixture()
            .list(&CustomerQuery {
                search: Some(String::new()),
                city: Some(String::new()),
            })
            .await
            .unwrap();
        assert_eq!(customers.len(), 3);
    }

    #[tokio::test]
    async fn test_get_known_and_unknown() {
        let customers = fixture();

        let found = customers.get("CUST-2").await.unwrap();
        assert_eq!(found.map(|c| c.name), Some("Мария Петрова".to_string()));
        assert!(customers.get("CUST-404").await.unwrap().is_none());
    }
}
