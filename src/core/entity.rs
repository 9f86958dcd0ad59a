//! Entity traits defining the core abstraction for all data types

use crate::core::field::FieldValue;

/// Base trait for all stored entities.
///
/// This trait provides the fundamental metadata needed for any entity type.
/// All entities have a stable string identifier (e.g. "ORD-2024-001") that
/// stores key rows by.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The plural resource name used in logs (e.g., "orders", "customers")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "order", "customer")
    fn resource_name_singular() -> &'static str;

    /// Get the unique identifier for this entity instance
    fn id(&self) -> &str;
}

/// Trait for records that expose a flat tabular projection.
///
/// Records power the generic parts of the crate:
/// - field_names: The column set, in display order
/// - indexed_fields: Fields that can be searched
/// - field_value: Dynamic field access by column name
pub trait Record {
    /// Column names of the tabular projection, in display order
    fn field_names() -> &'static [&'static str];

    /// List of fields that should be indexed for searching
    fn indexed_fields() -> &'static [&'static str];

    /// Get the value of a specific field by name
    fn field_value(&self, field: &str) -> Option<FieldValue>;

    /// Case-insensitive substring match across the indexed fields
    fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        Self::indexed_fields().iter().any(|field| {
            self.field_value(field)
                .and_then(|value| {
                    value
                        .as_string()
                        .map(|s| s.to_lowercase().contains(&needle))
                })
                .unwrap_or(false)
        })
    }
}
