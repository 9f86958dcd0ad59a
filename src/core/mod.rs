//! Core traits and types shared by every service

pub mod entity;
pub mod error;
pub mod field;
pub mod query;
pub mod store;

pub use entity::{Entity, Record};
pub use error::{ParseValueError, StoreError};
pub use field::FieldValue;
pub use query::{PaginatedResponse, PaginationMeta, SortDirection};
pub use store::EntityStore;
