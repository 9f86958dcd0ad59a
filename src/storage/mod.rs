//! Storage implementations for the dashboard collections

pub mod in_memory;

pub use in_memory::InMemoryStore;
