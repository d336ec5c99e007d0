//! Domain models for the customer service
//!
//! Request bodies are decoded into `CustomerFields`; persisted rows come
//! back as `Customer`. Structural JSON validity is the only check applied.

pub mod customer;
pub mod validation;

pub use customer::{Customer, CustomerFields, CustomerId};
pub use validation::ValidationError;
