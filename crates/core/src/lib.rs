//! Domain building blocks shared by the store and the HTTP layer.
//!
//! This crate has no internal dependencies: ids, timestamps, the domain
//! error type, category/pagination helpers and the cross-collection search.

pub mod error;
pub mod filter;
pub mod search;
pub mod types;
