//! In-memory entity store for the festival site.
//!
//! One append-only [`table::EntityTable`] per entity kind, composed by
//! [`store::Store`], plus the seed dataset loaded at process start.

pub mod models;
pub mod seed;
pub mod store;
pub mod table;

pub use store::Store;
pub use table::{EntityTable, Filterable, Record};
