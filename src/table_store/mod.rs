pub mod client;
pub mod query;
pub mod rows;

pub use client::{Page, TableStoreClient};
pub use query::RowQuery;
