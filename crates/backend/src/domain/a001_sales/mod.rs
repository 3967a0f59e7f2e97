pub mod repository;
pub mod source;

pub use repository::DbSalesSource;
pub use source::{SalesFilter, SalesSource};

#[cfg(test)]
pub use source::testing;
