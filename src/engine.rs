//! Report generation engine.
//!
//! Provides [`ReportEngine`] which turns [`crate::sales::SalesData`] into ranked
//! [`crate::report::ReportRow`]s in a single pass over the purchase records.
//! [`index`] private module validates the input and builds the join indices, [`ranking`] private
//! module orders the sellers and extracts their best selling products.

mod index;
mod ranking;
pub mod report_engine;

pub use index::ValidationError;
pub use ranking::TOP_PRODUCTS_LIMIT;
pub use ranking::rank_by_profit;
pub use ranking::top_products;
pub use report_engine::ReportEngine;
pub use report_engine::ReportEngineError;
pub use report_engine::generate_report;
